//! Dictionary runs driven from command-line arguments.

use std::fs;

use wordsmith_runtime::{Command, Session, parse_args};

const GRAMMAR: &str = "\
V: aeiou
P: ptk
B: bdg

P/B/V_V
/e/#_s

-dict
pata
spiko
ba.ˈna.na
-end-dict
";

#[test]
fn arguments_drive_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("lang.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, GRAMMAR).unwrap();

    let args = [
        "-dir".to_string(),
        input.display().to_string(),
        output.display().to_string(),
    ];
    let Command::Run(config) = parse_args(args).unwrap() else {
        panic!("expected a run");
    };

    let mut session = Session::with_writers(config, Vec::new(), Vec::new());
    let report = session.run().unwrap();
    assert_eq!(report.words, vec!["pada", "espigo", "banana"]);

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "pata      → pada   [P/B/V_V]\n\
         spiko     → espigo [P/B/V_V; /e/#_s]\n\
         ba.ˈna.na → banana\n"
    );

    let (out, err) = session.into_writers();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Found 3 categories, 2 replacement rules, and 3 dictionary words."));
    assert!(err.is_empty());
}

#[test]
fn generation_count_from_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("lang.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "C: pt\nV: a\nCV\nCVC\n").unwrap();

    let args = vec![
        "--seed".to_string(),
        "4".to_string(),
        input.display().to_string(),
        output.display().to_string(),
        "12".to_string(),
    ];
    let Command::Run(config) = parse_args(args).unwrap() else {
        panic!("expected a run");
    };
    let report = Session::with_writers(config, Vec::new(), Vec::new())
        .run()
        .unwrap();
    assert_eq!(report.words.len(), 12);
    assert_eq!(fs::read_to_string(&output).unwrap().lines().count(), 12);
}
