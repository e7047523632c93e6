//! Syllable-level and stress-conditioned rules.
//!
//! These rules see a word as syllables separated by `.`, each optionally
//! led by a stress mark:
//!
//! ```text
//! σ//_#        delete the last syllable
//! ˈσ//_        delete every primary-stressed syllable
//! σ/ˈσ/#_      move primary stress to the first syllable
//! a/e/˘_       a → e, but only inside unstressed syllables
//! ```

use wordsmith_foundation::symbols::{
    ANYWHERE, PRIMARY_STRESS, SECONDARY_STRESS, SYLLABLE, SYLLABLE_BREAK, UNSTRESSED,
};
use wordsmith_language::SoundChange;

const FIRST: &str = "#_";
const LAST: &str = "_#";

/// Stress level of a syllable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stress {
    /// Led by `ˈ`.
    Primary,
    /// Led by `ˌ`.
    Secondary,
    /// No leading mark.
    Unstressed,
}

impl Stress {
    /// Stress named by a mark, if `c` is one.
    #[must_use]
    pub fn from_mark(c: char) -> Option<Self> {
        match c {
            PRIMARY_STRESS => Some(Self::Primary),
            SECONDARY_STRESS => Some(Self::Secondary),
            UNSTRESSED => Some(Self::Unstressed),
            _ => None,
        }
    }

    /// Mark written before a syllable with this stress.
    #[must_use]
    pub fn mark(self) -> Option<char> {
        match self {
            Self::Primary => Some(PRIMARY_STRESS),
            Self::Secondary => Some(SECONDARY_STRESS),
            Self::Unstressed => None,
        }
    }
}

/// Splits a leading stress mark off a syllable.
#[must_use]
pub fn detach_stress(syllable: &str) -> (Stress, &str) {
    let mut chars = syllable.chars();
    match chars.next() {
        Some(PRIMARY_STRESS) => (Stress::Primary, chars.as_str()),
        Some(SECONDARY_STRESS) => (Stress::Secondary, chars.as_str()),
        _ => (Stress::Unstressed, syllable),
    }
}

fn attach_stress(stress: Stress, body: &str) -> String {
    match stress.mark() {
        Some(mark) => format!("{mark}{body}"),
        None => body.to_string(),
    }
}

/// Which syllables an environment selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    First,
    Last,
    Every,
    Unsupported,
}

impl Position {
    fn of(environment: &str) -> Self {
        match environment {
            FIRST => Self::First,
            LAST => Self::Last,
            ANYWHERE => Self::Every,
            _ => Self::Unsupported,
        }
    }

    fn selects(self, index: usize, count: usize) -> bool {
        match self {
            Self::First => index == 0,
            Self::Last => index + 1 == count,
            Self::Every => true,
            Self::Unsupported => false,
        }
    }
}

/// Stress qualifier written before `σ`. `˘σ` and bare `σ` both mean any.
fn qualifier(pattern: &str) -> Option<Stress> {
    let mut chars = pattern.chars();
    match (chars.next(), chars.next()) {
        (Some(mark), Some(SYLLABLE)) => Stress::from_mark(mark).filter(|s| *s != Stress::Unstressed),
        _ => None,
    }
}

/// Applies a rule with `σ` in its input or output.
#[must_use]
pub fn apply_syllable_rule(word: &str, rule: &SoundChange) -> String {
    let syllables: Vec<&str> = word.split(SYLLABLE_BREAK).collect();
    let position = Position::of(&rule.environment);

    if rule.is_deletion() {
        return delete_syllables(&syllables, rule, position);
    }

    let target = rule.output.chars().next().and_then(Stress::from_mark);
    match target {
        Some(Stress::Unstressed) => unstress(&syllables, rule, position),
        Some(stress) if rule.input.contains(SYLLABLE) => move_stress(&syllables, stress, position),
        _ => word.to_string(),
    }
}

fn delete_syllables(syllables: &[&str], rule: &SoundChange, position: Position) -> String {
    let wanted = qualifier(&rule.input);
    let count = syllables.len();
    syllables
        .iter()
        .enumerate()
        .filter(|&(i, syllable)| {
            let doomed = position.selects(i, count)
                && wanted.is_none_or(|stress| detach_stress(syllable).0 == stress);
            !doomed
        })
        .map(|(_, s)| *s)
        .collect::<Vec<_>>()
        .join(&SYLLABLE_BREAK.to_string())
}

fn move_stress(syllables: &[&str], stress: Stress, position: Position) -> String {
    let count = syllables.len();
    let target = match position {
        Position::First => Some(0),
        Position::Last => count.checked_sub(1),
        Position::Every | Position::Unsupported => None,
    };
    let Some(target) = target else {
        return syllables.join(&SYLLABLE_BREAK.to_string());
    };

    syllables
        .iter()
        .enumerate()
        .map(|(i, syllable)| {
            let (current, body) = detach_stress(syllable);
            if i == target {
                attach_stress(stress, body)
            } else if current == stress {
                body.to_string()
            } else {
                (*syllable).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(&SYLLABLE_BREAK.to_string())
}

fn unstress(syllables: &[&str], rule: &SoundChange, position: Position) -> String {
    let wanted = qualifier(&rule.input);
    let count = syllables.len();
    syllables
        .iter()
        .enumerate()
        .map(|(i, syllable)| {
            let (current, body) = detach_stress(syllable);
            if position.selects(i, count) && wanted.is_none_or(|s| s == current) {
                body.to_string()
            } else {
                (*syllable).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(&SYLLABLE_BREAK.to_string())
}

/// Applies a character rule inside syllables whose stress matches the
/// rule's environment.
#[must_use]
pub fn apply_stress_conditioned(word: &str, rule: &SoundChange) -> String {
    let Some(wanted) = rule.stress_context().and_then(Stress::from_mark) else {
        return word.to_string();
    };
    if rule.input.is_empty() {
        return word.to_string();
    }

    word.split(SYLLABLE_BREAK)
        .map(|syllable| {
            let (stress, body) = detach_stress(syllable);
            if stress == wanted {
                attach_stress(stress, &body.replace(&rule.input, &rule.output))
            } else {
                syllable.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(&SYLLABLE_BREAK.to_string())
}
