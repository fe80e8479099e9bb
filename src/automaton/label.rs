use std::fmt;

use serde::{Deserialize, Serialize};

/// A state id or alphabet symbol as written in the automaton document.
///
/// Any JSON scalar is accepted. Labels compare by value and type, so the
/// state `1` and the state `"1"` are different states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Str(String),
    Num(serde_json::Number),
    Bool(bool),
}

impl Label {
    /// Whether an input symbol read from the command line names this label.
    /// Non-string labels match their JSON spelling (`1`, `true`).
    pub fn matches_str(&self, symbol: &str) -> bool {
        match self {
            Label::Str(s) => s == symbol,
            Label::Num(n) => n.to_string() == symbol,
            Label::Bool(b) => b.to_string() == symbol,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Str(s) => write!(f, "{s}"),
            Label::Num(n) => write!(f, "{n}"),
            Label::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Str(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label::Str(s)
    }
}

impl From<u64> for Label {
    fn from(n: u64) -> Self {
        Label::Num(n.into())
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Label::Str(s) if s == other)
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_any_scalar() {
        let labels: Vec<Label> = serde_json::from_value(json!(["q0", 7, 2.5, true])).unwrap();
        assert_eq!(labels[0], Label::from("q0"));
        assert_eq!(labels[1], Label::from(7u64));
        assert_eq!(labels[2].to_string(), "2.5");
        assert_eq!(labels[3], Label::Bool(true));
    }

    #[test]
    fn rejects_null_and_containers() {
        assert!(serde_json::from_value::<Label>(json!(null)).is_err());
        assert!(serde_json::from_value::<Label>(json!(["q0"])).is_err());
        assert!(serde_json::from_value::<Label>(json!({"id": 1})).is_err());
    }

    #[test]
    fn string_and_number_are_distinct() {
        assert_ne!(Label::from("1"), Label::from(1u64));
        assert!(Label::from(1u64).matches_str("1"));
        assert!(Label::from("1").matches_str("1"));
        assert!(Label::Bool(false).matches_str("false"));
        assert!(!Label::from("a").matches_str("b"));
    }
}
