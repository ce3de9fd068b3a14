// Pool entries: the values that get drawn.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single drawable value.
///
/// Entries have no identity beyond their value, so two equal values are
/// indistinguishable. A number and a string that print the same are still
/// different values (`Entry::Number(1) != Entry::Text("1")`).
///
/// Serialized untagged: numbers as JSON numbers, text as JSON strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Number(i64),
    Text(String),
}

impl Entry {
    /// Build a text entry.
    pub fn text(value: impl Into<String>) -> Self {
        Entry::Text(value.into())
    }

    /// Return the integer value for `Number` entries.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Entry::Number(n) => Some(*n),
            Entry::Text(_) => None,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Number(n) => write!(f, "{n}"),
            Entry::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Entry {
    fn from(n: i64) -> Self {
        Entry::Number(n)
    }
}

impl From<&str> for Entry {
    fn from(s: &str) -> Self {
        Entry::Text(s.to_string())
    }
}

impl From<String> for Entry {
    fn from(s: String) -> Self {
        Entry::Text(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
