// Draw state: pool, current winners, past winners, pending input.

use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// The complete persisted state of a draw.
///
/// Field names on the wire match the stored record:
/// `{ pool, currentWinner, pastWinner, input }`. Missing fields default to
/// empty so partially written records still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawState {
    /// Entries still eligible to be drawn. Unique after every add or draw.
    pub pool: Vec<Entry>,
    /// Result of the most recent draw, not yet archived.
    #[serde(rename = "currentWinner")]
    pub current_winners: Vec<Entry>,
    /// Archive of earlier winners, most recent first.
    #[serde(rename = "pastWinner")]
    pub past_winners: Vec<Entry>,
    /// Raw multi-line text waiting to be parsed into pool entries.
    #[serde(rename = "input")]
    pub pending_input: String,
}

impl DrawState {
    /// A pick is only meaningful with something in the pool.
    pub fn can_pick(&self) -> bool {
        !self.pool.is_empty()
    }

    /// Flushing is only meaningful with current winners to archive.
    pub fn can_flush(&self) -> bool {
        !self.current_winners.is_empty()
    }

    /// Reset is offered once there is a pool or a history to lose.
    pub fn can_reset(&self) -> bool {
        !self.pool.is_empty() || !self.past_winners.is_empty()
    }
}

/// Split raw input into entries: one per line, blank lines dropped.
///
/// Lines are kept verbatim (no trimming) so `"a "` and `"a"` stay distinct.
pub fn parse_lines(text: &str) -> Vec<Entry> {
    text.split('\n')
        .filter(|line| !line.is_empty())
        .map(Entry::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let state = DrawState::default();
        assert!(!state.can_pick());
        assert!(!state.can_flush());
        assert!(!state.can_reset());
    }

    #[test]
    fn wire_format_uses_record_field_names() {
        let state = DrawState {
            pool: vec![Entry::Number(1)],
            current_winners: vec![Entry::text("a")],
            past_winners: vec![],
            pending_input: "x\ny".into(),
        };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "pool": [1],
                "currentWinner": ["a"],
                "pastWinner": [],
                "input": "x\ny",
            })
        );
    }

    #[test]
    fn missing_fields_default() {
        let state: DrawState = serde_json::from_str(r#"{"pool": ["a", 2]}"#).unwrap();
        assert_eq!(state.pool, vec![Entry::text("a"), Entry::Number(2)]);
        assert!(state.current_winners.is_empty());
        assert!(state.pending_input.is_empty());
    }

    #[test]
    fn parse_lines_drops_blank_lines() {
        assert_eq!(
            parse_lines("a\n\nb\na"),
            vec![Entry::text("a"), Entry::text("b"), Entry::text("a")]
        );
    }

    #[test]
    fn parse_lines_empty_input() {
        assert!(parse_lines("").is_empty());
        assert!(parse_lines("\n\n").is_empty());
    }

    #[test]
    fn can_reset_with_only_history() {
        let state = DrawState {
            past_winners: vec![Entry::Number(9)],
            ..Default::default()
        };
        assert!(state.can_reset());
        assert!(!state.can_pick());
    }
}
