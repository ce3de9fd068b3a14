// Write-through mirror of the draw state in the key-value store.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::state::DrawState;
use crate::store::SharedStore;

/// Key holding the serialized draw record.
pub const STATE_KEY: &str = "PersistStore";

/// Serializes the draw state under one fixed key.
///
/// Holds no copy of the state; the engine owns the live value.
#[derive(Clone)]
pub struct PersistenceAdapter {
    store: SharedStore,
}

impl PersistenceAdapter {
    pub fn new(store: SharedStore) -> Self {
        PersistenceAdapter { store }
    }

    /// Read the stored record. Absent or unparsable records yield the empty
    /// default; this never fails.
    pub fn load(&self) -> DrawState {
        let raw = match self.store.get(STATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("No persisted draw state, starting empty");
                return DrawState::default();
            }
            Err(e) => {
                warn!("Failed to read persisted draw state: {:#}", e);
                return DrawState::default();
            }
        };

        match serde_json::from_str::<DrawState>(&raw) {
            Ok(state) => {
                debug!(
                    "Loaded draw state: {} in pool, {} current, {} past",
                    state.pool.len(),
                    state.current_winners.len(),
                    state.past_winners.len()
                );
                state
            }
            Err(e) => {
                warn!("Persisted draw state is malformed, starting empty: {}", e);
                DrawState::default()
            }
        }
    }

    /// Overwrite the stored record with `state`.
    pub fn save(&self, state: &DrawState) -> Result<()> {
        let json = serde_json::to_string(state).context("failed to serialize draw state")?;
        self.store
            .set(STATE_KEY, &json)
            .context("failed to write draw state")?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;
    use crate::store::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    fn sample_state() -> DrawState {
        DrawState {
            pool: vec![Entry::Number(3), Entry::text("Alice")],
            current_winners: vec![Entry::Number(7)],
            past_winners: vec![Entry::text("Bob"), Entry::Number(1)],
            pending_input: "Carol\nDave".into(),
        }
    }

    #[test]
    fn load_without_record_is_empty() {
        let adapter = PersistenceAdapter::new(MemoryStore::shared());
        assert_eq!(adapter.load(), DrawState::default());
    }

    #[test]
    fn round_trip() {
        let adapter = PersistenceAdapter::new(MemoryStore::shared());
        let state = sample_state();
        adapter.save(&state).unwrap();
        assert_eq!(adapter.load(), state);
    }

    #[test]
    fn round_trip_empty_state() {
        let adapter = PersistenceAdapter::new(MemoryStore::shared());
        adapter.save(&DrawState::default()).unwrap();
        assert_eq!(adapter.load(), DrawState::default());
    }

    #[test]
    fn malformed_record_loads_as_empty() {
        let store = MemoryStore::new();
        store.set(STATE_KEY, "{not json").unwrap();
        let adapter = PersistenceAdapter::new(Arc::new(store));
        assert_eq!(adapter.load(), DrawState::default());
    }

    #[test]
    fn wrong_shape_loads_as_empty() {
        let store = MemoryStore::new();
        store.set(STATE_KEY, r#"{"pool": {"a": 1}}"#).unwrap();
        let adapter = PersistenceAdapter::new(Arc::new(store));
        assert_eq!(adapter.load(), DrawState::default());
    }

    #[test]
    fn reads_record_with_every_field() {
        let store = MemoryStore::new();
        store
            .set(
                STATE_KEY,
                r#"{"pool":[1,2,"x"],"currentWinner":[5],"pastWinner":["y"],"input":"z"}"#,
            )
            .unwrap();
        let adapter = PersistenceAdapter::new(Arc::new(store));
        let state = adapter.load();
        assert_eq!(
            state.pool,
            vec![Entry::Number(1), Entry::Number(2), Entry::text("x")]
        );
        assert_eq!(state.current_winners, vec![Entry::Number(5)]);
        assert_eq!(state.past_winners, vec![Entry::text("y")]);
        assert_eq!(state.pending_input, "z");
    }

    #[test]
    fn save_overwrites_previous_record() {
        let store = MemoryStore::new();
        let adapter = PersistenceAdapter::new(Arc::new(store.clone()));
        adapter.save(&sample_state()).unwrap();
        adapter.save(&DrawState::default()).unwrap();
        let raw = store.get(STATE_KEY).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"{"pool":[],"currentWinner":[],"pastWinner":[],"input":""}"#
        );
    }
}
