// Draw-pool engine: owns the live draw state and applies every mutation.
//
// Each operation runs to completion against the in-memory state, then writes
// the whole state through to storage. Destructive operations ask the injected
// confirmation capability first. Once the session guard reports a takeover,
// every mutation is refused.

use tracing::{debug, info, warn};

use crate::confirm::{self, Confirm};
use crate::dedup::dedup;
use crate::entry::Entry;
use crate::persistence::PersistenceAdapter;
use crate::random::RandomSource;
use crate::session::{SessionGuard, SessionStatus, SessionToken};
use crate::shuffle::shuffle;
use crate::state::{parse_lines, DrawState};
use crate::store::SharedStore;

/// What an engine operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The state changed and was persisted.
    Applied,
    /// The user declined the confirmation prompt.
    Declined,
    /// Another session took over; nothing may change.
    Blocked,
    /// The input was out of range; nothing changed.
    Unchanged,
}

impl DrawOutcome {
    pub fn is_applied(self) -> bool {
        self == DrawOutcome::Applied
    }
}

/// Load persisted state and claim the session slot with a fresh token.
///
/// Call once per session, before building the engine.
pub fn initialize<R: RandomSource + ?Sized>(
    store: &SharedStore,
    rng: &mut R,
) -> (DrawState, SessionToken) {
    let state = PersistenceAdapter::new(store.clone()).load();
    let guard = SessionGuard::start(store.clone(), rng);
    (state, guard.token().clone())
}

/// The draw-pool state engine.
pub struct DrawPoolEngine {
    state: DrawState,
    persistence: PersistenceAdapter,
    session: SessionGuard,
    rng: Box<dyn RandomSource + Send>,
    confirm: Box<dyn Confirm + Send>,
}

impl DrawPoolEngine {
    /// Assemble an engine from already-initialized parts.
    pub fn new(
        state: DrawState,
        persistence: PersistenceAdapter,
        session: SessionGuard,
        rng: Box<dyn RandomSource + Send>,
        confirm: Box<dyn Confirm + Send>,
    ) -> Self {
        DrawPoolEngine {
            state,
            persistence,
            session,
            rng,
            confirm,
        }
    }

    /// Initialize a session against `store` and build the engine.
    pub fn start(
        store: SharedStore,
        mut rng: Box<dyn RandomSource + Send>,
        confirm: Box<dyn Confirm + Send>,
    ) -> Self {
        let (state, token) = initialize(&store, rng.as_mut());
        info!(
            "Draw engine started: session={}, {} in pool, {} current, {} past",
            token,
            state.pool.len(),
            state.current_winners.len(),
            state.past_winners.len()
        );
        let session = SessionGuard::watch(store.clone(), token);
        let persistence = PersistenceAdapter::new(store);
        Self::new(state, persistence, session, rng, confirm)
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn is_blocked(&self) -> bool {
        self.session.is_blocked()
    }

    pub fn token(&self) -> &SessionToken {
        self.session.token()
    }

    /// Run the periodic session check.
    pub fn check_session(&mut self) -> SessionStatus {
        self.session.check()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Append one entry per non-empty line, dedup the pool, clear the input.
    pub fn add_free_text(&mut self, lines: &str) -> DrawOutcome {
        if self.is_blocked() {
            return DrawOutcome::Blocked;
        }

        let added = parse_lines(lines);
        debug!("Adding {} line(s) to the pool", added.len());
        let mut pool = std::mem::take(&mut self.state.pool);
        pool.extend(added);
        self.state.pool = dedup(pool);
        self.state.pending_input.clear();
        self.commit()
    }

    /// Replace the pool with the numbers `1..=n`.
    pub fn add_range(&mut self, n: u32) -> DrawOutcome {
        if self.is_blocked() {
            return DrawOutcome::Blocked;
        }
        if n == 0 {
            return DrawOutcome::Unchanged;
        }

        info!("Replacing pool with numbers 1..={}", n);
        self.state.pool = dedup((1..=i64::from(n)).map(Entry::Number));
        self.state.pending_input.clear();
        self.commit()
    }

    /// Draw up to `k` winners from the pool.
    ///
    /// The previous current winners move into the past-winner archive. `k`
    /// is clamped to the pool size; an empty pool only archives.
    pub fn pick_winners(&mut self, k: usize) -> DrawOutcome {
        if self.is_blocked() {
            return DrawOutcome::Blocked;
        }
        if !self.confirm.confirm(&confirm::pick_message(k)) {
            debug!("Draw of {} declined", k);
            return DrawOutcome::Declined;
        }

        let mut shuffled = dedup(self.state.pool.iter().cloned());
        shuffle(&mut shuffled, self.rng.as_mut());
        let take = k.min(shuffled.len());
        let remainder = shuffled.split_off(take);

        let previous = std::mem::replace(&mut self.state.current_winners, shuffled);
        self.state.pool = remainder;
        self.archive(previous);

        info!(
            "Drew {} winner(s): [{}]; {} left in pool",
            self.state.current_winners.len(),
            join(&self.state.current_winners),
            self.state.pool.len()
        );
        self.commit()
    }

    /// Move the current winners into the archive.
    pub fn flush_current_into_past(&mut self) -> DrawOutcome {
        if self.is_blocked() {
            return DrawOutcome::Blocked;
        }

        let current = std::mem::take(&mut self.state.current_winners);
        debug!("Flushing {} winner(s) into the archive", current.len());
        self.archive(current);
        self.commit()
    }

    /// Remove every pool entry equal to `value`.
    pub fn remove_entry(&mut self, value: &Entry) -> DrawOutcome {
        if self.is_blocked() {
            return DrawOutcome::Blocked;
        }
        if !self.confirm.confirm(&confirm::remove_message(value)) {
            return DrawOutcome::Declined;
        }

        let before = self.state.pool.len();
        self.state.pool.retain(|entry| entry != value);
        info!(
            "Removed {} from pool ({} dropped)",
            value,
            before - self.state.pool.len()
        );
        self.commit()
    }

    /// Clear every field.
    pub fn reset(&mut self) -> DrawOutcome {
        if self.is_blocked() {
            return DrawOutcome::Blocked;
        }
        if !self.confirm.confirm(confirm::RESET_MESSAGE) {
            return DrawOutcome::Declined;
        }

        info!("Resetting draw state");
        self.state = DrawState::default();
        self.commit()
    }

    /// Store the raw, not yet submitted input text.
    pub fn set_pending_input(&mut self, text: &str) -> DrawOutcome {
        if self.is_blocked() {
            return DrawOutcome::Blocked;
        }
        self.state.pending_input = text.to_string();
        self.commit()
    }

    /// Reorder the live pool. Driven by the auto-shuffle scheduler.
    pub fn reshuffle(&mut self) -> DrawOutcome {
        if self.is_blocked() {
            return DrawOutcome::Blocked;
        }

        let mut pool = std::mem::take(&mut self.state.pool);
        shuffle(&mut pool, self.rng.as_mut());
        self.state.pool = dedup(pool);
        self.commit()
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    /// `past = dedup(winners ++ past)`: newer winners come first.
    fn archive(&mut self, winners: Vec<Entry>) {
        let past = std::mem::take(&mut self.state.past_winners);
        self.state.past_winners = dedup(winners.into_iter().chain(past));
    }

    /// Write the state through to storage.
    fn commit(&mut self) -> DrawOutcome {
        if let Err(e) = self.persistence.save(&self.state) {
            warn!("Failed to persist draw state: {:#}", e);
        }
        DrawOutcome::Applied
    }
}

fn join(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
