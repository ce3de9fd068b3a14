// Single-active-session detection.
//
// Each session writes a fresh random token into a shared slot at start and
// periodically checks that the slot still holds its own token. A different
// value means a newer session has started against the same store, and this
// session stops mutating for good.
//
// Detection is best-effort: two sessions that start within one check interval
// can both see their own token for a while. Nothing here is a lock.

use std::fmt;

use tracing::{info, warn};

use crate::random::RandomSource;
use crate::store::SharedStore;

/// Key holding the token of the most recently started session.
pub const SESSION_KEY: &str = "opened";

/// Random token identifying one session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generate a token of 16 hex digits from two 32-bit draws.
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let hi = unit_to_u32(rng.next_f64());
        let lo = unit_to_u32(rng.next_f64());
        SessionToken(format!("{hi:08x}{lo:08x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn unit_to_u32(sample: f64) -> u32 {
    (sample.clamp(0.0, 1.0) * u32::MAX as f64) as u32
}

/// Result of a session check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// The slot still holds this session's token.
    Active,
    /// Another session overwrote the slot. Terminal.
    Blocked,
}

/// Claims the session slot and watches it for takeovers.
pub struct SessionGuard {
    store: SharedStore,
    token: SessionToken,
    status: SessionStatus,
}

impl SessionGuard {
    /// Write `token` into the session slot, overwriting whatever session
    /// claimed it before, and start watching.
    pub fn claim(store: SharedStore, token: SessionToken) -> Self {
        if let Err(e) = store.set(SESSION_KEY, token.as_str()) {
            warn!("Failed to write session token: {:#}", e);
        } else {
            info!("Session {} claimed the session slot", token);
        }
        Self::watch(store, token)
    }

    /// Watch a slot that `token` already claimed.
    pub fn watch(store: SharedStore, token: SessionToken) -> Self {
        SessionGuard {
            store,
            token,
            status: SessionStatus::Active,
        }
    }

    /// Generate a token and claim the slot with it.
    pub fn start<R: RandomSource + ?Sized>(store: SharedStore, rng: &mut R) -> Self {
        let token = SessionToken::generate(rng);
        Self::claim(store, token)
    }

    /// Compare the slot with our token. Once blocked, stays blocked.
    ///
    /// A missing slot counts as a takeover. A failed read is logged and
    /// treated as no conflict for this round.
    pub fn check(&mut self) -> SessionStatus {
        if self.status == SessionStatus::Blocked {
            return SessionStatus::Blocked;
        }

        match self.store.get(SESSION_KEY) {
            Ok(stored) if stored.as_deref() == Some(self.token.as_str()) => {}
            Ok(stored) => {
                warn!(
                    "Session slot now holds {:?}, expected {}; blocking this session",
                    stored, self.token
                );
                self.status = SessionStatus::Blocked;
            }
            Err(e) => {
                warn!("Failed to read session slot: {:#}", e);
            }
        }

        self.status
    }

    pub fn is_blocked(&self) -> bool {
        self.status == SessionStatus::Blocked
    }

    pub fn token(&self) -> &SessionToken {
        &self.token
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
