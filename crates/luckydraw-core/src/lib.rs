// Lucky-draw engine: draw pool state, persistence, and session detection.
//
// Re-exports the types front ends need so they can depend on the crate root.

pub mod confirm;
pub mod db;
pub mod dedup;
pub mod engine;
pub mod entry;
pub mod persistence;
pub mod random;
pub mod scheduler;
pub mod session;
pub mod shuffle;
pub mod state;
pub mod store;

pub use confirm::{Confirm, FixedAnswer, ScriptedConfirm};
pub use db::Database;
pub use engine::{initialize, DrawOutcome, DrawPoolEngine};
pub use entry::Entry;
pub use persistence::PersistenceAdapter;
pub use random::{RandomSource, SequenceRandom, SystemRandom};
pub use scheduler::{AutoShuffleScheduler, SchedulerStatus, SuspendReason};
pub use session::{SessionGuard, SessionStatus, SessionToken};
pub use state::DrawState;
pub use store::{KeyValueStore, MemoryStore, SharedStore};
