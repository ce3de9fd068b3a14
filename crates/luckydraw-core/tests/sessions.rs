// Integration tests for the draw engine.
//
// These drive whole sessions through the public API: restarting against a
// persisted store, two sessions sharing one store, and the SQLite backend
// standing in for browser storage.

use std::sync::Arc;
use std::time::{Duration, Instant};

use luckydraw_core::*;

// ===========================================================================
// Test helpers
// ===========================================================================

fn session(store: &SharedStore, seed: u64) -> DrawPoolEngine {
    DrawPoolEngine::start(
        store.clone(),
        Box::new(SystemRandom::seeded(seed)),
        Box::new(FixedAnswer(true)),
    )
}

fn scratch_db(name: &str) -> Database {
    let dir = std::env::temp_dir().join(format!("luckydraw_it_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("draw.db");
    Database::open(path.to_str().unwrap()).unwrap()
}

// ===========================================================================
// Restart
// ===========================================================================

#[test]
fn state_survives_restart() {
    let store = MemoryStore::shared();

    let expected = {
        let mut first = session(&store, 1);
        first.add_free_text("Alice\nBob\nCarol\nDave");
        first.pick_winners(2);
        first.set_pending_input("Eve");
        first.state().clone()
    };

    let second = session(&store, 2);
    assert_eq!(second.state(), &expected);
    assert_eq!(second.state().pending_input, "Eve");
}

#[test]
fn reset_survives_restart() {
    let store = MemoryStore::shared();
    {
        let mut first = session(&store, 1);
        first.add_range(10);
        first.pick_winners(3);
        first.reset();
    }
    let second = session(&store, 2);
    assert_eq!(*second.state(), DrawState::default());
}

// ===========================================================================
// Two sessions
// ===========================================================================

#[test]
fn newer_session_blocks_older_one() {
    let store = MemoryStore::shared();
    let mut older = session(&store, 1);
    older.add_range(4);

    let mut newer = session(&store, 2);
    assert_ne!(older.token(), newer.token());

    assert_eq!(older.check_session(), SessionStatus::Blocked);
    assert_eq!(newer.check_session(), SessionStatus::Active);

    // The older session can no longer overwrite the newer one's record.
    assert_eq!(older.add_range(99), DrawOutcome::Blocked);
    assert_eq!(newer.add_free_text("x"), DrawOutcome::Applied);

    let reloaded = PersistenceAdapter::new(store.clone()).load();
    assert_eq!(reloaded.pool.len(), 5);
    assert_eq!(reloaded.pool.last(), Some(&Entry::text("x")));
}

#[test]
fn newer_session_starts_from_older_sessions_state() {
    let store = MemoryStore::shared();
    let mut older = session(&store, 1);
    older.add_free_text("a\nb");

    let newer = session(&store, 2);
    assert_eq!(newer.state().pool, vec![Entry::text("a"), Entry::text("b")]);
}

#[test]
fn scheduler_stops_once_session_is_taken_over() {
    let store = MemoryStore::shared();
    let mut older = session(&store, 1);
    older.add_range(6);
    let _newer = session(&store, 2);

    let t0 = Instant::now();
    let mut scheduler = AutoShuffleScheduler::new(Duration::from_secs(2), true);
    scheduler.reschedule(t0);

    if older.check_session() == SessionStatus::Blocked {
        scheduler.set_blocked();
    }
    assert!(scheduler.deadline().is_none());
    assert_eq!(scheduler.fire(&mut older, t0 + Duration::from_secs(5)), None);
}

// ===========================================================================
// SQLite backend
// ===========================================================================

#[test]
fn sqlite_store_round_trips_through_engine() {
    let db: SharedStore = Arc::new(scratch_db("round_trip"));
    {
        let mut engine = session(&db, 7);
        engine.add_range(3);
        engine.pick_winners(1);
        engine.flush_current_into_past();
    }

    let engine = session(&db, 8);
    assert_eq!(engine.state().pool.len(), 2);
    assert!(engine.state().current_winners.is_empty());
    assert_eq!(engine.state().past_winners.len(), 1);
}

#[test]
fn two_processes_on_one_file_detect_takeover() {
    let dir = std::env::temp_dir().join("luckydraw_it_two_processes");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("draw.db");
    let path = path.to_str().unwrap();

    let first_db: SharedStore = Arc::new(Database::open(path).unwrap());
    let second_db: SharedStore = Arc::new(Database::open(path).unwrap());

    let mut first = session(&first_db, 1);
    let mut second = session(&second_db, 2);

    assert!(first.check_session() == SessionStatus::Blocked);
    assert!(second.check_session() == SessionStatus::Active);
    assert!(first.is_blocked());
}

#[test]
fn confirmation_prompts_follow_operations() {
    let store = MemoryStore::shared();
    let confirm = ScriptedConfirm::new([true, false, true]);
    let mut engine = DrawPoolEngine::start(
        store,
        Box::new(SystemRandom::seeded(3)),
        Box::new(confirm.clone()),
    );

    engine.add_range(5);
    assert_eq!(engine.pick_winners(2), DrawOutcome::Applied);
    assert_eq!(engine.remove_entry(&Entry::Number(99)), DrawOutcome::Declined);
    assert_eq!(engine.reset(), DrawOutcome::Applied);

    assert_eq!(
        confirm.prompts(),
        vec![
            "Are you ready? We will pick 2 winner(s).",
            "Do you want to remove \"99\"?",
            "Everything will be gone. Are you sure?",
        ]
    );
}
