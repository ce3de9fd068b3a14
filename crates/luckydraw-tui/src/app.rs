// Application state and orchestration logic.
//
// The central event loop that applies user commands from the TUI to the draw
// engine, drives the auto-shuffle countdown, and polls the session slot for
// takeovers. Pushes a fresh snapshot to the TUI after every change.

use std::time::Duration;

use luckydraw_core::{AutoShuffleScheduler, Confirm, DrawOutcome, DrawPoolEngine, SessionStatus};
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::protocol::{AppSnapshot, ConfirmRequest, UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Current time on tokio's clock, which tests can pause and advance.
pub fn now() -> std::time::Instant {
    tokio::time::Instant::now().into_std()
}

/// Resolve at `deadline`, or never when there is none.
async fn sleep_until_deadline(deadline: Option<std::time::Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

// ---------------------------------------------------------------------------
// Confirmation over the UI channel
// ---------------------------------------------------------------------------

/// Asks the TUI for a yes/no answer and blocks until it replies.
///
/// Must be called from a blocking context (see [`run_blocking`]). A closed UI
/// channel or a dropped reply counts as "no".
#[derive(Debug, Clone)]
pub struct ChannelConfirm {
    ui_tx: mpsc::Sender<UiUpdate>,
}

impl ChannelConfirm {
    pub fn new(ui_tx: mpsc::Sender<UiUpdate>) -> Self {
        ChannelConfirm { ui_tx }
    }
}

impl Confirm for ChannelConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        let (reply, answer) = std::sync::mpsc::channel();
        let request = ConfirmRequest {
            message: message.to_string(),
            reply,
        };
        if self
            .ui_tx
            .blocking_send(UiUpdate::ConfirmRequest(request))
            .is_err()
        {
            warn!("UI channel closed, declining confirmation");
            return false;
        }
        answer.recv().unwrap_or(false)
    }
}

/// Run an engine call that may block on a confirmation.
///
/// On a multi-threaded runtime the worker hands its other tasks off first, so
/// the TUI keeps running while we wait. Elsewhere the call runs inline.
fn run_blocking<T>(f: impl FnOnce() -> T) -> T {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(f)
        }
        _ => f(),
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub config: Config,
    pub engine: DrawPoolEngine,
    pub scheduler: AutoShuffleScheduler,
    /// Set once the TUI has been told about a takeover.
    pub blocked_notified: bool,
}

impl AppState {
    pub fn new(config: Config, engine: DrawPoolEngine) -> Self {
        let scheduler =
            AutoShuffleScheduler::new(config.auto_shuffle.period(), config.auto_shuffle.enabled);
        AppState {
            config,
            engine,
            scheduler,
            blocked_notified: false,
        }
    }

    /// Build an `AppSnapshot` from the current application state.
    pub fn build_snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            state: self.engine.state().clone(),
            scheduler: self.scheduler.status(),
            auto_shuffle_enabled: self.scheduler.is_enabled(),
            blocked: self.engine.is_blocked(),
            session: self.engine.token().to_string(),
        }
    }

    fn session_check_interval(&self) -> Duration {
        self.config.session.check_interval()
    }
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Run the main application event loop.
///
/// Listens on three sources using `tokio::select!`:
/// 1. User commands from the TUI
/// 2. The auto-shuffle deadline
/// 3. The periodic session check
///
/// Pushes UI updates through `ui_tx` for the TUI render loop.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    state.scheduler.reschedule(now());
    send_snapshot(&ui_tx, state.build_snapshot()).await;

    let mut session_interval = tokio::time::interval(state.session_check_interval());
    session_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // The first tick completes immediately; consume it so the first
    // real check happens after one full interval.
    session_interval.tick().await;

    loop {
        let deadline = state.scheduler.deadline();

        tokio::select! {
            // --- User commands ---
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("Quit command received, shutting down");
                        break;
                    }
                    Some(cmd) => {
                        handle_user_command(&mut state, cmd, &ui_tx).await;
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }

            // --- Auto-shuffle ---
            _ = sleep_until_deadline(deadline) => {
                if let Some(outcome) = state.scheduler.fire(&mut state.engine, now()) {
                    if outcome == DrawOutcome::Blocked {
                        on_blocked(&mut state, &ui_tx).await;
                    } else {
                        send_snapshot(&ui_tx, state.build_snapshot()).await;
                    }
                }
            }

            // --- Session check ---
            _ = session_interval.tick() => {
                if state.engine.check_session() == SessionStatus::Blocked {
                    on_blocked(&mut state, &ui_tx).await;
                }
            }
        }
    }

    state.scheduler.cancel();
    info!("Application event loop exiting");
    Ok(())
}

/// Handle a user command from the TUI.
async fn handle_user_command(
    state: &mut AppState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    let outcome = match cmd {
        UserCommand::SetInput(text) => state.engine.set_pending_input(&text),
        UserCommand::AddFreeText(text) => state.engine.add_free_text(&text),
        UserCommand::AddRange(n) => state.engine.add_range(n),
        UserCommand::PickWinners(k) => run_blocking(|| state.engine.pick_winners(k)),
        UserCommand::FlushWinners => state.engine.flush_current_into_past(),
        UserCommand::RemoveEntry(entry) => run_blocking(|| state.engine.remove_entry(&entry)),
        UserCommand::Reset => run_blocking(|| state.engine.reset()),
        UserCommand::HoverPool(hovering) => {
            state.scheduler.set_hovering(hovering, now());
            send_snapshot(ui_tx, state.build_snapshot()).await;
            return;
        }
        UserCommand::ToggleAutoShuffle => {
            let enabled = !state.scheduler.is_enabled();
            info!("Auto-shuffle {}", if enabled { "enabled" } else { "disabled" });
            state.scheduler.set_enabled(enabled, now());
            send_snapshot(ui_tx, state.build_snapshot()).await;
            return;
        }
        UserCommand::Quit => {
            // Handled in the main loop
            return;
        }
    };

    debug!("Command outcome: {:?}", outcome);
    match outcome {
        DrawOutcome::Applied => {
            state.scheduler.reschedule(now());
            send_snapshot(ui_tx, state.build_snapshot()).await;
        }
        DrawOutcome::Blocked => on_blocked(state, ui_tx).await,
        DrawOutcome::Declined | DrawOutcome::Unchanged => {}
    }
}

/// Stop the scheduler and tell the TUI, once.
async fn on_blocked(state: &mut AppState, ui_tx: &mpsc::Sender<UiUpdate>) {
    state.scheduler.set_blocked();
    if state.blocked_notified {
        return;
    }
    warn!(
        "Session {} was taken over by another session; refusing further changes",
        state.engine.token()
    );
    state.blocked_notified = true;
    let _ = ui_tx.send(UiUpdate::SessionBlocked).await;
    send_snapshot(ui_tx, state.build_snapshot()).await;
}

/// Takes the snapshot by value so no borrow of `AppState` (whose engine is
/// `Send` but not `Sync`) is held across the await.
async fn send_snapshot(ui_tx: &mpsc::Sender<UiUpdate>, snapshot: AppSnapshot) {
    let _ = ui_tx
        .send(UiUpdate::StateSnapshot(Box::new(snapshot)))
        .await;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
