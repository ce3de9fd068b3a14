// Messages exchanged between the app task and the TUI.

use luckydraw_core::{DrawState, Entry, SchedulerStatus};

/// Commands sent from the TUI to the app task.
#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    /// The free-text field changed; persist it as pending input.
    SetInput(String),
    /// Submit free text, one entry per line.
    AddFreeText(String),
    /// Replace the pool with `1..=n`.
    AddRange(u32),
    /// Draw this many winners.
    PickWinners(usize),
    FlushWinners,
    RemoveEntry(Entry),
    Reset,
    /// The pointer entered (`true`) or left (`false`) the pool.
    HoverPool(bool),
    ToggleAutoShuffle,
    Quit,
}

/// Updates pushed from the app task to the TUI.
#[derive(Debug)]
pub enum UiUpdate {
    StateSnapshot(Box<AppSnapshot>),
    /// The engine is waiting on a yes/no answer.
    ConfirmRequest(ConfirmRequest),
    /// Another session took over. Sent once.
    SessionBlocked,
}

/// Everything the TUI renders, captured after each change.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSnapshot {
    pub state: DrawState,
    pub scheduler: SchedulerStatus,
    pub auto_shuffle_enabled: bool,
    pub blocked: bool,
    pub session: String,
}

/// A pending confirmation. Dropping `reply` without sending declines.
#[derive(Debug)]
pub struct ConfirmRequest {
    pub message: String,
    pub reply: std::sync::mpsc::Sender<bool>,
}

impl ConfirmRequest {
    /// Send the answer. A receiver that already gave up is ignored.
    pub fn answer(self, yes: bool) {
        let _ = self.reply.send(yes);
    }
}
