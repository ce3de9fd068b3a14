// TUI: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors the latest `AppSnapshot` plus the
// local editing state (focus, text buffers, selection, pending dialogs). The
// app task pushes `UiUpdate` messages over an mpsc channel; the TUI applies
// them to `ViewState` and re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod palette;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream};
use futures_util::StreamExt;
use luckydraw_core::{DrawState, Entry, SchedulerStatus};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::protocol::{AppSnapshot, ConfirmRequest, UiUpdate, UserCommand};

use layout::build_layout;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Which control receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Navigate the pool and trigger draws.
    #[default]
    Pool,
    /// Edit the multi-line name list.
    FreeText,
    /// Type a count for a numbered pool.
    Range,
}

/// TUI-local state that mirrors the application state for rendering.
pub struct ViewState {
    /// Last draw state received from the app task.
    pub draw: DrawState,
    pub scheduler: SchedulerStatus,
    pub auto_shuffle_enabled: bool,
    /// Set once another session takes over; the dashboard is replaced by a
    /// notice from then on.
    pub blocked: bool,
    pub session: String,
    /// Winners per draw as chosen by the user. Clamped to the pool size
    /// when sent.
    pub pick_amount: usize,
    pub focus: Focus,
    /// Free-text buffer. Follows the persisted input while not being edited.
    pub input_text: String,
    /// Range field buffer, digits only.
    pub range_text: String,
    /// Index of the highlighted pool entry.
    pub selected: usize,
    /// Engine confirmation awaiting a y/n answer.
    pub confirm: Option<ConfirmRequest>,
    pub confirm_quit: bool,
    /// Where the pool was last drawn, for mouse hit-testing.
    pub pool_area: Option<Rect>,
    /// Whether the pointer is over the pool as last reported to the app.
    pub hovering: bool,
}

impl ViewState {
    pub fn new(pick_amount: usize) -> Self {
        ViewState {
            draw: DrawState::default(),
            scheduler: SchedulerStatus::Active,
            auto_shuffle_enabled: true,
            blocked: false,
            session: String::new(),
            pick_amount: pick_amount.max(1),
            focus: Focus::Pool,
            input_text: String::new(),
            range_text: String::new(),
            selected: 0,
            confirm: None,
            confirm_quit: false,
            pool_area: None,
            hovering: false,
        }
    }

    /// Apply a full snapshot from the app task.
    ///
    /// The free-text buffer is only overwritten while it is not focused, so
    /// a snapshot never clobbers keystrokes in flight.
    ///
    /// The selection follows the selected entry when the pool is reordered.
    pub fn apply_snapshot(&mut self, snapshot: AppSnapshot) {
        let previous = self.selected_entry().cloned();
        self.draw = snapshot.state;
        self.scheduler = snapshot.scheduler;
        self.auto_shuffle_enabled = snapshot.auto_shuffle_enabled;
        self.blocked = snapshot.blocked;
        self.session = snapshot.session;

        if self.focus != Focus::FreeText {
            self.input_text = self.draw.pending_input.clone();
        }
        match previous.and_then(|entry| self.draw.pool.iter().position(|e| *e == entry)) {
            Some(index) => self.selected = index,
            None if self.selected >= self.draw.pool.len() => {
                self.selected = self.draw.pool.len().saturating_sub(1);
            }
            None => {}
        }
    }

    /// The pick amount actually sent: at least one, at most the pool size.
    pub fn effective_pick_amount(&self) -> usize {
        self.pick_amount.clamp(1, self.draw.pool.len().max(1))
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.draw.pool.get(self.selected)
    }

    /// Submitting free text is offered once at least one line is non-empty.
    pub fn can_submit_text(&self) -> bool {
        self.input_text.split('\n').any(|line| !line.is_empty())
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(5)
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::StateSnapshot(snapshot) => {
            state.apply_snapshot(*snapshot);
        }
        UiUpdate::ConfirmRequest(request) => {
            if let Some(stale) = state.confirm.replace(request) {
                stale.answer(false);
            }
        }
        UiUpdate::SessionBlocked => {
            state.blocked = true;
            state.focus = Focus::Pool;
            if let Some(request) = state.confirm.take() {
                request.answer(false);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete frame. A blocked session only shows the notice.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    if state.blocked {
        widgets::blocked_notice::render(frame, frame.area());
        if state.confirm_quit {
            widgets::confirm_dialog::render_quit(frame, frame.area());
        }
        return;
    }

    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::pool::render(frame, layout.pool, state);
    widgets::winners::render(frame, layout.winners, state);
    widgets::past_winners::render(frame, layout.past_winners, state);
    widgets::input_panel::render(frame, layout.input_panel, state);
    render_help_bar(frame, layout.help_bar, state);

    if let Some(request) = &state.confirm {
        widgets::confirm_dialog::render(frame, frame.area(), &request.message);
    } else if state.confirm_quit {
        widgets::confirm_dialog::render_quit(frame, frame.area());
    }
}

fn render_help_bar(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        help_text(state),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Shortcut hints for the current focus. Actions that would do nothing are
/// left out.
pub fn help_text(state: &ViewState) -> String {
    match state.focus {
        Focus::FreeText => " Ctrl+S:Add | Enter:New line | Esc:Back".to_string(),
        Focus::Range => " Enter:Set pool | Esc:Back".to_string(),
        Focus::Pool => {
            let mut hints = vec!["q:Quit", "i:Names", "n:Range", "+/-:Amount"];
            if state.draw.can_pick() {
                hints.push("p:Pick");
                hints.push("x:Remove");
            }
            if state.draw.can_flush() {
                hints.push("f:Flush");
            }
            if state.draw.can_reset() {
                hints.push("R:Reset");
            }
            hints.push("a:Auto-shuffle");
            format!(" {}", hints.join(" | "))
        }
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen, mouse capture).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, terminal input, render ticks.
/// 4. Restores the terminal on exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
    pick_amount: usize,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::new(pick_amount);
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    // Channel closed: app is shutting down
                    None => break,
                }
            }

            maybe_event = event_stream.next() => {
                let command = match maybe_event {
                    Some(Ok(Event::Key(key_event))) => input::handle_key(key_event, &mut view_state),
                    Some(Ok(Event::Mouse(mouse_event))) => input::handle_mouse(mouse_event, &mut view_state),
                    Some(Ok(_)) => None,
                    Some(Err(_)) | None => break,
                };
                if let Some(UserCommand::HoverPool(inside)) = command {
                    // Never wait on hover. A dropped report is retried on the next move.
                    if cmd_tx.try_send(UserCommand::HoverPool(inside)).is_err() {
                        view_state.hovering = !inside;
                    }
                } else if let Some(command) = command {
                    let quit = command == UserCommand::Quit;
                    let _ = cmd_tx.send(command).await;
                    if quit {
                        break;
                    }
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| {
                    view_state.pool_area = Some(build_layout(frame.area()).pool);
                    render_frame(frame, &view_state);
                })?;
            }
        }
    }

    // Dropping the view state declines any dialog still open.
    drop(view_state);
    let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
