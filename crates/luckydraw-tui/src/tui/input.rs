// Keyboard and mouse input handling.
//
// Translates crossterm events into UserCommand messages sent to the app
// task, or into local ViewState mutations (focus, buffers, selection,
// answering dialogs).

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::widgets::pool;
use super::{Focus, ViewState};
use crate::protocol::UserCommand;

/// Largest count accepted by the range field.
const MAX_RANGE_DIGITS: usize = 6;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// app task. Returns `None` when it was handled locally.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // crossterm on Windows reports both Press and Release.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode.
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c') {
        return Some(UserCommand::Quit);
    }

    if view_state.confirm.is_some() {
        handle_confirm(key_event, view_state);
        return None;
    }

    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    if view_state.blocked {
        if key_event.code == KeyCode::Char('q') {
            view_state.confirm_quit = true;
        }
        return None;
    }

    match view_state.focus {
        Focus::Pool => handle_pool(key_event, view_state),
        Focus::FreeText => handle_free_text(key_event, view_state),
        Focus::Range => handle_range(key_event, view_state),
    }
}

/// Handle a mouse event. Reports hover changes over the pool panel and
/// turns a left click on a chip into a remove request.
///
/// Ignored entirely while a dialog is open: the app task may be parked
/// waiting for the answer and is not draining commands.
pub fn handle_mouse(mouse_event: MouseEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    if view_state.blocked || view_state.confirm.is_some() || view_state.confirm_quit {
        return None;
    }

    match mouse_event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => hover_pool(mouse_event, view_state),
        MouseEventKind::Down(MouseButton::Left) => click_pool(mouse_event, view_state),
        _ => None,
    }
}

fn hover_pool(mouse_event: MouseEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let inside = view_state
        .pool_area
        .is_some_and(|area| area.contains(Position::new(mouse_event.column, mouse_event.row)));

    if inside == view_state.hovering {
        return None;
    }
    view_state.hovering = inside;
    Some(UserCommand::HoverPool(inside))
}

fn click_pool(mouse_event: MouseEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let area = view_state.pool_area?;
    let index = pool::chip_at(
        &view_state.draw.pool,
        pool::inner_area(area),
        mouse_event.column,
        mouse_event.row,
    )?;
    view_state.selected = index;
    view_state
        .draw
        .pool
        .get(index)
        .cloned()
        .map(UserCommand::RemoveEntry)
}

/// y answers yes, n or Esc answers no. Everything else waits.
fn handle_confirm(key_event: KeyEvent, view_state: &mut ViewState) {
    let answer = match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => false,
        _ => return,
    };
    if let Some(request) = view_state.confirm.take() {
        request.answer(answer);
    }
}

fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

fn handle_pool(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('i') => {
            view_state.focus = Focus::FreeText;
            None
        }
        KeyCode::Char('n') => {
            view_state.focus = Focus::Range;
            None
        }

        // Pick amount
        KeyCode::Char('+') | KeyCode::Char('=') => {
            view_state.pick_amount = view_state.effective_pick_amount().saturating_add(1);
            None
        }
        KeyCode::Char('-') => {
            view_state.pick_amount = view_state.effective_pick_amount().saturating_sub(1).max(1);
            None
        }

        // Selection
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            view_state.selected = view_state.selected.saturating_sub(1);
            None
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            let last = view_state.draw.pool.len().saturating_sub(1);
            view_state.selected = (view_state.selected + 1).min(last);
            None
        }
        KeyCode::Home => {
            view_state.selected = 0;
            None
        }
        KeyCode::End => {
            view_state.selected = view_state.draw.pool.len().saturating_sub(1);
            None
        }

        // Engine actions, only when they would do something
        KeyCode::Char('p') if view_state.draw.can_pick() => {
            Some(UserCommand::PickWinners(view_state.effective_pick_amount()))
        }
        KeyCode::Char('f') if view_state.draw.can_flush() => Some(UserCommand::FlushWinners),
        KeyCode::Char('x') | KeyCode::Delete => view_state
            .selected_entry()
            .cloned()
            .map(UserCommand::RemoveEntry),
        KeyCode::Char('R') if view_state.draw.can_reset() => Some(UserCommand::Reset),
        KeyCode::Char('a') => Some(UserCommand::ToggleAutoShuffle),

        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }

        _ => None,
    }
}

/// Every edit is forwarded so the draft survives a restart.
fn handle_free_text(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Esc => {
            view_state.focus = Focus::Pool;
            None
        }
        KeyCode::Char('s') if ctrl => {
            if !view_state.can_submit_text() {
                return None;
            }
            let text = std::mem::take(&mut view_state.input_text);
            view_state.focus = Focus::Pool;
            Some(UserCommand::AddFreeText(text))
        }
        KeyCode::Enter => {
            view_state.input_text.push('\n');
            Some(UserCommand::SetInput(view_state.input_text.clone()))
        }
        KeyCode::Backspace => {
            view_state.input_text.pop()?;
            Some(UserCommand::SetInput(view_state.input_text.clone()))
        }
        KeyCode::Char(c) if !ctrl => {
            view_state.input_text.push(c);
            Some(UserCommand::SetInput(view_state.input_text.clone()))
        }
        _ => None,
    }
}

/// Digits only. Enter with a count of at least one replaces the pool.
fn handle_range(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc => {
            view_state.range_text.clear();
            view_state.focus = Focus::Pool;
            None
        }
        KeyCode::Enter => {
            let count = view_state.range_text.parse::<u32>().ok().filter(|&n| n >= 1)?;
            view_state.range_text.clear();
            view_state.focus = Focus::Pool;
            view_state.selected = 0;
            Some(UserCommand::AddRange(count))
        }
        KeyCode::Backspace => {
            view_state.range_text.pop();
            None
        }
        KeyCode::Char(c) if c.is_ascii_digit() && view_state.range_text.len() < MAX_RANGE_DIGITS => {
            view_state.range_text.push(c);
            None
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
