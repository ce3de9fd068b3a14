// Pool widget: every entry still eligible to be drawn, as colored chips.
//
// Hovering this panel with the mouse pauses auto-shuffle. Clicking a chip,
// or pressing x on the selected one, asks to remove it.

use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use luckydraw_core::Entry;

use crate::tui::palette::entry_color;
use crate::tui::{Focus, ViewState};

/// Where one chip sits, relative to the inside of the pool border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipSlot {
    pub index: usize,
    pub row: u16,
    pub x: u16,
    pub width: u16,
}

fn pool_block() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

/// The area chips are laid out in, given the panel area.
pub fn inner_area(area: Rect) -> Rect {
    pool_block().inner(area)
}

fn chip_label(entry: &Entry) -> String {
    format!(" {} ", entry)
}

/// Lay chips out left to right with one column between them. A chip that
/// does not fit on the current row starts the next one.
pub fn chip_slots(pool: &[Entry], width: u16) -> Vec<ChipSlot> {
    let mut slots = Vec::with_capacity(pool.len());
    let (mut row, mut x) = (0u16, 0u16);
    for (index, entry) in pool.iter().enumerate() {
        let chip_width = u16::try_from(Span::raw(chip_label(entry)).width()).unwrap_or(u16::MAX);
        if x > 0 && x.saturating_add(chip_width) > width {
            row = row.saturating_add(1);
            x = 0;
        }
        slots.push(ChipSlot {
            index,
            row,
            x,
            width: chip_width,
        });
        x = x.saturating_add(chip_width).saturating_add(1);
    }
    slots
}

/// Index of the chip under a screen position, if any.
pub fn chip_at(pool: &[Entry], inner: Rect, column: u16, row: u16) -> Option<usize> {
    if !inner.contains(Position::new(column, row)) {
        return None;
    }
    let (cx, cy) = (column - inner.x, row - inner.y);
    chip_slots(pool, inner.width)
        .into_iter()
        .find(|slot| slot.row == cy && cx >= slot.x && cx < slot.x.saturating_add(slot.width))
        .map(|slot| slot.index)
}

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let border_color = if state.focus == Focus::Pool {
        Color::Cyan
    } else {
        Color::Gray
    };
    let block = pool_block()
        .border_style(Style::default().fg(border_color))
        .title(format!(" Pool ({}) ", state.draw.pool.len()));

    if state.draw.pool.is_empty() {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(" Pool is empty."),
            Line::from(" Press i to add names or n to add a numbered range."),
        ])
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let lines = chip_lines(state, inner_area(area).width);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Chips grouped into rows as laid out by `chip_slots`. The selected chip
/// is underlined and bold while the pool has focus.
pub fn chip_lines(state: &ViewState, width: u16) -> Vec<Line<'static>> {
    let pool = &state.draw.pool;
    let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
    for (slot, entry) in chip_slots(pool, width).iter().zip(pool) {
        if rows.len() <= usize::from(slot.row) {
            rows.push(Vec::new());
        } else if let Some(row) = rows.last_mut() {
            row.push(Span::raw(" "));
        }
        let mut style = Style::default().fg(Color::Black).bg(entry_color(entry));
        if slot.index == state.selected && state.focus == Focus::Pool {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED | Modifier::REVERSED);
        }
        if let Some(row) = rows.last_mut() {
            row.push(Span::styled(chip_label(entry), style));
        }
    }
    rows.into_iter().map(Line::from).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;

    fn state_with(pool: Vec<Entry>) -> ViewState {
        let mut state = ViewState::default();
        state.draw.pool = pool;
        state
    }

    #[test]
    fn chips_follow_pool_order() {
        let state = state_with(vec![Entry::text("Alice"), Entry::Number(3)]);
        let lines = chip_lines(&state, 40);
        assert_eq!(lines.len(), 1);
        let spans = &lines[0].spans;
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].content, " Alice ");
        assert_eq!(spans[2].content, " 3 ");
    }

    #[test]
    fn chips_wrap_to_the_next_row() {
        let pool: Vec<Entry> = (1..=10).map(Entry::Number).collect();
        let slots = chip_slots(&pool, 8);
        assert_eq!(
            slots[1],
            ChipSlot {
                index: 1,
                row: 0,
                x: 4,
                width: 3
            }
        );
        assert_eq!(slots[2].row, 1);
        assert_eq!(slots[2].x, 0);
        // "10" is wider but still fits beside "9".
        assert_eq!(slots[9].row, 4);
        assert_eq!(slots[9].width, 4);

        let state = state_with(pool);
        assert_eq!(chip_lines(&state, 8).len(), 5);
    }

    #[test]
    fn chip_at_hits_chips_not_gaps() {
        let pool: Vec<Entry> = (1..=4).map(Entry::Number).collect();
        let inner = Rect::new(1, 2, 8, 5);
        assert_eq!(chip_at(&pool, inner, 1, 2), Some(0));
        assert_eq!(chip_at(&pool, inner, 5, 2), Some(1));
        assert_eq!(chip_at(&pool, inner, 4, 2), None);
        assert_eq!(chip_at(&pool, inner, 1, 3), Some(2));
        assert_eq!(chip_at(&pool, inner, 1, 6), None);
        assert_eq!(chip_at(&pool, inner, 0, 2), None);
    }

    #[test]
    fn selected_chip_is_highlighted() {
        let mut state = state_with(vec![Entry::text("a"), Entry::text("b")]);
        state.selected = 1;
        let lines = chip_lines(&state, 40);
        let spans = &lines[0].spans;
        assert!(!spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
        assert!(spans[2].style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn no_highlight_without_focus() {
        let mut state = state_with(vec![Entry::text("a")]);
        state.focus = Focus::FreeText;
        let lines = chip_lines(&state, 40);
        assert!(!lines[0].spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn chips_use_entry_color() {
        let state = state_with(vec![Entry::text("Alice")]);
        let lines = chip_lines(&state, 40);
        assert_eq!(lines[0].spans[0].style.bg, Some(entry_color(&Entry::text("Alice"))));
    }

    #[test]
    fn render_empty_pool_shows_hint() {
        let backend = ratatui::backend::TestBackend::new(70, 8);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Pool (0)"));
        assert!(text.contains("Pool is empty."));
    }

    #[test]
    fn render_many_entries_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(40, 6);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = state_with((1..=200).map(Entry::Number).collect());
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Pool (200)"));
    }
}
