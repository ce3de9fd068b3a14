// Input panel: the multi-line name list on the left, the numbered range and
// pick amount on the right.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::{Focus, ViewState};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_free_text(frame, columns[0], state);
    render_range(frame, columns[1], state);
}

fn render_free_text(frame: &mut Frame, area: Rect, state: &ViewState) {
    let focused = state.focus == Focus::FreeText;
    let block = focus_block(" Names (one per line) ", focused);

    let mut lines: Vec<Line> = state.input_text.split('\n').map(|l| Line::from(l.to_string())).collect();
    if focused {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
        }
    } else if state.input_text.is_empty() {
        lines = vec![Line::styled(
            "Press i to type names",
            Style::default().fg(Color::DarkGray),
        )];
    }

    // Keep the cursor line visible.
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;

    let paragraph = Paragraph::new(lines).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_range(frame: &mut Frame, area: Rect, state: &ViewState) {
    let focused = state.focus == Focus::Range;
    let block = focus_block(" Players ", focused);

    let range = if focused {
        format!("{}_", state.range_text)
    } else if state.range_text.is_empty() {
        "-".to_string()
    } else {
        state.range_text.clone()
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Count: ", Style::default().fg(Color::Gray)),
            Span::raw(range),
        ]),
        Line::from(vec![
            Span::styled("Winners per pick: ", Style::default().fg(Color::Gray)),
            Span::styled(
                state.effective_pick_amount().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn focus_block(title: &str, focused: bool) -> Block<'static> {
    let color = if focused { Color::Yellow } else { Color::Gray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
