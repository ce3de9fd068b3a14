// Confirmation overlay widgets.
//
// Renders a centered modal asking a yes/no question, drawn on top of the
// main layout. Used for engine confirmations (draw, remove, reset) and for
// quitting.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const MIN_WIDTH: u16 = 30;
const MAX_WIDTH: u16 = 60;

/// Render `message` as a y/n dialog centered in `area`.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let width = dialog_width(message);
    let inner_width = width.saturating_sub(4).max(1) as usize;
    let lines = message.chars().count().div_ceil(inner_width).max(1) as u16;
    // Borders, message lines, blank, prompt.
    let dialog_area = centered_rect(width, lines + 4, area);

    render_dialog(frame, dialog_area, " Confirm ", message);
}

/// Render the quit confirmation overlay.
pub fn render_quit(frame: &mut Frame, area: Rect) {
    let dialog_area = centered_rect(MIN_WIDTH, 5, area);
    render_dialog(frame, dialog_area, " Quit? ", "Really quit?");
}

fn render_dialog(frame: &mut Frame, dialog_area: Rect, title: &str, message: &str) {
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));

    let text = vec![
        Line::from(format!(" {message}")),
        Line::from(""),
        yes_no_line(),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(Color::Black));

    frame.render_widget(paragraph, dialog_area);
}

fn yes_no_line() -> Line<'static> {
    Line::from(vec![
        Span::raw(" ("),
        Span::styled("y", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw("/"),
        Span::styled("n", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(")"),
    ])
}

fn dialog_width(message: &str) -> u16 {
    let wanted = message.chars().count().saturating_add(4);
    (wanted.min(MAX_WIDTH as usize) as u16).max(MIN_WIDTH)
}

/// Compute a centered rectangle of the given size within `area`, clamped to
/// the available space.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let clamped_width = width.min(area.width);
    let clamped_height = height.min(area.height);

    let vertical = Layout::vertical([Constraint::Length(clamped_height)])
        .flex(Flex::Center)
        .split(area);

    let horizontal = Layout::horizontal([Constraint::Length(clamped_width)])
        .flex(Flex::Center)
        .split(vertical[0]);

    horizontal[0]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
