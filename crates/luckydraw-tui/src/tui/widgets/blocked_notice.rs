// Full-screen notice shown once another session has taken over.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub const NOTICE: &str = "You can't open this draw in multiple sessions at the same time.";
pub const NOTICE_ACTION: &str = "Please close this one.";

pub fn render(frame: &mut Frame, area: Rect) {
    let vertical = Layout::vertical([Constraint::Length(6)])
        .flex(Flex::Center)
        .split(area);

    let text = vec![
        Line::from(""),
        Line::styled(
            NOTICE,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::from(NOTICE_ACTION),
        Line::styled("Press q to quit.", Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(text)
        .centered()
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    frame.render_widget(paragraph, vertical[0]);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
