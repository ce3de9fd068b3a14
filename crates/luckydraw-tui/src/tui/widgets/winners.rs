// Winners widget: result of the most recent draw.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::tui::palette::entry_color;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let winners = &state.draw.current_winners;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(Span::styled(
            format!(" Winners ({}) ", winners.len()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));

    if winners.is_empty() {
        let hint = if state.draw.can_pick() {
            " No winners yet. Press p to draw."
        } else {
            " No winners yet."
        };
        let paragraph = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = winners
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:>2}. ", idx + 1),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    entry.to_string(),
                    Style::default()
                        .fg(entry_color(entry))
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
