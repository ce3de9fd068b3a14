// Past winners widget: the archive, most recent first.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let past = &state.draw.past_winners;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Past Winners ({}) ", past.len()));

    if past.is_empty() {
        let paragraph = Paragraph::new(" No past winners.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = past
        .iter()
        .map(|entry| ListItem::new(format!(" {entry}")))
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM))
        .block(block);
    frame.render_widget(list, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
