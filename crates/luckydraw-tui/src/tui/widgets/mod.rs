// TUI widget modules for each panel.

pub mod blocked_notice;
pub mod confirm_dialog;
pub mod input_panel;
pub mod past_winners;
pub mod pool;
pub mod status_bar;
pub mod winners;

/// Flatten a rendered buffer into one string, row after row.
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}
