// Status bar widget: title, auto-shuffle state, pick amount, counts.

use luckydraw_core::{SchedulerStatus, SuspendReason};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [title] [shuffle indicator] [pick amount] [counts] [session]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = vec![Span::styled(
        " Lucky Draw ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];

    let (dot, dot_color) = shuffle_indicator(state.scheduler);
    spans.push(Span::styled(format!(" {} ", dot), Style::default().fg(dot_color)));
    spans.push(Span::styled(
        shuffle_label(state.scheduler),
        Style::default().fg(Color::White),
    ));

    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    spans.push(Span::styled(
        format!("Pick {}", state.effective_pick_amount()),
        Style::default().fg(Color::White),
    ));

    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    spans.push(Span::styled(
        format!(
            "Pool {} / Winners {} / Past {}",
            state.draw.pool.len(),
            state.draw.current_winners.len(),
            state.draw.past_winners.len()
        ),
        Style::default().fg(Color::White),
    ));

    if !state.session.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            format!("session {}", state.session),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Dot character and color for the scheduler state.
pub fn shuffle_indicator(status: SchedulerStatus) -> (&'static str, Color) {
    match status {
        SchedulerStatus::Active => ("●", Color::Green),
        SchedulerStatus::Suspended(SuspendReason::Hover) => ("●", Color::Yellow),
        SchedulerStatus::Suspended(SuspendReason::Disabled) => ("●", Color::Gray),
        SchedulerStatus::Suspended(SuspendReason::Blocked) => ("●", Color::Red),
    }
}

pub fn shuffle_label(status: SchedulerStatus) -> &'static str {
    match status {
        SchedulerStatus::Active => "Shuffling",
        SchedulerStatus::Suspended(SuspendReason::Hover) => "Paused (hover)",
        SchedulerStatus::Suspended(SuspendReason::Disabled) => "Shuffle off",
        SchedulerStatus::Suspended(SuspendReason::Blocked) => "Blocked",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
