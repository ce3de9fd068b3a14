// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +-------------------------+------------------------+
// | Pool (60%)               | Winners (50%)          |
// |                          +------------------------+
// |                          | Past Winners (50%)     |
// +-------------------------+------------------------+
// | Input Panel (7 rows)                              |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: session, auto-shuffle status, pick amount.
    pub status_bar: Rect,
    /// Left of the middle section: the live pool. Hovering it pauses
    /// auto-shuffle.
    pub pool: Rect,
    /// Right column top: result of the latest draw.
    pub winners: Rect,
    /// Right column bottom: archive of earlier winners.
    pub past_winners: Rect,
    /// Free-text and range inputs.
    pub input_panel: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Height of the input panel, borders included.
const INPUT_PANEL_HEIGHT: u16 = 7;

pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(INPUT_PANEL_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

    let status_bar = vertical[0];
    let middle = vertical[1];
    let input_panel = vertical[2];
    let help_bar = vertical[3];

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(middle);

    let pool = horizontal[0];

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(horizontal[1]);

    AppLayout {
        status_bar,
        pool,
        winners: sidebar[0],
        past_winners: sidebar[1],
        input_panel,
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_area() -> Rect {
        Rect::new(0, 0, 120, 40)
    }

    #[test]
    fn layout_all_rects_nonzero() {
        let layout = build_layout(test_area());
        let rects = [
            ("status_bar", layout.status_bar),
            ("pool", layout.pool),
            ("winners", layout.winners),
            ("past_winners", layout.past_winners),
            ("input_panel", layout.input_panel),
            ("help_bar", layout.help_bar),
        ];
        for (name, rect) in &rects {
            assert!(
                rect.width > 0 && rect.height > 0,
                "{} has zero area: {:?}",
                name,
                rect
            );
        }
    }

    #[test]
    fn fixed_rows_have_fixed_height() {
        let layout = build_layout(test_area());
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.help_bar.height, 1);
        assert_eq!(layout.input_panel.height, INPUT_PANEL_HEIGHT);
    }

    #[test]
    fn pool_is_wider_than_sidebar() {
        let layout = build_layout(test_area());
        assert!(layout.pool.width > layout.winners.width);
        assert_eq!(layout.winners.x, layout.past_winners.x);
    }

    #[test]
    fn panels_do_not_overlap_vertically() {
        let layout = build_layout(test_area());
        assert_eq!(layout.pool.y, layout.status_bar.y + 1);
        assert_eq!(layout.input_panel.y, layout.pool.y + layout.pool.height);
        assert_eq!(
            layout.help_bar.y,
            layout.input_panel.y + layout.input_panel.height
        );
    }

    #[test]
    fn layout_fills_area() {
        let area = test_area();
        let layout = build_layout(area);
        let total = layout.status_bar.height
            + layout.pool.height
            + layout.input_panel.height
            + layout.help_bar.height;
        assert_eq!(total, area.height);
    }
}
