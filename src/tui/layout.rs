//! Screen layout for the TUI
//!
//! Single source of truth for where each piece goes and for width
//! thresholds - no magic numbers scattered in render code.

use ratatui::layout::{Constraint, Layout, Rect};

/// Title bar height (1 line of text + 2 for borders)
const TITLE_HEIGHT: u16 = 3;
/// Container box height (1 recipient line + 2 for borders)
const CONTAINER_HEIGHT: u16 = 3;
/// Left margin of the container box
const CONTAINER_MARGIN: u16 = 1;
/// Left plus right border of the container box
const BORDER_WIDTH: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: hints only
    Compact,
    /// 60-99 cols
    Normal,
    /// 100+ cols: room for the latest log line
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}

/// Areas of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    /// Bordered box around the recipient line
    pub container: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    /// Widest inner container `area` has room for
    pub fn max_inner_width(area: Rect) -> u16 {
        area.width
            .saturating_sub(CONTAINER_MARGIN)
            .saturating_sub(BORDER_WIDTH)
    }

    /// Split `area`, sizing the container box for `container_width` inner cells
    ///
    /// The box is clamped to the screen; the inner width the display sees
    /// may therefore be smaller than requested on a narrow terminal.
    pub fn compute(area: Rect, container_width: u16) -> Self {
        let [title, body, status] = Layout::vertical([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let max_width = body.width.saturating_sub(CONTAINER_MARGIN);
        let container = Rect {
            x: body.x + CONTAINER_MARGIN.min(body.width),
            y: body.y + 1.min(body.height),
            width: container_width.saturating_add(BORDER_WIDTH).min(max_width),
            height: CONTAINER_HEIGHT.min(body.height.saturating_sub(1)),
        };

        Self {
            title,
            container,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert!(Breakpoint::Wide.at_least(Breakpoint::Normal));
        assert!(!Breakpoint::Compact.at_least(Breakpoint::Normal));
    }

    #[test]
    fn container_box_wraps_requested_width() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24), 30);
        assert_eq!(layout.title, Rect::new(0, 0, 80, 3));
        assert_eq!(layout.container, Rect::new(1, 4, 32, 3));
        assert_eq!(layout.status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn container_box_is_clamped_to_screen() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 20, 10), 200);
        assert_eq!(layout.container.width, 19);
        assert!(layout.container.right() <= 20);
        assert_eq!(ScreenLayout::max_inner_width(Rect::new(0, 0, 20, 10)), 17);
    }
}
