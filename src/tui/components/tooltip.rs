//! Tooltip overlay listing every recipient
//!
//! Pinned to the top-right corner of the screen, on top of all other
//! content. Only drawn while the display's tooltip toggle is on.

use crate::measure::{CellWidth, TextMeasure};
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Cells between the tooltip and the screen edge
const EDGE_OFFSET: u16 = 1;

/// Where the tooltip lands inside `screen` for `text`
pub fn area_for(screen: Rect, text: &str) -> Rect {
    // 2 for borders, 2 for horizontal padding
    let wanted = CellWidth.width(text).saturating_add(4);
    let max = screen.width.saturating_sub(EDGE_OFFSET * 2);
    let width = u16::try_from(wanted).unwrap_or(u16::MAX).min(max);
    let height = 3.min(screen.height); // 1 line of text + 2 for borders

    let x = screen.right().saturating_sub(width + EDGE_OFFSET);
    let y = screen.y + EDGE_OFFSET.min(screen.height.saturating_sub(height));

    Rect::new(x, y, width, height)
}

/// Render the tooltip in the top-right corner of `screen`
///
/// Uses `Clear` so the tooltip appears on top of other content.
pub fn render(f: &mut Frame, screen: Rect, text: &str, theme: &Theme) {
    let area = area_for(screen, text);
    if area.width == 0 || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.tooltip_bg))
        .style(Style::default().bg(theme.tooltip_bg));

    let body = Paragraph::new(format!(" {} ", text))
        .style(Style::default().fg(theme.tooltip_fg).bg(theme.tooltip_bg))
        .block(block);

    f.render_widget(Clear, area);
    f.render_widget(body, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_hugs_top_right() {
        let screen = Rect::new(0, 0, 80, 24);
        let area = area_for(screen, "ann, bob");
        assert_eq!(area, Rect::new(67, 1, 12, 3));
    }

    #[test]
    fn tooltip_never_exceeds_screen() {
        let screen = Rect::new(0, 0, 20, 2);
        let area = area_for(screen, "a very long list of recipients indeed");
        assert!(area.width <= 18);
        assert!(area.right() <= screen.right());
        assert!(area.bottom() <= screen.bottom());
    }
}
