//! Badge component
//!
//! Renders the "+N" pill that summarizes trimmed recipients.

use crate::measure::{CellWidth, TextMeasure};
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

/// Horizontal padding on each side of the label
const PADDING: u16 = 1;

/// Cells the badge occupies for `label`, padding included
pub fn width(label: &str) -> u16 {
    u16::try_from(CellWidth.width(label))
        .unwrap_or(u16::MAX)
        .saturating_add(PADDING * 2)
}

/// Render the badge into `area`
pub fn render(f: &mut Frame, area: Rect, label: &str, theme: &Theme) {
    let padding = " ".repeat(PADDING as usize);
    let badge = Paragraph::new(format!("{padding}{label}{padding}")).style(
        Style::default()
            .fg(theme.badge_fg)
            .bg(theme.badge_bg)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(badge, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_includes_padding() {
        assert_eq!(width("+3"), 4);
        assert_eq!(width("+120"), 6);
    }
}
