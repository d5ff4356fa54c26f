//! Status bar component
//!
//! Renders key hints and the most recent log line at the bottom.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::tui::traits::Interactive;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: hints plus latest log message
/// - Narrow: hints only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let mut text = String::from(" q quit │ ←/→ width │ y copy");
    if let Some(hint) = app.display.focus_hint() {
        text.push_str(" │ ");
        text.push_str(hint);
    }

    if bp.at_least(Breakpoint::Wide) {
        if let Some(entry) = app.log_buffer.latest() {
            text.push_str(&format!(
                " │ {} {} {}",
                entry.timestamp.format("%H:%M:%S"),
                entry.level.as_str(),
                entry.message
            ));
        }
    }

    let status = Paragraph::new(text).style(Style::default().fg(app.theme.status_bar));
    f.render_widget(status, area);
}
