//! Title bar component
//!
//! Renders the app title with the recipient total and current container width.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let total = app.display.recipients().len();
    let noun = if total == 1 { "recipient" } else { "recipients" };
    let title_text = format!(" ✉ Recipients ──── {} {}", total, noun);
    // The width the line is actually fitted against, once measured
    let width = app.display.container_width().unwrap_or(app.container_width);

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(format!(" width {} ", width)).right_aligned()),
        );

    f.render_widget(title, area);
}
