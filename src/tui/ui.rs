//! UI rendering - draws one frame of the app
//!
//! Layering order matters: chrome first, then the recipient line (whose
//! tooltip overlays everything drawn before it), then the toast on top.

use super::app::App;
use super::components::{render_status, render_title};
use super::layout::ScreenLayout;
use super::traits::{Component, RenderContext};
use ratatui::{
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

/// Draw the whole screen
pub fn draw(f: &mut Frame, app: &mut App) {
    let screen = f.area();
    app.set_screen_limit(ScreenLayout::max_inner_width(screen));
    let layout = ScreenLayout::compute(screen, app.container_width);

    render_title(f, layout.title, app);

    let container = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = container.inner(layout.container);
    f.render_widget(container, layout.container);

    let theme = app.theme.clone();
    app.display.render(f, inner, &RenderContext::new(&theme));

    render_status(f, layout.status, app);

    if let Some(toast) = &app.toast {
        toast.render(f, screen, &app.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn full_frame_shows_title_line_and_badge() {
        let mut config = Config::default();
        config.display.width = 20;
        let recipients = ["alice", "bob", "carol-long-name"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut app = App::new(&config, recipients, LogBuffer::new());

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let lines = screen_text(&terminal);
        assert!(lines[1].contains("Recipients"));
        assert!(lines[1].contains("3 recipients"));
        // Container box at y=4, recipient line inside it at y=5
        assert!(lines[5].contains("alice, bob, ..."));
        assert!(lines[5].contains("+1"));
        assert!(lines[11].contains("q quit"));
        assert_eq!(app.display.container_width(), Some(20));
    }

    #[test]
    fn width_keys_stay_within_narrow_screen() {
        let mut config = Config::default();
        config.display.width = 40;
        let mut app = App::new(&config, vec!["ann".to_string()], LogBuffer::new());

        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert_eq!(app.display.container_width(), Some(27));
        assert_eq!(app.container_width, 27);

        app.handle_key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Right,
            crossterm::event::KeyModifiers::NONE,
        ));
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        assert_eq!(app.display.container_width(), Some(27));
        assert_eq!(app.container_width, 27);
        // Width shown on the title bar border
        assert!(screen_text(&terminal)[0].contains("width 27"));
    }
}
