//! TUI application state
//!
//! Owns the recipients display, the container width the user is steering,
//! and the chrome around them (theme, toast, log buffer).

use super::clipboard::{ClipboardSink, SystemClipboard};
use super::components::{RecipientsDisplay, Toast};
use super::traits::{Handled, Interactive};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent};

/// Narrowest container the width keys can produce
pub const MIN_CONTAINER_WIDTH: u16 = 1;
/// Widest container the width keys can produce
pub const MAX_CONTAINER_WIDTH: u16 = 500;

/// Main application state for the TUI
pub struct App {
    /// The recipient line
    pub display: RecipientsDisplay,

    /// Inner width of the container box, in cells
    pub container_width: u16,

    /// Widest container the current screen can draw
    max_container_width: u16,

    /// Current color theme
    pub theme: Theme,

    /// Log buffer for the status bar
    pub log_buffer: LogBuffer,

    /// Active toast notification (auto-dismisses)
    pub toast: Option<Toast>,

    /// Whether the app should quit
    pub should_quit: bool,

    clipboard: Box<dyn ClipboardSink>,
}

impl App {
    pub fn new(config: &Config, recipients: Vec<String>, log_buffer: LogBuffer) -> Self {
        let display = RecipientsDisplay::new(recipients, config.display.measurer())
            .with_remeasure_on_resize(config.display.remeasure_on_resize);

        Self {
            display,
            container_width: config
                .display
                .width
                .clamp(MIN_CONTAINER_WIDTH, MAX_CONTAINER_WIDTH),
            max_container_width: MAX_CONTAINER_WIDTH,
            theme: Theme::by_name(&config.theme),
            log_buffer,
            toast: None,
            should_quit: false,
            clipboard: Box::new(SystemClipboard),
        }
    }

    /// Swap the clipboard destination
    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardSink>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Show a toast notification
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Periodic housekeeping between frames
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Limit the container to what the screen can draw
    ///
    /// Called before every frame. Only the requested width shrinks here; the
    /// display keeps the width it was measured at until it is told otherwise.
    pub fn set_screen_limit(&mut self, max_inner_width: u16) {
        self.max_container_width = max_inner_width.clamp(MIN_CONTAINER_WIDTH, MAX_CONTAINER_WIDTH);
        self.container_width = self.container_width.min(self.max_container_width);
    }

    /// Change the container width by `delta` cells
    ///
    /// This is the width-prop change: the display is told explicitly and
    /// recomputes right away. The width never exceeds the screen limit.
    pub fn resize_container(&mut self, delta: i32) {
        let width = (i32::from(self.container_width) + delta).clamp(
            i32::from(MIN_CONTAINER_WIDTH),
            i32::from(self.max_container_width),
        );
        let width = u16::try_from(width).unwrap_or(MIN_CONTAINER_WIDTH);
        if width == self.container_width {
            return;
        }
        self.container_width = width;
        self.display.set_container_width(width);
    }

    /// Copy every recipient to the clipboard
    pub fn copy_recipients(&mut self) {
        let text = self.display.tooltip_text();
        match self.clipboard.copy(&text) {
            Ok(()) => {
                tracing::info!(
                    count = self.display.recipients().len(),
                    "copied recipients to clipboard"
                );
                self.show_toast("✓ Copied to clipboard");
            }
            Err(e) => {
                tracing::warn!("clipboard copy failed: {:#}", e);
                self.show_toast("✗ Failed to copy");
            }
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.resize_container(-1),
            KeyCode::Right | KeyCode::Char('l') => self.resize_container(1),
            KeyCode::Char('y') => self.copy_recipients(),
            _ => {}
        }
    }

    /// Handle mouse input
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Handled {
        self.display.handle_mouse(mouse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{bail, Result};
    use crossterm::event::KeyModifiers;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MemoryClipboard(Arc<Mutex<Option<String>>>);

    impl ClipboardSink for MemoryClipboard {
        fn copy(&mut self, text: &str) -> Result<()> {
            *self.0.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl ClipboardSink for BrokenClipboard {
        fn copy(&mut self, _text: &str) -> Result<()> {
            bail!("no display server")
        }
    }

    fn app_with(width: u16, recipients: &[&str]) -> App {
        let mut config = Config::default();
        config.display.width = width;
        App::new(
            &config,
            recipients.iter().map(|s| s.to_string()).collect(),
            LogBuffer::new(),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn width_keys_recompute_layout() {
        let mut app = app_with(6, &["ann", "bob", "cy"]);
        app.display.mount(app.container_width);
        assert_eq!(app.display.layout().map(|l| l.trimmed_count), Some(1));

        app.handle_key(press(KeyCode::Right));
        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.container_width, 8);
        assert_eq!(app.display.container_width(), Some(8));
        assert_eq!(app.display.layout().map(|l| l.trimmed_count), Some(0));

        app.handle_key(press(KeyCode::Char('h')));
        assert_eq!(app.container_width, 7);
    }

    #[test]
    fn width_is_clamped() {
        let mut app = app_with(1, &["ann"]);
        app.resize_container(-5);
        assert_eq!(app.container_width, MIN_CONTAINER_WIDTH);
        // No change means no explicit width was pushed to the display
        assert_eq!(app.display.container_width(), None);

        app.resize_container(10_000);
        assert_eq!(app.container_width, MAX_CONTAINER_WIDTH);
    }

    #[test]
    fn screen_limit_caps_width_keys() {
        let mut app = app_with(40, &["ann", "bob"]);
        app.set_screen_limit(27);
        assert_eq!(app.container_width, 27);

        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.container_width, 27);
        assert_eq!(app.display.container_width(), None);

        app.handle_key(press(KeyCode::Left));
        assert_eq!(app.display.container_width(), Some(26));
    }

    #[test]
    fn copy_sends_full_list() {
        let clipboard = MemoryClipboard::default();
        let mut app = app_with(4, &["ann", "bob", "cy"]).with_clipboard(Box::new(clipboard.clone()));

        app.handle_key(press(KeyCode::Char('y')));

        assert_eq!(
            clipboard.0.lock().unwrap().as_deref(),
            Some("ann, bob, cy")
        );
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("✓ Copied to clipboard")
        );
    }

    #[test]
    fn copy_failure_becomes_toast() {
        let mut app = app_with(4, &["ann"]).with_clipboard(Box::new(BrokenClipboard));
        app.copy_recipients();
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("✗ Failed to copy")
        );
    }

    #[test]
    fn quit_keys() {
        let mut app = app_with(4, &[]);
        app.handle_key(press(KeyCode::Char('x')));
        assert!(!app.should_quit);
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
