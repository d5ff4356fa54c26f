//! Components module - reusable UI building blocks
//!
//! - Recipients display: the recipient line with badge and tooltip
//! - Badge / tooltip: pieces the display composes
//! - Title bar / status bar: app chrome
//! - Toast: transient notifications
//!
//! Each component is a focused, single-responsibility module.

pub mod badge;
pub mod recipients_display;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
pub mod tooltip;

pub use recipients_display::RecipientsDisplay;
pub use toast::Toast;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
