//! Theme support for the TUI
//!
//! Provides color palettes that can be configured via config file.
//! "auto" uses terminal's ANSI palette, named themes use true color (RGB).

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Recipient line
    pub recipients: Color,
    pub placeholder: Color,

    // "+N" badge
    pub badge_fg: Color,
    pub badge_bg: Color,

    // Hover tooltip
    pub tooltip_fg: Color,
    pub tooltip_bg: Color,

    // UI element colors
    pub status_bar: Color,
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub background: Color,
    pub foreground: Color,
    pub border_type: BorderType,
}

impl Theme {
    /// Names accepted by [`Theme::by_name`]
    pub const NAMES: [&'static str; 4] = ["auto", "dracula", "nord", "gruvbox"];

    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            recipients: Color::Reset,
            placeholder: Color::DarkGray,
            badge_fg: Color::White,
            badge_bg: Color::Gray,
            tooltip_fg: Color::Rgb(0xf0, 0xf0, 0xf0),
            tooltip_bg: Color::Rgb(0x66, 0x66, 0x66),
            status_bar: Color::Green,
            title: Color::Cyan,
            border: Color::White,
            highlight: Color::Yellow,
            background: Color::Reset,
            foreground: Color::Reset,
            border_type: BorderType::Rounded,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            recipients: Color::Rgb(0xf8, 0xf8, 0xf2),  // foreground
            placeholder: Color::Rgb(0x62, 0x72, 0xa4), // comment
            badge_fg: Color::Rgb(0x28, 0x2a, 0x36),    // background
            badge_bg: Color::Rgb(0xbd, 0x93, 0xf9),    // purple
            tooltip_fg: Color::Rgb(0xf8, 0xf8, 0xf2),  // foreground
            tooltip_bg: Color::Rgb(0x44, 0x47, 0x5a),  // current line
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b),  // green
            title: Color::Rgb(0x8b, 0xe9, 0xfd),       // cyan
            border: Color::Rgb(0x62, 0x72, 0xa4),      // comment
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),   // yellow
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            border_type: BorderType::Rounded,
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            recipients: Color::Rgb(0xec, 0xef, 0xf4),  // snow storm
            placeholder: Color::Rgb(0x4c, 0x56, 0x6a), // polar night
            badge_fg: Color::Rgb(0x2e, 0x34, 0x40),    // polar night
            badge_bg: Color::Rgb(0x88, 0xc0, 0xd0),    // frost cyan
            tooltip_fg: Color::Rgb(0xec, 0xef, 0xf4),  // snow storm
            tooltip_bg: Color::Rgb(0x43, 0x4c, 0x5e),  // polar night
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c),  // green
            title: Color::Rgb(0x88, 0xc0, 0xd0),       // frost cyan
            border: Color::Rgb(0x4c, 0x56, 0x6a),      // polar night
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),   // yellow
            background: Color::Rgb(0x2e, 0x34, 0x40),
            foreground: Color::Rgb(0xd8, 0xde, 0xe9),
            border_type: BorderType::Plain,
        }
    }

    /// Gruvbox theme - https://github.com/morhetz/gruvbox
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            recipients: Color::Rgb(0xeb, 0xdb, 0xb2),  // fg
            placeholder: Color::Rgb(0x92, 0x83, 0x74), // gray
            badge_fg: Color::Rgb(0x28, 0x28, 0x28),    // bg
            badge_bg: Color::Rgb(0xfa, 0xbd, 0x2f),    // yellow
            tooltip_fg: Color::Rgb(0xeb, 0xdb, 0xb2),  // fg
            tooltip_bg: Color::Rgb(0x50, 0x49, 0x45),  // bg2
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26),  // green
            title: Color::Rgb(0x83, 0xa5, 0x98),       // aqua
            border: Color::Rgb(0x92, 0x83, 0x74),      // gray
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),   // yellow
            background: Color::Rgb(0x28, 0x28, 0x28),
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            border_type: BorderType::Plain,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}
