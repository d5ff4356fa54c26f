//! Display configuration: container width and text measurement

use crate::measure::{MeasureKind, Measurer};
use serde::Deserialize;

/// Default container width in cells
pub const DEFAULT_WIDTH: u16 = 40;

/// Recipient display settings
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Container width handed to the display (cells)
    pub width: u16,
    /// How recipient text is measured
    pub measure: MeasureKind,
    /// Per-character advance for `measure = "fixed"`
    pub advance: usize,
    /// Re-measure the container when the terminal is resized.
    /// Off by default: the container is measured once when mounted and
    /// again only when its width is changed explicitly.
    pub remeasure_on_resize: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            measure: MeasureKind::Cells,
            advance: 1,
            remeasure_on_resize: false,
        }
    }
}

/// Display settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileDisplay {
    pub width: Option<u16>,
    pub measure: Option<String>,
    pub advance: Option<usize>,
    pub remeasure_on_resize: Option<bool>,
}

impl DisplayConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileDisplay>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            width: file.width.unwrap_or(defaults.width),
            measure: file
                .measure
                .map(|s| MeasureKind::from_str(&s))
                .unwrap_or(defaults.measure),
            advance: file.advance.unwrap_or(defaults.advance),
            remeasure_on_resize: file
                .remeasure_on_resize
                .unwrap_or(defaults.remeasure_on_resize),
        }
    }

    /// Measurer selected by this config
    pub fn measurer(&self) -> Measurer {
        Measurer::new(self.measure, self.advance)
    }
}
