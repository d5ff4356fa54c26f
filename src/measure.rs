//! Text measurement capabilities
//!
//! The fitting engine never measures text itself. It asks a [`TextMeasure`]
//! for the width of a string, in whatever unit the container width uses.
//!
//! Implementations must be deterministic and monotonic: appending characters
//! never makes a string narrower. The clipping walk relies on this to stop at
//! the first character that overflows.
//!
//! | Measure         | Unit                         |
//! |-----------------|------------------------------|
//! | [`CellWidth`]   | terminal cells (CJK/emoji=2) |
//! | [`FixedAdvance`]| `n` units per character      |
//! | [`ZeroWidth`]   | always 0 (degraded mode)     |
//! | [`MeasureFn`]   | any `Fn(&str) -> usize`      |

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Maps a string to a non-negative width
pub trait TextMeasure {
    /// Width of a whole string
    fn width(&self, text: &str) -> usize;

    /// Width of a single character
    ///
    /// Defaults to measuring the character as a one-char string.
    fn char_width(&self, c: char) -> usize {
        let mut buf = [0u8; 4];
        self.width(c.encode_utf8(&mut buf))
    }
}

impl<M: TextMeasure + ?Sized> TextMeasure for &M {
    fn width(&self, text: &str) -> usize {
        (**self).width(text)
    }

    fn char_width(&self, c: char) -> usize {
        (**self).char_width(c)
    }
}

/// A missing measurement capability degrades to zero width
impl<M: TextMeasure> TextMeasure for Option<M> {
    fn width(&self, text: &str) -> usize {
        self.as_ref().map_or(0, |m| m.width(text))
    }

    fn char_width(&self, c: char) -> usize {
        self.as_ref().map_or(0, |m| m.char_width(c))
    }
}

/// Terminal display width in cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellWidth;

impl TextMeasure for CellWidth {
    fn width(&self, text: &str) -> usize {
        UnicodeWidthStr::width(text)
    }

    fn char_width(&self, c: char) -> usize {
        UnicodeWidthChar::width(c).unwrap_or(0)
    }
}

/// Every character advances by the same amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAdvance(pub usize);

impl TextMeasure for FixedAdvance {
    fn width(&self, text: &str) -> usize {
        text.chars().count().saturating_mul(self.0)
    }

    fn char_width(&self, _c: char) -> usize {
        self.0
    }
}

/// Measures everything as zero: nothing is clipped, nothing is trimmed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroWidth;

impl TextMeasure for ZeroWidth {
    fn width(&self, _text: &str) -> usize {
        0
    }
}

/// Adapter for closures
///
/// ```
/// use recipients::measure::{MeasureFn, TextMeasure};
///
/// let m = MeasureFn(|s: &str| s.len() * 2);
/// assert_eq!(m.width("abc"), 6);
/// ```
pub struct MeasureFn<F>(pub F);

impl<F: Fn(&str) -> usize> TextMeasure for MeasureFn<F> {
    fn width(&self, text: &str) -> usize {
        (self.0)(text)
    }
}

/// Measurement mode selectable from config and CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MeasureKind {
    /// Terminal cells via unicode-width
    #[default]
    Cells,
    /// Fixed per-character advance
    Fixed,
}

impl MeasureKind {
    /// Parse mode string from config (unknown values fall back to cells)
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "fixed" => Self::Fixed,
            _ => Self::Cells,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cells => "cells",
            Self::Fixed => "fixed",
        }
    }
}

/// Concrete measurer owned by the display surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurer {
    Cells(CellWidth),
    Fixed(FixedAdvance),
}

impl Measurer {
    pub fn new(kind: MeasureKind, advance: usize) -> Self {
        match kind {
            MeasureKind::Cells => Self::Cells(CellWidth),
            MeasureKind::Fixed => Self::Fixed(FixedAdvance(advance)),
        }
    }

    /// Measurement units covered by one terminal cell
    ///
    /// Converts a container width in cells into the unit this measurer
    /// reports, so both sides of the fit comparison agree.
    pub fn units_per_cell(&self) -> usize {
        match self {
            Self::Cells(_) => 1,
            Self::Fixed(FixedAdvance(advance)) => *advance,
        }
    }

    /// Container width in measurement units
    pub fn cells_to_units(&self, cells: u16) -> usize {
        usize::from(cells).saturating_mul(self.units_per_cell())
    }
}

impl Default for Measurer {
    fn default() -> Self {
        Self::Cells(CellWidth)
    }
}

impl TextMeasure for Measurer {
    fn width(&self, text: &str) -> usize {
        match self {
            Self::Cells(m) => m.width(text),
            Self::Fixed(m) => m.width(text),
        }
    }

    fn char_width(&self, c: char) -> usize {
        match self {
            Self::Cells(m) => m.char_width(c),
            Self::Fixed(m) => m.char_width(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_width_counts_wide_characters() {
        assert_eq!(CellWidth.width("abc"), 3);
        assert_eq!(CellWidth.width("日本"), 4);
        assert_eq!(CellWidth.char_width('日'), 2);
    }

    #[test]
    fn fixed_advance_counts_chars_not_bytes() {
        let m = FixedAdvance(8);
        assert_eq!(m.width("héllo"), 40);
        assert_eq!(m.char_width('é'), 8);
    }

    #[test]
    fn missing_measure_is_zero_width() {
        let none: Option<CellWidth> = None;
        assert_eq!(none.width("anything"), 0);
        assert_eq!(none.char_width('x'), 0);
        assert_eq!(Some(CellWidth).width("abc"), 3);
    }

    #[test]
    fn default_char_width_goes_through_width() {
        let m = MeasureFn(|s: &str| s.len());
        assert_eq!(m.char_width('a'), 1);
        assert_eq!(m.char_width('é'), 2);
    }

    #[test]
    fn measurer_follows_kind() {
        assert_eq!(Measurer::new(MeasureKind::Cells, 9).width("ab"), 2);
        assert_eq!(Measurer::new(MeasureKind::Fixed, 9).width("ab"), 18);
        assert_eq!(MeasureKind::from_str("FIXED"), MeasureKind::Fixed);
        assert_eq!(MeasureKind::from_str("bogus"), MeasureKind::Cells);
    }

    #[test]
    fn container_cells_convert_to_measure_units() {
        assert_eq!(Measurer::new(MeasureKind::Cells, 9).cells_to_units(12), 12);
        assert_eq!(Measurer::new(MeasureKind::Fixed, 8).cells_to_units(12), 96);
    }
}
