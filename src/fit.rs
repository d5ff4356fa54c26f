//! Greedy recipient fitting
//!
//! Decides how much of a recipient list fits into a fixed width:
//!
//! ```text
//! recipients: [alice@x.com] [bob@x.com] [carol@x.com]      width 170
//!              80            80           80
//!             └──── 160 ≤ 170 ────┘      240 > 170 → stop
//!
//! visible:  "alice@x.com, bob@x.com, ..."   trimmed: 1
//! ```
//!
//! The scan is a single greedy pass. It stops at the first recipient that
//! does not fit and never backfills a later, shorter name into the gap.
//! Separators are not counted toward the running width.
//!
//! A first recipient that is wider than the whole container is clipped to a
//! prefix plus [`ELLIPSIS`], and everything after it is trimmed.

use crate::measure::TextMeasure;
use serde::Serialize;

/// Text shown when there is nobody to display
pub const NO_RECIPIENTS: &str = "No recipients";

/// Appended to a clipped recipient
pub const ELLIPSIS: &str = "...";

/// Joins visible recipients (and the tooltip list)
pub const SEPARATOR: &str = ", ";

/// Outcome of fitting a recipient list into a width
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutResult {
    /// Joined visible recipients, suffixed with `", ..."` when some are trimmed
    pub visible_text: String,
    /// Whether the first recipient alone overflowed and was clipped
    pub is_first_clipped: bool,
    /// Recipients not rendered in `visible_text`
    pub trimmed_count: usize,
}

impl LayoutResult {
    /// Layout for an empty recipient list
    pub fn empty() -> Self {
        Self {
            visible_text: NO_RECIPIENTS.to_string(),
            is_first_clipped: false,
            trimmed_count: 0,
        }
    }

    /// Badge label for the trimmed recipients, if any
    pub fn badge_label(&self) -> Option<String> {
        badge_label(self.trimmed_count)
    }
}

impl Default for LayoutResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// Fit `recipients` into `available_width`
///
/// Pure: identical inputs always produce identical output. Never fails; a
/// measure that reports zero for everything shows every recipient in full.
///
/// # Example
///
/// ```
/// use recipients::fit::fit;
/// use recipients::measure::FixedAdvance;
///
/// let layout = fit(&["ann", "bo", "cyd"], 6, &FixedAdvance(1));
/// assert_eq!(layout.visible_text, "ann, bo, ...");
/// assert_eq!(layout.trimmed_count, 1);
/// ```
pub fn fit<S, M>(recipients: &[S], available_width: usize, measure: &M) -> LayoutResult
where
    S: AsRef<str>,
    M: TextMeasure + ?Sized,
{
    let Some((first, rest)) = recipients.split_first() else {
        return LayoutResult::empty();
    };
    let first = first.as_ref();

    let mut visible: Vec<String> = Vec::with_capacity(recipients.len());
    let first_width = measure.width(first);
    let is_first_clipped = first_width > available_width;

    if is_first_clipped {
        visible.push(clip(first, available_width, measure));
    } else {
        visible.push(first.to_string());
        let mut running = first_width;

        for recipient in rest {
            let recipient = recipient.as_ref();
            let width = measure.width(recipient);
            match running.checked_add(width) {
                Some(total) if total <= available_width => {
                    visible.push(recipient.to_string());
                    running = total;
                }
                _ => break,
            }
        }
    }

    let trimmed_count = recipients.len() - visible.len();
    let mut visible_text = visible.join(SEPARATOR);
    if trimmed_count > 0 {
        visible_text.push_str(SEPARATOR);
        visible_text.push_str(ELLIPSIS);
    }

    LayoutResult {
        visible_text,
        is_first_clipped,
        trimmed_count,
    }
}

/// Shorten `text` to fit `max_width`, ending in [`ELLIPSIS`]
///
/// Width for the ellipsis is reserved up front. The ellipsis is appended even
/// when no character fits, so the degenerate result is just `"..."`.
pub fn clip<M>(text: &str, max_width: usize, measure: &M) -> String
where
    M: TextMeasure + ?Sized,
{
    let mut width = measure.width(ELLIPSIS);
    let mut end = 0;

    for (idx, c) in text.char_indices() {
        width = width.saturating_add(measure.char_width(c));
        if width > max_width {
            break;
        }
        end = idx + c.len_utf8();
    }

    format!("{}{}", &text[..end], ELLIPSIS)
}

/// Every recipient joined by [`SEPARATOR`], regardless of what was trimmed
pub fn tooltip_text<S: AsRef<str>>(recipients: &[S]) -> String {
    let names: Vec<&str> = recipients.iter().map(|r| r.as_ref()).collect();
    names.join(SEPARATOR)
}

/// `"+N"` for a positive trimmed count
pub fn badge_label(trimmed_count: usize) -> Option<String> {
    (trimmed_count > 0).then(|| format!("+{}", trimmed_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{CellWidth, FixedAdvance, MeasureFn, ZeroWidth};

    /// Every recipient measures the same regardless of length
    fn flat(width: usize) -> MeasureFn<impl Fn(&str) -> usize> {
        MeasureFn(move |_: &str| width)
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let empty: [&str; 0] = [];
        for width in [0, 1, 500] {
            let layout = fit(&empty, width, &CellWidth);
            assert_eq!(layout.visible_text, NO_RECIPIENTS);
            assert_eq!(layout.trimmed_count, 0);
            assert!(!layout.is_first_clipped);
        }
        assert_eq!(fit(&empty, 10, &ZeroWidth), LayoutResult::empty());
    }

    #[test]
    fn two_of_three_fit() {
        let recipients = ["alice@x.com", "bob@x.com", "carol@x.com"];
        let layout = fit(&recipients, 170, &flat(80));

        assert_eq!(layout.visible_text, "alice@x.com, bob@x.com, ...");
        assert_eq!(layout.trimmed_count, 1);
        assert!(!layout.is_first_clipped);
        assert_eq!(layout.badge_label().as_deref(), Some("+1"));
    }

    #[test]
    fn single_long_recipient_is_clipped() {
        let address = "a-very-long-address@example.com";
        let m = MeasureFn(|s: &str| {
            if s == address {
                500
            } else {
                s.chars().count() * 16
            }
        });
        let layout = fit(&[address], 100, &m);

        assert!(layout.is_first_clipped);
        assert_eq!(layout.trimmed_count, 0);
        assert!(layout.visible_text.ends_with(ELLIPSIS));
        let prefix = layout.visible_text.trim_end_matches(ELLIPSIS);
        assert!(address.starts_with(prefix));
        // 48 for the ellipsis, 16 per character
        assert_eq!(layout.visible_text, "a-v...");
        assert!(layout.badge_label().is_none());
    }

    #[test]
    fn clipped_first_trims_everyone_else() {
        let recipients = ["wide-first@example.com", "b", "c", "d"];
        let layout = fit(&recipients, 10, &CellWidth);

        assert!(layout.is_first_clipped);
        assert_eq!(layout.trimmed_count, recipients.len() - 1);
        assert_eq!(layout.visible_text, "wide-fi..., ...");
    }

    #[test]
    fn everything_fits_without_marker() {
        let recipients = ["ann", "bob", "cy"];
        let layout = fit(&recipients, 8, &CellWidth);

        assert_eq!(layout.visible_text, "ann, bob, cy");
        assert_eq!(layout.trimmed_count, 0);
        assert!(!layout.is_first_clipped);
    }

    #[test]
    fn exact_fit_is_inclusive() {
        let layout = fit(&["abcd", "ef"], 6, &CellWidth);
        assert_eq!(layout.trimmed_count, 0);

        let layout = fit(&["abcd"], 4, &CellWidth);
        assert!(!layout.is_first_clipped);
        assert_eq!(layout.visible_text, "abcd");
    }

    #[test]
    fn scan_does_not_backfill_shorter_names() {
        // "b" would fit after "cccccc" is skipped, but the scan has stopped
        let recipients = ["aaaa", "cccccc", "b"];
        let layout = fit(&recipients, 6, &CellWidth);

        assert_eq!(layout.visible_text, "aaaa, ...");
        assert_eq!(layout.trimmed_count, 2);
    }

    #[test]
    fn duplicates_are_kept() {
        let layout = fit(&["x", "x", "x"], 10, &CellWidth);
        assert_eq!(layout.visible_text, "x, x, x");
    }

    #[test]
    fn zero_width_measure_never_clips_or_trims() {
        let recipients = ["someone@example.com", "another@example.com"];
        for width in [0, 3, 100] {
            let layout = fit(&recipients, width, &ZeroWidth);
            assert_eq!(layout.trimmed_count, 0);
            assert!(!layout.is_first_clipped);
            assert_eq!(layout.visible_text, tooltip_text(&recipients));
        }

        let missing: Option<CellWidth> = None;
        assert_eq!(fit(&recipients, 0, &missing).trimmed_count, 0);
    }

    #[test]
    fn fit_is_idempotent() {
        let recipients = vec!["ann".to_string(), "bob".to_string(), "carol".to_string()];
        let a = fit(&recipients, 7, &CellWidth);
        let b = fit(&recipients, 7, &CellWidth);
        assert_eq!(a, b);
    }

    #[test]
    fn wider_container_never_trims_more() {
        let recipients = ["alpha", "be", "gamma-ray", "d", "epsilon@example.org"];
        let mut previous = usize::MAX;
        for width in 0..60 {
            let trimmed = fit(&recipients, width, &CellWidth).trimmed_count;
            assert!(
                trimmed <= previous,
                "width {} trimmed {} after {}",
                width,
                trimmed,
                previous
            );
            previous = trimmed;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn clip_reserves_room_for_ellipsis() {
        assert_eq!(clip("abcdefgh", 6, &CellWidth), "abc...");
        assert_eq!(clip("abcdefgh", 3, &CellWidth), "...");
        assert_eq!(clip("abcdefgh", 0, &CellWidth), "...");
        assert_eq!(clip("", 10, &CellWidth), "...");
    }

    #[test]
    fn clip_respects_wide_characters() {
        // 日 and 本 are two cells each
        assert_eq!(clip("日本語", 6, &CellWidth), "日...");
        assert_eq!(clip("日本語", 7, &CellWidth), "日本...");
    }

    #[test]
    fn clip_with_fixed_advance() {
        let m = FixedAdvance(10);
        // ellipsis = 30, each char 10
        assert_eq!(clip("a-very-long-address@example.com", 100, &m), "a-very-...");
    }

    #[test]
    fn tooltip_lists_everyone() {
        let recipients = ["alice@x.com", "bob@x.com", "carol@x.com"];
        assert_eq!(
            tooltip_text(&recipients),
            "alice@x.com, bob@x.com, carol@x.com"
        );
        let empty: [&str; 0] = [];
        assert_eq!(tooltip_text(&empty), "");
    }

    #[test]
    fn badge_label_only_for_positive_counts() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(3).as_deref(), Some("+3"));
    }
}
