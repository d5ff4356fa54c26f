//! Recipient line: as many names as fit, a "+N" badge, and a hover tooltip
//!
//! ```text
//! ┌──────────────────────────────┐
//! │alice@x.com, bob@x.com, … +1  │   ← text (shrinks)      badge (right)
//! └──────────────────────────────┘
//!                       hover on +1 ─▶ ╭ alice@x.com, bob@x.com, carol@x.com ╮
//! ```
//!
//! # Recompute trigger
//!
//! The layout is memoized on `(list generation, container width)`. Replacing
//! the list bumps the generation; changing the width changes the key. Either
//! recomputes synchronously, before the next frame is drawn. Anything else
//! (hover, redraws) reuses the stored layout.
//!
//! The container is measured once, on first render. Terminal resizes after
//! that do not re-measure it unless `remeasure_on_resize` is enabled; an
//! explicit [`RecipientsDisplay::set_container_width`] always does.

use super::{badge, tooltip};
use crate::fit::{clip, fit, tooltip_text, LayoutResult};
use crate::measure::{CellWidth, Measurer, TextMeasure};
use crate::tui::memo::Memo;
use crate::tui::traits::{Component, Handled, Interactive, RenderContext};
use crossterm::event::MouseEvent;
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Gap between the text and the badge
const BADGE_MARGIN: u16 = 1;

/// Memo key: (recipient list generation, container width in cells)
type LayoutKey = (u64, u16);

pub struct RecipientsDisplay {
    recipients: Vec<String>,
    /// Bumped whenever the list is replaced
    generation: u64,
    /// Container width in cells, `None` until mounted
    container_width: Option<u16>,
    measurer: Measurer,
    layout: Memo<LayoutKey, LayoutResult>,
    remeasure_on_resize: bool,

    tooltip_visible: bool,
    pointer_over_badge: bool,
    /// Where the badge was last drawn (hit area for hover)
    badge_area: Option<Rect>,
}

impl RecipientsDisplay {
    pub fn new(recipients: Vec<String>, measurer: Measurer) -> Self {
        Self {
            recipients,
            generation: 0,
            container_width: None,
            measurer,
            layout: Memo::new(),
            remeasure_on_resize: false,
            tooltip_visible: false,
            pointer_over_badge: false,
            badge_area: None,
        }
    }

    /// Re-measure the container whenever the render area width changes
    pub fn with_remeasure_on_resize(mut self, enabled: bool) -> Self {
        self.remeasure_on_resize = enabled;
        self
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    /// Replace the recipient list and recompute
    pub fn set_recipients(&mut self, recipients: Vec<String>) {
        self.recipients = recipients;
        self.generation += 1;
        self.recompute();
    }

    /// First measurement of the container; later calls are ignored
    pub fn mount(&mut self, width: u16) {
        if self.container_width.is_none() {
            tracing::debug!(width, "recipients display mounted");
            self.container_width = Some(width);
            self.recompute();
        }
    }

    /// Explicit container width change (always recomputes if different)
    pub fn set_container_width(&mut self, width: u16) {
        self.container_width = Some(width);
        self.recompute();
    }

    pub fn container_width(&self) -> Option<u16> {
        self.container_width
    }

    /// Current layout, once the container has been measured
    pub fn layout(&self) -> Option<&LayoutResult> {
        self.layout.get()
    }

    /// How many times the layout has been computed
    pub fn recompute_count(&self) -> u64 {
        self.layout.recompute_count()
    }

    /// All recipients, regardless of what is trimmed
    pub fn tooltip_text(&self) -> String {
        tooltip_text(&self.recipients)
    }

    pub fn is_tooltip_visible(&self) -> bool {
        self.tooltip_visible
    }

    /// Pointer entered the badge
    pub fn pointer_enter(&mut self) {
        self.pointer_over_badge = true;
        self.tooltip_visible = true;
    }

    /// Pointer left the badge
    pub fn pointer_leave(&mut self) {
        self.pointer_over_badge = false;
        self.tooltip_visible = false;
    }

    fn recompute(&mut self) {
        let Some(cells) = self.container_width else {
            return;
        };
        let generation = self.generation;
        let available = self.measurer.cells_to_units(cells);
        let recipients = &self.recipients;
        let measurer = &self.measurer;

        self.layout.get_or_compute((generation, cells), || {
            let layout = fit(recipients, available, measurer);
            tracing::debug!(
                generation,
                cells,
                available,
                trimmed = layout.trimmed_count,
                clipped = layout.is_first_clipped,
                "recipient layout recomputed"
            );
            layout
        });
    }
}

impl Component for RecipientsDisplay {
    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        match self.container_width {
            None => self.mount(area.width),
            Some(width) if self.remeasure_on_resize && width != area.width => {
                self.set_container_width(area.width)
            }
            Some(_) => {}
        }

        let theme = ctx.theme;
        let layout = self.layout.get().cloned().unwrap_or_default();
        self.badge_area = None;

        let row = Rect {
            height: area.height.min(1),
            ..area
        };
        if row.is_empty() {
            return;
        }

        let mut text_area = row;
        if let Some(label) = layout.badge_label() {
            let badge_width = badge::width(&label).min(row.width);
            let badge_area = Rect::new(row.right() - badge_width, row.y, badge_width, 1);
            text_area.width = row.width.saturating_sub(badge_width + BADGE_MARGIN);

            badge::render(f, badge_area, &label, theme);
            self.badge_area = Some(badge_area);
        }

        let color = if self.recipients.is_empty() {
            theme.placeholder
        } else {
            theme.recipients
        };
        // The badge takes room the layout was fitted against; shorten the
        // text so it still ends in an ellipsis instead of being cut off
        let mut visible_text = layout.visible_text;
        if CellWidth.width(&visible_text) > usize::from(text_area.width) {
            visible_text = clip(&visible_text, usize::from(text_area.width), &CellWidth);
        }
        let text = Paragraph::new(visible_text).style(Style::default().fg(color));
        f.render_widget(text, text_area);

        if self.tooltip_visible {
            let screen = f.area();
            tooltip::render(f, screen, &self.tooltip_text(), theme);
        }
    }
}

impl Interactive for RecipientsDisplay {
    /// Translate pointer position into badge enter/leave
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Handled {
        let position = Position::new(mouse.column, mouse.row);
        let inside = self
            .badge_area
            .is_some_and(|area| area.contains(position));

        match (self.pointer_over_badge, inside) {
            (false, true) => {
                self.pointer_enter();
                Handled::Yes
            }
            (true, false) => {
                self.pointer_leave();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        self.badge_area.map(|_| "hover +N: all recipients")
    }
}
