//! Sizing rules shared by every page.
//!
//! Pages get a [`LayoutContext`] for the area below the header and ask it
//! whether Mello fits beside the content and whether buttons should use
//! their short labels.

use ratatui::layout::Rect;

/// Below this width pages drop the Mello column and shorten button labels.
const COMPACT_WIDTH: u16 = 80;
/// Below this height button labels are shortened too.
const COMPACT_HEIGHT: u16 = 24;
/// Mello's face and a two-line bubble need this many rows.
const MELLO_MIN_HEIGHT: u16 = 16;
const MELLO_COLUMN_MIN: u16 = 26;
const MELLO_COLUMN_MAX: u16 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Context for the size of `area`.
    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Narrow or short; buttons switch to their short labels.
    pub fn is_compact(&self) -> bool {
        self.width < COMPACT_WIDTH || self.height < COMPACT_HEIGHT
    }

    /// Whether Mello gets a column beside the page content.
    pub fn shows_mello_column(&self) -> bool {
        self.width >= COMPACT_WIDTH && self.height >= MELLO_MIN_HEIGHT
    }

    /// A third of the width, kept between the face width and a cap.
    pub fn mello_column_width(&self) -> u16 {
        (self.width / 3)
            .clamp(MELLO_COLUMN_MIN, MELLO_COLUMN_MAX)
            .min(self.width)
    }

    /// Columns left once `reserved` columns of borders and labels are taken.
    pub fn content_width(&self, reserved: u16) -> u16 {
        self.width.saturating_sub(reserved).max(1)
    }
}

/// Center a `width` x `height` box inside `area`, shrinking it to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
