//! Button Row Component
//!
//! A horizontal row of buttons. The focused one carries the `▶` marker and
//! the accent color; disabled buttons are dimmed.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

/// A single button in a row
#[derive(Debug, Clone)]
pub struct ButtonItem<'a> {
    /// Label on normal-sized terminals
    pub label: &'a str,
    /// Label on compact terminals
    pub short_label: &'a str,
    pub enabled: bool,
}

impl<'a> ButtonItem<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            short_label: label,
            enabled: true,
        }
    }

    pub fn with_short_label(label: &'a str, short_label: &'a str) -> Self {
        Self {
            label,
            short_label,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Build the line for a button row with `focused` highlighted.
///
/// # Example
/// ```ignore
/// let items = [ButtonItem::new("Listen"), ButtonItem::new("Read Aloud")];
/// let line = render_button_row(&items, Some(0), &ctx, palette);
/// ```
pub fn render_button_row(
    items: &[ButtonItem<'_>],
    focused: Option<usize>,
    ctx: &LayoutContext,
    palette: Palette,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::with_capacity(items.len() * 3);

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };

        if focused == Some(idx) {
            spans.push(Span::styled(
                "▶ ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!("[ {label} ]"),
                Style::default()
                    .fg(palette.focus)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            ));
        } else {
            let style = if item.enabled {
                Style::default().fg(palette.text)
            } else {
                Style::default()
                    .fg(palette.muted)
                    .add_modifier(Modifier::DIM)
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(format!("[ {label} ]"), style));
        }
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}
