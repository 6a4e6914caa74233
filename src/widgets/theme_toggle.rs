//! Dark/light mode switch drawn in every screen header.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::theme::{Palette, ThemeMode};

/// Header switch showing the current mode and its key.
pub struct ThemeToggle {
    mode: ThemeMode,
    palette: Palette,
}

impl ThemeToggle {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            palette: mode.palette(),
        }
    }

    /// Cells needed to draw the switch.
    pub fn width(&self) -> u16 {
        Line::from(self.spans()).width() as u16
    }

    fn spans(&self) -> Vec<Span<'static>> {
        let (icon, label) = match self.mode {
            ThemeMode::Dark => ("☾", "Dark"),
            ThemeMode::Light => ("☀", "Light"),
        };
        vec![
            Span::styled(
                format!("{icon} {label}"),
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ^T", Style::default().fg(self.palette.muted)),
        ]
    }
}

impl Widget for ThemeToggle {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from(self.spans()).right_aligned().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_follows_mode() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 1));
        ThemeToggle::new(ThemeMode::Light).render(buf.area, &mut buf);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Light"));
    }

    #[test]
    fn test_width_is_positive() {
        assert!(ThemeToggle::new(ThemeMode::Dark).width() > 4);
    }
}
