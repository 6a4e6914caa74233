//! Input Field Component
//!
//! A labelled text box bound to an [`InputBox`], with focus highlighting,
//! password masking and a placeholder.

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::Palette;
use crate::widgets::InputBox;

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the box
    pub label: &'a str,
    pub input: &'a InputBox,
    pub focused: bool,
    /// Draw every character as a bullet
    pub masked: bool,
    /// Shown dimmed while the box is empty
    pub placeholder: Option<&'a str>,
    /// Rows inside the border; more than one wraps the text
    pub rows: u16,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, input: &'a InputBox) -> Self {
        Self {
            label,
            input,
            focused: false,
            masked: false,
            placeholder: None,
            rows: 1,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = rows.max(1);
        self
    }
}

/// Rows an input field occupies: label, top border, text rows, bottom border.
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    1 + config.rows + 2
}

/// Render an input field and return the height it consumed.
///
/// A focused field also places the terminal cursor at the edit position.
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    config: &InputFieldConfig,
    palette: Palette,
) -> u16 {
    let height = calculate_input_field_height(config).min(area.height);
    if height < 3 || area.width < 4 {
        return height;
    }

    let label_style = if config.focused {
        Style::default()
            .fg(palette.focus)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label.to_string(), label_style))),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let box_area = Rect::new(area.x, area.y + 1, area.width, height - 1);
    let border_color = if config.focused {
        palette.focus
    } else {
        palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(box_area);

    if config.input.is_empty() {
        let hint = config.placeholder.unwrap_or_default();
        frame.render_widget(
            Paragraph::new(Span::styled(hint.to_string(), Style::default().fg(palette.muted)))
                .block(block),
            box_area,
        );
        if config.focused {
            frame.set_cursor_position(Position::new(inner.x, inner.y));
        }
        return height;
    }

    let text_style = Style::default().fg(palette.text);
    if config.rows > 1 {
        let shown = if config.masked {
            "•".repeat(config.input.len())
        } else {
            config.input.text().to_string()
        };
        frame.render_widget(
            Paragraph::new(shown)
                .style(text_style)
                .wrap(Wrap { trim: false })
                .block(block),
            box_area,
        );
        return height;
    }

    let (shown, cursor_col) = config.input.visible_window(inner.width as usize, config.masked);
    frame.render_widget(Paragraph::new(Span::styled(shown, text_style)).block(block), box_area);
    if config.focused {
        let col = (cursor_col as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(inner.x + col, inner.y));
    }
    height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeMode;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_config_builder() {
        let input = InputBox::new();
        let config = InputFieldConfig::new("Password", &input)
            .focused(true)
            .masked(true)
            .placeholder("Enter password")
            .rows(0);

        assert!(config.focused);
        assert!(config.masked);
        assert_eq!(config.placeholder, Some("Enter password"));
        assert_eq!(config.rows, 1);
        assert_eq!(calculate_input_field_height(&config), 4);
    }

    #[test]
    fn test_masked_value_is_hidden() {
        let input = InputBox::new().with_content("secret");
        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
        terminal
            .draw(|f| {
                let config = InputFieldConfig::new("Password", &input).masked(true);
                render_input_field(f, f.area(), &config, ThemeMode::Dark.palette());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(!text.contains("secret"));
        assert!(text.contains("••••••"));
    }
}
