//! Popup card drawn over a page.
//!
//! Used for alert/confirm dialogs and the word-score overlay. The key hint
//! sits in the bottom border so the body only holds the message.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::centered_rect;
use crate::ui::theme::Palette;

/// Narrowest popup that still fits "Oops!" plus a short hint.
const MIN_POPUP_WIDTH: u16 = 24;
/// Columns kept free on each side of the terminal.
const SIDE_GUTTER: u16 = 1;

#[derive(Debug, Clone)]
pub struct Popup<'a> {
    title: &'a str,
    body_rows: u16,
    accent: Option<Color>,
    hint: Option<&'a str>,
    width_cap: u16,
}

impl<'a> Popup<'a> {
    /// Popup titled `title` with `body_rows` rows inside the border.
    pub fn new(title: &'a str, body_rows: u16) -> Self {
        Self {
            title,
            body_rows,
            accent: None,
            hint: None,
            width_cap: 60,
        }
    }

    /// Border and title colour. Defaults to the palette accent.
    pub fn accent(mut self, color: Color) -> Self {
        self.accent = Some(color);
        self
    }

    /// Key hint drawn right-aligned in the bottom border.
    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Widest the popup may grow; never below the minimum popup width.
    pub fn width_cap(mut self, cap: u16) -> Self {
        self.width_cap = cap.max(MIN_POPUP_WIDTH);
        self
    }

    /// Outer width for a terminal `area_width` columns wide.
    ///
    /// Roughly half the screen, never below the minimum unless the terminal
    /// itself is narrower.
    pub fn width_for(&self, area_width: u16) -> u16 {
        let room = area_width.saturating_sub(SIDE_GUTTER * 2);
        let half = area_width / 2 + area_width / 10;
        half.clamp(MIN_POPUP_WIDTH, self.width_cap).min(room)
    }

    /// Columns available for body text once borders and padding are taken.
    pub fn text_width_for(&self, area_width: u16) -> u16 {
        self.width_for(area_width).saturating_sub(4).max(1)
    }

    /// Body rows plus both borders.
    pub fn outer_height(&self) -> u16 {
        self.body_rows + 2
    }

    /// Clear the popup's rectangle, draw the card and return the body area.
    pub fn render(&self, frame: &mut Frame, area: Rect, palette: Palette) -> Rect {
        let accent = self.accent.unwrap_or(palette.accent);
        let card = centered_rect(area, self.width_for(area.width), self.outer_height());
        frame.render_widget(Clear, card);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(palette.surface))
            .title(
                Line::from(Span::styled(
                    format!(" {} ", self.title.trim()),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
            );
        if let Some(hint) = self.hint {
            block = block.title_bottom(
                Line::from(Span::styled(
                    format!(" {hint} "),
                    Style::default().fg(palette.muted),
                ))
                .alignment(Alignment::Right),
            );
        }

        let body = block.inner(card);
        frame.render_widget(block, card);
        body
    }
}
