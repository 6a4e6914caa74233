//! Mello, the mascot.
//!
//! Purely decorative: a face that reflects a mood tag plus an optional
//! speech bubble the user can dismiss. Blinking is derived from the app's
//! tick counter so the widget itself holds no timers.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::theme::Palette;

/// Ticks between blinks (about three seconds at the default tick).
const BLINK_PERIOD: u64 = 190;

/// Ticks the eyes stay shut.
const BLINK_TICKS: u64 = 9;

/// Mood tag controlling Mello's face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MelloMood {
    #[default]
    Idle,
    Talking,
    Waving,
    Celebrating,
    Thinking,
    Encouraging,
}

impl MelloMood {
    fn eyes(self) -> &'static str {
        match self {
            MelloMood::Celebrating => "^   ^",
            MelloMood::Thinking => "o   -",
            MelloMood::Encouraging => "◕   ◕",
            _ => "●   ●",
        }
    }

    fn mouth(self) -> &'static str {
        match self {
            MelloMood::Talking => "  o  ",
            MelloMood::Celebrating => " \\▽/ ",
            MelloMood::Thinking => "  ~  ",
            _ => " \\_/ ",
        }
    }

    fn flourish(self) -> &'static str {
        match self {
            MelloMood::Waving => "👋",
            MelloMood::Celebrating => "🎉",
            MelloMood::Thinking => "💭",
            MelloMood::Encouraging => "💪",
            MelloMood::Talking => "💬",
            MelloMood::Idle => "✨",
        }
    }
}

/// Mascot state owned by a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mello {
    mood: MelloMood,
    message: String,
    show_message: bool,
}

impl Mello {
    pub fn new(mood: MelloMood, message: impl Into<String>) -> Self {
        Self {
            mood,
            message: message.into(),
            show_message: true,
        }
    }

    pub fn mood(&self) -> MelloMood {
        self.mood
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the speech bubble is drawn.
    pub fn is_message_visible(&self) -> bool {
        self.show_message && !self.message.is_empty()
    }

    /// Hide the speech bubble.
    pub fn dismiss(&mut self) {
        self.show_message = false;
    }

    /// Change mood and message, showing the bubble again.
    pub fn say(&mut self, mood: MelloMood, message: impl Into<String>) {
        self.mood = mood;
        self.message = message.into();
        self.show_message = true;
    }

    /// Change the message without touching bubble visibility.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

/// Whether the eyes are shut at `tick`.
pub fn is_blinking(tick: u64) -> bool {
    tick % BLINK_PERIOD < BLINK_TICKS
}

/// Renders a [`Mello`] with its bubble above the face.
pub struct MelloWidget<'a> {
    mello: &'a Mello,
    palette: Palette,
    tick: u64,
}

impl<'a> MelloWidget<'a> {
    pub fn new(mello: &'a Mello, palette: Palette, tick: u64) -> Self {
        Self {
            mello,
            palette,
            tick,
        }
    }

    /// Rows needed for the face alone.
    pub const FACE_HEIGHT: u16 = 5;

    fn face_lines(&self) -> Vec<Line<'static>> {
        let mood = self.mello.mood();
        let eyes = if is_blinking(self.tick) {
            "-   -"
        } else {
            mood.eyes()
        };
        let face = Style::default().fg(self.palette.accent);
        vec![
            Line::from(vec![
                Span::styled(format!("( {eyes} )"), face.add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::raw(mood.flourish()),
            ]),
            Line::from(Span::styled(format!("( {} )", mood.mouth()), face)),
            Line::from(Span::styled(
                "Mello",
                Style::default()
                    .fg(self.palette.muted)
                    .add_modifier(Modifier::ITALIC),
            )),
        ]
    }
}

impl Widget for MelloWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let bubble_height = area.height.saturating_sub(Self::FACE_HEIGHT);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(bubble_height),
                Constraint::Length(Self::FACE_HEIGHT.min(area.height)),
            ])
            .split(area);

        if self.mello.is_message_visible() && bubble_height >= 3 {
            let bubble = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(self.palette.accent))
                .title_bottom(Line::from(" m: hide ").right_aligned())
                .style(Style::default().bg(self.palette.surface));
            Paragraph::new(Line::from(vec![
                Span::styled("✦ ", Style::default().fg(self.palette.accent)),
                Span::styled(
                    self.mello.message().to_string(),
                    Style::default().fg(self.palette.text),
                ),
            ]))
            .wrap(Wrap { trim: true })
            .block(bubble)
            .render(chunks[0], buf);
        }

        let face = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.palette.border));
        Paragraph::new(self.face_lines())
            .centered()
            .block(face)
            .render(chunks[1], buf);
    }
}
