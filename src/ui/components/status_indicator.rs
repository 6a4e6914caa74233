//! Status Indicator Component
//!
//! Renders the practice status under a microphone or reading card:
//! recording, processing, progress, success and needs-practice states.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::Palette;

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks each spinner frame stays on screen.
const TICKS_PER_FRAME: u64 = 8;

/// Status indicator types
#[derive(Debug, Clone, PartialEq)]
pub enum StatusIndicatorType {
    /// Microphone live
    Recording { message: String },
    /// Waiting on the scorer
    Spinner { message: String },
    /// Reading progress (0-100)
    Progress { percent: u8, message: String },
    Success { message: String },
    Warning { message: String },
    Info { message: String },
}

impl StatusIndicatorType {
    pub fn recording(message: impl Into<String>) -> Self {
        Self::Recording {
            message: message.into(),
        }
    }

    pub fn spinner(message: impl Into<String>) -> Self {
        Self::Spinner {
            message: message.into(),
        }
    }

    pub fn progress(percent: u8, message: impl Into<String>) -> Self {
        Self::Progress {
            percent: percent.min(100),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::Warning {
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }
}

/// Spinner character for UI tick `tick`.
pub fn get_spinner_char(tick: u64) -> char {
    SPINNER_FRAMES[((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize]
}

/// `width` cells of bar filled to `percent`.
pub fn progress_bar(percent: u8, width: usize) -> (String, String) {
    let filled = (width * percent.min(100) as usize) / 100;
    ("█".repeat(filled), "░".repeat(width - filled))
}

/// Render a status indicator as lines.
pub fn render_status_indicator(
    indicator: &StatusIndicatorType,
    tick: u64,
    palette: Palette,
) -> Vec<Line<'static>> {
    let bold = |color| Style::default().fg(color).add_modifier(Modifier::BOLD);

    match indicator {
        StatusIndicatorType::Recording { message } => {
            // Pulsing dot
            let dot = if (tick / 30) % 2 == 0 { "●" } else { "○" };
            vec![Line::from(vec![
                Span::styled(format!("{dot} "), bold(palette.recording)),
                Span::styled(message.clone(), bold(palette.recording)),
            ])]
        }
        StatusIndicatorType::Spinner { message } => vec![Line::from(vec![
            Span::styled(format!("{} ", get_spinner_char(tick)), bold(palette.warning)),
            Span::styled(message.clone(), Style::default().fg(palette.warning)),
        ])],
        StatusIndicatorType::Progress { percent, message } => {
            let (filled, empty) = progress_bar(*percent, 30);
            vec![
                Line::from(Span::styled(message.clone(), Style::default().fg(palette.muted))),
                Line::from(vec![
                    Span::styled(filled, Style::default().fg(palette.info)),
                    Span::styled(empty, Style::default().fg(palette.border)),
                    Span::styled(format!(" {percent}%"), bold(palette.info)),
                ]),
            ]
        }
        StatusIndicatorType::Success { message } => vec![Line::from(vec![
            Span::styled("● ", bold(palette.success)),
            Span::styled(message.clone(), bold(palette.success)),
        ])],
        StatusIndicatorType::Warning { message } => vec![Line::from(vec![
            Span::styled("▲ ", bold(palette.warning)),
            Span::styled(message.clone(), bold(palette.warning)),
        ])],
        StatusIndicatorType::Info { message } => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(palette.muted),
        ))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeMode;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(get_spinner_char(0), '◐');
        assert_eq!(get_spinner_char(TICKS_PER_FRAME), '◓');
        assert_eq!(get_spinner_char(TICKS_PER_FRAME * 4), '◐');
    }

    #[test]
    fn test_progress_bar_fill() {
        let (filled, empty) = progress_bar(50, 10);
        assert_eq!(filled.chars().count(), 5);
        assert_eq!(empty.chars().count(), 5);
        let (filled, empty) = progress_bar(100, 10);
        assert_eq!(filled.chars().count(), 10);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(
            StatusIndicatorType::progress(140, "Reading"),
            StatusIndicatorType::Progress {
                percent: 100,
                message: "Reading".to_string()
            }
        );
    }

    #[test]
    fn test_progress_renders_percent() {
        let lines = render_status_indicator(
            &StatusIndicatorType::progress(42, "Reading progress"),
            0,
            ThemeMode::Dark.palette(),
        );
        let last: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(last.ends_with("42%"));
    }
}
