//! AI coach conversation.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{render_fields, PageContext};
use crate::domain::catalog::QUICK_QUESTIONS;
use crate::domain::Sender;
use crate::state::chat::ChatFocus;
use crate::state::ChatState;
use crate::ui::components::{calculate_input_field_height, get_spinner_char, InputFieldConfig};
use crate::ui::helpers::{card_block, estimate_wrapped_line_count};

pub fn render(frame: &mut Frame, area: Rect, state: &ChatState, page: &PageContext) {
    let palette = page.palette;
    let input = InputFieldConfig::new("Your message", &state.input)
        .placeholder("Ask your coach anything...")
        .focused(state.focus == ChatFocus::Input);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(calculate_input_field_height(&input)),
        ])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for message in &state.messages {
        let (who, color) = match message.sender {
            Sender::User => ("You", palette.info),
            Sender::Ai => ("Coach", palette.accent),
        };
        lines.push(Line::from(vec![
            Span::styled(who, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {}", message.time_label()),
                Style::default().fg(palette.muted),
            ),
        ]));
        for text in message.text.lines() {
            lines.push(Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(palette.text),
            )));
        }
        lines.push(Line::default());
    }
    if state.is_typing() {
        lines.push(Line::from(Span::styled(
            format!("{} Coach is typing...", get_spinner_char(page.tick)),
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    // Keep the newest message in view; `scroll` counts rows up from the bottom
    let block = card_block("AI Speaking Coach", false, palette);
    let viewport = block.inner(chunks[0]);
    let total = estimate_wrapped_line_count(&lines, viewport.width as usize) as u16;
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    let bottom = total.saturating_sub(viewport.height);
    let offset = bottom.saturating_sub(state.scroll);
    frame.render_widget(paragraph.scroll((offset, 0)).block(block), chunks[0]);

    let mut chips = vec![Span::styled("Quick: ", Style::default().fg(palette.muted))];
    for (i, question) in QUICK_QUESTIONS.iter().enumerate() {
        let style = if state.focus == ChatFocus::Quick(i) {
            Style::default()
                .fg(palette.focus)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(palette.text)
        };
        chips.push(Span::styled(format!(" {question} "), style));
        chips.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(chips)), chunks[1]);

    render_fields(frame, chunks[2], &[input], page);
}
