//! IELTS preparation: sections, tips and speaking practice.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::PageContext;
use crate::domain::catalog::{IELTS_SECTIONS, IELTS_SPEAKING_PROMPTS};
use crate::state::ielts::IeltsView;
use crate::state::IeltsState;
use crate::ui::components::{render_status_indicator, StatusIndicatorType};
use crate::ui::helpers::{card_block, heading, list_row, muted};

pub fn render(frame: &mut Frame, area: Rect, state: &IeltsState, page: &PageContext) {
    let palette = page.palette;
    let (title, lines) = match state.sub_view {
        IeltsView::Sections => {
            let mut lines = vec![
                heading("IELTS Preparation", palette),
                muted("Reading, Writing, Listening, Speaking", palette),
                Line::default(),
            ];
            for (i, section) in IELTS_SECTIONS.iter().enumerate() {
                lines.push(list_row(
                    section.title,
                    section.summary,
                    state.cursor.selected() == i,
                    palette,
                ));
            }
            ("IELTS".to_string(), lines)
        }
        IeltsView::Tips => {
            let section = state.section();
            let mut lines = vec![muted(section.summary, palette), Line::default()];
            for tip in section.tips {
                lines.push(Line::from(vec![
                    Span::styled("• ", Style::default().fg(palette.accent)),
                    Span::styled(tip.to_string(), Style::default().fg(palette.text)),
                ]));
            }
            lines.push(Line::default());
            lines.push(muted("Esc: back to sections", palette));
            (section.title.to_string(), lines)
        }
        IeltsView::Speaking => ("Speaking Practice".to_string(), speaking_lines(state, page)),
    };

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(card_block(title, false, palette)),
        area,
    );
}

fn speaking_lines(state: &IeltsState, page: &PageContext) -> Vec<Line<'static>> {
    let palette = page.palette;
    let mut lines = vec![
        muted(
            &format!(
                "Question {} of {}",
                state.prompt_index + 1,
                IELTS_SPEAKING_PROMPTS.len()
            ),
            palette,
        ),
        Line::default(),
        Line::from(Span::styled(
            state.prompt().to_string(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    let status = if state.machine.is_recording() {
        StatusIndicatorType::recording("Recording your answer... press r to stop")
    } else if state.machine.is_processing() {
        StatusIndicatorType::spinner("Assessing your answer...")
    } else {
        StatusIndicatorType::info("Press r to record your answer")
    };
    lines.extend(render_status_indicator(&status, page.tick, palette));

    if let Some(band) = state.last_band {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Estimated band: ", Style::default().fg(palette.muted)),
            Span::styled(
                format!("{band:.1}"),
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    lines.push(Line::default());
    lines.push(muted("n/p: next or previous question   Esc: back", palette));
    lines
}
