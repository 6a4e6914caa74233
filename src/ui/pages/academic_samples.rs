//! Academic classes and the word-by-word pronunciation session.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Wrap},
    Frame,
};

use super::PageContext;
use crate::domain::catalog::ACADEMIC_CLASSES;
use crate::domain::WordGrade;
use crate::state::academic_samples::{AcademicView, SessionButton, WordSession, SESSION_BUTTONS};
use crate::state::AcademicSamplesState;
use crate::ui::components::{
    render_button_row, render_status_indicator, ButtonItem, Popup, StatusIndicatorType,
};
use crate::ui::helpers::{card_block, heading, list_row, muted};
use crate::ui::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, state: &AcademicSamplesState, page: &PageContext) {
    match state.sub_view {
        AcademicView::ClassSelection => render_classes(frame, area, state, page),
        AcademicView::Session => render_session(frame, area, &state.session, page),
    }
}

fn render_classes(frame: &mut Frame, area: Rect, state: &AcademicSamplesState, page: &PageContext) {
    let palette = page.palette;
    let mut lines = vec![
        heading("Academic Samples", palette),
        muted("Pick your class and practice its words", palette),
        Line::default(),
    ];
    for (i, class) in ACADEMIC_CLASSES.iter().enumerate() {
        let badge = if class.is_new { " NEW" } else { "" };
        lines.push(list_row(
            &format!("{}{badge}", class.title),
            &format!("{} · {} words", class.age_group, class.words.len()),
            state.cursor.selected() == i,
            palette,
        ));
        lines.push(muted(&format!("    {}", class.description), palette));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(card_block("Choose Your Class", false, palette)),
        area,
    );
}

fn grade_color(grade: WordGrade, palette: Palette) -> ratatui::style::Color {
    match grade {
        WordGrade::Excellent => palette.success,
        WordGrade::Good => palette.info,
        WordGrade::NeedsPractice => palette.warning,
    }
}

fn render_session(frame: &mut Frame, area: Rect, session: &WordSession, page: &PageContext) {
    let palette = page.palette;
    let class = session.class();
    let block = card_block(class.title, false, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(inner);

    let recorded = session.recorded.len();
    let total = session.word_count();
    let ratio = if total == 0 {
        0.0
    } else {
        recorded as f64 / total as f64
    };
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(palette.accent).bg(palette.surface))
            .label(format!("{recorded}/{total} words recorded"))
            .ratio(ratio.clamp(0.0, 1.0)),
        chunks[0],
    );

    // Word dots: recorded, current, remaining
    let dots: Vec<Span> = (0..total)
        .map(|i| {
            let (glyph, color) = if session.is_recorded(i) {
                ("●", palette.success)
            } else if i == session.word_index {
                ("◉", palette.focus)
            } else {
                ("○", palette.border)
            };
            Span::styled(format!("{glyph} "), Style::default().fg(color))
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(dots)), chunks[1]);

    let mut body = Vec::new();
    if session.is_complete() {
        body.push(heading("🏆 All words recorded! Amazing work!", palette));
        body.push(Line::default());
    }
    if let Some(word) = session.word() {
        body.push(Line::from(Span::styled(
            word.word.to_string(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )));
        body.push(muted(
            &format!("Word {} of {}", session.word_index + 1, total),
            palette,
        ));
        body.push(Line::default());
    }
    let status = if session.machine.is_recording() {
        StatusIndicatorType::recording(session.prompt())
    } else if session.machine.is_processing() {
        StatusIndicatorType::spinner(session.prompt())
    } else if session.show_encouragement {
        StatusIndicatorType::success(session.prompt())
    } else {
        StatusIndicatorType::info(session.prompt())
    };
    body.extend(render_status_indicator(&status, page.tick, palette));

    if let (Some(grade), None) = (session.last_grade, session.overlay()) {
        body.push(Line::default());
        body.push(Line::from(vec![
            Span::styled(
                format!("{}% ", grade.accuracy()),
                Style::default()
                    .fg(grade_color(grade, palette))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(grade.card_line().to_string(), Style::default().fg(palette.text)),
        ]));
        if grade.is_passing() {
            if let Some(word) = session.word() {
                body.push(muted(word.encouragement, palette));
            }
        }
    }
    if session.playback.is_playing() {
        body.push(Line::from(Span::styled(
            "🔊 Playing the correct pronunciation...",
            Style::default().fg(palette.info),
        )));
    }
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), chunks[2]);

    let record = if session.machine.is_recording() {
        "Stop"
    } else {
        "Record"
    };
    let items: Vec<ButtonItem> = SESSION_BUTTONS
        .iter()
        .map(|button| match button {
            SessionButton::Record => ButtonItem::new(record),
            SessionButton::Hear => ButtonItem::with_short_label("Hear Correct", "Hear")
                .enabled(session.show_correct_pronunciation),
            SessionButton::Previous => ButtonItem::with_short_label("Previous", "Prev")
                .enabled(session.word_index > 0),
            SessionButton::Next => ButtonItem::new("Next")
                .enabled(session.word_index + 1 < total),
            SessionButton::Restart => ButtonItem::new("Restart"),
            SessionButton::BackToClasses => {
                ButtonItem::with_short_label("Back to Classes", "Classes")
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(render_button_row(
            &items,
            Some(session.buttons.index()),
            &page.layout,
            palette,
        ))
        .wrap(Wrap { trim: true }),
        chunks[3],
    );

    if let Some(grade) = session.overlay() {
        render_grade_overlay(frame, area, grade, page);
    }
}

/// Grade popup shown while the result is fresh.
fn render_grade_overlay(frame: &mut Frame, area: Rect, grade: WordGrade, page: &PageContext) {
    let palette = page.palette;
    let color = grade_color(grade, palette);
    let inner = Popup::new("Your Score", 3)
        .accent(color)
        .width_cap(40)
        .render(frame, area, palette);
    let lines = vec![
        Line::from(Span::styled(
            format!("{}%", grade.accuracy()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(grade.headline().to_string(), Style::default().fg(palette.text))),
    ];
    frame.render_widget(Paragraph::new(lines).centered(), inner);
}
