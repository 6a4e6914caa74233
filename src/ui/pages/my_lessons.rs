//! Lesson list and the guided reading card.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{with_mello, PageContext};
use crate::domain::catalog::LESSONS;
use crate::state::my_lessons::{LessonButton, LessonsView, LESSON_BUTTONS};
use crate::state::MyLessonsState;
use crate::ui::components::{
    render_button_row, render_status_indicator, ButtonItem, StatusIndicatorType,
};
use crate::ui::helpers::{card_block, heading, list_row, muted};

pub fn render(frame: &mut Frame, area: Rect, state: &MyLessonsState, page: &PageContext) {
    let content = with_mello(frame, area, &state.mello, page);
    match state.sub_view {
        LessonsView::List => render_list(frame, content, state, page),
        LessonsView::Detail => render_detail(frame, content, state, page),
    }
}

fn render_list(frame: &mut Frame, area: Rect, state: &MyLessonsState, page: &PageContext) {
    let palette = page.palette;
    let mut lines = vec![
        heading("My Lessons", palette),
        muted("Continue your speaking journey", palette),
        Line::default(),
    ];
    for (i, lesson) in LESSONS.iter().enumerate() {
        let done = if lesson.completed { "✓ " } else { "" };
        lines.push(list_row(
            &format!("{done}{}", lesson.title),
            &format!("{} · {}", lesson.level.label(), lesson.duration),
            state.cursor.selected() == i,
            palette,
        ));
        lines.push(muted(&format!("    {}", lesson.description), palette));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(card_block("Lessons", false, palette)),
        area,
    );
}

fn render_detail(frame: &mut Frame, area: Rect, state: &MyLessonsState, page: &PageContext) {
    let palette = page.palette;
    let lesson = state.lesson();
    let block = card_block(lesson.title, false, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(5)])
        .split(inner);

    let words = lesson.practice_words.join("  ·  ");
    let text = vec![
        muted(&format!("{} · {}", lesson.level.label(), lesson.duration), palette),
        Line::default(),
        Line::from(Span::styled(
            lesson.content.to_string(),
            Style::default().fg(palette.text),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Practice words: ", Style::default().fg(palette.muted)),
            Span::styled(
                words,
                Style::default()
                    .fg(palette.info)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), chunks[0]);

    let mut lines = Vec::new();
    if state.is_complete() {
        lines.extend(render_status_indicator(
            &StatusIndicatorType::success("🎉 Lesson Complete! Great job reading!"),
            page.tick,
            palette,
        ));
        lines.push(render_button_row(
            &[ButtonItem::new("Back to Lessons")],
            Some(0),
            &page.layout,
            palette,
        ));
    } else {
        let listen = if state.playback.is_playing() {
            "Stop"
        } else {
            "Listen"
        };
        let items: Vec<ButtonItem> = LESSON_BUTTONS
            .iter()
            .map(|button| match button {
                LessonButton::Listen => ButtonItem::new(listen),
                LessonButton::StartReading => ButtonItem::new("Start Reading").enabled(!state.reading),
                LessonButton::BackToLessons => ButtonItem::with_short_label("Back to Lessons", "Back"),
            })
            .collect();
        lines.push(render_button_row(
            &items,
            Some(state.buttons.index()),
            &page.layout,
            palette,
        ));
        if state.reading || state.progress > 0 {
            lines.extend(render_status_indicator(
                &StatusIndicatorType::progress(state.progress, "Reading progress"),
                page.tick,
                palette,
            ));
        } else if state.playback.is_playing() {
            lines.extend(render_status_indicator(
                &StatusIndicatorType::info("🔊 Listening to the lesson..."),
                page.tick,
                palette,
            ));
        }
    }
    frame.render_widget(Paragraph::new(lines), chunks[1]);
}
