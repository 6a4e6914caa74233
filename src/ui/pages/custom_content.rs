//! User-authored lessons: list, create form and practice card.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{render_fields, PageContext};
use crate::state::custom_content::{CreateSlot, CustomView, Difficulty};
use crate::state::CustomContentState;
use crate::ui::components::{
    render_button_row, render_status_indicator, ButtonItem, InputFieldConfig, StatusIndicatorType,
};
use crate::ui::helpers::{card_block, heading, list_row, muted, truncate_string};

pub fn render(frame: &mut Frame, area: Rect, state: &CustomContentState, page: &PageContext) {
    match state.sub_view {
        CustomView::List => render_list(frame, area, state, page),
        CustomView::Create => render_create(frame, area, state, page),
        CustomView::Practice => render_practice(frame, area, state, page),
    }
}

fn render_list(frame: &mut Frame, area: Rect, state: &CustomContentState, page: &PageContext) {
    let palette = page.palette;
    let selected = state.cursor.selected();
    let preview_width = page.layout.content_width(12) as usize;

    let mut lines = vec![
        heading("Custom Content", palette),
        muted("Create your own speaking exercises", palette),
        Line::default(),
        list_row("+ Create New Lesson", "", selected == 0, palette),
        Line::default(),
    ];
    if state.is_empty() {
        lines.push(muted("No lessons yet. Create your first one!", palette));
    }
    for (i, lesson) in state.lessons.iter().enumerate() {
        lines.push(list_row(
            &lesson.title,
            &format!("{} · {}", lesson.difficulty.label(), lesson.date_label()),
            selected == i + 1,
            palette,
        ));
        lines.push(muted(
            &format!("    {}", truncate_string(&lesson.content, preview_width)),
            palette,
        ));
    }
    lines.push(Line::default());
    lines.push(muted("Enter: practice   d: delete", palette));

    frame.render_widget(
        Paragraph::new(lines).block(card_block("My Custom Lessons", false, palette)),
        area,
    );
}

fn difficulty_line(current: Difficulty, focused: bool, page: &PageContext) -> Line<'static> {
    let palette = page.palette;
    let mut spans = vec![Span::styled(
        if focused { "▶ Difficulty: " } else { "  Difficulty: " },
        Style::default().fg(if focused { palette.focus } else { palette.muted }),
    )];
    for level in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let style = if level == current {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(palette.text)
        };
        spans.push(Span::styled(format!(" {} ", level.label()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_create(frame: &mut Frame, area: Rect, state: &CustomContentState, page: &PageContext) {
    let palette = page.palette;
    let block = card_block("Create New Lesson", false, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let focus = state.focus.current();
    let fields = [
        InputFieldConfig::new("Lesson Title", &state.title)
            .placeholder("Give your lesson a name")
            .focused(focus == Some(CreateSlot::Title)),
        InputFieldConfig::new("Lesson Content", &state.content)
            .placeholder("Type the text you want to practice reading")
            .rows(4)
            .focused(focus == Some(CreateSlot::Content)),
    ];
    let rest = render_fields(frame, inner, &fields, page);

    let buttons = [ButtonItem::new("Save Lesson"), ButtonItem::new("Cancel")];
    let focused = match focus {
        Some(CreateSlot::Save) => Some(0),
        Some(CreateSlot::Cancel) => Some(1),
        _ => None,
    };
    let lines = vec![
        difficulty_line(state.difficulty, focus == Some(CreateSlot::Difficulty), page),
        Line::default(),
        render_button_row(&buttons, focused, &page.layout, palette),
    ];
    frame.render_widget(Paragraph::new(lines), rest);
}

fn render_practice(frame: &mut Frame, area: Rect, state: &CustomContentState, page: &PageContext) {
    let palette = page.palette;
    let Some(lesson) = state.practice_lesson() else {
        frame.render_widget(
            Paragraph::new(muted("This lesson is gone.", palette))
                .block(card_block("Practice", false, palette)),
            area,
        );
        return;
    };

    let mut lines = vec![
        muted(&format!("Difficulty: {}", lesson.difficulty.label()), palette),
        Line::default(),
        Line::from(Span::styled(lesson.content.clone(), Style::default().fg(palette.text))),
        Line::default(),
    ];
    if state.practice_running {
        lines.extend(render_status_indicator(
            &StatusIndicatorType::recording("Practicing... read the text out loud!"),
            page.tick,
            palette,
        ));
    } else {
        lines.push(render_button_row(
            &[ButtonItem::new("Start Practice")],
            Some(0),
            &page.layout,
            palette,
        ));
    }
    lines.push(Line::default());
    lines.push(muted("Esc: back to your lessons", palette));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(card_block(lesson.title.clone(), false, palette)),
        area,
    );
}
