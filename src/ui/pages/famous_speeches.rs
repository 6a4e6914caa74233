//! Famous speeches: list, read-aloud detail and the fill-in quiz.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::PageContext;
use crate::domain::catalog::SPEECHES;
use crate::state::famous_speeches::{DetailButton, SpeechView, DETAIL_BUTTONS};
use crate::state::FamousSpeechesState;
use crate::ui::components::{
    render_button_row, render_status_indicator, ButtonItem, StatusIndicatorType,
};
use crate::ui::helpers::{card_block, heading, list_row, muted};

pub fn render(frame: &mut Frame, area: Rect, state: &FamousSpeechesState, page: &PageContext) {
    match state.sub_view {
        SpeechView::Selection => render_selection(frame, area, state, page),
        SpeechView::Detail => render_detail(frame, area, state, page),
        SpeechView::Quiz => render_quiz(frame, area, state, page),
    }
}

fn render_selection(frame: &mut Frame, area: Rect, state: &FamousSpeechesState, page: &PageContext) {
    let palette = page.palette;
    let mut lines = vec![
        heading("Famous Speeches", palette),
        muted("Learn from the greatest speakers in history", palette),
        Line::default(),
    ];
    for (i, speech) in SPEECHES.iter().enumerate() {
        lines.push(list_row(
            speech.title,
            speech.speaker,
            state.cursor.selected() == i,
            palette,
        ));
        lines.push(muted(&format!("    {}", speech.description), palette));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(card_block("Choose a Speech", false, palette)),
        area,
    );
}

fn render_detail(frame: &mut Frame, area: Rect, state: &FamousSpeechesState, page: &PageContext) {
    let palette = page.palette;
    let speech = state.speech();
    let block = card_block(speech.title, false, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(5)])
        .split(inner);

    let text = vec![
        Line::from(Span::styled(
            format!("by {}", speech.speaker),
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(Span::styled(
            speech.kid_friendly_text.to_string(),
            Style::default().fg(palette.text),
        )),
    ];
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), chunks[0]);

    let listen = if state.playback.is_playing() {
        "Stop"
    } else {
        "Listen"
    };
    let read = if state.reading.is_recording() {
        "Stop Reading"
    } else if state.score().is_some() {
        "Try Again"
    } else {
        "Read Aloud"
    };
    let items: Vec<ButtonItem> = DETAIL_BUTTONS
        .iter()
        .map(|button| match button {
            DetailButton::Listen => ButtonItem::new(listen),
            DetailButton::Read => ButtonItem::new(read),
            DetailButton::Quiz => ButtonItem::new("Take Quiz"),
        })
        .collect();

    let mut lines = vec![render_button_row(
        &items,
        Some(state.buttons.index()),
        &page.layout,
        palette,
    )];
    let status = if state.playback.is_playing() {
        Some(StatusIndicatorType::info("🔊 Playing the speech..."))
    } else if state.reading.is_recording() {
        Some(StatusIndicatorType::recording("Reading aloud... press r to stop"))
    } else {
        None
    };
    if let Some(status) = status {
        lines.extend(render_status_indicator(&status, page.tick, palette));
    }
    if let (Some(score), Some(feedback)) = (state.score(), state.feedback()) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("Score: {score}%  "),
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(feedback.to_string(), Style::default().fg(palette.text)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[1]);
}

fn render_quiz(frame: &mut Frame, area: Rect, state: &FamousSpeechesState, page: &PageContext) {
    let palette = page.palette;
    let speech = state.speech();
    let quiz = &state.quiz;

    // Sentence with the blanks inline
    let mut sentence: Vec<Span> = Vec::new();
    for (i, part) in speech.quiz.parts.iter().enumerate() {
        sentence.push(Span::styled(part.to_string(), Style::default().fg(palette.text)));
        if i < quiz.placed.len() {
            let selected = quiz.blank.is_at(i);
            let word = quiz.placed[i].unwrap_or("_____");
            let mut style = Style::default().fg(palette.info).add_modifier(Modifier::BOLD);
            if selected {
                style = style.fg(palette.focus).add_modifier(Modifier::UNDERLINED);
            }
            sentence.push(Span::styled(format!("[{word}]"), style));
        }
    }

    let mut bank: Vec<Span> = vec![Span::styled("Words: ", Style::default().fg(palette.muted))];
    for (i, word) in speech.quiz_words.iter().enumerate() {
        let style = if quiz.bank.selected() == i {
            Style::default()
                .fg(palette.focus)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(palette.text)
        };
        bank.push(Span::styled(format!(" {word} "), style));
        bank.push(Span::raw(" "));
    }

    let mut lines = vec![
        heading("Fill in the blanks", palette),
        Line::default(),
        Line::from(sentence),
        Line::default(),
        Line::from(bank),
        Line::default(),
        muted("Tab picks a blank, arrows pick a word, Enter places it, R clears", palette),
    ];
    if quiz.is_complete(speech) {
        lines.push(Line::default());
        lines.extend(render_status_indicator(
            &StatusIndicatorType::success("🎉 Perfect! You completed the quiz!"),
            page.tick,
            palette,
        ));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(card_block(format!("Quiz: {}", speech.title), false, palette)),
        area,
    );
}
