//! Public pages: landing, about and contact.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{render_fields, with_mello, PageContext};
use crate::domain::catalog::{ABOUT_FEATURES, ABOUT_STATS, HOME_FEATURES, HOME_LINKS, HOME_STATS, Stat};
use crate::state::contact::ContactSlot;
use crate::state::{AboutState, ContactState, HomeState};
use crate::ui::components::{render_button_row, ButtonItem, InputFieldConfig};
use crate::ui::helpers::{card_block, heading, list_row, muted};

fn stats_line(stats: &[Stat], page: &PageContext) -> Line<'static> {
    let mut spans = Vec::new();
    for stat in stats {
        spans.push(Span::styled(
            stat.value.to_string(),
            Style::default()
                .fg(page.palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}   ", stat.label),
            Style::default().fg(page.palette.muted),
        ));
    }
    Line::from(spans)
}

pub fn render_home(frame: &mut Frame, area: Rect, state: &HomeState, page: &PageContext) {
    let content = with_mello(frame, area, &state.mello, page);
    let palette = page.palette;

    let mut lines = vec![
        heading("Transform Your Child's Speaking Skills", palette),
        muted(
            "AI-powered speech coaching that makes learning fun, interactive, and effective",
            palette,
        ),
        Line::default(),
    ];
    for (i, link) in HOME_LINKS.iter().enumerate() {
        lines.push(list_row(link.title, link.description, state.cursor.selected() == i, palette));
    }
    lines.push(Line::default());
    lines.push(heading("Why Parents Choose Mello", palette));
    for feature in HOME_FEATURES {
        lines.push(Line::from(vec![
            Span::styled(format!("• {}", feature.title), Style::default().fg(palette.text)),
            Span::styled(format!(": {}", feature.description), Style::default().fg(palette.muted)),
        ]));
    }
    lines.push(Line::default());
    lines.push(stats_line(HOME_STATS, page));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(card_block("Mello", false, palette)),
        content,
    );
}

pub fn render_about(frame: &mut Frame, area: Rect, state: &AboutState, page: &PageContext) {
    let palette = page.palette;
    let mut lines = vec![
        heading("About Our Platform", palette),
        muted("Helping children become confident speakers, one word at a time.", palette),
        Line::default(),
    ];
    for feature in ABOUT_FEATURES.iter().skip(state.scroll) {
        lines.push(Line::from(Span::styled(
            feature.title.to_string(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )));
        lines.push(muted(feature.description, palette));
    }
    lines.push(Line::default());
    lines.push(stats_line(ABOUT_STATS, page));
    lines.push(Line::default());
    lines.push(render_button_row(&[ButtonItem::new("Back")], Some(0), &page.layout, palette));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(card_block("About Us", false, palette)),
        area,
    );
}

pub fn render_contact(frame: &mut Frame, area: Rect, state: &ContactState, page: &PageContext) {
    let palette = page.palette;
    let block = card_block("Contact Us", false, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.submitted {
        let lines = vec![
            Line::default(),
            heading("Thank You!", palette),
            muted("We've received your message and will get back to you soon.", palette),
        ];
        frame.render_widget(Paragraph::new(lines).centered(), inner);
        return;
    }

    let focus = state.focus.current();
    let fields = [
        InputFieldConfig::new("Name", &state.name)
            .placeholder("Your name")
            .focused(focus == Some(ContactSlot::Name)),
        InputFieldConfig::new("Email", &state.email)
            .placeholder("your@email.com")
            .focused(focus == Some(ContactSlot::Email)),
        InputFieldConfig::new("Subject", &state.subject)
            .placeholder("What's this about?")
            .focused(focus == Some(ContactSlot::Subject)),
        InputFieldConfig::new("Message", &state.message)
            .placeholder("Tell us how we can help")
            .rows(3)
            .focused(focus == Some(ContactSlot::Message)),
    ];
    let rest = render_fields(frame, inner, &fields, page);

    let buttons = [ButtonItem::new("Send Message"), ButtonItem::new("Back")];
    let focused = match focus {
        Some(ContactSlot::Send) => Some(0),
        Some(ContactSlot::Back) => Some(1),
        _ => None,
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(rest);
    frame.render_widget(
        Paragraph::new(render_button_row(&buttons, focused, &page.layout, palette)),
        chunks[0],
    );
}
