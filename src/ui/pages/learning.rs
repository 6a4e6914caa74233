//! Signed-in hubs: the dashboard and the learning-module picker.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{with_mello, PageContext};
use crate::domain::catalog::{APPLICATION_MODULES, DASHBOARD_MODULES, DASHBOARD_STATS};
use crate::state::application::{ApplicationExtra, EXTRAS};
use crate::state::{ApplicationState, DashboardState};
use crate::ui::helpers::{card_block, heading, list_row, muted};

pub fn render_dashboard(frame: &mut Frame, area: Rect, state: &DashboardState, page: &PageContext) {
    let content = with_mello(frame, area, &state.mello, page);
    let palette = page.palette;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(content);

    let stats: Vec<Span> = DASHBOARD_STATS
        .iter()
        .flat_map(|stat| {
            [
                Span::styled(
                    stat.value.to_string(),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {}   ", stat.label), Style::default().fg(palette.muted)),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(stats))
            .wrap(Wrap { trim: true })
            .block(card_block("Your Progress", false, palette)),
        chunks[0],
    );

    let selected = state.cursor.selected();
    let mut lines = vec![heading("Choose what to practice", palette), Line::default()];
    for (i, card) in DASHBOARD_MODULES.iter().enumerate() {
        lines.push(list_row(card.title, card.description, selected == i, palette));
    }
    lines.push(Line::default());
    lines.push(list_row("Logout", "", state.is_logout_selected(), palette));
    frame.render_widget(
        Paragraph::new(lines).block(card_block("Learning Portal", false, palette)),
        chunks[1],
    );
}

pub fn render_application(
    frame: &mut Frame,
    area: Rect,
    state: &ApplicationState,
    page: &PageContext,
) {
    let palette = page.palette;
    let selected = state.cursor.selected();

    let mut lines = vec![
        heading("Learning Modules", palette),
        muted("Pick a module to start learning", palette),
        Line::default(),
    ];
    for (i, card) in APPLICATION_MODULES.iter().enumerate() {
        lines.push(list_row(card.title, card.description, selected == i, palette));
    }
    lines.push(Line::default());
    for (i, extra) in EXTRAS.iter().enumerate() {
        let label = match extra {
            ApplicationExtra::Back => "Back to Dashboard",
            ApplicationExtra::Logout => "Logout",
        };
        lines.push(list_row(label, "", selected == APPLICATION_MODULES.len() + i, palette));
    }

    frame.render_widget(
        Paragraph::new(lines).block(card_block("Application", false, palette)),
        area,
    );
}
