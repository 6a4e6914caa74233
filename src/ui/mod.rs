//! UI rendering for Mello
//!
//! Every frame has the same chrome:
//! - Header with the app name, the current view title and the theme switch
//! - The mounted page in the middle
//! - Footer with keybinding hints for the current context
//! - The front dialog, if any, drawn over everything
//!
//! ## Layout
//!
//! Pages receive a [`LayoutContext`] through their [`PageContext`] and use it
//! to decide whether Mello gets a side column and which button labels fit.

pub mod components;
mod helpers;
pub mod layout;
mod pages;
pub mod theme;

pub use layout::LayoutContext;
pub use pages::PageContext;

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Dialog};
use crate::widgets::ThemeToggle;
use components::Popup;
use theme::Palette;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen for `app`.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = app.theme.palette();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0], app, palette);

    let page = PageContext {
        palette,
        tick: app.tick_count,
        layout: LayoutContext::from_rect(chunks[1]),
    };
    pages::render_page(frame, chunks[1], &app.module, &page);

    render_footer(frame, chunks[2], app, palette);

    if let Some(dialog) = app.dialog() {
        render_dialog(frame, area, dialog, palette);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: Palette) {
    let toggle = ThemeToggle::new(app.theme);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(toggle.width() + 1)])
        .split(area);

    let view = app.current_view();
    let mut spans = vec![
        Span::styled(
            " 🎤 Mello",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" › ", Style::default().fg(palette.muted)),
        Span::styled(view.title(), Style::default().fg(palette.text)),
    ];
    if view.requires_session() {
        spans.push(Span::styled("  ● signed in", Style::default().fg(palette.success)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);
    frame.render_widget(toggle, chunks[1]);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, palette: Palette) {
    let hints = if app.dialog().is_some() {
        Vec::new()
    } else {
        app.registry
            .config()
            .hints_for(app.current_view(), app.module.is_editing())
    };
    let mut spans = vec![Span::raw(" ")];
    for (key, desc) in hints {
        spans.push(Span::styled(
            key,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {desc}  "), Style::default().fg(palette.muted)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_dialog(frame: &mut Frame, area: Rect, dialog: &Dialog, palette: Palette) {
    let accent = match dialog {
        Dialog::Alert { .. } => palette.warning,
        Dialog::Confirm { .. } => palette.accent,
    };
    let sizing = Popup::new(dialog.title(), 0);
    let text_width = sizing.text_width_for(area.width) as usize;
    let message_rows = helpers::estimate_wrapped_line_count(
        &[Line::from(dialog.message())],
        text_width,
    ) as u16;

    let inner = Popup::new(dialog.title(), message_rows + 2)
        .accent(accent)
        .hint(dialog.hint())
        .render(frame, area, palette);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            dialog.message().to_string(),
            Style::default().fg(palette.text),
        )))
        .wrap(Wrap { trim: true })
        .centered(),
        inner.inner(Margin::new(1, 1)),
    );
}
