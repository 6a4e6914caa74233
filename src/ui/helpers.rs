//! Helper functions for UI rendering
//!
//! Card blocks, focus styles and small text utilities shared by the pages.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Rounded card, accent-bordered when focused.
pub fn card_block(title: impl Into<String>, focused: bool, palette: Palette) -> Block<'static> {
    let border = if focused { palette.focus } else { palette.border };
    let title_style = if focused {
        Style::default()
            .fg(palette.focus)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
    };
    Block::default()
        .title(Span::styled(format!(" {} ", title.into()), title_style))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(palette.surface).fg(palette.text))
}

/// One selectable row: marker, title and a dimmed detail.
pub fn list_row(title: &str, detail: &str, selected: bool, palette: Palette) -> Line<'static> {
    let (marker, title_style) = if selected {
        (
            Span::styled("▶ ", Style::default().fg(palette.accent)),
            Style::default()
                .fg(palette.focus)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Span::raw("  "), Style::default().fg(palette.text))
    };
    let mut spans = vec![marker, Span::styled(title.to_string(), title_style)];
    if !detail.is_empty() {
        spans.push(Span::styled(
            format!("  {detail}"),
            Style::default().fg(palette.muted),
        ));
    }
    Line::from(spans)
}

/// `[x] label` style toggle.
pub fn checkbox(label: &str, checked: bool, focused: bool, palette: Palette) -> Line<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if focused {
        Style::default()
            .fg(palette.focus)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };
    let marker = if focused { "▶ " } else { "  " };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(palette.accent)),
        Span::styled(format!("{mark} {label}"), style),
    ])
}

/// Section heading.
pub fn heading(text: &str, palette: Palette) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

pub fn muted(text: &str, palette: Palette) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(palette.muted)))
}

/// Truncate to `max_width` display cells, adding an ellipsis when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Rows `lines` take once wrapped to `viewport_width`; empty lines count as one.
pub fn estimate_wrapped_line_count(lines: &[Line], viewport_width: usize) -> usize {
    if viewport_width == 0 {
        return lines.len();
    }
    lines
        .iter()
        .map(|line| line.width().div_ceil(viewport_width).max(1))
        .sum()
}

/// Split `area` into page content and, when it fits, a Mello column on the right.
pub fn split_mello_column(area: Rect, ctx: &LayoutContext) -> (Rect, Option<Rect>) {
    if !ctx.shows_mello_column() {
        return (area, None);
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(ctx.mello_column_width()),
        ])
        .split(area);
    (chunks[0], Some(chunks[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_rect() {
        assert_eq!(inner_rect(Rect::new(0, 0, 10, 10), 2), Rect::new(2, 2, 6, 6));
        assert_eq!(inner_rect(Rect::new(0, 0, 2, 2), 2).width, 0);
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("hello world", 6), "hello…");
    }

    #[test]
    fn test_mello_column_only_when_wide() {
        let area = Rect::new(0, 0, 100, 30);
        let (content, mello) = split_mello_column(area, &LayoutContext::from_rect(area));
        assert!(mello.is_some());
        assert!(content.width < 100);

        let narrow = Rect::new(0, 0, 60, 30);
        let (content, mello) = split_mello_column(narrow, &LayoutContext::from_rect(narrow));
        assert!(mello.is_none());
        assert_eq!(content, narrow);
    }

    #[test]
    fn test_estimate_wrapped_line_count() {
        let lines = vec![Line::from("a".repeat(25)), Line::default(), Line::from("short")];
        assert_eq!(estimate_wrapped_line_count(&lines, 10), 3 + 1 + 1);
        assert_eq!(estimate_wrapped_line_count(&lines, 0), 3);
    }

    #[test]
    fn test_checkbox_marks() {
        let palette = crate::ui::theme::ThemeMode::Dark.palette();
        let line = checkbox("Sound", true, false, palette);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("[x] Sound"));
    }
}
