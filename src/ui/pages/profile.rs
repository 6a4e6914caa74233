//! Profile details and app settings.

use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

use super::{render_fields, PageContext};
use crate::state::profile::ProfileSlot;
use crate::state::ProfileState;
use crate::ui::components::{render_button_row, ButtonItem, InputFieldConfig};
use crate::ui::helpers::{card_block, checkbox, heading};

pub fn render(frame: &mut Frame, area: Rect, state: &ProfileState, page: &PageContext) {
    let palette = page.palette;
    let block = card_block("My Profile", false, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let focus = state.focus.current();
    let fields = [
        InputFieldConfig::new("Name", &state.name).focused(focus == Some(ProfileSlot::Name)),
        InputFieldConfig::new("Email", &state.email).focused(focus == Some(ProfileSlot::Email)),
    ];
    let rest = render_fields(frame, inner, &fields, page);

    let settings = &state.settings;
    let toggles = [
        (ProfileSlot::Sound, "Sound effects", settings.sound),
        (ProfileSlot::Animations, "Animations", settings.animations),
        (ProfileSlot::DarkMode, "Dark mode", settings.dark_mode),
        (ProfileSlot::Notifications, "Notifications", settings.notifications),
    ];
    let mut lines = vec![Line::default(), heading("Settings", palette)];
    for (slot, label, on) in toggles {
        lines.push(checkbox(label, on, focus == Some(slot), palette));
    }
    lines.push(Line::default());

    let buttons = [ButtonItem::new("Save Settings"), ButtonItem::new("Back")];
    let focused = match focus {
        Some(ProfileSlot::Save) => Some(0),
        Some(ProfileSlot::Back) => Some(1),
        _ => None,
    };
    lines.push(render_button_row(&buttons, focused, &page.layout, palette));
    frame.render_widget(Paragraph::new(lines), rest);
}
