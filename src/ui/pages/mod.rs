//! One renderer per view.
//!
//! Every page draws from its screen state only; the root renderer picks
//! the page for the mounted [`ModuleState`].

mod academic_samples;
mod chat;
mod custom_content;
mod famous_speeches;
mod ielts;
mod info;
mod learning;
mod my_lessons;
mod onboarding;
mod profile;

use ratatui::{layout::Rect, Frame};

use crate::state::ModuleState;
use crate::ui::components::{render_input_field, InputFieldConfig};
use crate::ui::helpers::split_mello_column;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;
use crate::widgets::{Mello, MelloWidget};

/// Per-frame drawing context handed to every page.
#[derive(Debug, Clone, Copy)]
pub struct PageContext {
    pub palette: Palette,
    /// UI tick, for blinking and spinners
    pub tick: u64,
    pub layout: LayoutContext,
}

pub fn render_page(frame: &mut Frame, area: Rect, module: &ModuleState, page: &PageContext) {
    match module {
        ModuleState::Home(state) => info::render_home(frame, area, state, page),
        ModuleState::About(state) => info::render_about(frame, area, state, page),
        ModuleState::Contact(state) => info::render_contact(frame, area, state, page),
        ModuleState::Login(state) => onboarding::render_login(frame, area, state, page),
        ModuleState::Signup(state) => onboarding::render_signup(frame, area, state, page),
        ModuleState::ForgotPassword(state) => {
            onboarding::render_forgot_password(frame, area, state, page)
        }
        ModuleState::Dashboard(state) => learning::render_dashboard(frame, area, state, page),
        ModuleState::Application(state) => learning::render_application(frame, area, state, page),
        ModuleState::FamousSpeeches(state) => famous_speeches::render(frame, area, state, page),
        ModuleState::MyLessons(state) => my_lessons::render(frame, area, state, page),
        ModuleState::CustomContent(state) => custom_content::render(frame, area, state, page),
        ModuleState::AcademicSamples(state) => academic_samples::render(frame, area, state, page),
        ModuleState::Chat(state) => chat::render(frame, area, state, page),
        ModuleState::Ielts(state) => ielts::render(frame, area, state, page),
        ModuleState::Profile(state) => profile::render(frame, area, state, page),
    }
}

/// Stack input fields from the top of `area`; returns what is left below them.
fn render_fields(
    frame: &mut Frame,
    area: Rect,
    fields: &[InputFieldConfig<'_>],
    page: &PageContext,
) -> Rect {
    let mut rest = area;
    for field in fields {
        let used = render_input_field(frame, rest, field, page.palette).min(rest.height);
        rest = Rect {
            y: rest.y + used,
            height: rest.height - used,
            ..rest
        };
    }
    rest
}

/// Draw Mello in a side column when there is room; returns the content area.
fn with_mello(frame: &mut Frame, area: Rect, mello: &Mello, page: &PageContext) -> Rect {
    let (content, column) = split_mello_column(area, &page.layout);
    if let Some(column) = column {
        frame.render_widget(MelloWidget::new(mello, page.palette, page.tick), column);
    }
    content
}
