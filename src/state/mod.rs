//! Per-screen state machines.
//!
//! Every view has one state type here implementing [`Module`]. The root
//! controller owns exactly one of them at a time, wrapped in [`ModuleState`],
//! and rebuilds it from scratch whenever the view changes:
//! - Commands and timer callbacks go in through [`Module`]
//! - Anything outside the screen (navigation, dialogs, timers) comes back out
//!   as [`Effect`]s

pub mod about;
pub mod academic_samples;
pub mod application;
pub mod chat;
pub mod contact;
pub mod custom_content;
pub mod dashboard;
pub mod effect;
pub mod famous_speeches;
pub mod forgot_password;
pub mod form;
pub mod home;
pub mod ielts;
pub mod login;
pub mod my_lessons;
pub mod profile;
pub mod signup;

pub use effect::{ConfirmAction, Effect, Effects, Playback, TimerEvent};

pub use about::AboutState;
pub use academic_samples::AcademicSamplesState;
pub use application::ApplicationState;
pub use chat::ChatState;
pub use contact::ContactState;
pub use custom_content::CustomContentState;
pub use dashboard::DashboardState;
pub use famous_speeches::FamousSpeechesState;
pub use forgot_password::ForgotPasswordState;
pub use home::HomeState;
pub use ielts::IeltsState;
pub use login::LoginState;
pub use my_lessons::MyLessonsState;
pub use profile::ProfileState;
pub use signup::SignupState;

use crate::domain::View;
use crate::input::Command;
use crate::traits::PronunciationScorer;

/// A screen's local behaviour.
pub trait Module {
    /// The view this state belongs to.
    fn view(&self) -> View;

    /// Handle a resolved key command.
    fn handle(&mut self, cmd: &Command, scorer: &mut dyn PronunciationScorer) -> Effects;

    /// Handle a timer this screen scheduled.
    fn on_timer(&mut self, _event: TimerEvent, _scorer: &mut dyn PronunciationScorer) -> Effects {
        Vec::new()
    }

    /// Handle a confirm dialog answered with yes.
    fn on_confirm(&mut self, _action: ConfirmAction) -> Effects {
        Vec::new()
    }

    /// Whether a text field has focus, so printable keys are typed.
    fn is_editing(&self) -> bool {
        false
    }
}

/// The mounted screen.
#[derive(Debug, Clone)]
pub enum ModuleState {
    Home(HomeState),
    About(AboutState),
    Contact(ContactState),
    Login(LoginState),
    Signup(SignupState),
    ForgotPassword(ForgotPasswordState),
    Dashboard(DashboardState),
    Application(ApplicationState),
    FamousSpeeches(FamousSpeechesState),
    AcademicSamples(AcademicSamplesState),
    MyLessons(MyLessonsState),
    CustomContent(CustomContentState),
    Chat(ChatState),
    Ielts(IeltsState),
    Profile(ProfileState),
}

impl Default for ModuleState {
    fn default() -> Self {
        Self::mount(View::default())
    }
}

impl ModuleState {
    /// Fresh state for `view`.
    pub fn mount(view: View) -> Self {
        match view {
            View::Home => Self::Home(HomeState::default()),
            View::About => Self::About(AboutState::default()),
            View::Contact => Self::Contact(ContactState::default()),
            View::Login => Self::Login(LoginState::default()),
            View::Signup => Self::Signup(SignupState::default()),
            View::ForgotPassword => Self::ForgotPassword(ForgotPasswordState::default()),
            View::Dashboard => Self::Dashboard(DashboardState::default()),
            View::Application => Self::Application(ApplicationState::default()),
            View::FamousSpeeches => Self::FamousSpeeches(FamousSpeechesState::default()),
            View::AcademicSamples => Self::AcademicSamples(AcademicSamplesState::default()),
            View::MyLessons => Self::MyLessons(MyLessonsState::default()),
            View::CustomContent => Self::CustomContent(CustomContentState::default()),
            View::Chat => Self::Chat(ChatState::default()),
            View::Ielts => Self::Ielts(IeltsState::default()),
            View::Profile => Self::Profile(ProfileState::default()),
        }
    }

    pub fn as_module(&self) -> &dyn Module {
        match self {
            Self::Home(s) => s,
            Self::About(s) => s,
            Self::Contact(s) => s,
            Self::Login(s) => s,
            Self::Signup(s) => s,
            Self::ForgotPassword(s) => s,
            Self::Dashboard(s) => s,
            Self::Application(s) => s,
            Self::FamousSpeeches(s) => s,
            Self::AcademicSamples(s) => s,
            Self::MyLessons(s) => s,
            Self::CustomContent(s) => s,
            Self::Chat(s) => s,
            Self::Ielts(s) => s,
            Self::Profile(s) => s,
        }
    }

    pub fn as_module_mut(&mut self) -> &mut dyn Module {
        match self {
            Self::Home(s) => s,
            Self::About(s) => s,
            Self::Contact(s) => s,
            Self::Login(s) => s,
            Self::Signup(s) => s,
            Self::ForgotPassword(s) => s,
            Self::Dashboard(s) => s,
            Self::Application(s) => s,
            Self::FamousSpeeches(s) => s,
            Self::AcademicSamples(s) => s,
            Self::MyLessons(s) => s,
            Self::CustomContent(s) => s,
            Self::Chat(s) => s,
            Self::Ielts(s) => s,
            Self::Profile(s) => s,
        }
    }

    pub fn view(&self) -> View {
        self.as_module().view()
    }

    pub fn handle(&mut self, cmd: &Command, scorer: &mut dyn PronunciationScorer) -> Effects {
        self.as_module_mut().handle(cmd, scorer)
    }

    pub fn on_timer(&mut self, event: TimerEvent, scorer: &mut dyn PronunciationScorer) -> Effects {
        self.as_module_mut().on_timer(event, scorer)
    }

    pub fn on_confirm(&mut self, action: ConfirmAction) -> Effects {
        self.as_module_mut().on_confirm(action)
    }

    pub fn is_editing(&self) -> bool {
        self.as_module().is_editing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_matches_view() {
        for view in View::ALL {
            assert_eq!(ModuleState::mount(view).view(), view);
        }
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(ModuleState::default().view(), View::Home);
    }
}
