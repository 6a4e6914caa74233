//! The closed set of top-level screens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which top-level screen is currently rendered.
///
/// Exactly one view is current at any time. The string tag of each variant is
/// the stable identifier used by modules and catalogs (`"famous-speeches"`,
/// `"my-lessons"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    About,
    Contact,
    Login,
    Signup,
    ForgotPassword,
    Dashboard,
    Application,
    FamousSpeeches,
    AcademicSamples,
    MyLessons,
    CustomContent,
    Chat,
    Ielts,
    Profile,
}

impl View {
    /// Every view, in declaration order.
    pub const ALL: [View; 15] = [
        View::Home,
        View::About,
        View::Contact,
        View::Login,
        View::Signup,
        View::ForgotPassword,
        View::Dashboard,
        View::Application,
        View::FamousSpeeches,
        View::AcademicSamples,
        View::MyLessons,
        View::CustomContent,
        View::Chat,
        View::Ielts,
        View::Profile,
    ];

    /// The stable string tag for this view.
    pub fn as_tag(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::About => "about",
            View::Contact => "contact",
            View::Login => "login",
            View::Signup => "signup",
            View::ForgotPassword => "forgot-password",
            View::Dashboard => "dashboard",
            View::Application => "application",
            View::FamousSpeeches => "famous-speeches",
            View::AcademicSamples => "academic-samples",
            View::MyLessons => "my-lessons",
            View::CustomContent => "custom-content",
            View::Chat => "chat",
            View::Ielts => "ielts",
            View::Profile => "profile",
        }
    }

    /// Parse a tag, returning `None` for anything outside the closed set.
    pub fn parse_tag(tag: &str) -> Option<View> {
        View::ALL.iter().copied().find(|v| v.as_tag() == tag)
    }

    /// Parse a tag, falling back to [`View::Home`] when it is not recognised.
    pub fn from_tag(tag: &str) -> View {
        Self::parse_tag(tag).unwrap_or_default()
    }

    /// Header title shown for this view.
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Mello",
            View::About => "About Us",
            View::Contact => "Contact",
            View::Login => "Sign In",
            View::Signup => "Create Account",
            View::ForgotPassword => "Forgot Password",
            View::Dashboard => "Dashboard",
            View::Application => "Learning Modules",
            View::FamousSpeeches => "Famous Speeches",
            View::AcademicSamples => "Academic Samples",
            View::MyLessons => "My Lessons",
            View::CustomContent => "Custom Content",
            View::Chat => "Chat with AI Coach",
            View::Ielts => "IELTS Preparation",
            View::Profile => "Profile",
        }
    }

    /// Views reachable only after signing in.
    pub fn requires_session(&self) -> bool {
        !matches!(
            self,
            View::Home
                | View::About
                | View::Contact
                | View::Login
                | View::Signup
                | View::ForgotPassword
        )
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}
