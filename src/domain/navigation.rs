//! Navigation state and the view transition table.
//!
//! [`Navigator`] owns the single "current view" tag. Modules never mutate it;
//! they request a [`NavAction`] and the root controller resolves it through
//! [`transition`], which encodes every permitted (view, action) pair. "Back"
//! is not computed from a history stack: each view names its own parent in the
//! table, so two screens at the same visual depth may return to different
//! ancestors (academic samples returns to the module picker, famous speeches
//! to the dashboard).

use super::view::View;

/// A navigation request raised by a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Return to this view's fixed parent
    Back,
    /// Open a specific child view (menu item, module card, link)
    Open(View),
    /// Sign-in form accepted
    LoginSucceeded,
    /// Sign-up form accepted
    SignUpSucceeded,
    /// "Forgot password?" link on the sign-in form
    ForgotPassword,
    /// Sign out from a signed-in screen
    Logout,
}

/// Views the home page links to.
const HOME_LINKS: [View; 4] = [View::About, View::Contact, View::Login, View::Signup];

/// Modules the dashboard opens.
const DASHBOARD_LINKS: [View; 7] = [
    View::MyLessons,
    View::AcademicSamples,
    View::CustomContent,
    View::FamousSpeeches,
    View::Chat,
    View::Profile,
    View::Application,
];

/// Modules the application landing page opens.
const APPLICATION_LINKS: [View; 3] = [View::Chat, View::AcademicSamples, View::Ielts];

/// Resolve a navigation action against the transition table.
///
/// Returns `None` when the table has no entry for the pair.
pub fn transition(from: View, action: NavAction) -> Option<View> {
    use NavAction::*;

    match (from, action) {
        (View::Home, Open(to)) if HOME_LINKS.contains(&to) => Some(to),

        (View::About, Back) | (View::Contact, Back) => Some(View::Home),

        (View::Login, Back) => Some(View::Home),
        (View::Login, LoginSucceeded) => Some(View::Dashboard),
        (View::Login, ForgotPassword) => Some(View::ForgotPassword),
        (View::Login, Open(View::Signup)) => Some(View::Signup),

        (View::Signup, Back) => Some(View::Home),
        (View::Signup, SignUpSucceeded) => Some(View::Dashboard),

        (View::ForgotPassword, Back) => Some(View::Login),

        (View::Dashboard, Logout) => Some(View::Home),
        (View::Dashboard, Open(to)) if DASHBOARD_LINKS.contains(&to) => Some(to),

        (View::Application, Back) => Some(View::Dashboard),
        (View::Application, Logout) => Some(View::Home),
        (View::Application, Open(to)) if APPLICATION_LINKS.contains(&to) => Some(to),

        (View::FamousSpeeches, Back)
        | (View::MyLessons, Back)
        | (View::CustomContent, Back)
        | (View::Profile, Back) => Some(View::Dashboard),

        (View::AcademicSamples, Back) | (View::Chat, Back) | (View::Ielts, Back) => {
            Some(View::Application)
        }

        _ => None,
    }
}

/// Owned navigation state: the current view plus a count of transitions.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: View,
    transitions: u64,
}

impl Navigator {
    /// Create a navigator positioned on the home view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a navigator positioned on `view`.
    pub fn starting_at(view: View) -> Self {
        Self {
            current: view,
            transitions: 0,
        }
    }

    /// The current view.
    pub fn current(&self) -> View {
        self.current
    }

    /// Number of navigations applied since start.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Replace the current view unconditionally.
    ///
    /// Any view may navigate to any other; no reachability check is made.
    pub fn navigate(&mut self, view: View) {
        tracing::info!(from = %self.current, to = %view, "navigate");
        self.current = view;
        self.transitions += 1;
    }

    /// Navigate by string tag; unknown tags land on home.
    ///
    /// Entry point for views named by their kebab-case tag, the form `View`
    /// serializes to. In-app routing goes through [`Navigator::apply`] with
    /// typed actions, so the fallback only matters at that string boundary.
    pub fn navigate_tag(&mut self, tag: &str) {
        self.navigate(View::from_tag(tag));
    }

    /// Resolve `action` through the transition table and apply it.
    ///
    /// Returns the new view, or `None` if the pair has no table entry, in
    /// which case the current view is unchanged.
    pub fn apply(&mut self, action: NavAction) -> Option<View> {
        match transition(self.current, action) {
            Some(to) => {
                self.navigate(to);
                Some(to)
            }
            None => {
                tracing::debug!(view = %self.current, ?action, "no transition for action");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_replaces_view_unconditionally() {
        let mut nav = Navigator::new();
        for view in View::ALL {
            nav.navigate(view);
            assert_eq!(nav.current(), view);
        }
        assert_eq!(nav.transitions(), View::ALL.len() as u64);
    }

    #[test]
    fn test_navigate_tag_unknown_goes_home() {
        let mut nav = Navigator::starting_at(View::Dashboard);
        nav.navigate_tag("nope");
        assert_eq!(nav.current(), View::Home);
    }

    #[test]
    fn test_back_targets_are_per_view() {
        assert_eq!(transition(View::AcademicSamples, NavAction::Back), Some(View::Application));
        assert_eq!(transition(View::Chat, NavAction::Back), Some(View::Application));
        assert_eq!(transition(View::Ielts, NavAction::Back), Some(View::Application));
        assert_eq!(transition(View::FamousSpeeches, NavAction::Back), Some(View::Dashboard));
        assert_eq!(transition(View::MyLessons, NavAction::Back), Some(View::Dashboard));
        assert_eq!(transition(View::ForgotPassword, NavAction::Back), Some(View::Login));
        assert_eq!(transition(View::About, NavAction::Back), Some(View::Home));
    }

    #[test]
    fn test_home_and_dashboard_have_no_back() {
        assert_eq!(transition(View::Home, NavAction::Back), None);
        assert_eq!(transition(View::Dashboard, NavAction::Back), None);
    }

    #[test]
    fn test_open_outside_table_is_rejected() {
        assert_eq!(transition(View::Home, NavAction::Open(View::Chat)), None);
        assert_eq!(transition(View::Application, NavAction::Open(View::Profile)), None);
    }

    #[test]
    fn test_apply_without_entry_keeps_view() {
        let mut nav = Navigator::starting_at(View::Home);
        assert_eq!(nav.apply(NavAction::Logout), None);
        assert_eq!(nav.current(), View::Home);
        assert_eq!(nav.transitions(), 0);
    }

    #[test]
    fn test_auth_round_trip() {
        let mut nav = Navigator::new();
        assert_eq!(nav.apply(NavAction::Open(View::Login)), Some(View::Login));
        assert_eq!(nav.apply(NavAction::LoginSucceeded), Some(View::Dashboard));
        assert_eq!(nav.apply(NavAction::Logout), Some(View::Home));
    }
}
