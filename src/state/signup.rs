//! Account creation form.
//!
//! Checks run in a fixed order (required fields, matching passwords, terms)
//! and the first failure is shown as an alert. A failed submit never changes
//! the fields.

use crate::domain::forms::{check_signup, SignupFields};
use crate::domain::{NavAction, PasswordStrength, View};
use crate::input::Command;
use crate::traits::PronunciationScorer;
use crate::widgets::{InputBox, Mello, MelloMood};

use super::form::FocusSlots;
use super::{Effect, Effects, Module};

pub const SIGNUP_GREETING: &str =
    "Awesome! You're about to join 250K+ learners worldwide! Let's get you started! 🎉";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupSlot {
    Name,
    Email,
    Password,
    Confirm,
    ShowPassword,
    ShowConfirm,
    Terms,
    Create,
    Back,
}

const ORDER: &[SignupSlot] = &[
    SignupSlot::Name,
    SignupSlot::Email,
    SignupSlot::Password,
    SignupSlot::Confirm,
    SignupSlot::ShowPassword,
    SignupSlot::ShowConfirm,
    SignupSlot::Terms,
    SignupSlot::Create,
    SignupSlot::Back,
];

#[derive(Debug, Clone)]
pub struct SignupState {
    pub name: InputBox,
    pub email: InputBox,
    pub password: InputBox,
    pub confirm: InputBox,
    pub show_password: bool,
    pub show_confirm: bool,
    pub accepted_terms: bool,
    pub focus: FocusSlots<SignupSlot>,
    pub mello: Mello,
}

impl Default for SignupState {
    fn default() -> Self {
        Self {
            name: InputBox::new(),
            email: InputBox::new(),
            password: InputBox::new(),
            confirm: InputBox::new(),
            show_password: false,
            show_confirm: false,
            accepted_terms: false,
            focus: FocusSlots::new(ORDER),
            mello: Mello::new(MelloMood::Celebrating, SIGNUP_GREETING),
        }
    }
}

impl SignupState {
    pub fn strength(&self) -> Option<PasswordStrength> {
        PasswordStrength::measure(self.password.text())
    }

    /// `None` until something is typed in the confirmation field.
    pub fn passwords_match(&self) -> Option<bool> {
        if self.confirm.is_empty() {
            None
        } else {
            Some(self.password.text() == self.confirm.text())
        }
    }

    fn focused_field(&mut self) -> Option<&mut InputBox> {
        match self.focus.current()? {
            SignupSlot::Name => Some(&mut self.name),
            SignupSlot::Email => Some(&mut self.email),
            SignupSlot::Password => Some(&mut self.password),
            SignupSlot::Confirm => Some(&mut self.confirm),
            _ => None,
        }
    }

    fn submit(&self) -> Effects {
        let fields = SignupFields {
            name: self.name.text(),
            email: self.email.text(),
            password: self.password.text(),
            confirm: self.confirm.text(),
            accepted_terms: self.accepted_terms,
        };
        match check_signup(&fields) {
            Ok(()) => {
                tracing::info!(name = fields.name, "account created");
                vec![Effect::navigate(NavAction::SignUpSucceeded)]
            }
            Err(err) => {
                tracing::debug!(%err, "sign-up rejected");
                vec![Effect::alert(err.to_string())]
            }
        }
    }
}

impl Module for SignupState {
    fn view(&self) -> View {
        View::Signup
    }

    fn handle(&mut self, cmd: &Command, _scorer: &mut dyn PronunciationScorer) -> Effects {
        if self.focus.handle_movement(cmd) {
            return Vec::new();
        }
        if cmd.is_editing() {
            if let Some(field) = self.focused_field() {
                field.apply(cmd);
            }
            return Vec::new();
        }
        match cmd {
            Command::Activate => match self.focus.current() {
                Some(SignupSlot::Name | SignupSlot::Email | SignupSlot::Password) => {
                    self.focus.next()
                }
                Some(SignupSlot::Confirm | SignupSlot::Create) => return self.submit(),
                Some(SignupSlot::ShowPassword) => self.show_password = !self.show_password,
                Some(SignupSlot::ShowConfirm) => self.show_confirm = !self.show_confirm,
                Some(SignupSlot::Terms) => self.accepted_terms = !self.accepted_terms,
                Some(SignupSlot::Back) => return vec![Effect::navigate(NavAction::Back)],
                None => {}
            },
            Command::Back => return vec![Effect::navigate(NavAction::Back)],
            Command::DismissMello => self.mello.dismiss(),
            _ => {}
        }
        Vec::new()
    }

    fn is_editing(&self) -> bool {
        matches!(
            self.focus.current(),
            Some(SignupSlot::Name | SignupSlot::Email | SignupSlot::Password | SignupSlot::Confirm)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::ScriptedScorer;

    fn filled(password: &str, confirm: &str, terms: bool) -> SignupState {
        let mut state = SignupState::default();
        state.name.set_content("Ada");
        state.email.set_content("ada@example.com");
        state.password.set_content(password);
        state.confirm.set_content(confirm);
        state.accepted_terms = terms;
        state.focus.focus(SignupSlot::Create);
        state
    }

    #[test]
    fn test_mismatch_rejected_and_fields_kept() {
        let mut state = filled("abc123", "abc124", true);
        let effects = state.handle(&Command::Activate, &mut ScriptedScorer::new());
        assert_eq!(effects, vec![Effect::alert("Passwords do not match!")]);
        assert_eq!(state.password.text(), "abc123");
        assert_eq!(state.confirm.text(), "abc124");
        assert_eq!(state.name.text(), "Ada");
    }

    #[test]
    fn test_terms_required() {
        let mut state = filled("abc123", "abc123", false);
        let effects = state.handle(&Command::Activate, &mut ScriptedScorer::new());
        assert_eq!(
            effects,
            vec![Effect::alert("Please accept the terms and conditions")]
        );
    }

    #[test]
    fn test_missing_field_checked_first() {
        let mut state = filled("abc123", "zzz", false);
        state.name.clear();
        let effects = state.handle(&Command::Activate, &mut ScriptedScorer::new());
        assert_eq!(effects, vec![Effect::alert("Please fill in all fields")]);
    }

    #[test]
    fn test_success() {
        let mut state = filled("abc123", "abc123", true);
        let effects = state.handle(&Command::Activate, &mut ScriptedScorer::new());
        assert_eq!(effects, vec![Effect::navigate(NavAction::SignUpSucceeded)]);
    }

    #[test]
    fn test_terms_checkbox_toggles() {
        let mut state = SignupState::default();
        state.focus.focus(SignupSlot::Terms);
        state.handle(&Command::Activate, &mut ScriptedScorer::new());
        assert!(state.accepted_terms);
        state.handle(&Command::Activate, &mut ScriptedScorer::new());
        assert!(!state.accepted_terms);
    }

    #[test]
    fn test_strength_and_match_indicators() {
        let mut state = SignupState::default();
        assert_eq!(state.strength(), None);
        assert_eq!(state.passwords_match(), None);

        state.password.set_content("longpassword");
        state.confirm.set_content("longpassword");
        assert_eq!(state.strength(), Some(PasswordStrength::Strong));
        assert_eq!(state.passwords_match(), Some(true));
    }
}
