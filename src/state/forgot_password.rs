//! Password reset request.

use crate::domain::forms::check_reset_email;
use crate::domain::{NavAction, View};
use crate::input::Command;
use crate::traits::PronunciationScorer;
use crate::widgets::InputBox;

use super::form::FocusSlots;
use super::{Effect, Effects, Module};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetSlot {
    Email,
    Send,
    Back,
}

const ORDER: &[ResetSlot] = &[ResetSlot::Email, ResetSlot::Send, ResetSlot::Back];

#[derive(Debug, Clone)]
pub struct ForgotPasswordState {
    pub email: InputBox,
    pub focus: FocusSlots<ResetSlot>,
    /// Address the reset link went to, once sent.
    pub sent_to: Option<String>,
}

impl Default for ForgotPasswordState {
    fn default() -> Self {
        Self {
            email: InputBox::new(),
            focus: FocusSlots::new(ORDER),
            sent_to: None,
        }
    }
}

impl ForgotPasswordState {
    fn submit(&mut self) -> Effects {
        if let Err(err) = check_reset_email(self.email.text()) {
            return vec![Effect::alert(err.to_string())];
        }
        let email = self.email.text().trim().to_string();
        tracing::info!(%email, "password reset requested");
        self.sent_to = Some(email);
        self.focus.focus(ResetSlot::Back);
        Vec::new()
    }
}

impl Module for ForgotPasswordState {
    fn view(&self) -> View {
        View::ForgotPassword
    }

    fn handle(&mut self, cmd: &Command, _scorer: &mut dyn PronunciationScorer) -> Effects {
        if matches!(cmd, Command::Back) {
            return vec![Effect::navigate(NavAction::Back)];
        }
        if self.sent_to.is_some() {
            // Only "Back to sign in" remains
            if matches!(cmd, Command::Activate) {
                return vec![Effect::navigate(NavAction::Back)];
            }
            return Vec::new();
        }
        if self.focus.handle_movement(cmd) {
            return Vec::new();
        }
        if cmd.is_editing() {
            if self.focus.is(ResetSlot::Email) {
                self.email.apply(cmd);
            }
            return Vec::new();
        }
        if matches!(cmd, Command::Activate) {
            match self.focus.current() {
                Some(ResetSlot::Email | ResetSlot::Send) => return self.submit(),
                Some(ResetSlot::Back) => return vec![Effect::navigate(NavAction::Back)],
                None => {}
            }
        }
        Vec::new()
    }

    fn is_editing(&self) -> bool {
        self.sent_to.is_none() && self.focus.is(ResetSlot::Email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::ScriptedScorer;

    #[test]
    fn test_empty_email_alerts() {
        let mut state = ForgotPasswordState::default();
        let effects = state.handle(&Command::Activate, &mut ScriptedScorer::new());
        assert_eq!(effects, vec![Effect::alert("Please enter your email address")]);
        assert!(state.sent_to.is_none());
    }

    #[test]
    fn test_sends_reset_link() {
        let mut scorer = ScriptedScorer::new();
        let mut state = ForgotPasswordState::default();
        for c in "kid@example.com".chars() {
            state.handle(&Command::InsertChar(c), &mut scorer);
        }
        let effects = state.handle(&Command::Activate, &mut scorer);
        assert!(effects.is_empty());
        assert_eq!(state.sent_to.as_deref(), Some("kid@example.com"));
        assert!(!state.is_editing());

        let effects = state.handle(&Command::Activate, &mut scorer);
        assert_eq!(effects, vec![Effect::navigate(NavAction::Back)]);
    }
}
