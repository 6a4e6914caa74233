//! Contact form with a thank-you note that clears itself.

use std::time::Duration;

use crate::domain::forms::check_contact;
use crate::domain::{NavAction, View};
use crate::input::Command;
use crate::traits::PronunciationScorer;
use crate::widgets::InputBox;

use super::form::FocusSlots;
use super::{Effect, Effects, Module, TimerEvent};

/// How long the thank-you note stays before the form resets.
pub const RESET_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSlot {
    Name,
    Email,
    Subject,
    Message,
    Send,
    Back,
}

const ORDER: &[ContactSlot] = &[
    ContactSlot::Name,
    ContactSlot::Email,
    ContactSlot::Subject,
    ContactSlot::Message,
    ContactSlot::Send,
    ContactSlot::Back,
];

#[derive(Debug, Clone)]
pub struct ContactState {
    pub name: InputBox,
    pub email: InputBox,
    pub subject: InputBox,
    pub message: InputBox,
    pub focus: FocusSlots<ContactSlot>,
    pub submitted: bool,
}

impl Default for ContactState {
    fn default() -> Self {
        Self {
            name: InputBox::new(),
            email: InputBox::new(),
            subject: InputBox::new(),
            message: InputBox::multiline(),
            focus: FocusSlots::new(ORDER),
            submitted: false,
        }
    }
}

impl ContactState {
    fn focused_field(&mut self) -> Option<&mut InputBox> {
        match self.focus.current()? {
            ContactSlot::Name => Some(&mut self.name),
            ContactSlot::Email => Some(&mut self.email),
            ContactSlot::Subject => Some(&mut self.subject),
            ContactSlot::Message => Some(&mut self.message),
            ContactSlot::Send | ContactSlot::Back => None,
        }
    }

    fn submit(&mut self) -> Effects {
        let fields = [
            self.name.text(),
            self.email.text(),
            self.subject.text(),
            self.message.text(),
        ];
        if let Err(err) = check_contact(fields) {
            return vec![Effect::alert(err.to_string())];
        }
        tracing::info!(subject = self.subject.text(), "contact message sent");
        self.submitted = true;
        vec![Effect::schedule(RESET_DELAY, TimerEvent::ContactReset)]
    }
}

impl Module for ContactState {
    fn view(&self) -> View {
        View::Contact
    }

    fn handle(&mut self, cmd: &Command, _scorer: &mut dyn PronunciationScorer) -> Effects {
        if matches!(cmd, Command::Back) {
            return vec![Effect::navigate(NavAction::Back)];
        }
        if self.submitted {
            return Vec::new();
        }
        if self.focus.handle_movement(cmd) {
            return Vec::new();
        }
        if cmd.is_editing() {
            if let Some(field) = self.focused_field() {
                field.apply(cmd);
            }
            return Vec::new();
        }
        if matches!(cmd, Command::Activate) {
            match self.focus.current() {
                Some(ContactSlot::Send) => return self.submit(),
                Some(ContactSlot::Back) => return vec![Effect::navigate(NavAction::Back)],
                Some(_) => self.focus.next(),
                None => {}
            }
        }
        Vec::new()
    }

    fn on_timer(&mut self, event: TimerEvent, _scorer: &mut dyn PronunciationScorer) -> Effects {
        if event == TimerEvent::ContactReset {
            *self = Self::default();
        }
        Vec::new()
    }

    fn is_editing(&self) -> bool {
        !self.submitted
            && matches!(
                self.focus.current(),
                Some(ContactSlot::Name | ContactSlot::Email | ContactSlot::Subject | ContactSlot::Message)
            )
    }
}
