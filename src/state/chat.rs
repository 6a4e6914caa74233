//! Chat with the AI speaking coach.

use std::time::Duration;

use crate::domain::catalog::{CHAT_GREETING, QUICK_QUESTIONS};
use crate::domain::{reply_for, ChatMessage, NavAction, Sender, View};
use crate::input::Command;
use crate::traits::PronunciationScorer;
use crate::widgets::InputBox;

use super::{Effect, Effects, Module, TimerEvent};

pub const REPLY_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatFocus {
    Input,
    /// One of the quick-question chips
    Quick(usize),
}

#[derive(Debug, Clone)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: InputBox,
    pub focus: ChatFocus,
    /// Replies scheduled but not yet shown
    pub pending: usize,
    next_id: u64,
    /// Transcript lines scrolled up from the bottom
    pub scroll: u16,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::new(1, CHAT_GREETING, Sender::Ai)],
            input: InputBox::new(),
            focus: ChatFocus::Input,
            pending: 0,
            next_id: 2,
            scroll: 0,
        }
    }
}

impl ChatState {
    pub fn is_typing(&self) -> bool {
        self.pending > 0
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn send(&mut self) -> Effects {
        if self.input.is_blank() {
            return Vec::new();
        }
        let text = self.input.text().to_string();
        let id = self.take_id();
        tracing::debug!(id, "chat message sent");
        self.messages.push(ChatMessage::new(id, text, Sender::User));
        self.input.clear();
        self.pending += 1;
        self.scroll = 0;
        vec![Effect::schedule(
            REPLY_DELAY,
            TimerEvent::ChatReply { message_id: id },
        )]
    }

    fn reply(&mut self, message_id: u64) {
        let Some(question) = self
            .messages
            .iter()
            .find(|m| m.id == message_id && m.sender == Sender::User)
        else {
            return;
        };
        let answer = reply_for(&question.text);
        let id = self.take_id();
        self.messages.push(ChatMessage::new(id, answer, Sender::Ai));
        self.pending = self.pending.saturating_sub(1);
        self.scroll = 0;
    }

    fn move_focus(&mut self, forward: bool) {
        let slots = QUICK_QUESTIONS.len() + 1;
        let index = match self.focus {
            ChatFocus::Input => 0,
            ChatFocus::Quick(i) => i + 1,
        };
        let next = if forward {
            (index + 1) % slots
        } else {
            (index + slots - 1) % slots
        };
        self.focus = match next {
            0 => ChatFocus::Input,
            i => ChatFocus::Quick(i - 1),
        };
    }
}

impl Module for ChatState {
    fn view(&self) -> View {
        View::Chat
    }

    fn handle(&mut self, cmd: &Command, _scorer: &mut dyn PronunciationScorer) -> Effects {
        match cmd {
            Command::Back => return vec![Effect::navigate(NavAction::Back)],
            Command::FocusNext => self.move_focus(true),
            Command::FocusPrev => self.move_focus(false),
            Command::MoveUp => self.scroll = self.scroll.saturating_add(1),
            Command::MoveDown => self.scroll = self.scroll.saturating_sub(1),
            Command::Activate => match self.focus {
                ChatFocus::Input => return self.send(),
                ChatFocus::Quick(i) => {
                    if let Some(question) = QUICK_QUESTIONS.get(i) {
                        self.input.set_content(*question);
                        self.focus = ChatFocus::Input;
                    }
                }
            },
            cmd if cmd.is_editing() && self.focus == ChatFocus::Input => {
                self.input.apply(cmd);
            }
            _ => {}
        }
        Vec::new()
    }

    fn on_timer(&mut self, event: TimerEvent, _scorer: &mut dyn PronunciationScorer) -> Effects {
        if let TimerEvent::ChatReply { message_id } = event {
            self.reply(message_id);
        }
        Vec::new()
    }

    fn is_editing(&self) -> bool {
        self.focus == ChatFocus::Input
    }
}
