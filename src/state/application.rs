//! Learning-module picker: AI chat, academic content and IELTS.

use crate::domain::catalog::APPLICATION_MODULES;
use crate::domain::{ListCursor, NavAction, View};
use crate::input::Command;
use crate::traits::PronunciationScorer;

use super::{Effect, Effects, Module};

/// Trailing entries after the module cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationExtra {
    Back,
    Logout,
}

pub const EXTRAS: [ApplicationExtra; 2] = [ApplicationExtra::Back, ApplicationExtra::Logout];

#[derive(Debug, Clone, Default)]
pub struct ApplicationState {
    pub cursor: ListCursor,
}

impl ApplicationState {
    pub const ENTRIES: usize = APPLICATION_MODULES.len() + EXTRAS.len();

    fn selected_action(&self) -> Option<NavAction> {
        let index = self.cursor.selected();
        if let Some(card) = APPLICATION_MODULES.get(index) {
            return Some(NavAction::Open(card.target));
        }
        EXTRAS
            .get(index - APPLICATION_MODULES.len())
            .map(|extra| match extra {
                ApplicationExtra::Back => NavAction::Back,
                ApplicationExtra::Logout => NavAction::Logout,
            })
    }
}

impl Module for ApplicationState {
    fn view(&self) -> View {
        View::Application
    }

    fn handle(&mut self, cmd: &Command, _scorer: &mut dyn PronunciationScorer) -> Effects {
        match cmd {
            Command::MoveUp | Command::MoveLeft | Command::FocusPrev => self.cursor.up(),
            Command::MoveDown | Command::MoveRight | Command::FocusNext => {
                self.cursor.down(Self::ENTRIES)
            }
            Command::Activate => {
                if let Some(action) = self.selected_action() {
                    return vec![Effect::navigate(action)];
                }
            }
            Command::Logout => return vec![Effect::navigate(NavAction::Logout)],
            Command::Back => return vec![Effect::navigate(NavAction::Back)],
            _ => {}
        }
        Vec::new()
    }
}
