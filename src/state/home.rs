//! Landing page: four link cards and a waving Mello.

use crate::domain::catalog::HOME_LINKS;
use crate::domain::{ListCursor, NavAction, View};
use crate::input::Command;
use crate::traits::PronunciationScorer;
use crate::widgets::{Mello, MelloMood};

use super::{Effect, Effects, Module};

pub const HOME_GREETING: &str =
    "Hi! I'm Mello, your AI learning companion! Ready to start your speaking journey? 🌟";

#[derive(Debug, Clone)]
pub struct HomeState {
    pub cursor: ListCursor,
    pub mello: Mello,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            cursor: ListCursor::new(),
            mello: Mello::new(MelloMood::Waving, HOME_GREETING),
        }
    }
}

impl Module for HomeState {
    fn view(&self) -> View {
        View::Home
    }

    fn handle(&mut self, cmd: &Command, _scorer: &mut dyn PronunciationScorer) -> Effects {
        match cmd {
            Command::MoveUp | Command::MoveLeft | Command::FocusPrev => self.cursor.up(),
            Command::MoveDown | Command::MoveRight | Command::FocusNext => {
                self.cursor.down(HOME_LINKS.len())
            }
            Command::Activate => {
                if let Some(card) = HOME_LINKS.get(self.cursor.selected()) {
                    return vec![Effect::navigate(NavAction::Open(card.target))];
                }
            }
            Command::DismissMello => self.mello.dismiss(),
            Command::Back => return vec![Effect::navigate(NavAction::Back)],
            _ => {}
        }
        Vec::new()
    }
}
