//! Signed-in dashboard: module cards, stats and a log-out entry.

use crate::domain::catalog::DASHBOARD_MODULES;
use crate::domain::{ListCursor, NavAction, View};
use crate::input::Command;
use crate::traits::PronunciationScorer;
use crate::widgets::{Mello, MelloMood};

use super::{Effect, Effects, Module};

pub const DASHBOARD_GREETING: &str =
    "Great to see you back, John! You're on a 7-day streak! Keep it up! 🎉";

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub cursor: ListCursor,
    pub mello: Mello,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            cursor: ListCursor::new(),
            mello: Mello::new(MelloMood::Celebrating, DASHBOARD_GREETING),
        }
    }
}

impl DashboardState {
    /// Module cards plus the trailing log-out entry.
    pub const ENTRIES: usize = DASHBOARD_MODULES.len() + 1;

    pub fn is_logout_selected(&self) -> bool {
        self.cursor.selected() == DASHBOARD_MODULES.len()
    }
}

impl Module for DashboardState {
    fn view(&self) -> View {
        View::Dashboard
    }

    fn handle(&mut self, cmd: &Command, _scorer: &mut dyn PronunciationScorer) -> Effects {
        match cmd {
            Command::MoveUp | Command::MoveLeft | Command::FocusPrev => self.cursor.up(),
            Command::MoveDown | Command::MoveRight | Command::FocusNext => {
                self.cursor.down(Self::ENTRIES)
            }
            Command::Activate => {
                let action = match DASHBOARD_MODULES.get(self.cursor.selected()) {
                    Some(card) => NavAction::Open(card.target),
                    None => NavAction::Logout,
                };
                return vec![Effect::navigate(action)];
            }
            Command::Logout => return vec![Effect::navigate(NavAction::Logout)],
            Command::Back => return vec![Effect::navigate(NavAction::Back)],
            Command::DismissMello => self.mello.dismiss(),
            _ => {}
        }
        Vec::new()
    }
}
