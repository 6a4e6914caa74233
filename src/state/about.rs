//! About page: mission, features and stats.

use crate::domain::catalog::ABOUT_FEATURES;
use crate::domain::{NavAction, View};
use crate::input::Command;
use crate::traits::PronunciationScorer;

use super::{Effect, Effects, Module};

#[derive(Debug, Clone, Default)]
pub struct AboutState {
    /// First feature row drawn, for short terminals.
    pub scroll: usize,
}

impl Module for AboutState {
    fn view(&self) -> View {
        View::About
    }

    fn handle(&mut self, cmd: &Command, _scorer: &mut dyn PronunciationScorer) -> Effects {
        match cmd {
            Command::MoveUp => self.scroll = self.scroll.saturating_sub(1),
            Command::MoveDown => {
                if self.scroll + 1 < ABOUT_FEATURES.len() {
                    self.scroll += 1;
                }
            }
            Command::Activate | Command::Back => return vec![Effect::navigate(NavAction::Back)],
            _ => {}
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::ScriptedScorer;

    #[test]
    fn test_back_button() {
        let mut about = AboutState::default();
        let effects = about.handle(&Command::Activate, &mut ScriptedScorer::new());
        assert_eq!(effects, vec![Effect::navigate(NavAction::Back)]);
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut scorer = ScriptedScorer::new();
        let mut about = AboutState::default();
        about.handle(&Command::MoveUp, &mut scorer);
        assert_eq!(about.scroll, 0);
        for _ in 0..20 {
            about.handle(&Command::MoveDown, &mut scorer);
        }
        assert_eq!(about.scroll, ABOUT_FEATURES.len() - 1);
    }
}
