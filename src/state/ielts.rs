//! IELTS preparation: section tips and a graded speaking practice.

use crate::domain::catalog::{
    IeltsSection, IELTS_SECTIONS, IELTS_SPEAKING_PROMPTS, IELTS_SPEAKING_SECTION,
};
use crate::domain::{
    ListCursor, NavAction, PracticeEvent, PracticeMachine, PracticeState, View, WordGrade,
};
use crate::input::Command;
use crate::traits::PronunciationScorer;

use super::academic_samples::{PROCESSING_DELAY, RESULT_DURATION};
use super::{Effect, Effects, Module, TimerEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IeltsView {
    Sections,
    Tips,
    Speaking,
}

#[derive(Debug, Clone)]
pub struct IeltsState {
    pub sub_view: IeltsView,
    pub cursor: ListCursor,
    pub prompt_index: usize,
    pub machine: PracticeMachine<WordGrade>,
    /// Band of the last graded answer; kept after the overlay closes
    pub last_band: Option<f32>,
}

impl Default for IeltsState {
    fn default() -> Self {
        Self {
            sub_view: IeltsView::Sections,
            cursor: ListCursor::new(),
            prompt_index: 0,
            machine: PracticeMachine::new(),
            last_band: None,
        }
    }
}

impl IeltsState {
    pub fn section(&self) -> &'static IeltsSection {
        &IELTS_SECTIONS[self.cursor.selected().min(IELTS_SECTIONS.len() - 1)]
    }

    pub fn prompt(&self) -> &'static str {
        IELTS_SPEAKING_PROMPTS[self.prompt_index.min(IELTS_SPEAKING_PROMPTS.len() - 1)]
    }

    fn open_section(&mut self) {
        if self.cursor.selected() == IELTS_SPEAKING_SECTION {
            self.prompt_index = 0;
            self.reset_attempt();
            self.sub_view = IeltsView::Speaking;
        } else {
            self.sub_view = IeltsView::Tips;
        }
    }

    fn reset_attempt(&mut self) {
        let _ = self.machine.apply(PracticeEvent::Reset);
        self.last_band = None;
    }

    fn toggle_recording(&mut self) -> Effects {
        match self.machine.state().clone() {
            PracticeState::Idle | PracticeState::Result { .. } => {
                let _ = self.machine.apply(PracticeEvent::Start);
                Vec::new()
            }
            PracticeState::Recording { cycle } => {
                if self.machine.apply(PracticeEvent::Stop).is_err() {
                    return Vec::new();
                }
                vec![Effect::schedule(
                    PROCESSING_DELAY,
                    TimerEvent::WordProcessed { cycle },
                )]
            }
            PracticeState::Processing { .. } => Vec::new(),
        }
    }

    fn grade(&mut self, cycle: u64, scorer: &mut dyn PronunciationScorer) -> Effects {
        if self.machine.cycle() != Some(cycle) || !self.machine.is_processing() {
            return Vec::new();
        }
        let grade = scorer.grade_word(self.prompt());
        if self
            .machine
            .apply(PracticeEvent::Scored {
                cycle,
                outcome: grade,
            })
            .is_err()
        {
            return Vec::new();
        }
        self.last_band = Some(grade.band());
        tracing::info!(band = grade.band(), prompt = self.prompt_index, "speaking answer graded");
        vec![Effect::schedule(
            RESULT_DURATION,
            TimerEvent::WordResultExpired { cycle },
        )]
    }

    fn step_prompt(&mut self, forward: bool) {
        let last = IELTS_SPEAKING_PROMPTS.len() - 1;
        let next = if forward {
            (self.prompt_index < last).then(|| self.prompt_index + 1)
        } else {
            self.prompt_index.checked_sub(1)
        };
        if let Some(index) = next {
            self.prompt_index = index;
            self.reset_attempt();
        }
    }
}

impl Module for IeltsState {
    fn view(&self) -> View {
        View::Ielts
    }

    fn handle(&mut self, cmd: &Command, _scorer: &mut dyn PronunciationScorer) -> Effects {
        match self.sub_view {
            IeltsView::Sections => match cmd {
                Command::MoveUp | Command::MoveLeft | Command::FocusPrev => self.cursor.up(),
                Command::MoveDown | Command::MoveRight | Command::FocusNext => {
                    self.cursor.down(IELTS_SECTIONS.len())
                }
                Command::Activate => self.open_section(),
                Command::Back => return vec![Effect::navigate(NavAction::Back)],
                _ => {}
            },
            IeltsView::Tips => {
                if matches!(cmd, Command::Back | Command::Activate) {
                    self.sub_view = IeltsView::Sections;
                }
            }
            IeltsView::Speaking => match cmd {
                Command::Record | Command::Activate => return self.toggle_recording(),
                Command::NextItem | Command::MoveRight => self.step_prompt(true),
                Command::PrevItem | Command::MoveLeft => self.step_prompt(false),
                Command::Back => {
                    self.reset_attempt();
                    self.sub_view = IeltsView::Sections;
                }
                _ => {}
            },
        }
        Vec::new()
    }

    fn on_timer(&mut self, event: TimerEvent, scorer: &mut dyn PronunciationScorer) -> Effects {
        match event {
            TimerEvent::WordProcessed { cycle } => self.grade(cycle, scorer),
            TimerEvent::WordResultExpired { cycle } => {
                let _ = self.machine.apply(PracticeEvent::Dismiss { cycle });
                Vec::new()
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::ScriptedScorer;

    fn speaking() -> IeltsState {
        let mut scorer = ScriptedScorer::new();
        let mut state = IeltsState::default();
        for _ in 0..IELTS_SPEAKING_SECTION {
            state.handle(&Command::MoveDown, &mut scorer);
        }
        state.handle(&Command::Activate, &mut scorer);
        state
    }

    #[test]
    fn test_non_speaking_section_shows_tips() {
        let mut scorer = ScriptedScorer::new();
        let mut state = IeltsState::default();
        state.handle(&Command::Activate, &mut scorer);
        assert_eq!(state.sub_view, IeltsView::Tips);
        assert_eq!(state.section().title, "Reading");

        state.handle(&Command::Back, &mut scorer);
        assert_eq!(state.sub_view, IeltsView::Sections);
    }

    #[test]
    fn test_speaking_grade_maps_to_band() {
        let mut scorer = ScriptedScorer::new().with_grades([WordGrade::Good]);
        let mut state = speaking();
        assert_eq!(state.sub_view, IeltsView::Speaking);

        state.handle(&Command::Record, &mut scorer);
        let effects = state.handle(&Command::Record, &mut scorer);
        assert_eq!(
            effects,
            vec![Effect::schedule(
                PROCESSING_DELAY,
                TimerEvent::WordProcessed { cycle: 1 }
            )]
        );
        let effects = state.on_timer(TimerEvent::WordProcessed { cycle: 1 }, &mut scorer);
        assert_eq!(
            effects,
            vec![Effect::schedule(
                RESULT_DURATION,
                TimerEvent::WordResultExpired { cycle: 1 }
            )]
        );
        assert_eq!(state.last_band, Some(6.5));

        state.on_timer(TimerEvent::WordResultExpired { cycle: 1 }, &mut scorer);
        assert!(state.machine.is_idle());
        assert_eq!(state.last_band, Some(6.5));
    }

    #[test]
    fn test_prompt_bounds() {
        let mut scorer = ScriptedScorer::new();
        let mut state = speaking();
        state.handle(&Command::PrevItem, &mut scorer);
        assert_eq!(state.prompt_index, 0);
        for _ in 0..10 {
            state.handle(&Command::NextItem, &mut scorer);
        }
        assert_eq!(state.prompt_index, IELTS_SPEAKING_PROMPTS.len() - 1);
    }

    #[test]
    fn test_changing_prompt_drops_pending_grade() {
        let mut scorer = ScriptedScorer::new();
        let mut state = speaking();
        state.handle(&Command::Record, &mut scorer);
        state.handle(&Command::Record, &mut scorer);
        state.handle(&Command::NextItem, &mut scorer);

        let effects = state.on_timer(TimerEvent::WordProcessed { cycle: 1 }, &mut scorer);
        assert!(effects.is_empty());
        assert_eq!(state.last_band, None);
        assert!(scorer.graded_words().is_empty());
    }
}
