//! Famous speeches: pick a speech, read it aloud for a score, then finish
//! its sentence in a word quiz.

use std::time::Duration;

use crate::domain::catalog::{Speech, SPEECHES};
use crate::domain::{
    passage_feedback, FocusRing, ListCursor, NavAction, PracticeEvent, PracticeMachine,
    PracticeState, View,
};
use crate::input::Command;
use crate::traits::PronunciationScorer;

use super::effect::Playback;
use super::{Effect, Effects, Module, TimerEvent};

/// Length of the simulated speech audio.
pub const PLAYBACK_LENGTH: Duration = Duration::from_secs(3);

/// A reading attempt stops by itself after this long.
pub const RECORDING_LIMIT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechView {
    Selection,
    Detail,
    Quiz,
}

/// Buttons on the speech detail page, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailButton {
    Listen,
    Read,
    Quiz,
}

pub const DETAIL_BUTTONS: [DetailButton; 3] =
    [DetailButton::Listen, DetailButton::Read, DetailButton::Quiz];

/// Fill-in-the-blanks progress for one speech.
#[derive(Debug, Clone)]
pub struct QuizState {
    pub placed: Vec<Option<&'static str>>,
    pub blank: FocusRing,
    pub bank: ListCursor,
}

impl QuizState {
    pub fn new(speech: &Speech) -> Self {
        let blanks = speech.quiz.blank_count();
        Self {
            placed: vec![None; blanks],
            blank: FocusRing::new(blanks),
            bank: ListCursor::new(),
        }
    }

    /// Put `word` in the selected blank and move to the next empty one.
    pub fn place(&mut self, word: &'static str) {
        if let Some(slot) = self.placed.get_mut(self.blank.index()) {
            *slot = Some(word);
        }
        if let Some(next) = self.placed.iter().position(Option::is_none) {
            self.blank.focus(next);
        }
    }

    pub fn clear(&mut self) {
        self.placed.iter_mut().for_each(|slot| *slot = None);
        self.blank.focus(0);
    }

    /// Every blank holds its expected word.
    pub fn is_complete(&self, speech: &Speech) -> bool {
        self.placed.len() == speech.quiz.answers.len()
            && self
                .placed
                .iter()
                .zip(speech.quiz.answers)
                .all(|(placed, answer)| *placed == Some(*answer))
    }
}

#[derive(Debug, Clone)]
pub struct FamousSpeechesState {
    pub sub_view: SpeechView,
    pub cursor: ListCursor,
    pub selected: usize,
    pub playback: Playback,
    pub reading: PracticeMachine<u8>,
    pub buttons: FocusRing,
    pub quiz: QuizState,
}

impl Default for FamousSpeechesState {
    fn default() -> Self {
        Self {
            sub_view: SpeechView::Selection,
            cursor: ListCursor::new(),
            selected: 0,
            playback: Playback::default(),
            reading: PracticeMachine::new(),
            buttons: FocusRing::new(DETAIL_BUTTONS.len()),
            quiz: QuizState::new(&SPEECHES[0]),
        }
    }
}

impl FamousSpeechesState {
    pub fn speech(&self) -> &'static Speech {
        &SPEECHES[self.selected.min(SPEECHES.len() - 1)]
    }

    /// Score on display, if a reading has finished.
    pub fn score(&self) -> Option<u8> {
        self.reading.outcome().copied()
    }

    pub fn feedback(&self) -> Option<&'static str> {
        self.score().map(passage_feedback)
    }

    pub fn focused_button(&self) -> DetailButton {
        DETAIL_BUTTONS[self.buttons.index()]
    }

    fn open_speech(&mut self, index: usize) {
        self.selected = index;
        self.sub_view = SpeechView::Detail;
        self.playback.stop();
        let _ = self.reading.apply(PracticeEvent::Reset);
        self.buttons.focus(0);
        tracing::debug!(speech = self.speech().id, "speech opened");
    }

    fn start_quiz(&mut self) {
        let _ = self.reading.apply(PracticeEvent::Reset);
        self.quiz = QuizState::new(self.speech());
        self.sub_view = SpeechView::Quiz;
    }

    /// The read button: start, stop, or "Try Again" depending on state.
    fn press_read(&mut self, scorer: &mut dyn PronunciationScorer) -> Effects {
        match self.reading.state().clone() {
            PracticeState::Idle => {
                if self.reading.apply(PracticeEvent::Start).is_err() {
                    return Vec::new();
                }
                match self.reading.cycle() {
                    Some(cycle) => vec![Effect::schedule(
                        RECORDING_LIMIT,
                        TimerEvent::RecordingElapsed { cycle },
                    )],
                    None => Vec::new(),
                }
            }
            PracticeState::Recording { .. } => {
                self.finish_reading(scorer);
                Vec::new()
            }
            PracticeState::Result { cycle, .. } => {
                let _ = self.reading.apply(PracticeEvent::Dismiss { cycle });
                Vec::new()
            }
            PracticeState::Processing { .. } => Vec::new(),
        }
    }

    fn finish_reading(&mut self, scorer: &mut dyn PronunciationScorer) {
        let Some(cycle) = self.reading.cycle() else {
            return;
        };
        if self.reading.apply(PracticeEvent::Stop).is_err() {
            return;
        }
        let score = scorer.score_passage(self.speech().kid_friendly_text);
        if self
            .reading
            .apply(PracticeEvent::Scored {
                cycle,
                outcome: score,
            })
            .is_ok()
        {
            tracing::info!(speech = self.speech().id, score, "speech scored");
        }
    }

    fn handle_selection(&mut self, cmd: &Command) -> Effects {
        match cmd {
            Command::MoveUp | Command::FocusPrev => self.cursor.up(),
            Command::MoveDown | Command::FocusNext => self.cursor.down(SPEECHES.len()),
            Command::Activate => self.open_speech(self.cursor.selected()),
            Command::Back => return vec![Effect::navigate(NavAction::Back)],
            _ => {}
        }
        Vec::new()
    }

    fn handle_detail(&mut self, cmd: &Command, scorer: &mut dyn PronunciationScorer) -> Effects {
        match cmd {
            Command::FocusNext | Command::MoveRight | Command::MoveDown => self.buttons.next(),
            Command::FocusPrev | Command::MoveLeft | Command::MoveUp => self.buttons.prev(),
            Command::Activate => match self.focused_button() {
                DetailButton::Listen => {
                    return self.playback.toggle(PLAYBACK_LENGTH).into_iter().collect()
                }
                DetailButton::Read => return self.press_read(scorer),
                DetailButton::Quiz => self.start_quiz(),
            },
            Command::Listen => {
                return self.playback.toggle(PLAYBACK_LENGTH).into_iter().collect()
            }
            Command::Record => return self.press_read(scorer),
            Command::Back => {
                self.playback.stop();
                let _ = self.reading.apply(PracticeEvent::Reset);
                self.sub_view = SpeechView::Selection;
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_quiz(&mut self, cmd: &Command) -> Effects {
        let bank = self.speech().quiz_words;
        match cmd {
            Command::FocusNext => self.quiz.blank.next(),
            Command::FocusPrev => self.quiz.blank.prev(),
            Command::MoveLeft | Command::MoveUp => self.quiz.bank.up(),
            Command::MoveRight | Command::MoveDown => self.quiz.bank.down(bank.len()),
            Command::Activate => {
                if let Some(&word) = bank.get(self.quiz.bank.selected()) {
                    self.quiz.place(word);
                }
                if self.quiz.is_complete(self.speech()) {
                    tracing::info!(speech = self.speech().id, "quiz completed");
                }
            }
            Command::Restart => self.quiz.clear(),
            Command::Back => self.sub_view = SpeechView::Detail,
            _ => {}
        }
        Vec::new()
    }
}

impl Module for FamousSpeechesState {
    fn view(&self) -> View {
        View::FamousSpeeches
    }

    fn handle(&mut self, cmd: &Command, scorer: &mut dyn PronunciationScorer) -> Effects {
        match self.sub_view {
            SpeechView::Selection => self.handle_selection(cmd),
            SpeechView::Detail => self.handle_detail(cmd, scorer),
            SpeechView::Quiz => self.handle_quiz(cmd),
        }
    }

    fn on_timer(&mut self, event: TimerEvent, scorer: &mut dyn PronunciationScorer) -> Effects {
        match event {
            TimerEvent::PlaybackDone { token } => {
                self.playback.finish(token);
            }
            TimerEvent::RecordingElapsed { cycle } => {
                if self.reading.is_recording() && self.reading.cycle() == Some(cycle) {
                    self.finish_reading(scorer);
                } else {
                    tracing::debug!(cycle, "recording timer for a finished attempt");
                }
            }
            _ => {}
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::ScriptedScorer;

    fn detail() -> FamousSpeechesState {
        let mut state = FamousSpeechesState::default();
        state.handle(&Command::Activate, &mut ScriptedScorer::new());
        state
    }

    #[test]
    fn test_select_opens_detail() {
        let state = detail();
        assert_eq!(state.sub_view, SpeechView::Detail);
        assert_eq!(state.speech().id, "mlk-dream");
    }

    #[test]
    fn test_stop_scores_immediately() {
        let mut scorer = ScriptedScorer::new().with_passage_scores([91]);
        let mut state = detail();
        let effects = state.handle(&Command::Record, &mut scorer);
        assert_eq!(
            effects,
            vec![Effect::schedule(
                RECORDING_LIMIT,
                TimerEvent::RecordingElapsed { cycle: 1 }
            )]
        );
        assert!(state.reading.is_recording());

        state.handle(&Command::Record, &mut scorer);
        assert_eq!(state.score(), Some(91));
        assert_eq!(
            state.feedback(),
            Some("Excellent pronunciation! You spoke clearly and confidently.")
        );

        // The elapsed timer for the stopped attempt changes nothing
        state.on_timer(TimerEvent::RecordingElapsed { cycle: 1 }, &mut scorer);
        assert_eq!(state.score(), Some(91));
    }

    #[test]
    fn test_elapsed_timer_scores_once() {
        let mut scorer = ScriptedScorer::new().with_passage_scores([75, 99]);
        let mut state = detail();
        state.handle(&Command::Record, &mut scorer);
        state.on_timer(TimerEvent::RecordingElapsed { cycle: 1 }, &mut scorer);
        assert_eq!(state.score(), Some(75));
        state.on_timer(TimerEvent::RecordingElapsed { cycle: 1 }, &mut scorer);
        assert_eq!(state.score(), Some(75));
    }

    #[test]
    fn test_try_again_clears_result() {
        let mut scorer = ScriptedScorer::new();
        let mut state = detail();
        state.handle(&Command::Record, &mut scorer);
        state.handle(&Command::Record, &mut scorer);
        assert!(state.score().is_some());
        state.handle(&Command::Record, &mut scorer);
        assert!(state.reading.is_idle());
    }

    #[test]
    fn test_playback_toggle_and_end() {
        let mut scorer = ScriptedScorer::new();
        let mut state = detail();
        let effects = state.handle(&Command::Listen, &mut scorer);
        assert_eq!(effects.len(), 1);
        assert!(state.playback.is_playing());
        state.on_timer(TimerEvent::PlaybackDone { token: 1 }, &mut scorer);
        assert!(!state.playback.is_playing());
    }

    #[test]
    fn test_quiz_resets_reading_and_completes() {
        let mut scorer = ScriptedScorer::new();
        let mut state = detail();
        state.handle(&Command::Record, &mut scorer);
        state.buttons.focus(2);
        state.handle(&Command::Activate, &mut scorer);
        assert_eq!(state.sub_view, SpeechView::Quiz);
        assert!(state.reading.is_idle());

        // Bank: dream, children, play, together, kind, fairly
        for bank_index in [0, 1, 3, 4] {
            while state.quiz.bank.selected() > bank_index {
                state.handle(&Command::MoveLeft, &mut scorer);
            }
            while state.quiz.bank.selected() < bank_index {
                state.handle(&Command::MoveRight, &mut scorer);
            }
            state.handle(&Command::Activate, &mut scorer);
        }
        assert!(state.quiz.is_complete(state.speech()));

        state.handle(&Command::Restart, &mut scorer);
        assert!(!state.quiz.is_complete(state.speech()));
        assert!(state.quiz.placed.iter().all(Option::is_none));
    }

    #[test]
    fn test_wrong_word_is_not_complete() {
        let speech = &SPEECHES[0];
        let mut quiz = QuizState::new(speech);
        for word in ["dream", "children", "play", "kind"] {
            quiz.place(word);
        }
        assert!(!quiz.is_complete(speech));
    }

    #[test]
    fn test_back_walks_up_sub_views() {
        let mut scorer = ScriptedScorer::new();
        let mut state = detail();
        state.buttons.focus(2);
        state.handle(&Command::Activate, &mut scorer);
        state.handle(&Command::Back, &mut scorer);
        assert_eq!(state.sub_view, SpeechView::Detail);
        state.handle(&Command::Back, &mut scorer);
        assert_eq!(state.sub_view, SpeechView::Selection);
        assert_eq!(
            state.handle(&Command::Back, &mut scorer),
            vec![Effect::navigate(NavAction::Back)]
        );
    }
}
