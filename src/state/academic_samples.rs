//! Academic samples: per-class word lists practised one word at a time.
//!
//! Each word goes through the shared practice machine. Recording stops on the
//! second press, the word is graded after a short processing delay and the
//! grade overlay closes by itself a few seconds later. A word counts as
//! recorded once it earns a passing grade.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::domain::catalog::{AcademicClass, PracticeWord, ACADEMIC_CLASSES};
use crate::domain::{
    FocusRing, ListCursor, NavAction, PracticeEvent, PracticeMachine, PracticeState, View,
    WordGrade,
};
use crate::input::Command;
use crate::traits::PronunciationScorer;

use super::effect::Playback;
use super::{Effect, Effects, Module, TimerEvent};

/// Delay between stopping a recording and its grade.
pub const PROCESSING_DELAY: Duration = Duration::from_secs(1);

/// How long the grade overlay stays up.
pub const RESULT_DURATION: Duration = Duration::from_secs(4);

/// Length of the "hear correct pronunciation" audio.
pub const PRONUNCIATION_PLAYBACK: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcademicView {
    ClassSelection,
    Session,
}

/// Session buttons, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionButton {
    Record,
    Hear,
    Previous,
    Next,
    Restart,
    BackToClasses,
}

pub const SESSION_BUTTONS: [SessionButton; 6] = [
    SessionButton::Record,
    SessionButton::Hear,
    SessionButton::Previous,
    SessionButton::Next,
    SessionButton::Restart,
    SessionButton::BackToClasses,
];

/// Progress through one class's words.
#[derive(Debug, Clone)]
pub struct WordSession {
    pub class_index: usize,
    pub word_index: usize,
    pub recorded: BTreeSet<usize>,
    pub machine: PracticeMachine<WordGrade>,
    /// Grade shown on the score card; outlives the overlay.
    pub last_grade: Option<WordGrade>,
    pub show_encouragement: bool,
    pub show_correct_pronunciation: bool,
    pub playback: Playback,
    pub buttons: FocusRing,
}

impl WordSession {
    pub fn new(class_index: usize) -> Self {
        Self {
            class_index,
            word_index: 0,
            recorded: BTreeSet::new(),
            machine: PracticeMachine::new(),
            last_grade: None,
            show_encouragement: false,
            show_correct_pronunciation: false,
            playback: Playback::default(),
            buttons: FocusRing::new(SESSION_BUTTONS.len()),
        }
    }

    pub fn class(&self) -> &'static AcademicClass {
        &ACADEMIC_CLASSES[self.class_index.min(ACADEMIC_CLASSES.len() - 1)]
    }

    pub fn word(&self) -> Option<&'static PracticeWord> {
        self.class().words.get(self.word_index)
    }

    pub fn word_count(&self) -> usize {
        self.class().words.len()
    }

    /// True exactly when every word in the class has been recorded.
    pub fn is_complete(&self) -> bool {
        self.recorded.len() == self.word_count()
    }

    pub fn is_recorded(&self, index: usize) -> bool {
        self.recorded.contains(&index)
    }

    pub fn focused_button(&self) -> SessionButton {
        SESSION_BUTTONS[self.buttons.index()]
    }

    /// Status line under the microphone.
    pub fn prompt(&self) -> &'static str {
        if self.machine.is_recording() {
            "🎤 Recording... Say the word clearly!"
        } else if self.machine.is_processing() {
            "⏳ Listening to your word..."
        } else if self.show_encouragement {
            "🎉 Fantastic! Word recorded!"
        } else {
            "🚀 Tap the microphone to speak!"
        }
    }

    /// Grade overlay currently on screen.
    pub fn overlay(&self) -> Option<WordGrade> {
        self.machine.outcome().copied()
    }

    fn reset_transient(&mut self) {
        let _ = self.machine.apply(PracticeEvent::Reset);
        self.last_grade = None;
        self.show_encouragement = false;
        self.show_correct_pronunciation = false;
        self.playback.stop();
    }

    fn toggle_recording(&mut self) -> Effects {
        if self.playback.is_playing() {
            tracing::debug!("record pressed during playback");
            return Vec::new();
        }
        match self.machine.state().clone() {
            PracticeState::Idle | PracticeState::Result { .. } => {
                if self.machine.apply(PracticeEvent::Start).is_ok() {
                    self.last_grade = None;
                    self.show_encouragement = false;
                    self.show_correct_pronunciation = false;
                }
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
        let Some(word) = self.word() else {
            return Vec::new();
        };
        if !self.machine.is_processing() || self.machine.cycle() != Some(cycle) {
            tracing::debug!(cycle, "processing timer for a stale attempt");
            return Vec::new();
        }
        let grade = scorer.grade_word(word.word);
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
        tracing::info!(word = word.word, %grade, "word graded");
        self.last_grade = Some(grade);
        self.show_correct_pronunciation = true;
        if grade.is_passing() {
            self.recorded.insert(self.word_index);
            self.show_encouragement = true;
        }
        vec![Effect::schedule(
            RESULT_DURATION,
            TimerEvent::WordResultExpired { cycle },
        )]
    }

    fn expire(&mut self, cycle: u64) {
        if self.machine.apply(PracticeEvent::Dismiss { cycle }).is_ok() {
            self.show_encouragement = false;
        }
    }

    fn hear(&mut self) -> Effects {
        if !self.show_correct_pronunciation || self.machine.is_recording() {
            return Vec::new();
        }
        self.playback
            .toggle(PRONUNCIATION_PLAYBACK)
            .into_iter()
            .collect()
    }

    /// Move to the next word; a no-op on the last one.
    pub fn next_word(&mut self) {
        if self.word_index + 1 < self.word_count() {
            self.word_index += 1;
            self.reset_transient();
        }
    }

    /// Move to the previous word; a no-op on the first one.
    pub fn previous_word(&mut self) {
        if self.word_index > 0 {
            self.word_index -= 1;
            self.reset_transient();
        }
    }

    pub fn restart(&mut self) {
        self.word_index = 0;
        self.recorded.clear();
        self.reset_transient();
    }
}

#[derive(Debug, Clone)]
pub struct AcademicSamplesState {
    pub sub_view: AcademicView,
    pub cursor: ListCursor,
    pub session: WordSession,
}

impl Default for AcademicSamplesState {
    fn default() -> Self {
        Self {
            sub_view: AcademicView::ClassSelection,
            cursor: ListCursor::new(),
            session: WordSession::new(0),
        }
    }
}

impl AcademicSamplesState {
    fn handle_selection(&mut self, cmd: &Command) -> Effects {
        match cmd {
            Command::MoveUp | Command::MoveLeft | Command::FocusPrev => self.cursor.up(),
            Command::MoveDown | Command::MoveRight | Command::FocusNext => {
                self.cursor.down(ACADEMIC_CLASSES.len())
            }
            Command::Activate => {
                self.session = WordSession::new(self.cursor.selected());
                self.sub_view = AcademicView::Session;
                tracing::debug!(class = self.session.class().id, "class opened");
            }
            Command::Back => return vec![Effect::navigate(NavAction::Back)],
            _ => {}
        }
        Vec::new()
    }

    fn handle_session(&mut self, cmd: &Command) -> Effects {
        let session = &mut self.session;
        match cmd {
            Command::FocusNext | Command::MoveRight | Command::MoveDown => session.buttons.next(),
            Command::FocusPrev | Command::MoveLeft | Command::MoveUp => session.buttons.prev(),
            Command::Record => return session.toggle_recording(),
            Command::Listen => return session.hear(),
            Command::NextItem => session.next_word(),
            Command::PrevItem => session.previous_word(),
            Command::Restart => session.restart(),
            Command::Activate => match session.focused_button() {
                SessionButton::Record => return session.toggle_recording(),
                SessionButton::Hear => return session.hear(),
                SessionButton::Previous => session.previous_word(),
                SessionButton::Next => session.next_word(),
                SessionButton::Restart => session.restart(),
                SessionButton::BackToClasses => {
                    session.reset_transient();
                    self.sub_view = AcademicView::ClassSelection;
                }
            },
            Command::Back => return vec![Effect::navigate(NavAction::Back)],
            _ => {}
        }
        Vec::new()
    }
}

impl Module for AcademicSamplesState {
    fn view(&self) -> View {
        View::AcademicSamples
    }

    fn handle(&mut self, cmd: &Command, _scorer: &mut dyn PronunciationScorer) -> Effects {
        match self.sub_view {
            AcademicView::ClassSelection => self.handle_selection(cmd),
            AcademicView::Session => self.handle_session(cmd),
        }
    }

    fn on_timer(&mut self, event: TimerEvent, scorer: &mut dyn PronunciationScorer) -> Effects {
        match event {
            TimerEvent::WordProcessed { cycle } => self.session.grade(cycle, scorer),
            TimerEvent::WordResultExpired { cycle } => {
                self.session.expire(cycle);
                Vec::new()
            }
            TimerEvent::PlaybackDone { token } => {
                self.session.playback.finish(token);
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

    fn in_session() -> AcademicSamplesState {
        let mut state = AcademicSamplesState::default();
        state.handle(&Command::Activate, &mut ScriptedScorer::new());
        state
    }

    /// Record, stop and grade the current word.
    fn record_word(state: &mut AcademicSamplesState, scorer: &mut ScriptedScorer) {
        state.handle(&Command::Record, scorer);
        let effects = state.handle(&Command::Record, scorer);
        let Some(Effect::Schedule {
            timer: TimerEvent::WordProcessed { cycle },
            ..
        }) = effects.first().cloned()
        else {
            panic!("expected processing timer, got {effects:?}");
        };
        state.on_timer(TimerEvent::WordProcessed { cycle }, scorer);
    }

    #[test]
    fn test_record_stop_schedules_processing() {
        let mut scorer = ScriptedScorer::new();
        let mut state = in_session();
        assert!(state.handle(&Command::Record, &mut scorer).is_empty());
        assert!(state.session.machine.is_recording());

        let effects = state.handle(&Command::Record, &mut scorer);
        assert_eq!(
            effects,
            vec![Effect::schedule(
                PROCESSING_DELAY,
                TimerEvent::WordProcessed { cycle: 1 }
            )]
        );
        assert!(state.session.machine.is_processing());
    }

    #[test]
    fn test_passing_grade_records_word() {
        let mut scorer = ScriptedScorer::new().with_grades([WordGrade::Excellent]);
        let mut state = in_session();
        record_word(&mut state, &mut scorer);

        assert_eq!(state.session.overlay(), Some(WordGrade::Excellent));
        assert!(state.session.is_recorded(0));
        assert!(state.session.show_encouragement);
        assert_eq!(scorer.graded_words(), vec!["Apple"]);
    }

    #[test]
    fn test_failing_grade_does_not_record() {
        let mut scorer = ScriptedScorer::new().with_grades([WordGrade::NeedsPractice]);
        let mut state = in_session();
        record_word(&mut state, &mut scorer);

        assert_eq!(state.session.last_grade, Some(WordGrade::NeedsPractice));
        assert!(!state.session.is_recorded(0));
        assert!(!state.session.show_encouragement);
    }

    #[test]
    fn test_result_expires_but_card_stays() {
        let mut scorer = ScriptedScorer::new().with_grades([WordGrade::Good]);
        let mut state = in_session();
        record_word(&mut state, &mut scorer);

        state.on_timer(TimerEvent::WordResultExpired { cycle: 1 }, &mut scorer);
        assert!(state.session.machine.is_idle());
        assert_eq!(state.session.overlay(), None);
        assert_eq!(state.session.last_grade, Some(WordGrade::Good));
        assert!(!state.session.show_encouragement);
    }

    #[test]
    fn test_processing_timer_applies_once() {
        let mut scorer = ScriptedScorer::new().with_grades([WordGrade::Excellent, WordGrade::NeedsPractice]);
        let mut state = in_session();
        record_word(&mut state, &mut scorer);

        let effects = state.on_timer(TimerEvent::WordProcessed { cycle: 1 }, &mut scorer);
        assert!(effects.is_empty());
        assert_eq!(state.session.overlay(), Some(WordGrade::Excellent));
        assert_eq!(scorer.graded_words().len(), 1);
    }

    #[test]
    fn test_rerecord_before_expiry_ignores_old_timer() {
        let mut scorer = ScriptedScorer::new().with_grades([WordGrade::Good]);
        let mut state = in_session();
        record_word(&mut state, &mut scorer);

        // New attempt while the first overlay is still up
        state.handle(&Command::Record, &mut scorer);
        assert!(state.session.machine.is_recording());
        state.on_timer(TimerEvent::WordResultExpired { cycle: 1 }, &mut scorer);
        assert!(state.session.machine.is_recording());
    }

    #[test]
    fn test_next_and_previous_bounds() {
        let mut scorer = ScriptedScorer::new();
        let mut state = in_session();
        state.handle(&Command::PrevItem, &mut scorer);
        assert_eq!(state.session.word_index, 0);

        for _ in 0..20 {
            state.handle(&Command::NextItem, &mut scorer);
        }
        assert_eq!(state.session.word_index, state.session.word_count() - 1);
    }

    #[test]
    fn test_moving_resets_transient_state() {
        let mut scorer = ScriptedScorer::new().with_grades([WordGrade::Excellent]);
        let mut state = in_session();
        record_word(&mut state, &mut scorer);
        state.handle(&Command::NextItem, &mut scorer);

        assert!(state.session.machine.is_idle());
        assert_eq!(state.session.last_grade, None);
        assert!(!state.session.show_correct_pronunciation);
        // Recorded words survive
        assert!(state.session.is_recorded(0));
    }

    #[test]
    fn test_completion_counts_distinct_words() {
        let mut scorer = ScriptedScorer::new();
        let mut state = in_session();
        let total = state.session.word_count();

        // Same word twice does not count double
        record_word(&mut state, &mut scorer);
        record_word(&mut state, &mut scorer);
        assert_eq!(state.session.recorded.len(), 1);
        assert!(!state.session.is_complete());

        for _ in 1..total {
            state.handle(&Command::NextItem, &mut scorer);
            record_word(&mut state, &mut scorer);
        }
        assert!(state.session.is_complete());

        state.handle(&Command::Restart, &mut scorer);
        assert!(!state.session.is_complete());
        assert_eq!(state.session.word_index, 0);
    }

    #[test]
    fn test_record_disabled_during_playback() {
        let mut scorer = ScriptedScorer::new();
        let mut state = in_session();
        record_word(&mut state, &mut scorer);
        let effects = state.handle(&Command::Listen, &mut scorer);
        assert_eq!(effects.len(), 1);
        assert!(state.session.playback.is_playing());

        state.handle(&Command::Record, &mut scorer);
        assert!(!state.session.machine.is_recording());

        state.on_timer(TimerEvent::PlaybackDone { token: 1 }, &mut scorer);
        state.handle(&Command::Record, &mut scorer);
        assert!(state.session.machine.is_recording());
    }

    #[test]
    fn test_back_to_classes_is_internal() {
        let mut state = in_session();
        state.session.buttons.focus(5);
        let effects = state.handle(&Command::Activate, &mut ScriptedScorer::new());
        assert!(effects.is_empty());
        assert_eq!(state.sub_view, AcademicView::ClassSelection);

        let effects = state.handle(&Command::Back, &mut ScriptedScorer::new());
        assert_eq!(effects, vec![Effect::navigate(NavAction::Back)]);
    }
}
