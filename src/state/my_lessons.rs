//! Story lessons: a list, then a detail page with listen and read-aloud.

use std::time::Duration;

use crate::domain::catalog::{Lesson, LESSONS};
use crate::domain::{FocusRing, ListCursor, NavAction, View};
use crate::input::Command;
use crate::traits::PronunciationScorer;
use crate::widgets::{Mello, MelloMood};

use super::effect::Playback;
use super::{Effect, Effects, Module, TimerEvent};

pub const LISTEN_LENGTH: Duration = Duration::from_secs(5);
pub const READING_STEP: Duration = Duration::from_millis(100);
pub const READING_INCREMENT: u8 = 2;

pub const MELLO_LIST: &str = "Let's begin your next lesson!";
pub const MELLO_DETAIL: &str = "Start when you're ready!";
pub const MELLO_DONE: &str = "Great job reading! That was impressive! ⭐";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonsView {
    List,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonButton {
    Listen,
    StartReading,
    BackToLessons,
}

pub const LESSON_BUTTONS: [LessonButton; 3] = [
    LessonButton::Listen,
    LessonButton::StartReading,
    LessonButton::BackToLessons,
];

#[derive(Debug, Clone)]
pub struct MyLessonsState {
    pub sub_view: LessonsView,
    pub cursor: ListCursor,
    pub selected: usize,
    pub playback: Playback,
    pub progress: u8,
    pub reading: bool,
    /// Bumped on every reading start so ticks from an abandoned run are dropped
    reading_run: u64,
    pub buttons: FocusRing,
    pub mello: Mello,
}

impl Default for MyLessonsState {
    fn default() -> Self {
        Self {
            sub_view: LessonsView::List,
            cursor: ListCursor::new(),
            selected: 0,
            playback: Playback::default(),
            progress: 0,
            reading: false,
            reading_run: 0,
            buttons: FocusRing::new(LESSON_BUTTONS.len()),
            mello: Mello::new(MelloMood::Encouraging, MELLO_LIST),
        }
    }
}

impl MyLessonsState {
    pub fn lesson(&self) -> &'static Lesson {
        &LESSONS[self.selected.min(LESSONS.len() - 1)]
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 100
    }

    pub fn focused_button(&self) -> LessonButton {
        LESSON_BUTTONS[self.buttons.index()]
    }

    fn open(&mut self, index: usize) {
        self.selected = index;
        self.sub_view = LessonsView::Detail;
        self.progress = 0;
        self.reading = false;
        self.playback.stop();
        self.buttons = FocusRing::new(LESSON_BUTTONS.len());
        self.mello.say(MelloMood::Talking, MELLO_DETAIL);
        tracing::debug!(lesson = self.lesson().id, "lesson opened");
    }

    fn back_to_list(&mut self) {
        self.sub_view = LessonsView::List;
        self.progress = 0;
        self.reading = false;
        self.playback.stop();
        self.mello.say(MelloMood::Encouraging, MELLO_LIST);
    }

    fn start_reading(&mut self) -> Effects {
        if self.reading || self.is_complete() {
            return Vec::new();
        }
        self.reading = true;
        self.reading_run += 1;
        self.mello.say(MelloMood::Thinking, MELLO_DETAIL);
        vec![self.next_tick()]
    }

    fn next_tick(&self) -> Effect {
        Effect::schedule(
            READING_STEP,
            TimerEvent::ReadingTick {
                run: self.reading_run,
            },
        )
    }

    fn advance(&mut self, run: u64) -> Effects {
        if !self.reading || run != self.reading_run {
            return Vec::new();
        }
        self.progress = self.progress.saturating_add(READING_INCREMENT).min(100);
        if self.is_complete() {
            self.reading = false;
            self.mello.say(MelloMood::Celebrating, MELLO_DONE);
            tracing::info!(lesson = self.lesson().id, "lesson reading complete");
            return Vec::new();
        }
        vec![self.next_tick()]
    }

    fn handle_detail(&mut self, cmd: &Command) -> Effects {
        if self.is_complete() {
            // Only the completion card's "back to lessons" remains
            match cmd {
                Command::Activate | Command::Back => self.back_to_list(),
                Command::DismissMello => self.mello.dismiss(),
                _ => {}
            }
            return Vec::new();
        }
        match cmd {
            Command::FocusNext | Command::MoveRight | Command::MoveDown => self.buttons.next(),
            Command::FocusPrev | Command::MoveLeft | Command::MoveUp => self.buttons.prev(),
            Command::Listen => return self.playback.toggle(LISTEN_LENGTH).into_iter().collect(),
            Command::Record => return self.start_reading(),
            Command::Activate => match self.focused_button() {
                LessonButton::Listen => {
                    return self.playback.toggle(LISTEN_LENGTH).into_iter().collect()
                }
                LessonButton::StartReading => return self.start_reading(),
                LessonButton::BackToLessons => self.back_to_list(),
            },
            Command::DismissMello => self.mello.dismiss(),
            Command::Back => self.back_to_list(),
            _ => {}
        }
        Vec::new()
    }
}

impl Module for MyLessonsState {
    fn view(&self) -> View {
        View::MyLessons
    }

    fn handle(&mut self, cmd: &Command, _scorer: &mut dyn PronunciationScorer) -> Effects {
        match self.sub_view {
            LessonsView::List => {
                match cmd {
                    Command::MoveUp | Command::MoveLeft | Command::FocusPrev => self.cursor.up(),
                    Command::MoveDown | Command::MoveRight | Command::FocusNext => {
                        self.cursor.down(LESSONS.len())
                    }
                    Command::Activate => self.open(self.cursor.selected()),
                    Command::DismissMello => self.mello.dismiss(),
                    Command::Back => return vec![Effect::navigate(NavAction::Back)],
                    _ => {}
                }
                Vec::new()
            }
            LessonsView::Detail => self.handle_detail(cmd),
        }
    }

    fn on_timer(&mut self, event: TimerEvent, _scorer: &mut dyn PronunciationScorer) -> Effects {
        match event {
            TimerEvent::ReadingTick { run } => self.advance(run),
            TimerEvent::PlaybackDone { token } => {
                self.playback.finish(token);
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

    fn in_detail() -> MyLessonsState {
        let mut state = MyLessonsState::default();
        state.handle(&Command::Activate, &mut ScriptedScorer::new());
        state
    }

    /// Run ticks until reading stops.
    fn run_to_end(state: &mut MyLessonsState) -> usize {
        let mut scorer = ScriptedScorer::new();
        let mut effects = state.handle(&Command::Record, &mut scorer);
        let mut ticks = 0;
        while let Some(Effect::Schedule { timer, .. }) = effects.pop() {
            ticks += 1;
            effects = state.on_timer(timer, &mut scorer);
        }
        ticks
    }

    #[test]
    fn test_mello_message_per_view() {
        let mut state = MyLessonsState::default();
        assert_eq!(state.mello.message(), MELLO_LIST);
        state.handle(&Command::Activate, &mut ScriptedScorer::new());
        assert_eq!(state.mello.message(), MELLO_DETAIL);
    }

    #[test]
    fn test_reading_reaches_one_hundred() {
        let mut state = in_detail();
        let ticks = run_to_end(&mut state);
        assert_eq!(ticks, 50);
        assert_eq!(state.progress, 100);
        assert!(!state.reading);
        assert_eq!(state.mello.message(), MELLO_DONE);
        assert_eq!(state.mello.mood(), MelloMood::Celebrating);
    }

    #[test]
    fn test_second_start_is_ignored() {
        let mut scorer = ScriptedScorer::new();
        let mut state = in_detail();
        assert_eq!(state.handle(&Command::Record, &mut scorer).len(), 1);
        assert!(state.handle(&Command::Record, &mut scorer).is_empty());
    }

    #[test]
    fn test_ticks_from_abandoned_run_are_dropped() {
        let mut scorer = ScriptedScorer::new();
        let mut state = in_detail();
        state.handle(&Command::Record, &mut scorer);
        state.handle(&Command::Back, &mut scorer);
        state.handle(&Command::Activate, &mut scorer);
        state.handle(&Command::Record, &mut scorer);

        state.on_timer(TimerEvent::ReadingTick { run: 1 }, &mut scorer);
        assert_eq!(state.progress, 0);
        state.on_timer(TimerEvent::ReadingTick { run: 2 }, &mut scorer);
        assert_eq!(state.progress, 2);
    }

    #[test]
    fn test_completion_returns_to_list() {
        let mut state = in_detail();
        run_to_end(&mut state);
        state.handle(&Command::Activate, &mut ScriptedScorer::new());
        assert_eq!(state.sub_view, LessonsView::List);
        assert_eq!(state.progress, 0);
        assert_eq!(state.mello.message(), MELLO_LIST);
    }

    #[test]
    fn test_listen_toggles_playback() {
        let mut scorer = ScriptedScorer::new();
        let mut state = in_detail();
        let effects = state.handle(&Command::Listen, &mut scorer);
        assert_eq!(
            effects,
            vec![Effect::schedule(LISTEN_LENGTH, TimerEvent::PlaybackDone { token: 1 })]
        );
        assert!(state.handle(&Command::Listen, &mut scorer).is_empty());
        assert!(!state.playback.is_playing());
    }

    #[test]
    fn test_back_from_list_navigates() {
        let mut state = MyLessonsState::default();
        assert_eq!(
            state.handle(&Command::Back, &mut ScriptedScorer::new()),
            vec![Effect::navigate(NavAction::Back)]
        );
    }
}
