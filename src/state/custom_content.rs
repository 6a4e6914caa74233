//! User-written practice lessons: list, create form and a timed practice run.

use std::time::Duration;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::catalog::{SAMPLE_CUSTOM_CONTENT, SAMPLE_CUSTOM_TITLE};
use crate::domain::forms::check_lesson;
use crate::domain::{ListCursor, NavAction, View};
use crate::input::Command;
use crate::traits::PronunciationScorer;
use crate::widgets::InputBox;

use super::form::FocusSlots;
use super::{ConfirmAction, Effect, Effects, Module, TimerEvent};

pub const PRACTICE_LENGTH: Duration = Duration::from_secs(5);
pub const PRACTICE_DONE: &str = "Great job! 🌟 You completed your practice session!";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this lesson?";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomLesson {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub difficulty: Difficulty,
    pub created_at: DateTime<Local>,
}

impl CustomLesson {
    pub fn date_label(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomView {
    List,
    Create,
    Practice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateSlot {
    Title,
    Content,
    Difficulty,
    Save,
    Cancel,
}

const CREATE_ORDER: &[CreateSlot] = &[
    CreateSlot::Title,
    CreateSlot::Content,
    CreateSlot::Difficulty,
    CreateSlot::Save,
    CreateSlot::Cancel,
];

#[derive(Debug, Clone)]
pub struct CustomContentState {
    pub sub_view: CustomView,
    pub lessons: Vec<CustomLesson>,
    next_id: u64,
    /// Row 0 is "create new lesson", rows after it are lessons
    pub cursor: ListCursor,
    pub title: InputBox,
    pub content: InputBox,
    pub difficulty: Difficulty,
    pub focus: FocusSlots<CreateSlot>,
    pub practicing: Option<u64>,
    pub practice_running: bool,
    practice_session: u64,
}

impl Default for CustomContentState {
    fn default() -> Self {
        let sample = CustomLesson {
            id: 1,
            title: SAMPLE_CUSTOM_TITLE.to_string(),
            content: SAMPLE_CUSTOM_CONTENT.to_string(),
            difficulty: Difficulty::Easy,
            created_at: Local::now(),
        };
        Self {
            sub_view: CustomView::List,
            lessons: vec![sample],
            next_id: 2,
            cursor: ListCursor::new(),
            title: InputBox::new(),
            content: InputBox::multiline(),
            difficulty: Difficulty::default(),
            focus: FocusSlots::new(CREATE_ORDER),
            practicing: None,
            practice_running: false,
            practice_session: 0,
        }
    }
}

impl CustomContentState {
    /// Rows in the list view.
    pub fn rows(&self) -> usize {
        self.lessons.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Lesson under the list cursor, if the cursor is not on "create".
    pub fn selected_lesson(&self) -> Option<&CustomLesson> {
        self.cursor
            .selected()
            .checked_sub(1)
            .and_then(|i| self.lessons.get(i))
    }

    pub fn practice_lesson(&self) -> Option<&CustomLesson> {
        let id = self.practicing?;
        self.lessons.iter().find(|l| l.id == id)
    }

    fn reset_form(&mut self) {
        self.title.clear();
        self.content.clear();
        self.difficulty = Difficulty::default();
        self.focus = FocusSlots::new(CREATE_ORDER);
    }

    fn save(&mut self) -> Effects {
        if let Err(err) = check_lesson(self.title.text(), self.content.text()) {
            return vec![Effect::alert(err.to_string())];
        }
        let lesson = CustomLesson {
            id: self.next_id,
            title: self.title.text().trim().to_string(),
            content: self.content.text().trim().to_string(),
            difficulty: self.difficulty,
            created_at: Local::now(),
        };
        self.next_id += 1;
        tracing::info!(id = lesson.id, title = %lesson.title, "custom lesson created");
        self.lessons.push(lesson);
        self.reset_form();
        self.sub_view = CustomView::List;
        Vec::new()
    }

    fn cancel(&mut self) {
        self.reset_form();
        self.sub_view = CustomView::List;
    }

    fn start_practice(&mut self) -> Effects {
        if self.practice_running || self.practice_lesson().is_none() {
            return Vec::new();
        }
        self.practice_running = true;
        self.practice_session += 1;
        vec![Effect::schedule(
            PRACTICE_LENGTH,
            TimerEvent::PracticeDone {
                session: self.practice_session,
            },
        )]
    }

    fn leave_practice(&mut self) {
        self.practicing = None;
        self.practice_running = false;
        self.sub_view = CustomView::List;
    }

    fn handle_list(&mut self, cmd: &Command) -> Effects {
        match cmd {
            Command::MoveUp | Command::MoveLeft | Command::FocusPrev => self.cursor.up(),
            Command::MoveDown | Command::MoveRight | Command::FocusNext => {
                self.cursor.down(self.rows())
            }
            Command::Activate => match self.selected_lesson().map(|l| l.id) {
                Some(id) => {
                    self.practicing = Some(id);
                    self.practice_running = false;
                    self.sub_view = CustomView::Practice;
                }
                None => {
                    self.reset_form();
                    self.sub_view = CustomView::Create;
                }
            },
            Command::Delete => {
                if let Some(lesson) = self.selected_lesson() {
                    return vec![Effect::confirm(
                        DELETE_PROMPT,
                        ConfirmAction::DeleteCustomLesson(lesson.id),
                    )];
                }
            }
            Command::Back => return vec![Effect::navigate(NavAction::Back)],
            _ => {}
        }
        Vec::new()
    }

    fn handle_create(&mut self, cmd: &Command) -> Effects {
        if matches!(cmd, Command::Back) {
            self.cancel();
            return Vec::new();
        }
        if self.focus.handle_movement(cmd) {
            return Vec::new();
        }
        if cmd.is_editing() {
            match self.focus.current() {
                Some(CreateSlot::Title) => {
                    self.title.apply(cmd);
                }
                Some(CreateSlot::Content) => {
                    self.content.apply(cmd);
                }
                _ => {}
            }
            return Vec::new();
        }
        match (cmd, self.focus.current()) {
            (Command::MoveRight, Some(CreateSlot::Difficulty)) => {
                self.difficulty = self.difficulty.next()
            }
            (Command::MoveLeft, Some(CreateSlot::Difficulty)) => {
                self.difficulty = self.difficulty.prev()
            }
            (Command::Activate, Some(CreateSlot::Difficulty)) => {
                self.difficulty = self.difficulty.next()
            }
            (Command::Activate, Some(CreateSlot::Title | CreateSlot::Content)) => self.focus.next(),
            (Command::Activate, Some(CreateSlot::Save)) => return self.save(),
            (Command::Activate, Some(CreateSlot::Cancel)) => self.cancel(),
            _ => {}
        }
        Vec::new()
    }

    fn handle_practice(&mut self, cmd: &Command) -> Effects {
        match cmd {
            Command::Activate | Command::Record => self.start_practice(),
            Command::Back => {
                self.leave_practice();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }
}

impl Module for CustomContentState {
    fn view(&self) -> View {
        View::CustomContent
    }

    fn handle(&mut self, cmd: &Command, _scorer: &mut dyn PronunciationScorer) -> Effects {
        match self.sub_view {
            CustomView::List => self.handle_list(cmd),
            CustomView::Create => self.handle_create(cmd),
            CustomView::Practice => self.handle_practice(cmd),
        }
    }

    fn on_timer(&mut self, event: TimerEvent, _scorer: &mut dyn PronunciationScorer) -> Effects {
        match event {
            TimerEvent::PracticeDone { session }
                if self.practice_running && session == self.practice_session =>
            {
                self.practice_running = false;
                tracing::info!(lesson = ?self.practicing, "practice session finished");
                vec![Effect::alert(PRACTICE_DONE)]
            }
            _ => Vec::new(),
        }
    }

    fn on_confirm(&mut self, action: ConfirmAction) -> Effects {
        let ConfirmAction::DeleteCustomLesson(id) = action;
        let before = self.lessons.len();
        self.lessons.retain(|l| l.id != id);
        if self.lessons.len() < before {
            tracing::info!(id, "custom lesson deleted");
        }
        self.cursor.clamp(self.rows());
        Vec::new()
    }

    fn is_editing(&self) -> bool {
        self.sub_view == CustomView::Create
            && matches!(
                self.focus.current(),
                Some(CreateSlot::Title | CreateSlot::Content)
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::ScriptedScorer;

    fn type_text(state: &mut CustomContentState, text: &str) {
        let mut scorer = ScriptedScorer::new();
        for c in text.chars() {
            state.handle(&Command::InsertChar(c), &mut scorer);
        }
    }

    #[test]
    fn test_starts_with_sample_lesson() {
        let state = CustomContentState::default();
        assert_eq!(state.lessons.len(), 1);
        assert_eq!(state.lessons[0].id, 1);
        assert_eq!(state.lessons[0].title, SAMPLE_CUSTOM_TITLE);
    }

    #[test]
    fn test_save_requires_title_and_content() {
        let mut scorer = ScriptedScorer::new();
        let mut state = CustomContentState::default();
        state.handle(&Command::Activate, &mut scorer);
        assert_eq!(state.sub_view, CustomView::Create);

        type_text(&mut state, "Only a title");
        state.focus.focus(CreateSlot::Save);
        let effects = state.handle(&Command::Activate, &mut scorer);
        assert_eq!(
            effects,
            vec![Effect::alert("Please fill in both title and content!")]
        );
        assert_eq!(state.lessons.len(), 1);
        assert_eq!(state.sub_view, CustomView::Create);
    }

    #[test]
    fn test_save_appends_lesson_with_fresh_id() {
        let mut scorer = ScriptedScorer::new();
        let mut state = CustomContentState::default();
        state.handle(&Command::Activate, &mut scorer);
        type_text(&mut state, "Robots");
        state.handle(&Command::Activate, &mut scorer);
        type_text(&mut state, "Robots can talk.");
        state.handle(&Command::Activate, &mut scorer);
        state.handle(&Command::MoveRight, &mut scorer);
        state.handle(&Command::FocusNext, &mut scorer);

        assert!(state.handle(&Command::Activate, &mut scorer).is_empty());
        assert_eq!(state.sub_view, CustomView::List);
        let saved = &state.lessons[1];
        assert_eq!(saved.id, 2);
        assert_eq!(saved.title, "Robots");
        assert_eq!(saved.difficulty, Difficulty::Medium);
        assert!(state.title.is_empty());
    }

    #[test]
    fn test_cancel_resets_form() {
        let mut scorer = ScriptedScorer::new();
        let mut state = CustomContentState::default();
        state.handle(&Command::Activate, &mut scorer);
        type_text(&mut state, "Draft");
        state.handle(&Command::Back, &mut scorer);

        assert_eq!(state.sub_view, CustomView::List);
        assert!(state.title.is_empty());
        assert_eq!(state.lessons.len(), 1);
    }

    #[test]
    fn test_delete_only_on_confirm() {
        let mut scorer = ScriptedScorer::new();
        let mut state = CustomContentState::default();
        state.handle(&Command::MoveDown, &mut scorer);

        let effects = state.handle(&Command::Delete, &mut scorer);
        assert_eq!(
            effects,
            vec![Effect::confirm(
                DELETE_PROMPT,
                ConfirmAction::DeleteCustomLesson(1)
            )]
        );
        assert_eq!(state.lessons.len(), 1);

        state.on_confirm(ConfirmAction::DeleteCustomLesson(1));
        assert!(state.is_empty());
        assert_eq!(state.cursor.selected(), 0);
    }

    #[test]
    fn test_delete_on_create_row_does_nothing() {
        let mut state = CustomContentState::default();
        assert!(state
            .handle(&Command::Delete, &mut ScriptedScorer::new())
            .is_empty());
    }

    #[test]
    fn test_practice_alerts_when_done() {
        let mut scorer = ScriptedScorer::new();
        let mut state = CustomContentState::default();
        state.handle(&Command::MoveDown, &mut scorer);
        state.handle(&Command::Activate, &mut scorer);
        assert_eq!(state.sub_view, CustomView::Practice);

        let effects = state.handle(&Command::Activate, &mut scorer);
        assert_eq!(
            effects,
            vec![Effect::schedule(
                PRACTICE_LENGTH,
                TimerEvent::PracticeDone { session: 1 }
            )]
        );
        // Already running
        assert!(state.handle(&Command::Activate, &mut scorer).is_empty());

        let effects = state.on_timer(TimerEvent::PracticeDone { session: 1 }, &mut scorer);
        assert_eq!(effects, vec![Effect::alert(PRACTICE_DONE)]);
        assert!(!state.practice_running);
    }

    #[test]
    fn test_leaving_practice_drops_timer() {
        let mut scorer = ScriptedScorer::new();
        let mut state = CustomContentState::default();
        state.handle(&Command::MoveDown, &mut scorer);
        state.handle(&Command::Activate, &mut scorer);
        state.handle(&Command::Activate, &mut scorer);
        state.handle(&Command::Back, &mut scorer);

        let effects = state.on_timer(TimerEvent::PracticeDone { session: 1 }, &mut scorer);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_editing_only_in_text_fields() {
        let mut scorer = ScriptedScorer::new();
        let mut state = CustomContentState::default();
        assert!(!state.is_editing());
        state.handle(&Command::Activate, &mut scorer);
        assert!(state.is_editing());
        state.focus.focus(CreateSlot::Difficulty);
        assert!(!state.is_editing());
    }
}
