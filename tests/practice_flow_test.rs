//! Timed practice flows: record, simulated scoring, result expiry.
//!
//! These run on a paused tokio clock. `fire_next` waits on the app channel,
//! so the runtime jumps straight to each timer's deadline.

mod common;

use std::time::Duration;

use common::{fire_next, open_dashboard_entry, press, sign_in, take_receiver, test_app_with, type_text};
use crossterm::event::KeyCode;
use mello::adapters::mock::ScriptedScorer;
use mello::app::App;
use mello::domain::{Sender, View, WordGrade};
use mello::startup::AppConfig;
use mello::state::my_lessons::LessonsView;
use mello::state::ModuleState;

fn academic(app: &App) -> &mello::state::AcademicSamplesState {
    match &app.module {
        ModuleState::AcademicSamples(state) => state,
        other => panic!("expected academic samples, got {:?}", other.view()),
    }
}

fn signed_in_with(scorer: ScriptedScorer) -> (App, ScriptedScorer) {
    let (mut app, handle) = test_app_with(AppConfig::default(), scorer);
    sign_in(&mut app);
    (app, handle)
}

#[tokio::test(start_paused = true)]
async fn test_word_attempt_is_graded_then_expires() {
    let scorer = ScriptedScorer::new().with_grades([WordGrade::Excellent]);
    let (mut app, handle) = signed_in_with(scorer);
    let mut rx = take_receiver(&mut app);

    open_dashboard_entry(&mut app, 1);
    assert_eq!(app.current_view(), View::AcademicSamples);
    press(&mut app, KeyCode::Enter); // first class

    press(&mut app, KeyCode::Char('r'));
    assert!(academic(&app).session.machine.is_recording());
    press(&mut app, KeyCode::Char('r'));
    assert!(academic(&app).session.machine.is_processing());
    assert_eq!(app.scheduler.pending(), 1);

    fire_next(&mut app, &mut rx).await;
    let session = &academic(&app).session;
    assert_eq!(session.last_grade, Some(WordGrade::Excellent));
    assert_eq!(session.overlay(), Some(WordGrade::Excellent));
    assert!(session.is_recorded(0));
    assert!(session.show_encouragement);
    assert_eq!(handle.graded_words().len(), 1);

    fire_next(&mut app, &mut rx).await;
    let session = &academic(&app).session;
    assert_eq!(session.overlay(), None);
    assert!(!session.show_encouragement);
    // Grade and the correct-pronunciation hint stay until the next attempt
    assert_eq!(session.last_grade, Some(WordGrade::Excellent));
    assert_eq!(app.scheduler.pending(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_needs_practice_does_not_mark_word() {
    let scorer = ScriptedScorer::new().with_grades([WordGrade::NeedsPractice]);
    let (mut app, _) = signed_in_with(scorer);
    let mut rx = take_receiver(&mut app);

    open_dashboard_entry(&mut app, 1);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('r'));
    press(&mut app, KeyCode::Char('r'));
    fire_next(&mut app, &mut rx).await;

    let session = &academic(&app).session;
    assert_eq!(session.last_grade, Some(WordGrade::NeedsPractice));
    assert!(!session.is_recorded(0));
    assert!(!session.show_encouragement);
}

#[tokio::test(start_paused = true)]
async fn test_moving_on_drops_pending_grade() {
    let (mut app, handle) = signed_in_with(ScriptedScorer::new());
    let mut rx = take_receiver(&mut app);

    open_dashboard_entry(&mut app, 1);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('r'));
    press(&mut app, KeyCode::Char('r'));
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(academic(&app).session.word_index, 1);

    fire_next(&mut app, &mut rx).await;
    let session = &academic(&app).session;
    assert!(session.machine.is_idle());
    assert_eq!(session.last_grade, None);
    assert!(handle.graded_words().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_leaving_the_view_cancels_timers() {
    let (mut app, handle) = signed_in_with(ScriptedScorer::new());
    let mut rx = take_receiver(&mut app);

    open_dashboard_entry(&mut app, 1);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('r'));
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.scheduler.pending(), 1);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current_view(), View::Application);
    assert_eq!(app.scheduler.pending(), 0);

    let waited = tokio::time::timeout(Duration::from_secs(30), rx.recv()).await;
    assert!(waited.is_err(), "cancelled timer still delivered");
    assert!(handle.graded_words().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_speech_reading_stops_itself() {
    let scorer = ScriptedScorer::new().with_passage_scores([92]);
    let (mut app, _) = signed_in_with(scorer);
    let mut rx = take_receiver(&mut app);

    open_dashboard_entry(&mut app, 3);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('r'));

    fire_next(&mut app, &mut rx).await;
    let ModuleState::FamousSpeeches(speeches) = &app.module else {
        panic!("expected famous speeches");
    };
    assert_eq!(speeches.score(), Some(92));
    assert!(speeches.feedback().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_lesson_reading_fills_progress() {
    let (mut app, _) = signed_in_with(ScriptedScorer::new());
    let mut rx = take_receiver(&mut app);

    open_dashboard_entry(&mut app, 0);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('r'));

    // 2% per tick
    for _ in 0..50 {
        fire_next(&mut app, &mut rx).await;
    }
    let ModuleState::MyLessons(lessons) = &app.module else {
        panic!("expected my lessons");
    };
    assert!(lessons.is_complete());
    assert!(!lessons.reading);
    assert_eq!(app.scheduler.pending(), 0);

    press(&mut app, KeyCode::Enter);
    let ModuleState::MyLessons(lessons) = &app.module else {
        panic!("expected my lessons");
    };
    assert_eq!(lessons.sub_view, LessonsView::List);
}

#[tokio::test(start_paused = true)]
async fn test_chat_coach_replies_after_delay() {
    let (mut app, _) = signed_in_with(ScriptedScorer::new());
    let mut rx = take_receiver(&mut app);

    open_dashboard_entry(&mut app, 4);
    assert_eq!(app.current_view(), View::Chat);
    type_text(&mut app, "How can I stop being nervous?");
    press(&mut app, KeyCode::Enter);

    let ModuleState::Chat(chat) = &app.module else {
        panic!("expected chat");
    };
    assert!(chat.is_typing());
    let sent = chat.messages.len();

    fire_next(&mut app, &mut rx).await;
    let ModuleState::Chat(chat) = &app.module else {
        panic!("expected chat");
    };
    assert!(!chat.is_typing());
    assert_eq!(chat.messages.len(), sent + 1);
    assert_eq!(chat.messages.last().map(|m| m.sender), Some(Sender::Ai));
}
