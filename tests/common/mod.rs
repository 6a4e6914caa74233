//! Common test utilities for integration tests.
//!
//! Builders for an [`App`] wired to a [`ScriptedScorer`], key helpers that go
//! through the real keybinding registry, and a TestBackend renderer.
//!
//! # Example
//!
//! ```ignore
//! use common::{press, test_app, type_text};
//! use crossterm::event::KeyCode;
//!
//! let (mut app, _scorer) = test_app();
//! press(&mut app, KeyCode::Down);
//! press(&mut app, KeyCode::Enter);
//! type_text(&mut app, "kid@example.com");
//! ```

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tokio::sync::mpsc;

use mello::adapters::mock::ScriptedScorer;
use mello::app::{App, AppMessage};
use mello::domain::View;
use mello::startup::AppConfig;
use mello::ui;

/// App on the home view, plus a handle to its scorer.
pub fn test_app() -> (App, ScriptedScorer) {
    test_app_with(AppConfig::default(), ScriptedScorer::new())
}

pub fn test_app_with(config: AppConfig, scorer: ScriptedScorer) -> (App, ScriptedScorer) {
    let handle = scorer.clone();
    (App::with_scorer(&config, Box::new(scorer)), handle)
}

pub fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(make_key_event(code, KeyModifiers::NONE));
}

pub fn press_ctrl(app: &mut App, c: char) {
    app.handle_key(make_key_event(KeyCode::Char(c), KeyModifiers::CONTROL));
}

/// Type `text` one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Home -> Login -> Dashboard using only keys.
pub fn sign_in(app: &mut App) {
    assert_eq!(app.current_view(), View::Home);
    press(app, KeyCode::Down); // SIGN IN card
    press(app, KeyCode::Enter);
    assert_eq!(app.current_view(), View::Login);

    type_text(app, "kid@example.com");
    press(app, KeyCode::Tab);
    type_text(app, "secret");
    press(app, KeyCode::Enter);
    assert_eq!(app.current_view(), View::Dashboard);
}

/// Move the dashboard cursor down `index` rows and open that entry.
pub fn open_dashboard_entry(app: &mut App, index: usize) {
    assert_eq!(app.current_view(), View::Dashboard);
    for _ in 0..index {
        press(app, KeyCode::Down);
    }
    press(app, KeyCode::Enter);
}

/// Take the app's message receiver so a test can drain timers itself.
pub fn take_receiver(app: &mut App) -> mpsc::UnboundedReceiver<AppMessage> {
    app.message_rx.take().expect("receiver already taken")
}

/// Wait for the next timer and hand it to the app. Paused-clock tests
/// auto-advance to the deadline.
pub async fn fire_next(app: &mut App, rx: &mut mpsc::UnboundedReceiver<AppMessage>) {
    let msg = rx.recv().await.expect("channel closed");
    app.handle_message(msg);
}

/// Render `app` into a `width` x `height` buffer and return its text.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test backend");
    terminal.draw(|f| ui::render(f, app)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}
