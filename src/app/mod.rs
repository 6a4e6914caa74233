//! Application state and logic for the TUI.
//!
//! [`App`] is the root controller. It owns the router, the mounted screen,
//! the dialog stack, the theme and the timer scheduler, and it is the only
//! place [`Effect`]s are applied:
//! - [`AppMessage`] - messages from background timer tasks
//! - [`Dialog`] - blocking alert/confirm prompts
//! - [`Scheduler`] - cancellable timers

mod dialog;
mod messages;
mod timers;

pub use dialog::Dialog;
pub use messages::AppMessage;
pub use timers::{Scheduler, TimerId};

use std::collections::VecDeque;

use crossterm::event::KeyEvent;
use serde::Serialize;
use tokio::sync::mpsc;

use crate::adapters::RandomScorer;
use crate::domain::{NavAction, Navigator, View};
use crate::input::{Command, CommandRegistry, InputContext};
use crate::startup::AppConfig;
use crate::state::{ConfirmAction, Effect, Effects, ModuleState};
use crate::traits::PronunciationScorer;
use crate::ui::theme::ThemeMode;
use crate::ui::components::get_spinner_char;
use crate::widgets::mello::is_blinking;

/// Serializable view of the app for logs and tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppSnapshot {
    pub view: View,
    pub theme: ThemeMode,
    pub dialog: Option<Dialog>,
    pub pending_timers: usize,
    pub transitions: u64,
    pub editing: bool,
}

/// Root controller state.
pub struct App {
    pub navigator: Navigator,
    /// The mounted screen; rebuilt on every view change
    pub module: ModuleState,
    /// Open dialogs; the front one is shown and answered first
    pub dialogs: VecDeque<Dialog>,
    pub theme: ThemeMode,
    pub scheduler: Scheduler,
    scorer: Box<dyn PronunciationScorer>,
    pub registry: CommandRegistry,
    /// Set whenever something visible changed since the last draw
    pub needs_redraw: bool,
    /// UI ticks since start, drives the mascot blink
    pub tick_count: u64,
    pub should_quit: bool,
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// App with the RNG scorer, seeded from `config`.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_scorer(config, Box::new(RandomScorer::from_seed(config.seed)))
    }

    /// App with a custom scorer.
    pub fn with_scorer(config: &AppConfig, scorer: Box<dyn PronunciationScorer>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let scheduler = Scheduler::new(message_tx.clone()).with_scale(config.timer_scale);
        tracing::info!(scorer = scorer.name(), theme = %config.theme, "app created");

        let mut app = Self {
            navigator: Navigator::new(),
            module: ModuleState::default(),
            dialogs: VecDeque::new(),
            theme: config.theme,
            scheduler,
            scorer,
            registry: CommandRegistry::new(),
            needs_redraw: true,
            tick_count: 0,
            should_quit: false,
            terminal_width: 80,
            terminal_height: 24,
            message_tx,
            message_rx: Some(message_rx),
        };
        app.sync_module_theme();
        app
    }

    /// View the navigator is on; always matches the mounted module.
    pub fn current_view(&self) -> View {
        self.navigator.current()
    }

    /// Dialog currently capturing input.
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialogs.front()
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the UI clock.
    pub fn tick(&mut self) {
        let before = self.tick_count;
        self.tick_count = self.tick_count.wrapping_add(1);
        let after = self.tick_count;
        if is_blinking(after) != is_blinking(before)
            || get_spinner_char(after) != get_spinner_char(before)
        {
            self.mark_dirty();
        }
    }

    /// Record a resize and redraw.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Snapshot of the state key dispatch depends on.
    pub fn build_input_context(&self) -> InputContext {
        InputContext {
            view: self.current_view(),
            modal: self.dialog().map(Dialog::modal_type),
            editing: self.module.is_editing(),
        }
    }

    /// Resolve and run a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let context = self.build_input_context();
        if let Some(cmd) = self.registry.dispatch(key, &context) {
            self.execute_command(cmd);
        }
    }

    /// Bracketed paste goes to the focused text field, if any.
    pub fn handle_paste(&mut self, text: String) {
        if self.dialog().is_none() && self.module.is_editing() {
            self.execute_command(Command::Paste(text));
        }
    }

    /// Run a resolved command.
    ///
    /// Quit, theme and dialog answers are handled here. Everything else goes
    /// to the mounted module, unless a dialog is open, and its effects are
    /// applied.
    pub fn execute_command(&mut self, cmd: Command) {
        if cmd.marks_dirty() {
            self.mark_dirty();
        }
        match cmd {
            Command::Quit => {
                tracing::info!("quit requested");
                self.should_quit = true;
            }
            Command::ToggleTheme => self.toggle_theme(),
            Command::DialogConfirm => self.answer_dialog(true),
            Command::DialogCancel => self.answer_dialog(false),
            Command::Noop => {}
            cmd => {
                if self.dialog().is_some() {
                    return;
                }
                let effects = self.module.handle(&cmd, self.scorer.as_mut());
                self.apply_effects(effects);
            }
        }
    }

    /// Handle a message from a background task.
    ///
    /// A timer whose id is no longer live is ignored.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::TimerFired { id, event } => {
                // Cancelled or from a previous screen
                if self.scheduler.take_fired(id).is_none() {
                    return;
                }
                tracing::debug!(id, timer = event.name(), "timer fired");
                self.mark_dirty();
                let effects = self.module.on_timer(event, self.scorer.as_mut());
                self.apply_effects(effects);
            }
        }
    }

    /// Apply effects in order. A navigation unmounts the screen that produced
    /// the batch, so anything after it is dropped.
    pub fn apply_effects(&mut self, effects: Effects) {
        for effect in effects {
            match effect {
                Effect::Navigate(action) => {
                    if self.navigate(action) {
                        return;
                    }
                }
                Effect::Alert(message) => self.dialogs.push_back(Dialog::alert(message)),
                Effect::Confirm { message, action } => {
                    self.dialogs.push_back(Dialog::confirm(message, action))
                }
                Effect::Schedule { after, timer } => {
                    self.scheduler.schedule(after, timer);
                }
                Effect::ToggleTheme => self.toggle_theme(),
            }
            self.mark_dirty();
        }
    }

    /// Resolve `action` and remount on success. Returns whether the view changed.
    pub fn navigate(&mut self, action: NavAction) -> bool {
        let Some(to) = self.navigator.apply(action) else {
            return false;
        };
        self.scheduler.cancel_all();
        self.module = ModuleState::mount(to);
        self.sync_module_theme();
        self.mark_dirty();
        true
    }

    /// Flip dark/light and push the new mode into the mounted module.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::info!(theme = %self.theme, "theme toggled");
        self.sync_module_theme();
        self.mark_dirty();
    }

    fn answer_dialog(&mut self, yes: bool) {
        let Some(dialog) = self.dialogs.pop_front() else {
            return;
        };
        self.mark_dirty();
        let follow_up: Option<ConfirmAction> = if yes { dialog.on_yes() } else { None };
        if let Some(action) = follow_up {
            let effects = self.module.on_confirm(action);
            self.apply_effects(effects);
        }
    }

    /// Keep the profile's dark-mode switch in step with the header toggle.
    fn sync_module_theme(&mut self) {
        if let ModuleState::Profile(profile) = &mut self.module {
            profile.settings.dark_mode = self.theme.is_dark();
        }
    }

    /// Serializable summary of the app, logged on exit.
    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            view: self.current_view(),
            theme: self.theme,
            dialog: self.dialog().cloned(),
            pending_timers: self.scheduler.pending(),
            transitions: self.navigator.transitions(),
            editing: self.module.is_editing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::ScriptedScorer;
    use crate::input::ModalType;
    use crate::state::login::LoginSlot;
    use crate::state::TimerEvent;
    use std::time::Duration;

    fn app() -> App {
        App::with_scorer(&AppConfig::default(), Box::new(ScriptedScorer::new()))
    }

    #[test]
    fn test_starts_on_home() {
        let app = app();
        assert_eq!(app.current_view(), View::Home);
        assert_eq!(app.module.view(), View::Home);
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_navigation_remounts_module() {
        let mut app = app();
        assert!(app.navigate(NavAction::Open(View::Login)));
        assert_eq!(app.current_view(), View::Login);
        assert_eq!(app.module.view(), View::Login);

        // No table entry
        assert!(!app.navigate(NavAction::Logout));
        assert_eq!(app.current_view(), View::Login);
    }

    #[test]
    fn test_alert_blocks_module_input() {
        let mut app = app();
        app.navigate(NavAction::Open(View::Login));
        if let ModuleState::Login(login) = &mut app.module {
            login.focus.focus(LoginSlot::Password);
        }
        app.execute_command(Command::Activate);
        assert_eq!(
            app.dialog(),
            Some(&Dialog::alert("Please enter your email and password"))
        );

        app.execute_command(Command::InsertChar('a'));
        let ModuleState::Login(login) = &app.module else {
            panic!("expected login");
        };
        assert!(login.password.is_empty());

        app.execute_command(Command::DialogConfirm);
        assert!(app.dialog().is_none());
    }

    #[test]
    fn test_confirm_yes_runs_follow_up() {
        let mut app = app();
        app.navigate(NavAction::Open(View::Login));
        app.navigate(NavAction::LoginSucceeded);
        app.navigate(NavAction::Open(View::CustomContent));
        app.execute_command(Command::MoveDown);
        app.execute_command(Command::Delete);
        assert_eq!(app.dialog().map(Dialog::modal_type), Some(ModalType::Confirm));

        app.execute_command(Command::DialogCancel);
        let ModuleState::CustomContent(custom) = &app.module else {
            panic!("expected custom content");
        };
        assert_eq!(custom.lessons.len(), 1);

        app.execute_command(Command::Delete);
        app.execute_command(Command::DialogConfirm);
        let ModuleState::CustomContent(custom) = &app.module else {
            panic!("expected custom content");
        };
        assert!(custom.lessons.is_empty());
    }

    #[test]
    fn test_theme_toggle_syncs_profile() {
        let mut app = app();
        assert_eq!(app.theme, ThemeMode::Dark);
        app.execute_command(Command::ToggleTheme);
        assert_eq!(app.theme, ThemeMode::Light);

        app.navigate(NavAction::Open(View::Login));
        app.navigate(NavAction::LoginSucceeded);
        app.navigate(NavAction::Open(View::Profile));
        let ModuleState::Profile(profile) = &app.module else {
            panic!("expected profile");
        };
        assert!(!profile.settings.dark_mode);
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_cancels_timers() {
        let mut app = app();
        app.apply_effects(vec![Effect::schedule(
            Duration::from_secs(3),
            TimerEvent::ContactReset,
        )]);
        assert_eq!(app.scheduler.pending(), 1);

        app.navigate(NavAction::Open(View::About));
        assert_eq!(app.scheduler.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_timer_message_is_ignored() {
        let mut app = app();
        app.navigate(NavAction::Open(View::Contact));
        app.needs_redraw = false;
        app.handle_message(AppMessage::TimerFired {
            id: 42,
            event: TimerEvent::ContactReset,
        });
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_navigate_effect_drops_rest_of_batch() {
        let mut app = app();
        app.apply_effects(vec![
            Effect::navigate(NavAction::Open(View::About)),
            Effect::alert("from the old screen"),
        ]);
        assert_eq!(app.current_view(), View::About);
        assert!(app.dialog().is_none());
    }

    #[test]
    fn test_snapshot_serializes() {
        let app = app();
        let json = serde_json::to_value(app.snapshot()).unwrap();
        assert_eq!(json["view"], "home");
        assert_eq!(json["theme"], "dark");
        assert_eq!(json["pending_timers"], 0);
    }
}
