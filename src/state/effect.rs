//! Requests a screen hands back to the root controller.
//!
//! Screens never touch the router, the dialog layer or the timer scheduler
//! directly. Each command or timer callback returns a list of [`Effect`]s and
//! [`App`](crate::app::App) applies them in order.

use std::time::Duration;

use serde::Serialize;

use crate::domain::{Cycle, NavAction};

/// Something a screen wants done outside its own state.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Resolve a navigation action through the transition table.
    Navigate(NavAction),
    /// Show a blocking alert.
    Alert(String),
    /// Ask a yes/no question; `action` comes back through `on_confirm` on yes.
    Confirm {
        message: String,
        action: ConfirmAction,
    },
    /// Deliver `timer` back to the screen after `after`.
    Schedule { after: Duration, timer: TimerEvent },
    /// Switch between dark and light mode.
    ToggleTheme,
}

impl Effect {
    pub fn navigate(action: NavAction) -> Self {
        Effect::Navigate(action)
    }

    pub fn alert(message: impl Into<String>) -> Self {
        Effect::Alert(message.into())
    }

    pub fn confirm(message: impl Into<String>, action: ConfirmAction) -> Self {
        Effect::Confirm {
            message: message.into(),
            action,
        }
    }

    pub fn schedule(after: Duration, timer: TimerEvent) -> Self {
        Effect::Schedule { after, timer }
    }
}

/// Effects produced by one call into a screen.
pub type Effects = Vec<Effect>;

/// Follow-up for a confirm dialog answered with yes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfirmAction {
    DeleteCustomLesson(u64),
}

/// Simulated asynchronous work finishing.
///
/// Events tied to a recording attempt carry its cycle; playback events carry
/// the token handed out when the playback started. A screen drops any event
/// whose cycle or token is no longer current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimerEvent {
    /// A recorded word finished processing and can be graded.
    WordProcessed { cycle: Cycle },
    /// The grade overlay for a word should close.
    WordResultExpired { cycle: Cycle },
    /// A speech recording ran its full length.
    RecordingElapsed { cycle: Cycle },
    /// Simulated audio finished playing.
    PlaybackDone { token: u64 },
    /// Advance reading progress by one step for reading run `run`.
    ReadingTick { run: u64 },
    /// A custom lesson practice session is over.
    PracticeDone { session: u64 },
    /// The coach's answer to a user message is ready.
    ChatReply { message_id: u64 },
    /// Clear the contact form after the thank-you note.
    ContactReset,
}

impl TimerEvent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            TimerEvent::WordProcessed { .. } => "word-processed",
            TimerEvent::WordResultExpired { .. } => "word-result-expired",
            TimerEvent::RecordingElapsed { .. } => "recording-elapsed",
            TimerEvent::PlaybackDone { .. } => "playback-done",
            TimerEvent::ReadingTick { .. } => "reading-tick",
            TimerEvent::PracticeDone { .. } => "practice-done",
            TimerEvent::ChatReply { .. } => "chat-reply",
            TimerEvent::ContactReset => "contact-reset",
        }
    }
}

/// Simulated playback with a token per run.
///
/// Toggling playback off and on again hands out a new token, so the end
/// timer of the first run cannot stop the second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Playback {
    playing: Option<u64>,
    last_token: u64,
}

impl Playback {
    pub fn is_playing(&self) -> bool {
        self.playing.is_some()
    }

    /// Start playing, returning the timer that ends this run.
    pub fn start(&mut self, length: Duration) -> Effect {
        self.last_token += 1;
        self.playing = Some(self.last_token);
        Effect::schedule(
            length,
            TimerEvent::PlaybackDone {
                token: self.last_token,
            },
        )
    }

    /// Start if stopped, stop if playing.
    pub fn toggle(&mut self, length: Duration) -> Option<Effect> {
        if self.is_playing() {
            self.stop();
            None
        } else {
            Some(self.start(length))
        }
    }

    pub fn stop(&mut self) {
        self.playing = None;
    }

    /// Handle the end timer; returns whether it matched the current run.
    pub fn finish(&mut self, token: u64) -> bool {
        if self.playing == Some(token) {
            self.playing = None;
            true
        } else {
            false
        }
    }
}
