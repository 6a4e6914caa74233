//! Key event to [`Command`] resolution.
//!
//! Lookup order, first match wins:
//! 1. Ctrl+C, even over a dialog
//! 2. the front dialog's bindings; any other key is swallowed as `Noop`
//! 3. global bindings (Ctrl+T)
//! 4. with a focused field: editing bindings, then printable characters
//! 5. without one: the view's hotkeys, then navigation

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};

#[derive(Debug, Clone)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// A character typed into a field. Shift is allowed, other modifiers are not.
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            Some(c)
        }
        _ => None,
    }
}

impl CommandRegistry {
    /// Registry with the default bindings from [`KeybindingConfig::new`].
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    /// Resolve `key` in `context`, following the lookup order above.
    ///
    /// Returns `None` when the key is unbound in this context. Under a
    /// dialog every key resolves to something, unbound ones to
    /// [`Command::Noop`].
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if is_interrupt(&key) {
            return Some(Command::Quit);
        }

        let combo = KeyCombo::new(key.code, key.modifiers);
        if let Some(modal) = context.modal {
            let bound = self.config.get_modal(modal, &combo).cloned();
            return Some(bound.unwrap_or(Command::Noop));
        }

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd.clone());
        }

        if context.takes_text() {
            self.config
                .get_input_editing(&combo)
                .cloned()
                .or_else(|| typed_char(&key).map(Command::InsertChar))
        } else {
            self.config
                .get_screen(context.view, &combo)
                .or_else(|| self.config.get_navigation(&combo))
                .cloned()
        }
    }

    /// Bindings, for the footer hints.
    pub fn config(&self) -> &KeybindingConfig {
        &self.config
    }
}
