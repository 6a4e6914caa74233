//! Default keybindings for the application.
//!
//! This module defines the default key bindings that map key combinations
//! to commands. Screen hotkeys are only bound on the views that use them so
//! a stray `d` on the dashboard does nothing.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;
use crate::domain::View;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Creates a key combo with Alt modifier.
    pub const fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Global keybindings (always active)
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per modal type
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    /// Hotkeys per view (only when no text field has focus)
    pub screen: HashMap<View, HashMap<KeyCombo, Command>>,
    /// Keybindings when no text field has focus
    pub navigation: HashMap<KeyCombo, Command>,
    /// Keybindings when a text field has focus
    pub input_editing: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            screen: HashMap::new(),
            navigation: HashMap::new(),
            input_editing: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_modal_bindings();
        config.setup_screen_bindings();
        config.setup_navigation_bindings();
        config.setup_input_editing_bindings();

        config
    }

    /// Sets up global keybindings (always active).
    fn setup_global_bindings(&mut self) {
        // Ctrl+C: Quit
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);

        // Ctrl+T: Dark/light mode
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('t')), Command::ToggleTheme);
    }

    /// Sets up modal-specific keybindings.
    fn setup_modal_bindings(&mut self) {
        // Alert: every dismissal key means OK
        let mut alert = HashMap::new();
        alert.insert(KeyCombo::plain(KeyCode::Enter), Command::DialogConfirm);
        alert.insert(KeyCombo::plain(KeyCode::Esc), Command::DialogConfirm);
        alert.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::DialogConfirm);
        self.modal.insert(ModalType::Alert, alert);

        let mut confirm = HashMap::new();
        confirm.insert(KeyCombo::plain(KeyCode::Enter), Command::DialogConfirm);
        confirm.insert(KeyCombo::plain(KeyCode::Char('y')), Command::DialogConfirm);
        confirm.insert(KeyCombo::shift(KeyCode::Char('Y')), Command::DialogConfirm);
        confirm.insert(KeyCombo::plain(KeyCode::Esc), Command::DialogCancel);
        confirm.insert(KeyCombo::plain(KeyCode::Char('n')), Command::DialogCancel);
        confirm.insert(KeyCombo::shift(KeyCode::Char('N')), Command::DialogCancel);
        self.modal.insert(ModalType::Confirm, confirm);
    }

    /// Sets up per-view hotkeys.
    fn setup_screen_bindings(&mut self) {
        let record = (KeyCombo::plain(KeyCode::Char('r')), Command::Record);
        let listen = (KeyCombo::plain(KeyCode::Char('h')), Command::Listen);
        let next = (KeyCombo::plain(KeyCode::Char('n')), Command::NextItem);
        let prev = (KeyCombo::plain(KeyCode::Char('p')), Command::PrevItem);
        let logout = (KeyCombo::plain(KeyCode::Char('l')), Command::Logout);
        // Some terminals report Shift+r without the SHIFT modifier
        let restart = [
            (KeyCombo::shift(KeyCode::Char('R')), Command::Restart),
            (KeyCombo::plain(KeyCode::Char('R')), Command::Restart),
        ];
        let delete = [
            (KeyCombo::plain(KeyCode::Char('d')), Command::Delete),
            (KeyCombo::plain(KeyCode::Delete), Command::Delete),
        ];

        let mut academic = HashMap::from([record.clone(), listen.clone(), next.clone(), prev.clone()]);
        academic.extend(restart.clone());
        self.screen.insert(View::AcademicSamples, academic);

        let mut speeches = HashMap::from([record.clone(), listen.clone()]);
        speeches.extend(restart);
        self.screen.insert(View::FamousSpeeches, speeches);

        self.screen
            .insert(View::MyLessons, HashMap::from([record.clone(), listen]));

        self.screen
            .insert(View::Ielts, HashMap::from([record, next, prev]));

        self.screen
            .insert(View::CustomContent, HashMap::from(delete));

        self.screen
            .insert(View::Dashboard, HashMap::from([logout.clone()]));
        self.screen
            .insert(View::Application, HashMap::from([logout]));
    }

    /// Sets up bindings used when no text field has focus.
    fn setup_navigation_bindings(&mut self) {
        let nav = &mut self.navigation;
        nav.insert(KeyCombo::plain(KeyCode::Tab), Command::FocusNext);
        nav.insert(KeyCombo::shift(KeyCode::BackTab), Command::FocusPrev);
        nav.insert(KeyCombo::plain(KeyCode::BackTab), Command::FocusPrev);
        nav.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        nav.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        nav.insert(KeyCombo::plain(KeyCode::Left), Command::MoveLeft);
        nav.insert(KeyCombo::plain(KeyCode::Right), Command::MoveRight);
        nav.insert(KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp);
        nav.insert(KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown);
        nav.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        nav.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::Activate);
        nav.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        nav.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        nav.insert(KeyCombo::plain(KeyCode::Char('m')), Command::DismissMello);
    }

    /// Sets up bindings used while a text field has focus.
    fn setup_input_editing_bindings(&mut self) {
        let edit = &mut self.input_editing;
        edit.insert(KeyCombo::plain(KeyCode::Tab), Command::FocusNext);
        edit.insert(KeyCombo::shift(KeyCode::BackTab), Command::FocusPrev);
        edit.insert(KeyCombo::plain(KeyCode::BackTab), Command::FocusPrev);
        edit.insert(KeyCombo::plain(KeyCode::Up), Command::FocusPrev);
        edit.insert(KeyCombo::plain(KeyCode::Down), Command::FocusNext);
        edit.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        edit.insert(KeyCombo::alt(KeyCode::Enter), Command::InsertNewline);
        edit.insert(KeyCombo::shift(KeyCode::Enter), Command::InsertNewline);
        edit.insert(KeyCombo::ctrl(KeyCode::Char('j')), Command::InsertNewline);
        edit.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        edit.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        edit.insert(KeyCombo::plain(KeyCode::Delete), Command::DeleteChar);
        edit.insert(KeyCombo::plain(KeyCode::Left), Command::MoveCursorLeft);
        edit.insert(KeyCombo::plain(KeyCode::Right), Command::MoveCursorRight);
        edit.insert(KeyCombo::plain(KeyCode::Home), Command::MoveCursorHome);
        edit.insert(KeyCombo::plain(KeyCode::End), Command::MoveCursorEnd);
        edit.insert(KeyCombo::ctrl(KeyCode::Char('a')), Command::MoveCursorHome);
        edit.insert(KeyCombo::ctrl(KeyCode::Char('e')), Command::MoveCursorEnd);
    }

    /// Looks up a global binding.
    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    /// Looks up a binding for the given modal.
    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|m| m.get(combo))
    }

    /// Looks up a hotkey for the given view.
    pub fn get_screen(&self, view: View, combo: &KeyCombo) -> Option<&Command> {
        self.screen.get(&view).and_then(|m| m.get(combo))
    }

    /// Looks up a navigation binding.
    pub fn get_navigation(&self, combo: &KeyCombo) -> Option<&Command> {
        self.navigation.get(combo)
    }

    /// Looks up an editing binding.
    pub fn get_input_editing(&self, combo: &KeyCombo) -> Option<&Command> {
        self.input_editing.get(combo)
    }

    /// Footer hints for a view: `(key label, description)` pairs.
    pub fn hints_for(&self, view: View, editing: bool) -> Vec<(String, &'static str)> {
        let mut hints: Vec<(String, &'static str)> = [("Tab", "next"), ("Enter", "select"), ("Esc", "back")]
            .into_iter()
            .map(|(key, desc)| (key.to_string(), desc))
            .collect();
        if editing {
            return hints;
        }
        if let Some(bindings) = self.screen.get(&view) {
            let mut screen: Vec<_> = bindings
                .iter()
                .filter_map(|(combo, cmd)| match combo.code {
                    KeyCode::Char(c) if combo.modifiers == KeyModifiers::NONE => {
                        cmd.hint_label().map(|label| (c.to_string(), label))
                    }
                    _ => None,
                })
                .collect();
            screen.sort_unstable();
            screen.dedup();
            hints.extend(screen);
        }
        hints.push(("Ctrl+T".to_string(), "theme"));
        hints.push(("q".to_string(), "quit"));
        hints
    }
}
