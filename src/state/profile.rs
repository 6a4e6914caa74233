//! Profile details and app settings.

use crate::domain::catalog::{PROFILE_EMAIL, PROFILE_NAME};
use crate::domain::{NavAction, View};
use crate::input::Command;
use crate::traits::PronunciationScorer;
use crate::widgets::InputBox;

use super::form::FocusSlots;
use super::{Effect, Effects, Module};

pub const SETTINGS_SAVED: &str = "Settings saved successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSlot {
    Name,
    Email,
    Sound,
    Animations,
    DarkMode,
    Notifications,
    Save,
    Back,
}

const ORDER: &[ProfileSlot] = &[
    ProfileSlot::Name,
    ProfileSlot::Email,
    ProfileSlot::Sound,
    ProfileSlot::Animations,
    ProfileSlot::DarkMode,
    ProfileSlot::Notifications,
    ProfileSlot::Save,
    ProfileSlot::Back,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSettings {
    pub sound: bool,
    pub animations: bool,
    pub dark_mode: bool,
    pub notifications: bool,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            sound: true,
            animations: true,
            dark_mode: false,
            notifications: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileState {
    pub name: InputBox,
    pub email: InputBox,
    pub settings: ProfileSettings,
    pub focus: FocusSlots<ProfileSlot>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            name: InputBox::new().with_content(PROFILE_NAME),
            email: InputBox::new().with_content(PROFILE_EMAIL),
            settings: ProfileSettings::default(),
            focus: FocusSlots::new(ORDER),
        }
    }
}

impl ProfileState {
    fn toggle(&mut self, slot: ProfileSlot) -> Effects {
        let settings = &mut self.settings;
        match slot {
            ProfileSlot::Sound => settings.sound = !settings.sound,
            ProfileSlot::Animations => settings.animations = !settings.animations,
            ProfileSlot::Notifications => settings.notifications = !settings.notifications,
            ProfileSlot::DarkMode => {
                settings.dark_mode = !settings.dark_mode;
                // Mirrors the header toggle
                return vec![Effect::ToggleTheme];
            }
            _ => {}
        }
        Vec::new()
    }
}

impl Module for ProfileState {
    fn view(&self) -> View {
        View::Profile
    }

    fn handle(&mut self, cmd: &Command, _scorer: &mut dyn PronunciationScorer) -> Effects {
        if matches!(cmd, Command::Back) {
            return vec![Effect::navigate(NavAction::Back)];
        }
        if self.focus.handle_movement(cmd) {
            return Vec::new();
        }
        if cmd.is_editing() {
            match self.focus.current() {
                Some(ProfileSlot::Name) => {
                    self.name.apply(cmd);
                }
                Some(ProfileSlot::Email) => {
                    self.email.apply(cmd);
                }
                _ => {}
            }
            return Vec::new();
        }
        if !matches!(cmd, Command::Activate) {
            return Vec::new();
        }
        match self.focus.current() {
            Some(ProfileSlot::Name | ProfileSlot::Email) => {
                self.focus.next();
                Vec::new()
            }
            Some(ProfileSlot::Save) => {
                tracing::info!(settings = ?self.settings, "profile saved");
                vec![Effect::alert(SETTINGS_SAVED)]
            }
            Some(ProfileSlot::Back) => vec![Effect::navigate(NavAction::Back)],
            Some(slot) => self.toggle(slot),
            None => Vec::new(),
        }
    }

    fn is_editing(&self) -> bool {
        matches!(
            self.focus.current(),
            Some(ProfileSlot::Name | ProfileSlot::Email)
        )
    }
}
