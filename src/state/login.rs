//! Sign-in form. Any non-empty email and password are accepted.

use crate::domain::forms::check_login;
use crate::domain::{NavAction, View};
use crate::input::Command;
use crate::traits::PronunciationScorer;
use crate::widgets::{InputBox, Mello, MelloMood};

use super::form::FocusSlots;
use super::{Effect, Effects, Module};

pub const LOGIN_GREETING: &str = "Welcome back! Sign in to continue your learning journey! 👋";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginSlot {
    Email,
    Password,
    ShowPassword,
    SignIn,
    ForgotPassword,
    SignUp,
    Back,
}

const ORDER: &[LoginSlot] = &[
    LoginSlot::Email,
    LoginSlot::Password,
    LoginSlot::ShowPassword,
    LoginSlot::SignIn,
    LoginSlot::ForgotPassword,
    LoginSlot::SignUp,
    LoginSlot::Back,
];

#[derive(Debug, Clone)]
pub struct LoginState {
    pub email: InputBox,
    pub password: InputBox,
    pub show_password: bool,
    pub focus: FocusSlots<LoginSlot>,
    pub mello: Mello,
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            email: InputBox::new(),
            password: InputBox::new(),
            show_password: false,
            focus: FocusSlots::new(ORDER),
            mello: Mello::new(MelloMood::Waving, LOGIN_GREETING),
        }
    }
}

impl LoginState {
    fn submit(&self) -> Effects {
        match check_login(self.email.text(), self.password.text()) {
            Ok(()) => {
                tracing::info!("signed in");
                vec![Effect::navigate(NavAction::LoginSucceeded)]
            }
            Err(err) => vec![Effect::alert(err.to_string())],
        }
    }
}

impl Module for LoginState {
    fn view(&self) -> View {
        View::Login
    }

    fn handle(&mut self, cmd: &Command, _scorer: &mut dyn PronunciationScorer) -> Effects {
        if self.focus.handle_movement(cmd) {
            return Vec::new();
        }
        if cmd.is_editing() {
            match self.focus.current() {
                Some(LoginSlot::Email) => {
                    self.email.apply(cmd);
                }
                Some(LoginSlot::Password) => {
                    self.password.apply(cmd);
                }
                _ => {}
            }
            return Vec::new();
        }
        match cmd {
            Command::Activate => match self.focus.current() {
                Some(LoginSlot::Email) => self.focus.next(),
                Some(LoginSlot::Password | LoginSlot::SignIn) => return self.submit(),
                Some(LoginSlot::ShowPassword) => self.show_password = !self.show_password,
                Some(LoginSlot::ForgotPassword) => {
                    return vec![Effect::navigate(NavAction::ForgotPassword)]
                }
                Some(LoginSlot::SignUp) => {
                    return vec![Effect::navigate(NavAction::Open(View::Signup))]
                }
                Some(LoginSlot::Back) => return vec![Effect::navigate(NavAction::Back)],
                None => {}
            },
            Command::Back => return vec![Effect::navigate(NavAction::Back)],
            Command::DismissMello => self.mello.dismiss(),
            _ => {}
        }
        Vec::new()
    }

    fn is_editing(&self) -> bool {
        matches!(
            self.focus.current(),
            Some(LoginSlot::Email | LoginSlot::Password)
        )
    }
}
