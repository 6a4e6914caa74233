//! Domain objects for the Mello app.
//!
//! Pure types with no terminal or async dependencies, so they can be tested
//! in isolation.
//!
//! ## Domain Objects
//!
//! - [`View`] - The closed set of screens
//! - [`Navigator`] - Current view plus the transition table
//! - [`PracticeMachine`] - Record / process / result cycle
//! - [`catalog`] - Static lessons, speeches, classes and cards
//! - [`ChatMessage`] - Chat transcript entries and canned replies
//! - [`forms`] - Form checks and password strength
//! - [`FocusRing`] / [`ListCursor`] - Focus and selection

pub mod catalog;
pub mod chat;
pub mod focus;
pub mod forms;
pub mod navigation;
pub mod practice;
pub mod view;

pub use chat::{reply_for, ChatMessage, Sender};
pub use focus::{FocusRing, ListCursor};
pub use forms::PasswordStrength;
pub use navigation::{transition, NavAction, Navigator};
pub use practice::{
    passage_feedback, Cycle, PracticeError, PracticeEvent, PracticeMachine, PracticeState,
    WordGrade,
};
pub use view::View;
