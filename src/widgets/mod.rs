pub mod input_box;
pub mod mello;
pub mod theme_toggle;

pub use input_box::InputBox;
pub use mello::{Mello, MelloMood, MelloWidget};
pub use theme_toggle::ThemeToggle;
