//! Keyboard input.
//!
//! Keys never reach a page directly. [`CommandRegistry::dispatch`] turns a key
//! plus the [`InputContext`] into a [`Command`], and
//! [`App::execute_command`](crate::app::App::execute_command) either handles
//! it (quit, theme, dialogs) or passes it to the mounted module, which answers
//! with effects.
//!
//! ```text
//! KeyEvent + InputContext -> Command -> App | ModuleState -> Effects
//! ```

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;
