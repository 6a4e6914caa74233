//! Error handling for Mello.
//!
//! Form checks fail with [`ValidationError`], whose text becomes an alert.
//! Everything else ends the program: [`MelloError::category`] picks the exit
//! code and the hint printed next to the message.
//!
//! | Category | Source | Exit |
//! |----------|--------|------|
//! | User | [`ValidationError`] | never |
//! | Terminal | [`TerminalError`], I/O | 1 |
//! | Configuration | [`ConfigError`] | 2 |

mod category;
mod config;
mod mello_error;
mod result;
mod terminal;
mod validation;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use mello_error::MelloError;
pub use result::MelloResult;
pub use terminal::TerminalError;
pub use validation::ValidationError;
