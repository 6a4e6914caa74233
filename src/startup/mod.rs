//! Startup: configuration and logging, run before the terminal is taken over.
//!
//! - [`config`] - `MELLO_*` environment configuration
//! - [`logging`] - file-backed tracing subscriber

pub mod config;
pub mod logging;

pub use config::AppConfig;
pub use logging::init_logging;
