//! The crate-wide error.

use std::io;

use thiserror::Error;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::terminal::TerminalError;
use super::validation::ValidationError;

#[derive(Debug, Error)]
pub enum MelloError {
    #[error(transparent)]
    Terminal(#[from] TerminalError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Log file creation and other filesystem work.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl MelloError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MelloError::Validation(_) => ErrorCategory::User,
            MelloError::Config(_) => ErrorCategory::Configuration,
            MelloError::Terminal(_) | MelloError::Io(_) => ErrorCategory::Terminal,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            MelloError::Terminal(err) => err.error_code(),
            MelloError::Config(err) => err.error_code(),
            MelloError::Validation(_) => "E_FORM",
            MelloError::Io(_) => "E_IO",
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}
