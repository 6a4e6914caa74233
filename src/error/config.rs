//! Configuration errors.

use thiserror::Error;

/// A startup option that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable held a value of the wrong shape
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// No usable location for the log file
    #[error("could not determine a log directory (set MELLO_LOG_FILE)")]
    NoLogDirectory,
}

impl ConfigError {
    /// Create an invalid-value error for `key`.
    pub fn invalid(key: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidValue { .. } => "E_CFG_VALUE",
            ConfigError::NoLogDirectory => "E_CFG_LOG_DIR",
        }
    }
}
