//! File logging setup.
//!
//! The terminal belongs to the TUI, so log lines go to a file. The default
//! location is `<data dir>/mello/mello.log`; `MELLO_LOG_FILE` overrides it.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{AppConfig, DEFAULT_LOG_FILTER};
use crate::error::{ConfigError, MelloResult};

pub const LOG_FILE_NAME: &str = "mello.log";

/// Where the log file lives for `config`.
pub fn log_path(config: &AppConfig) -> Result<PathBuf, ConfigError> {
    if let Some(path) = &config.log_file {
        return Ok(path.clone());
    }
    dirs::data_local_dir()
        .map(|dir| dir.join("mello").join(LOG_FILE_NAME))
        .ok_or(ConfigError::NoLogDirectory)
}

/// Open `path` for appending, creating parent directories.
pub fn open_log_file(path: &Path) -> MelloResult<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

/// Filter for `directive`, falling back to the default on a bad directive.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber.
///
/// Returns the log file path, or `None` when no file could be opened; the app
/// then runs without logging.
pub fn init_logging(config: &AppConfig) -> Option<PathBuf> {
    let path = log_path(config).ok()?;
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("mello: logging disabled ({err})");
            return None;
        }
    };

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(&config.log_filter))
        .with(fmt_layer)
        .try_init()
        .ok()?;

    tracing::info!(path = %path.display(), "logging initialised");
    Some(path)
}
