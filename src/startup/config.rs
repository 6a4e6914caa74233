//! Startup configuration.
//!
//! Everything is read from `MELLO_*` environment variables. Use the builder
//! methods to override values in tests or embedders.
//!
//! # Example
//!
//! ```ignore
//! use mello::startup::AppConfig;
//! use mello::ui::theme::ThemeMode;
//!
//! let config = AppConfig::default()
//!     .with_theme(ThemeMode::Light)
//!     .with_seed(7)
//!     .with_timer_scale(0.5);
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::ui::theme::ThemeMode;

pub const ENV_THEME: &str = "MELLO_THEME";
pub const ENV_SEED: &str = "MELLO_SEED";
pub const ENV_TIMER_SCALE: &str = "MELLO_TIMER_SCALE";
pub const ENV_LOG: &str = "MELLO_LOG";
pub const ENV_LOG_FILE: &str = "MELLO_LOG_FILE";
pub const ENV_TICK_MS: &str = "MELLO_TICK_MS";

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "mello=info";

/// Largest accepted `MELLO_TIMER_SCALE`; a 5 s timer then waits about 83 minutes.
pub const MAX_TIMER_SCALE: f64 = 1000.0;

/// Default UI tick (~60 fps).
pub const DEFAULT_TICK: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Initial presentation mode
    pub theme: ThemeMode,
    /// Seed for the scoring RNG; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Multiplier applied to every simulated delay
    pub timer_scale: f64,
    /// tracing env-filter directive
    pub log_filter: String,
    /// Log file override; `None` uses the data directory
    pub log_file: Option<PathBuf>,
    /// Event loop tick
    pub tick: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            seed: None,
            timer_scale: 1.0,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
            tick: DEFAULT_TICK,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_timer_scale(mut self, scale: f64) -> Self {
        self.timer_scale = scale;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(ENV_THEME) {
            config.theme = raw
                .parse()
                .map_err(|reason: String| ConfigError::invalid(ENV_THEME, &raw, reason))?;
        }

        if let Some(raw) = get(ENV_SEED) {
            let seed = raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::invalid(ENV_SEED, &raw, "expected an unsigned integer")
            })?;
            config.seed = Some(seed);
        }

        if let Some(raw) = get(ENV_TIMER_SCALE) {
            let scale = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|s| s.is_finite() && *s > 0.0 && *s <= MAX_TIMER_SCALE)
                .ok_or_else(|| {
                    ConfigError::invalid(
                        ENV_TIMER_SCALE,
                        &raw,
                        format!("expected a number above 0 and at most {MAX_TIMER_SCALE}"),
                    )
                })?;
            config.timer_scale = scale;
        }

        if let Some(raw) = get(ENV_LOG) {
            config.log_filter = raw;
        }

        if let Some(raw) = get(ENV_LOG_FILE) {
            config.log_file = Some(PathBuf::from(raw));
        }

        if let Some(raw) = get(ENV_TICK_MS) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| {
                    ConfigError::invalid(ENV_TICK_MS, &raw, "expected milliseconds above zero")
                })?;
            config.tick = Duration::from_millis(ms);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_filter, "mello=info");
        assert_eq!(config.tick, Duration::from_millis(16));
    }

    #[test]
    fn test_timer_scale_ceiling() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_TIMER_SCALE, "1e300")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: ENV_TIMER_SCALE,
                ..
            }
        ));

        let config = AppConfig::from_lookup(lookup(&[(ENV_TIMER_SCALE, "1000")])).unwrap();
        assert_eq!(config.timer_scale, MAX_TIMER_SCALE);
        assert!(AppConfig::from_lookup(lookup(&[(ENV_TIMER_SCALE, "1000.5")])).is_err());
    }

    #[test]
    fn test_reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_THEME, "light"),
            (ENV_SEED, "42"),
            (ENV_TIMER_SCALE, "0.25"),
            (ENV_LOG, "mello=debug"),
            (ENV_LOG_FILE, "/tmp/mello.log"),
            (ENV_TICK_MS, "33"),
        ]))
        .unwrap();

        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.timer_scale, 0.25);
        assert_eq!(config.log_filter, "mello=debug");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/mello.log")));
        assert_eq!(config.tick, Duration::from_millis(33));
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        for (key, value) in [
            (ENV_THEME, "purple"),
            (ENV_SEED, "-1"),
            (ENV_TIMER_SCALE, "0"),
            (ENV_TICK_MS, "fast"),
        ] {
            let err = AppConfig::from_lookup(lookup(&[(key, value)])).unwrap_err();
            assert!(err.to_string().contains(key), "{err}");
        }
    }

    #[test]
    fn test_empty_value_is_unset() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_SEED, "  ")])).unwrap();
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::new()
            .with_theme(ThemeMode::Light)
            .with_seed(7)
            .with_timer_scale(2.0)
            .with_tick(Duration::from_millis(50));
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.timer_scale, 2.0);
        assert_eq!(config.tick, Duration::from_millis(50));
    }
}
