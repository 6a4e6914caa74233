//! `--version` and `--help` output.

use crate::startup::config::{
    ENV_LOG, ENV_LOG_FILE, ENV_SEED, ENV_THEME, ENV_TICK_MS, ENV_TIMER_SCALE,
};

/// The current version of Mello, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("mello {}", VERSION)
}

/// Usage text listing flags and environment variables.
pub fn help_text() -> String {
    let vars = [
        (ENV_THEME, "dark or light (default dark)"),
        (ENV_SEED, "seed for simulated scores"),
        (ENV_TIMER_SCALE, "multiplier for simulated delays (default 1.0)"),
        (ENV_LOG, "tracing filter (default mello=info)"),
        (ENV_LOG_FILE, "log file path"),
        (ENV_TICK_MS, "UI tick in milliseconds (default 16)"),
    ];
    let mut text = format!(
        "{}\nSpeech practice with Mello, in your terminal.\n\n\
         USAGE:\n    mello [--version | --help]\n\nENVIRONMENT:\n",
        version_line()
    );
    for (key, meaning) in vars {
        text.push_str(&format!("    {:<18} {}\n", key, meaning));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        // Version should be in semver format (e.g., "0.1.0")
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_line().starts_with("mello "));
    }

    #[test]
    fn test_help_lists_every_variable() {
        let help = help_text();
        for key in [
            "MELLO_THEME",
            "MELLO_SEED",
            "MELLO_TIMER_SCALE",
            "MELLO_LOG",
            "MELLO_LOG_FILE",
            "MELLO_TICK_MS",
        ] {
            assert!(help.contains(key), "{key}");
        }
    }
}
