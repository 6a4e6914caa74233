//! CLI module for Mello.
//!
//! The CLI dispatcher runs before anything else in main(), so `--version` and
//! `--help` never touch the terminal:
//!
//! ```ignore
//! use mello::cli::{parse_args, run_cli_command};
//!
//! if let Some(code) = run_cli_command(parse_args(std::env::args())) {
//!     std::process::exit(code);
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{help_text, version_line, VERSION};

/// Run a CLI command if applicable.
///
/// Returns `None` for [`CliCommand::RunTui`], otherwise the exit code.
pub fn run_cli_command(command: CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(0)
        }
        CliCommand::Help => {
            print!("{}", help_text());
            Some(0)
        }
        CliCommand::Unknown(arg) => {
            eprintln!("mello: unknown argument {arg:?}\n\n{}", help_text());
            Some(2)
        }
        CliCommand::RunTui => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_none() {
        assert!(run_cli_command(CliCommand::RunTui).is_none());
    }

    #[test]
    fn test_unknown_exits_with_usage_code() {
        assert_eq!(run_cli_command(CliCommand::Unknown("-x".into())), Some(2));
    }
}
