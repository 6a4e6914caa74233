//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage and the environment variables
    Help,
    /// Run the TUI application (default)
    RunTui,
    /// An argument nobody recognises
    Unknown(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first recognised flag wins.
///
/// # Examples
///
/// ```
/// use mello::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["mello".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(mut args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    if let Some(arg) = args.nth(1) {
        return match arg.as_str() {
            "--version" | "-V" => CliCommand::Version,
            "--help" | "-h" => CliCommand::Help,
            _ => CliCommand::Unknown(arg),
        };
    }
    CliCommand::RunTui
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["mello", "--version"]), CliCommand::Version);
        assert_eq!(parse(&["mello", "-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["mello", "--help"]), CliCommand::Help);
        assert_eq!(parse(&["mello", "-h"]), CliCommand::Help);
    }

    #[test]
    fn test_no_args_runs_tui() {
        assert_eq!(parse(&["mello"]), CliCommand::RunTui);
    }

    #[test]
    fn test_unknown_flag() {
        assert_eq!(
            parse(&["mello", "--sync"]),
            CliCommand::Unknown("--sync".to_string())
        );
    }
}
