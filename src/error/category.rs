//! Which kind of failure an error is, and what the binary does about it.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A form check failed. Surfaced as an alert, the app keeps going.
    User,
    /// The terminal or the log file could not be used.
    Terminal,
    /// A `MELLO_*` variable could not be parsed.
    Configuration,
}

impl ErrorCategory {
    pub fn is_fatal(self) -> bool {
        !matches!(self, ErrorCategory::User)
    }

    /// Process exit status when an error of this kind ends the program.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::User => 0,
            ErrorCategory::Terminal => 1,
            ErrorCategory::Configuration => 2,
        }
    }

    pub fn recovery_hint(self) -> &'static str {
        match self {
            ErrorCategory::User => "fix the field and try again",
            ErrorCategory::Terminal => "run mello from an interactive terminal",
            ErrorCategory::Configuration => "check the MELLO_* environment variables (see `mello --help`)",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorCategory::User => "user",
            ErrorCategory::Terminal => "terminal",
            ErrorCategory::Configuration => "configuration",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_user_errors_are_survivable() {
        assert!(!ErrorCategory::User.is_fatal());
        assert!(ErrorCategory::Terminal.is_fatal());
        assert!(ErrorCategory::Configuration.is_fatal());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ErrorCategory::Configuration.exit_code(), 2);
        assert_eq!(ErrorCategory::Terminal.exit_code(), 1);
    }

    #[test]
    fn test_hint_mentions_variables() {
        assert!(ErrorCategory::Configuration.recovery_hint().contains("MELLO_"));
        assert_eq!(ErrorCategory::Terminal.to_string(), "terminal");
    }
}
