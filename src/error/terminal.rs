//! Terminal setup and teardown failures.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerminalError {
    /// One of the steps in [`TerminalManager::new`](crate::terminal::TerminalManager::new)
    #[error("could not prepare the terminal ({step}): {source}")]
    Setup {
        step: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("could not restore the terminal: {0}")]
    Restore(#[source] io::Error),
}

impl TerminalError {
    /// `map_err` adapter tagging an I/O failure with the setup step it came from.
    pub fn during(step: &'static str) -> impl FnOnce(io::Error) -> Self {
        move |source| TerminalError::Setup { step, source }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            TerminalError::Setup { .. } => "E_TERM_SETUP",
            TerminalError::Restore(_) => "E_TERM_RESTORE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_error_names_the_step() {
        let err = TerminalError::during("raw mode")(io::Error::new(io::ErrorKind::Other, "not a tty"));
        let text = err.to_string();
        assert!(text.contains("raw mode"));
        assert!(text.contains("not a tty"));
        assert_eq!(err.error_code(), "E_TERM_SETUP");
    }

    #[test]
    fn test_restore_keeps_source() {
        use std::error::Error;
        let err = TerminalError::Restore(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert!(err.source().is_some());
    }
}
