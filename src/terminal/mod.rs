//! Terminal ownership for the TUI.
//!
//! [`TerminalManager`] puts the terminal into raw mode on creation and puts it
//! back when dropped, whether the app exits normally or unwinds.
//!
//! ```no_run
//! use mello::terminal::TerminalManager;
//!
//! fn main() -> mello::error::MelloResult<()> {
//!     let mut manager = TerminalManager::new()?;
//!     let _terminal = manager.terminal();
//!     // ... run the app ...
//!     Ok(())
//! }
//! ```

mod setup;

pub use setup::{
    emergency_restore, enter_tui_mode, leave_tui_mode, push_keyboard_enhancements,
    setup_panic_hook,
};

use std::io::{self, Stdout};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::{MelloResult, TerminalError};

/// The real terminal type the binary draws to.
pub type MelloTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode terminal restored on drop.
pub struct TerminalManager {
    terminal: MelloTerminal,
    restored: bool,
}

impl TerminalManager {
    /// Raw mode, alternate screen, bracketed paste and key disambiguation.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Setup`] naming the step that failed. The
    /// terminal is restored before returning.
    pub fn new() -> MelloResult<Self> {
        enable_raw_mode().map_err(TerminalError::during("raw mode"))?;

        let mut stdout = io::stdout();
        if let Err(err) = enter_tui_mode(&mut stdout) {
            emergency_restore();
            return Err(TerminalError::during("alternate screen")(err).into());
        }
        if !push_keyboard_enhancements(&mut stdout) {
            tracing::debug!("keyboard enhancements unavailable");
        }

        let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                emergency_restore();
                return Err(TerminalError::during("backend")(err).into());
            }
        };
        terminal.clear().map_err(TerminalError::during("clear"))?;
        tracing::info!("terminal ready");

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    /// The ratatui terminal to draw on.
    pub fn terminal(&mut self) -> &mut MelloTerminal {
        &mut self.terminal
    }

    /// Restore now instead of on drop. Later calls are no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Restore`] if the cursor cannot be shown again.
    pub fn restore(&mut self) -> MelloResult<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        leave_tui_mode(self.terminal.backend_mut());
        self.terminal
            .show_cursor()
            .map_err(TerminalError::Restore)?;
        Ok(())
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
