//! Entering and leaving TUI mode, plus the panic hook that restores it.

use std::io::{self, Write};
use std::panic;

use crossterm::{
    cursor::Show,
    event::{
        DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Enter the alternate screen with bracketed paste.
///
/// Raw mode is enabled separately by
/// [`TerminalManager::new`](crate::terminal::TerminalManager::new).
///
/// # Errors
///
/// Returns the I/O error from writing the escape sequences to `writer`.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableBracketedPaste)
}

/// Ask for disambiguated key codes so Shift+Enter differs from Enter.
///
/// Returns `false` on terminals without the Kitty protocol; Alt+Enter and
/// Ctrl+J still insert newlines there.
pub fn push_keyboard_enhancements<W: Write>(writer: &mut W) -> bool {
    execute!(
        writer,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    )
    .is_ok()
}

/// Leave TUI mode. Safe to call more than once; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, PopKeyboardEnhancementFlags);
    let _ = execute!(writer, DisableBracketedPaste, LeaveAlternateScreen);
    // Some terminals keep enhancement flags after the pop; CSI = 0 u clears them
    let _ = write!(writer, "\x1b[=0u");
    let _ = writer.flush();
    let _ = execute!(writer, Show);
}

/// Restore stdout after a panic or a failed setup.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}

/// Restore the terminal before the previous panic hook prints the message.
///
/// Install after `color_eyre::install()`, which sets its own hook.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
