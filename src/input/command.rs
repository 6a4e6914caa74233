//! Everything a key press can ask for.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Ctrl+T, works everywhere except under a dialog
    ToggleTheme,

    /// Enter / y on the front dialog
    DialogConfirm,
    /// Esc / n on the front dialog
    DialogCancel,

    FocusNext,
    FocusPrev,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Press the focused button or open the selected row
    Activate,
    /// Leave the sub-view, or the view
    Back,

    // Per-view hotkeys, only bound where the view uses them
    Record,
    Listen,
    NextItem,
    PrevItem,
    Restart,
    Delete,
    Logout,
    DismissMello,

    // Text in the focused field
    InsertChar(char),
    /// Lesson content is the only multi-line field
    InsertNewline,
    Backspace,
    DeleteChar,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    Paste(String),

    /// The key was taken but does nothing (a dialog is up)
    Noop,
}

impl Command {
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop)
    }

    /// Commands a focused text field consumes itself.
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::InsertNewline
                | Command::Backspace
                | Command::DeleteChar
                | Command::MoveCursorLeft
                | Command::MoveCursorRight
                | Command::MoveCursorHome
                | Command::MoveCursorEnd
                | Command::Paste(_)
        )
    }

    /// Footer label for a view hotkey.
    pub fn hint_label(&self) -> Option<&'static str> {
        let label = match self {
            Command::Record => "record",
            Command::Listen => "listen",
            Command::NextItem => "next word",
            Command::PrevItem => "previous word",
            Command::Restart => "start over",
            Command::Delete => "delete",
            Command::Logout => "log out",
            Command::DismissMello => "hide Mello",
            _ => return None,
        };
        Some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_noop_skips_redraw() {
        assert!(Command::Quit.marks_dirty());
        assert!(Command::InsertChar('a').marks_dirty());
        assert!(!Command::Noop.marks_dirty());
    }

    #[test]
    fn test_editing_commands() {
        assert!(Command::InsertChar('x').is_editing());
        assert!(Command::Paste("hi".to_string()).is_editing());
        assert!(!Command::Activate.is_editing());
        assert!(!Command::FocusNext.is_editing());
    }

    #[test]
    fn test_hint_labels_cover_hotkeys_only() {
        assert_eq!(Command::Record.hint_label(), Some("record"));
        assert_eq!(Command::Logout.hint_label(), Some("log out"));
        assert_eq!(Command::MoveDown.hint_label(), None);
        assert_eq!(Command::InsertChar('r').hint_label(), None);
    }
}
