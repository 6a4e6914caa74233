use unicode_width::UnicodeWidthChar;

use crate::input::Command;

/// Editable text buffer behind every form field.
///
/// The cursor counts characters, not bytes. Single-line boxes turn pasted
/// newlines into spaces and ignore typed ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBox {
    content: String,
    cursor_position: usize,
    multiline: bool,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lesson content, the one field that takes Alt+Enter.
    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    /// Prefilled, cursor at the end.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.set_content(content);
        self
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' && !self.multiline {
            return;
        }
        let at = self.byte_index(self.cursor_position);
        self.content.insert(at, c);
        self.cursor_position += 1;
    }

    /// Insert a string at the cursor, dropping newlines in single-line mode
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\r' => {}
                '\n' if !self.multiline => self.insert_char(' '),
                c => self.insert_char(c),
            }
        }
    }

    /// Delete key.
    pub fn delete_char(&mut self) {
        if self.cursor_position < self.len() {
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.len() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.len();
    }

    /// Apply an editing command, returning whether it was one.
    pub fn apply(&mut self, cmd: &Command) -> bool {
        match cmd {
            Command::InsertChar(c) => self.insert_char(*c),
            Command::InsertNewline => self.insert_char('\n'),
            Command::Backspace => self.backspace(),
            Command::DeleteChar => self.delete_char(),
            Command::MoveCursorLeft => self.move_cursor_left(),
            Command::MoveCursorRight => self.move_cursor_right(),
            Command::MoveCursorHome => self.move_cursor_home(),
            Command::MoveCursorEnd => self.move_cursor_end(),
            Command::Paste(text) => self.insert_str(text),
            _ => return false,
        }
        true
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    /// Cursor, in characters from the start.
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Replace the text, cursor at the end.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        if !self.multiline {
            self.content = self.content.replace('\n', " ");
        }
        self.cursor_position = self.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Only whitespace. Form checks treat this as unfilled.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Characters, not bytes.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Text visible in a single-line box `width` cells wide, plus the cursor column.
    ///
    /// The window scrolls so that the cursor is always inside it. With `mask`
    /// set every character is drawn as a bullet.
    pub fn visible_window(&self, width: usize, mask: bool) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }
        let glyphs: Vec<char> = self
            .content
            .chars()
            .map(|c| if mask { '•' } else if c == '\n' { '⏎' } else { c })
            .collect();
        let cell = |c: &char| UnicodeWidthChar::width(*c).unwrap_or(0);

        // Leave one cell for the block cursor
        let budget = width.saturating_sub(1).max(1);
        let mut start = 0;
        let mut used: usize = glyphs[..self.cursor_position].iter().map(cell).sum();
        while used > budget && start < self.cursor_position {
            used -= cell(&glyphs[start]);
            start += 1;
        }

        let mut shown = String::new();
        let mut total = 0;
        for c in &glyphs[start..] {
            let w = cell(c);
            if total + w > width {
                break;
            }
            total += w;
            shown.push(*c);
        }
        (shown, used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_input_box_is_empty() {
        let input = InputBox::new();
        assert!(input.is_empty());
        assert_eq!(input.cursor_position(), 0);
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = InputBox::new();
        input.insert_char('h');
        input.insert_char('i');
        assert_eq!(input.text(), "hi");
        input.backspace();
        assert_eq!(input.text(), "h");
        assert_eq!(input.cursor_position(), 1);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = InputBox::new().with_content("ac");
        input.move_cursor_left();
        input.insert_char('b');
        assert_eq!(input.text(), "abc");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = InputBox::new().with_content("héllo");
        input.move_cursor_home();
        input.move_cursor_right();
        input.delete_char();
        assert_eq!(input.text(), "hllo");
        input.move_cursor_end();
        input.insert_char('🌟');
        input.backspace();
        assert_eq!(input.text(), "hllo");
        assert_eq!(input.len(), 4);
    }

    #[test]
    fn test_single_line_rejects_newline() {
        let mut input = InputBox::new();
        assert!(input.apply(&Command::InsertNewline));
        assert!(input.is_empty());

        input.apply(&Command::Paste("a\nb".to_string()));
        assert_eq!(input.text(), "a b");
    }

    #[test]
    fn test_multiline_accepts_newline() {
        let mut input = InputBox::multiline();
        input.apply(&Command::InsertChar('a'));
        input.apply(&Command::InsertNewline);
        input.apply(&Command::InsertChar('b'));
        assert_eq!(input.text(), "a\nb");
    }

    #[test]
    fn test_apply_ignores_non_editing_commands() {
        let mut input = InputBox::new();
        assert!(!input.apply(&Command::Activate));
        assert!(!input.apply(&Command::FocusNext));
    }

    #[test]
    fn test_is_blank() {
        assert!(InputBox::new().with_content("   ").is_blank());
        assert!(!InputBox::new().with_content(" x ").is_blank());
    }

    #[test]
    fn test_visible_window_scrolls_to_cursor() {
        let input = InputBox::new().with_content("abcdefghij");
        let (shown, col) = input.visible_window(5, false);
        assert_eq!(col, 4);
        assert!(shown.ends_with('j'));
        assert!(shown.chars().count() <= 5);
    }

    #[test]
    fn test_visible_window_masks() {
        let input = InputBox::new().with_content("pw");
        let (shown, col) = input.visible_window(10, true);
        assert_eq!(shown, "••");
        assert_eq!(col, 2);
    }
}
