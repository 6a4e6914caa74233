//! Focus and selection cursors for forms and lists.

/// Wrapping focus position over a fixed number of slots.
///
/// Used for Tab/Shift+Tab cycling across form fields and buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    index: usize,
    len: usize,
}

impl FocusRing {
    /// Create a ring with `len` slots, focused on the first.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_at(&self, index: usize) -> bool {
        self.index == index
    }

    /// Move to the next slot, wrapping to the first.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Move to the previous slot, wrapping to the last.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index` if it is in range.
    pub fn focus(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Change the slot count, clamping the current index.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = len.saturating_sub(1);
        }
    }
}

/// Non-wrapping selection cursor for vertical lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    selected: usize,
}

impl ListCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move down within a list of `len` items.
    pub fn down(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// Keep the selection inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_wraps_both_ways() {
        let mut ring = FocusRing::new(3);
        ring.prev();
        assert_eq!(ring.index(), 2);
        ring.next();
        assert_eq!(ring.index(), 0);
    }

    #[test]
    fn test_empty_ring_is_inert() {
        let mut ring = FocusRing::new(0);
        ring.next();
        ring.prev();
        assert_eq!(ring.index(), 0);
        assert!(ring.is_empty());
    }

    #[test]
    fn test_resize_clamps() {
        let mut ring = FocusRing::new(5);
        ring.focus(4);
        ring.resize(2);
        assert_eq!(ring.index(), 1);
    }

    #[test]
    fn test_list_cursor_stops_at_edges() {
        let mut cursor = ListCursor::new();
        cursor.up();
        assert_eq!(cursor.selected(), 0);
        cursor.down(2);
        cursor.down(2);
        assert_eq!(cursor.selected(), 1);
        cursor.clamp(1);
        assert_eq!(cursor.selected(), 0);
    }
}
