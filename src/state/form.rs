//! Focus handling shared by the form screens.

use crate::domain::FocusRing;
use crate::input::Command;

/// Tab order over a fixed list of form slots.
///
/// `S` is a screen's own slot enum; the ring tracks which one is focused.
#[derive(Debug, Clone)]
pub struct FocusSlots<S: 'static> {
    order: &'static [S],
    ring: FocusRing,
}

impl<S: Copy + PartialEq + 'static> FocusSlots<S> {
    pub fn new(order: &'static [S]) -> Self {
        Self {
            order,
            ring: FocusRing::new(order.len()),
        }
    }

    /// The focused slot, `None` only for an empty order.
    pub fn current(&self) -> Option<S> {
        self.order.get(self.ring.index()).copied()
    }

    pub fn is(&self, slot: S) -> bool {
        self.current() == Some(slot)
    }

    pub fn next(&mut self) {
        self.ring.next();
    }

    pub fn prev(&mut self) {
        self.ring.prev();
    }

    /// Focus `slot` if it is part of the order.
    pub fn focus(&mut self, slot: S) {
        if let Some(index) = self.order.iter().position(|s| *s == slot) {
            self.ring.focus(index);
        }
    }

    /// Apply Tab/Shift+Tab style movement; returns whether `cmd` was one.
    pub fn handle_movement(&mut self, cmd: &Command) -> bool {
        match cmd {
            Command::FocusNext | Command::MoveDown => self.next(),
            Command::FocusPrev | Command::MoveUp => self.prev(),
            _ => return false,
        }
        true
    }
}
