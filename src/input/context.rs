//! The slice of app state key dispatch depends on.

use crate::domain::View;

/// Which dialog is in front, when one is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalType {
    Alert,
    Confirm,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputContext {
    pub view: View,
    pub modal: Option<ModalType>,
    /// A text field on the page has focus.
    pub editing: bool,
}

impl InputContext {
    /// Context for `view` with no dialog and no focused field.
    pub fn on(view: View) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    /// Mark a text field as focused.
    pub fn typing(mut self) -> Self {
        self.editing = true;
        self
    }

    /// Put `modal` in front.
    pub fn under(mut self, modal: ModalType) -> Self {
        self.modal = Some(modal);
        self
    }

    /// Printable keys become text only while a field has focus and no dialog is up.
    pub fn takes_text(&self) -> bool {
        self.editing && self.modal.is_none()
    }
}
