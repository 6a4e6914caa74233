//! Blocking alert and confirm dialogs.

use serde::Serialize;

use crate::input::ModalType;
use crate::state::ConfirmAction;

/// A dialog waiting for an answer. While one is open every key goes to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Dialog {
    Alert {
        message: String,
    },
    Confirm {
        message: String,
        action: ConfirmAction,
    },
}

impl Dialog {
    pub fn alert(message: impl Into<String>) -> Self {
        Dialog::Alert {
            message: message.into(),
        }
    }

    pub fn confirm(message: impl Into<String>, action: ConfirmAction) -> Self {
        Dialog::Confirm {
            message: message.into(),
            action,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Dialog::Alert { message } | Dialog::Confirm { message, .. } => message,
        }
    }

    pub fn modal_type(&self) -> ModalType {
        match self {
            Dialog::Alert { .. } => ModalType::Alert,
            Dialog::Confirm { .. } => ModalType::Confirm,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dialog::Alert { .. } => " Mello says ",
            Dialog::Confirm { .. } => " Are you sure? ",
        }
    }

    /// Key hint line under the message.
    pub fn hint(&self) -> &'static str {
        match self {
            Dialog::Alert { .. } => "[Enter] OK",
            Dialog::Confirm { .. } => "[y/Enter] Yes   [n/Esc] No",
        }
    }

    /// The follow-up to run when a confirm dialog is answered with yes.
    pub fn on_yes(&self) -> Option<ConfirmAction> {
        match self {
            Dialog::Alert { .. } => None,
            Dialog::Confirm { action, .. } => Some(*action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_types() {
        assert_eq!(Dialog::alert("hi").modal_type(), ModalType::Alert);
        let confirm = Dialog::confirm("sure?", ConfirmAction::DeleteCustomLesson(3));
        assert_eq!(confirm.modal_type(), ModalType::Confirm);
        assert_eq!(confirm.on_yes(), Some(ConfirmAction::DeleteCustomLesson(3)));
        assert_eq!(confirm.message(), "sure?");
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(Dialog::alert("Saved")).unwrap();
        assert_eq!(json["kind"], "alert");
        assert_eq!(json["message"], "Saved");
    }
}
