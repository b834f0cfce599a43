//! State for the dialog state machine.

use crate::ui::form::RecordForm;
use crate::ui::mvi::UiState;
use crate::validation::FieldError;

/// Exactly one dialog (or none) is visible at a time.
///
/// The error dialog remembers the form underneath it so dismissing it
/// returns to the same form.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Adding {
        form: RecordForm,
    },
    Editing {
        form: RecordForm,
    },
    /// Success notice after a create.
    ConfirmingCreate,
    ConfirmingEdit {
        form: RecordForm,
    },
    ConfirmingDeactivate {
        id: i64,
    },
    ConfirmingActivate {
        id: i64,
    },
    ShowingErrors {
        errors: Vec<FieldError>,
        underlying: Box<ModalState>,
    },
}

impl UiState for ModalState {}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The working form, wherever it sits in the dialog stack.
    pub fn form(&self) -> Option<&RecordForm> {
        match self {
            Self::Adding { form } | Self::Editing { form } | Self::ConfirmingEdit { form } => {
                Some(form)
            }
            Self::ShowingErrors { underlying, .. } => underlying.form(),
            _ => None,
        }
    }

    /// True while the shared form dialog is editing an existing record.
    pub fn is_edit_mode(&self) -> bool {
        match self {
            Self::Editing { .. } | Self::ConfirmingEdit { .. } => true,
            Self::ShowingErrors { underlying, .. } => underlying.is_edit_mode(),
            _ => false,
        }
    }

    /// True while the add/edit form accepts keystrokes.
    pub fn is_form_active(&self) -> bool {
        matches!(self, Self::Adding { .. } | Self::Editing { .. })
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::ShowingErrors { errors, .. } => errors,
            _ => &[],
        }
    }
}
