//! Intents for the dialog state machine.

use crate::model::VaccineRecord;
use crate::ui::form::FormEdit;
use crate::ui::mvi::Intent;
use crate::validation::FieldError;

#[derive(Debug, Clone)]
pub enum ModalIntent {
    /// Open the add dialog with a blank form.
    OpenCreate,
    /// Open the edit dialog on a copy of `record`.
    OpenEdit { record: VaccineRecord },
    /// Keystroke inside the add/edit form.
    EditForm(FormEdit),
    /// Validation failed; stack the error dialog over the form.
    ShowErrors { errors: Vec<FieldError> },
    /// Edit form validated; ask before sending the update.
    RequestEditConfirmation,
    /// User answered "no" to the edit confirmation.
    DeclineEdit,
    RequestDeactivate { id: i64 },
    RequestActivate { id: i64 },
    /// Backend accepted a create.
    Created,
    /// Backend accepted an update of `id`.
    Updated { id: i64 },
    Deactivated { id: i64 },
    Activated { id: i64 },
    /// Step back one level: errors return to their form, confirmations are
    /// declined, forms and notices close.
    Dismiss,
    /// Close the add/edit dialog together with any error dialog on top.
    Close,
}

impl Intent for ModalIntent {}
