//! Reducer for the dialog state machine.

use crate::ui::form::RecordForm;
use crate::ui::mvi::Reducer;

use super::intent::ModalIntent;
use super::state::ModalState;

/// Reducer for dialog transitions.
///
/// Pure function. Backend calls and list refreshes are issued by the
/// screen around the dispatch call.
pub struct ModalReducer;

impl Reducer for ModalReducer {
    type State = ModalState;
    type Intent = ModalIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ModalIntent::OpenCreate => ModalState::Adding {
                form: RecordForm::blank(),
            },

            ModalIntent::OpenEdit { record } => ModalState::Editing {
                form: RecordForm::from_record(&record),
            },

            ModalIntent::EditForm(edit) => match state {
                ModalState::Adding { form } => ModalState::Adding {
                    form: form.apply(edit),
                },
                ModalState::Editing { form } => ModalState::Editing {
                    form: form.apply(edit),
                },
                other => other,
            },

            ModalIntent::ShowErrors { errors } if errors.is_empty() => state,
            ModalIntent::ShowErrors { errors } => match state {
                form @ (ModalState::Adding { .. } | ModalState::Editing { .. }) => {
                    ModalState::ShowingErrors {
                        errors,
                        underlying: Box::new(form),
                    }
                }
                ModalState::ShowingErrors { underlying, .. } => {
                    ModalState::ShowingErrors { errors, underlying }
                }
                other => other,
            },

            ModalIntent::RequestEditConfirmation => match state {
                ModalState::Editing { form } => ModalState::ConfirmingEdit { form },
                other => other,
            },

            ModalIntent::DeclineEdit => match state {
                ModalState::ConfirmingEdit { form } => ModalState::Editing { form },
                other => other,
            },

            ModalIntent::RequestDeactivate { id } => ModalState::ConfirmingDeactivate { id },

            ModalIntent::RequestActivate { id } => ModalState::ConfirmingActivate { id },

            ModalIntent::Created => match state {
                ModalState::Closed | ModalState::Adding { .. } => ModalState::ConfirmingCreate,
                ModalState::ShowingErrors { ref underlying, .. }
                    if matches!(**underlying, ModalState::Adding { .. }) =>
                {
                    ModalState::ConfirmingCreate
                }
                other => other,
            },

            ModalIntent::Updated { id } => {
                if edits_record(&state, id) {
                    ModalState::Closed
                } else {
                    state
                }
            }

            ModalIntent::Deactivated { id } => match state {
                ModalState::ConfirmingDeactivate { id: pending } if pending == id => {
                    ModalState::Closed
                }
                other => other,
            },

            ModalIntent::Activated { id } => match state {
                ModalState::ConfirmingActivate { id: pending } if pending == id => {
                    ModalState::Closed
                }
                other => other,
            },

            ModalIntent::Dismiss => match state {
                ModalState::ShowingErrors { underlying, .. } => *underlying,
                ModalState::ConfirmingEdit { form } => ModalState::Editing { form },
                _ => ModalState::Closed,
            },

            ModalIntent::Close => ModalState::Closed,
        }
    }
}

/// True while any dialog level still holds the edit form for `id`.
fn edits_record(state: &ModalState, id: i64) -> bool {
    state.is_edit_mode()
        && state
            .form()
            .is_some_and(|form| form.record.persisted_id() == Some(id))
}
