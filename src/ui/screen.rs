//! Inventory screen: owns the list, the filters and the dialog state, and
//! turns user actions into gateway commands.
//!
//! The backend is the only source of truth. Every successful mutation is
//! followed by one full refetch, and list responses carry a sequence number
//! so only the newest refetch is applied.

use crate::filter::{filter_records, FilterCriteria};
use crate::gateway::{GatewayCommand, GatewayCommandSender, GatewayError, GatewayEvent};
use crate::model::{RecordStatus, VaccineRecord};
use crate::ui::form::FormEdit;
use crate::ui::modal::{ModalIntent, ModalReducer, ModalState};
use crate::ui::mvi::Reducer;
use crate::validation::{validate_record, FieldError};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Which filter text box receives typed characters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FilterField {
    Name,
    Description,
}

/// One-line message about the outcome of the last backend call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(text) | Notice::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

pub struct InventoryScreen {
    should_quit: bool,
    records: Vec<VaccineRecord>,
    filtered: Vec<VaccineRecord>,
    criteria: FilterCriteria,
    filter_focus: Option<FilterField>,
    selection: usize,
    loading: bool,
    /// Sequence number of the newest list request issued.
    list_seq: u64,
    modal: ModalState,
    notice: Option<Notice>,
    commands: Option<GatewayCommandSender>,
}

impl Default for InventoryScreen {
    fn default() -> Self {
        Self::new(RecordStatus::Active)
    }
}

impl InventoryScreen {
    pub fn new(initial_status: RecordStatus) -> Self {
        Self {
            should_quit: false,
            records: Vec::new(),
            filtered: Vec::new(),
            criteria: FilterCriteria::with_status(initial_status),
            filter_focus: None,
            selection: 0,
            loading: false,
            list_seq: 0,
            modal: ModalState::Closed,
            notice: None,
            commands: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: GatewayCommandSender) {
        self.commands = Some(sender);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn records(&self) -> &[VaccineRecord] {
        &self.records
    }

    pub fn filtered(&self) -> &[VaccineRecord] {
        &self.filtered
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn filter_focus(&self) -> Option<FilterField> {
        self.filter_focus
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn validation_errors(&self) -> &[FieldError] {
        self.modal.errors()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_record(&self) -> Option<&VaccineRecord> {
        self.filtered.get(self.selection)
    }

    // ========================================================================
    // List and filters
    // ========================================================================

    /// First display: load the full list.
    pub fn initialize(&mut self) {
        self.refresh_list();
    }

    /// Issue a full refetch. Any older refetch still in flight becomes stale.
    pub fn refresh_list(&mut self) {
        self.list_seq += 1;
        let seq = self.list_seq;
        self.loading = true;
        if !self.send_command(GatewayCommand::FetchAll { seq }) {
            self.loading = false;
        }
    }

    pub fn set_status_filter(&mut self, status: RecordStatus) {
        self.acknowledge_notice();
        self.criteria.status = status;
        self.apply_filter();
    }

    pub fn toggle_status_filter(&mut self) {
        self.set_status_filter(self.criteria.status.toggled());
    }

    pub fn set_name_filter(&mut self, text: impl Into<String>) {
        self.criteria.name = text.into();
        self.apply_filter();
    }

    pub fn set_description_filter(&mut self, text: impl Into<String>) {
        self.criteria.description = text.into();
        self.apply_filter();
    }

    /// Cycle the focused filter box: none → name → description → none.
    pub fn cycle_filter_focus(&mut self) {
        self.filter_focus = match self.filter_focus {
            None => Some(FilterField::Name),
            Some(FilterField::Name) => Some(FilterField::Description),
            Some(FilterField::Description) => None,
        };
    }

    pub fn clear_filter_focus(&mut self) {
        self.filter_focus = None;
    }

    /// Apply a keystroke to the focused filter box.
    pub fn edit_filter(&mut self, edit: FormEdit) {
        let Some(field) = self.filter_focus else {
            return;
        };
        self.acknowledge_notice();
        let text = match field {
            FilterField::Name => &mut self.criteria.name,
            FilterField::Description => &mut self.criteria.description,
        };
        match edit {
            FormEdit::Insert(ch) => text.push(ch),
            FormEdit::Backspace => {
                text.pop();
            }
            FormEdit::FocusNext | FormEdit::FocusPrev => {
                self.cycle_filter_focus();
                return;
            }
        }
        self.apply_filter();
    }

    pub fn move_selection(&mut self, direction: i32) {
        self.acknowledge_notice();
        if self.filtered.is_empty() {
            self.selection = 0;
            return;
        }
        let last = self.filtered.len() - 1;
        let current = self.selection.min(last);
        self.selection = if direction.is_negative() {
            current.saturating_sub(1)
        } else {
            (current + 1).min(last)
        };
    }

    fn apply_filter(&mut self) {
        self.filtered = filter_records(&self.records, &self.criteria);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selection = self.selection.min(self.filtered.len().saturating_sub(1));
    }

    // ========================================================================
    // Dialogs
    // ========================================================================

    fn dispatch_modal(&mut self, intent: ModalIntent) {
        dispatch_mvi!(self, modal, ModalReducer, intent);
    }

    pub fn open_create(&mut self) {
        self.acknowledge_notice();
        self.dispatch_modal(ModalIntent::OpenCreate);
    }

    pub fn open_edit(&mut self, record: &VaccineRecord) {
        self.acknowledge_notice();
        self.dispatch_modal(ModalIntent::OpenEdit {
            record: record.clone(),
        });
    }

    pub fn open_edit_selected(&mut self) {
        if let Some(record) = self.selected_record().cloned() {
            self.open_edit(&record);
        }
    }

    pub fn edit_form(&mut self, edit: FormEdit) {
        self.dispatch_modal(ModalIntent::EditForm(edit));
    }

    /// Check the working form; on failure open the error dialog.
    pub fn validate_form(&mut self) -> bool {
        let Some(form) = self.modal.form() else {
            return false;
        };
        let errors = validate_record(&form.record);
        if errors.is_empty() {
            return true;
        }
        tracing::debug!(count = errors.len(), "form validation failed");
        self.dispatch_modal(ModalIntent::ShowErrors { errors });
        false
    }

    /// Validate the add form and send it to the backend.
    pub fn submit_create(&mut self) -> bool {
        if !matches!(self.modal, ModalState::Adding { .. }) || !self.validate_form() {
            return false;
        }
        let Some(form) = self.modal.form() else {
            return false;
        };
        let record = form.record.clone().without_placeholder_id();
        self.send_command(GatewayCommand::Create { record })
    }

    /// Validate the edit form and ask for confirmation. No backend call yet.
    pub fn confirm_update(&mut self) -> bool {
        if !matches!(self.modal, ModalState::Editing { .. }) || !self.validate_form() {
            return false;
        }
        self.dispatch_modal(ModalIntent::RequestEditConfirmation);
        true
    }

    /// Answer the edit confirmation. "Yes" sends the update; "no" returns
    /// to the form untouched.
    pub fn resolve_edit_confirmation(&mut self, accept: bool) {
        let ModalState::ConfirmingEdit { form } = &self.modal else {
            return;
        };
        if !accept {
            self.dispatch_modal(ModalIntent::DeclineEdit);
            return;
        }
        let Some(id) = form.record.persisted_id() else {
            tracing::warn!("edit confirmation without a persisted id");
            return;
        };
        let record = form.record.clone();
        self.send_command(GatewayCommand::Update { id, record });
    }

    pub fn request_deactivate(&mut self, id: i64) {
        self.dispatch_modal(ModalIntent::RequestDeactivate { id });
    }

    pub fn request_activate(&mut self, id: i64) {
        self.dispatch_modal(ModalIntent::RequestActivate { id });
    }

    /// Ask to flip the selected record to the other status.
    pub fn request_toggle_selected(&mut self) {
        let Some(record) = self.selected_record() else {
            return;
        };
        let (Some(id), Some(status)) = (record.persisted_id(), record.status) else {
            return;
        };
        match status {
            RecordStatus::Active => self.request_deactivate(id),
            RecordStatus::Inactive => self.request_activate(id),
        }
    }

    pub fn confirm_deactivate(&mut self) {
        if let ModalState::ConfirmingDeactivate { id } = self.modal {
            self.send_command(GatewayCommand::Deactivate { id });
        }
    }

    pub fn confirm_activate(&mut self) {
        if let ModalState::ConfirmingActivate { id } = self.modal {
            self.send_command(GatewayCommand::Activate { id });
        }
    }

    /// Close the add/edit dialog and the error dialog in one step.
    pub fn close_modal(&mut self) {
        self.acknowledge_notice();
        self.dispatch_modal(ModalIntent::Close);
    }

    /// Step back one dialog level.
    pub fn dismiss(&mut self) {
        self.acknowledge_notice();
        self.dispatch_modal(ModalIntent::Dismiss);
    }

    // ========================================================================
    // Gateway completions
    // ========================================================================

    pub fn on_gateway_event(&mut self, event: GatewayEvent) {
        match event {
            GatewayEvent::Listed { seq, result } => self.on_listed(seq, result),
            GatewayEvent::Created { result } => match result {
                Ok(record) => {
                    tracing::info!(id = ?record.id, "record created");
                    self.refresh_list();
                    self.dispatch_modal(ModalIntent::Created);
                    self.notice = Some(Notice::Info("Record created".to_string()));
                }
                Err(err) => self.report_failure("adding record", &err),
            },
            GatewayEvent::Updated { id, result } => match result {
                Ok(_) => {
                    tracing::info!(id, "record updated");
                    self.refresh_list();
                    self.dispatch_modal(ModalIntent::Updated { id });
                    self.notice = Some(Notice::Info(format!("Record {id} updated")));
                }
                Err(err) => self.report_failure("updating record", &err),
            },
            GatewayEvent::Deactivated { id, result } => match result {
                Ok(_) => {
                    tracing::info!(id, "record deactivated");
                    self.refresh_list();
                    self.dispatch_modal(ModalIntent::Deactivated { id });
                    self.notice = Some(Notice::Info(format!("Record {id} deactivated")));
                }
                Err(err) => self.report_failure("deactivating record", &err),
            },
            GatewayEvent::Activated { id, result } => match result {
                Ok(_) => {
                    tracing::info!(id, "record activated");
                    self.refresh_list();
                    self.dispatch_modal(ModalIntent::Activated { id });
                    self.notice = Some(Notice::Info(format!("Record {id} activated")));
                }
                Err(err) => self.report_failure("activating record", &err),
            },
        }
    }

    fn on_listed(&mut self, seq: u64, result: Result<Vec<VaccineRecord>, GatewayError>) {
        if seq != self.list_seq {
            tracing::debug!(seq, latest = self.list_seq, "discarding stale list response");
            return;
        }
        self.loading = false;
        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "list refreshed");
                self.records = records;
                self.apply_filter();
            }
            Err(err) => self.report_failure("fetching records", &err),
        }
    }

    /// Drop a success notice once the user moves on. Errors stay until
    /// replaced.
    fn acknowledge_notice(&mut self) {
        if matches!(self.notice, Some(Notice::Info(_))) {
            self.notice = None;
        }
    }

    fn report_failure(&mut self, action: &str, err: &GatewayError) {
        tracing::error!(kind = err.error_type(), "Error {}: {}", action, err);
        self.notice = Some(Notice::Error(format!("Error {action}: {err}")));
    }

    fn send_command(&mut self, command: GatewayCommand) -> bool {
        let Some(sender) = &self.commands else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!("Gateway command not sent: {}", err);
                self.notice = Some(Notice::Error(format!("Gateway unavailable: {err}")));
                false
            }
        }
    }
}
