//! Inventory screen flows: commands issued, completions applied.

mod common;

use common::{drain, fetch_count, make_screen, stored, valid_record};
use vaxdesk::gateway::{GatewayCommand, GatewayError, GatewayEvent};
use vaxdesk::model::{RecordStatus, VaccineRecord};
use vaxdesk::ui::form::{FormEdit, FormField};
use vaxdesk::ui::modal::ModalState;
use vaxdesk::ui::screen::{InventoryScreen, Notice};
use vaxdesk::validation::FieldError;

fn backend_error() -> GatewayError {
    GatewayError::Status {
        status: 500,
        message: "database offline".to_string(),
    }
}

fn list(screen: &mut InventoryScreen, seq: u64, records: Vec<VaccineRecord>) {
    screen.on_gateway_event(GatewayEvent::Listed {
        seq,
        result: Ok(records),
    });
}

fn ids(records: &[VaccineRecord]) -> Vec<Option<i64>> {
    records.iter().map(|r| r.id).collect()
}

/// Type every field of `record` into the open form, in field order.
fn fill_form(screen: &mut InventoryScreen, record: &VaccineRecord) {
    for field in FormField::ALL {
        let value = match field {
            FormField::Name => &record.name,
            FormField::Kind => &record.kind,
            FormField::Description => &record.description,
            FormField::ManufacturingDate => &record.manufacturing_date,
            FormField::ExpirationDate => &record.expiration_date,
            FormField::Price => &record.price,
            FormField::Stock => &record.stock,
        };
        for ch in value.chars() {
            screen.edit_form(FormEdit::Insert(ch));
        }
        screen.edit_form(FormEdit::FocusNext);
    }
}

#[test]
fn test_initialize_fetches_full_list() {
    let (mut screen, mut rx) = make_screen();
    screen.initialize();

    assert!(screen.is_loading());
    assert_eq!(drain(&mut rx), vec![GatewayCommand::FetchAll { seq: 1 }]);

    list(&mut screen, 1, vec![stored(1, "Rabia", RecordStatus::Active)]);
    assert!(!screen.is_loading());
    assert_eq!(screen.records().len(), 1);
}

#[test]
fn test_status_toggle_switches_visible_half() {
    let (mut screen, _rx) = make_screen();
    screen.initialize();
    list(
        &mut screen,
        1,
        vec![
            stored(1, "Rabia", RecordStatus::Active),
            stored(2, "Polio", RecordStatus::Inactive),
        ],
    );

    assert_eq!(ids(screen.filtered()), vec![Some(1)]);
    screen.toggle_status_filter();
    assert_eq!(ids(screen.filtered()), vec![Some(2)]);
    screen.toggle_status_filter();
    assert_eq!(ids(screen.filtered()), vec![Some(1)]);
}

#[test]
fn test_text_filters_are_case_insensitive_and_combined() {
    let (mut screen, _rx) = make_screen();
    screen.initialize();
    let mut flu = stored(1, "Influenza", RecordStatus::Active);
    flu.description = "Temporada 2025".to_string();
    list(
        &mut screen,
        1,
        vec![flu, stored(2, "Fiebre amarilla", RecordStatus::Active)],
    );

    screen.set_name_filter("FLU");
    assert_eq!(ids(screen.filtered()), vec![Some(1)]);
    screen.set_description_filter("nothing like it");
    assert!(screen.filtered().is_empty());
    screen.set_description_filter("temporada");
    assert_eq!(ids(screen.filtered()), vec![Some(1)]);
}

#[test]
fn test_stale_list_response_is_discarded() {
    let (mut screen, mut rx) = make_screen();
    screen.initialize();
    screen.refresh_list();
    assert_eq!(fetch_count(&drain(&mut rx)), 2);

    // Older refetch finishes last
    list(&mut screen, 2, vec![stored(9, "Nueva", RecordStatus::Active)]);
    list(&mut screen, 1, vec![stored(1, "Vieja", RecordStatus::Active)]);

    assert_eq!(ids(screen.records()), vec![Some(9)]);
    assert!(!screen.is_loading());
}

#[test]
fn test_invalid_create_sends_nothing() {
    let (mut screen, mut rx) = make_screen();
    screen.open_create();
    screen.edit_form(FormEdit::Insert('X'));

    assert!(!screen.submit_create());
    assert!(drain(&mut rx).is_empty());
    assert_eq!(
        screen.validation_errors(),
        &[
            FieldError::InvalidKind,
            FieldError::InvalidDescription,
            FieldError::InvalidPrice,
            FieldError::InvalidStock,
        ]
    );

    // Dismissing the errors keeps what was typed
    screen.dismiss();
    assert_eq!(screen.modal().form().unwrap().record.name, "X");
}

#[test]
fn test_create_success_refetches_once_and_shows_notice() {
    let (mut screen, mut rx) = make_screen();
    screen.open_create();
    fill_form(&mut screen, &valid_record("Hepatitis"));

    assert!(screen.submit_create());
    assert_eq!(
        drain(&mut rx),
        vec![GatewayCommand::Create {
            record: valid_record("Hepatitis")
        }]
    );

    screen.on_gateway_event(GatewayEvent::Created {
        result: Ok(stored(30, "Hepatitis", RecordStatus::Active)),
    });
    let commands = drain(&mut rx);
    assert_eq!(fetch_count(&commands), 1);
    assert_eq!(commands.len(), 1);
    assert_eq!(screen.modal(), &ModalState::ConfirmingCreate);
    assert!(matches!(screen.notice(), Some(Notice::Info(_))));

    screen.dismiss();
    assert_eq!(screen.modal(), &ModalState::Closed);
}

#[test]
fn test_create_failure_keeps_form_open() {
    let (mut screen, mut rx) = make_screen();
    screen.open_create();
    fill_form(&mut screen, &valid_record("Hepatitis"));
    screen.submit_create();
    drain(&mut rx);

    screen.on_gateway_event(GatewayEvent::Created {
        result: Err(backend_error()),
    });

    assert!(drain(&mut rx).is_empty());
    assert!(matches!(screen.modal(), ModalState::Adding { .. }));
    let notice = screen.notice().unwrap();
    assert!(notice.is_error());
    assert!(notice.text().contains("database offline"));
}

#[test]
fn test_declined_edit_sends_nothing() {
    let (mut screen, mut rx) = make_screen();
    screen.open_edit(&stored(5, "Sarampion", RecordStatus::Active));

    assert!(screen.confirm_update());
    assert!(matches!(screen.modal(), ModalState::ConfirmingEdit { .. }));
    screen.resolve_edit_confirmation(false);

    assert!(drain(&mut rx).is_empty());
    assert!(matches!(screen.modal(), ModalState::Editing { .. }));
}

#[test]
fn test_accepted_edit_updates_then_refetches() {
    let (mut screen, mut rx) = make_screen();
    let record = stored(5, "Sarampion", RecordStatus::Active);
    screen.open_edit(&record);
    screen.edit_form(FormEdit::Insert('s'));
    screen.confirm_update();
    screen.resolve_edit_confirmation(true);

    let mut expected = record.clone();
    expected.name.push('s');
    assert_eq!(
        drain(&mut rx),
        vec![GatewayCommand::Update {
            id: 5,
            record: expected.clone()
        }]
    );

    screen.on_gateway_event(GatewayEvent::Updated {
        id: 5,
        result: Ok(expected),
    });
    assert_eq!(fetch_count(&drain(&mut rx)), 1);
    assert_eq!(screen.modal(), &ModalState::Closed);
}

#[test]
fn test_invalid_edit_never_reaches_confirmation() {
    let (mut screen, mut rx) = make_screen();
    let mut record = stored(5, "Sarampion", RecordStatus::Active);
    record.stock = "0".to_string();
    screen.open_edit(&record);

    assert!(!screen.confirm_update());
    assert_eq!(screen.validation_errors(), &[FieldError::InvalidStock]);
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn test_deactivate_then_record_moves_to_inactive_half() {
    let (mut screen, mut rx) = make_screen();
    screen.initialize();
    list(
        &mut screen,
        1,
        vec![
            stored(1, "Rabia", RecordStatus::Active),
            stored(2, "Polio", RecordStatus::Inactive),
        ],
    );
    drain(&mut rx);

    screen.request_toggle_selected();
    assert_eq!(screen.modal(), &ModalState::ConfirmingDeactivate { id: 1 });
    screen.confirm_deactivate();
    assert_eq!(drain(&mut rx), vec![GatewayCommand::Deactivate { id: 1 }]);

    screen.on_gateway_event(GatewayEvent::Deactivated {
        id: 1,
        result: Ok(stored(1, "Rabia", RecordStatus::Inactive)),
    });
    assert_eq!(drain(&mut rx), vec![GatewayCommand::FetchAll { seq: 2 }]);
    assert_eq!(screen.modal(), &ModalState::Closed);

    list(
        &mut screen,
        2,
        vec![
            stored(1, "Rabia", RecordStatus::Inactive),
            stored(2, "Polio", RecordStatus::Inactive),
        ],
    );
    assert!(screen.filtered().is_empty());
    screen.toggle_status_filter();
    assert_eq!(ids(screen.filtered()), vec![Some(1), Some(2)]);
}

#[test]
fn test_deactivate_failure_keeps_dialog_and_reports() {
    let (mut screen, mut rx) = make_screen();
    screen.request_deactivate(4);
    screen.confirm_deactivate();
    drain(&mut rx);

    screen.on_gateway_event(GatewayEvent::Deactivated {
        id: 4,
        result: Err(backend_error()),
    });

    assert!(drain(&mut rx).is_empty());
    assert_eq!(screen.modal(), &ModalState::ConfirmingDeactivate { id: 4 });
    assert!(screen.notice().unwrap().is_error());
}

#[test]
fn test_activate_selected_inactive_record() {
    let (mut screen, mut rx) = make_screen();
    screen.initialize();
    list(&mut screen, 1, vec![stored(2, "Polio", RecordStatus::Inactive)]);
    screen.set_status_filter(RecordStatus::Inactive);
    drain(&mut rx);

    screen.request_toggle_selected();
    screen.confirm_activate();
    assert_eq!(drain(&mut rx), vec![GatewayCommand::Activate { id: 2 }]);

    screen.on_gateway_event(GatewayEvent::Activated {
        id: 2,
        result: Ok(stored(2, "Polio", RecordStatus::Active)),
    });
    assert_eq!(fetch_count(&drain(&mut rx)), 1);
    assert_eq!(screen.modal(), &ModalState::Closed);
}

#[test]
fn test_list_failure_keeps_previous_records() {
    let (mut screen, _rx) = make_screen();
    screen.initialize();
    list(&mut screen, 1, vec![stored(1, "Rabia", RecordStatus::Active)]);
    screen.refresh_list();

    screen.on_gateway_event(GatewayEvent::Listed {
        seq: 2,
        result: Err(backend_error()),
    });

    assert_eq!(screen.records().len(), 1);
    assert!(!screen.is_loading());
    assert!(screen.notice().unwrap().text().contains("fetching records"));
}

#[test]
fn test_closed_gateway_is_reported() {
    let (mut screen, rx) = make_screen();
    drop(rx);
    screen.refresh_list();

    assert!(!screen.is_loading());
    let notice = screen.notice().unwrap();
    assert!(notice.is_error());
    assert!(notice.text().starts_with("Gateway unavailable"));
}

#[test]
fn test_update_success_closes_form_reopened_while_saving() {
    let (mut screen, mut rx) = make_screen();
    let record = stored(5, "Sarampion", RecordStatus::Active);
    screen.open_edit(&record);
    screen.confirm_update();
    screen.resolve_edit_confirmation(true);
    // User backs out of the confirmation before the PUT completes
    screen.dismiss();
    assert!(matches!(screen.modal(), ModalState::Editing { .. }));
    drain(&mut rx);

    screen.on_gateway_event(GatewayEvent::Updated {
        id: 5,
        result: Ok(record),
    });

    assert_eq!(screen.modal(), &ModalState::Closed);
    assert_eq!(fetch_count(&drain(&mut rx)), 1);
}

#[test]
fn test_activate_failure_keeps_dialog_and_reports() {
    let (mut screen, mut rx) = make_screen();
    screen.request_activate(8);
    screen.confirm_activate();
    assert_eq!(drain(&mut rx), vec![GatewayCommand::Activate { id: 8 }]);

    screen.on_gateway_event(GatewayEvent::Activated {
        id: 8,
        result: Err(backend_error()),
    });

    assert!(drain(&mut rx).is_empty());
    assert_eq!(screen.modal(), &ModalState::ConfirmingActivate { id: 8 });
    let notice = screen.notice().unwrap();
    assert!(notice.is_error());
    assert!(notice.text().contains("activating record"));
}

#[test]
fn test_create_strips_placeholder_id() {
    let (mut screen, mut rx) = make_screen();
    screen.open_create();
    assert_eq!(
        screen.modal().form().unwrap().record.id,
        Some(vaxdesk::model::PLACEHOLDER_ID)
    );
    fill_form(&mut screen, &valid_record("Hepatitis"));

    assert!(screen.submit_create());
    match drain(&mut rx).as_slice() {
        [GatewayCommand::Create { record }] => {
            assert_eq!(record.id, None);
            assert_eq!(record.name, "Hepatitis");
        }
        other => panic!("Expected one Create command, got {other:?}"),
    }
}

#[test]
fn test_close_from_edit_errors_closes_everything() {
    let (mut screen, mut rx) = make_screen();
    let mut record = stored(5, "Sarampion", RecordStatus::Active);
    record.price = "abc".to_string();
    screen.open_edit(&record);
    assert!(!screen.confirm_update());
    assert_eq!(screen.validation_errors(), &[FieldError::InvalidPrice]);

    screen.close_modal();

    assert_eq!(screen.modal(), &ModalState::Closed);
    assert!(screen.validation_errors().is_empty());
    assert!(drain(&mut rx).is_empty());

    // Plain edit form closes the same way
    screen.open_edit(&stored(6, "Rabia", RecordStatus::Active));
    screen.close_modal();
    assert_eq!(screen.modal(), &ModalState::Closed);
}

#[test]
fn test_success_notice_clears_on_next_action() {
    let (mut screen, mut rx) = make_screen();
    screen.request_deactivate(3);
    screen.confirm_deactivate();
    screen.on_gateway_event(GatewayEvent::Deactivated {
        id: 3,
        result: Ok(stored(3, "Rabia", RecordStatus::Inactive)),
    });
    drain(&mut rx);
    assert!(matches!(screen.notice(), Some(Notice::Info(_))));

    screen.toggle_status_filter();
    assert_eq!(screen.notice(), None);
}

#[test]
fn test_error_notice_survives_user_actions() {
    let (mut screen, _rx) = make_screen();
    screen.initialize();
    screen.on_gateway_event(GatewayEvent::Listed {
        seq: 1,
        result: Err(backend_error()),
    });

    screen.toggle_status_filter();
    screen.dismiss();
    assert!(screen.notice().unwrap().is_error());
}
