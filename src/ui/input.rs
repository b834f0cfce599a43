use crate::ui::form::FormEdit;
use crate::ui::modal::ModalState;
use crate::ui::screen::InventoryScreen;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(screen: &mut InventoryScreen, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        screen.request_quit();
        return;
    }

    match screen.modal() {
        ModalState::Closed => handle_list_key(screen, key),
        ModalState::Adding { .. } | ModalState::Editing { .. } => handle_form_key(screen, key),
        ModalState::ShowingErrors { .. } => match key.code {
            KeyCode::Esc => screen.close_modal(),
            KeyCode::Enter => screen.dismiss(),
            _ => {}
        },
        ModalState::ConfirmingEdit { .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => screen.resolve_edit_confirmation(true),
            KeyCode::Char('n') | KeyCode::Esc => screen.resolve_edit_confirmation(false),
            _ => {}
        },
        ModalState::ConfirmingDeactivate { .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => screen.confirm_deactivate(),
            KeyCode::Char('n') | KeyCode::Esc => screen.dismiss(),
            _ => {}
        },
        ModalState::ConfirmingActivate { .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => screen.confirm_activate(),
            KeyCode::Char('n') | KeyCode::Esc => screen.dismiss(),
            _ => {}
        },
        ModalState::ConfirmingCreate => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                screen.dismiss();
            }
        }
    }
}

fn handle_list_key(screen: &mut InventoryScreen, key: KeyEvent) {
    if screen.filter_focus().is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => screen.clear_filter_focus(),
            KeyCode::Tab => screen.edit_filter(FormEdit::FocusNext),
            KeyCode::Backspace => screen.edit_filter(FormEdit::Backspace),
            KeyCode::Char(ch) => screen.edit_filter(FormEdit::Insert(ch)),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => screen.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => screen.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => screen.move_selection(1),
        KeyCode::Tab | KeyCode::Char('t') => screen.toggle_status_filter(),
        KeyCode::Char('/') => screen.cycle_filter_focus(),
        KeyCode::Char('n') => screen.open_create(),
        KeyCode::Char('e') | KeyCode::Enter => screen.open_edit_selected(),
        KeyCode::Char('x') => screen.request_toggle_selected(),
        KeyCode::Char('r') => screen.refresh_list(),
        _ => {}
    }
}

fn handle_form_key(screen: &mut InventoryScreen, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => screen.close_modal(),
        KeyCode::Enter => {
            if screen.modal().is_edit_mode() {
                screen.confirm_update();
            } else {
                screen.submit_create();
            }
        }
        KeyCode::Tab | KeyCode::Down => screen.edit_form(FormEdit::FocusNext),
        KeyCode::BackTab | KeyCode::Up => screen.edit_form(FormEdit::FocusPrev),
        KeyCode::Backspace => screen.edit_form(FormEdit::Backspace),
        KeyCode::Char(ch) => screen.edit_form(FormEdit::Insert(ch)),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
