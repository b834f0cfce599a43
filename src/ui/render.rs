use crate::model::VaccineRecord;
use crate::ui::footer::Footer;
use crate::ui::form::{FormField, RecordForm};
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::modal::ModalState;
use crate::ui::screen::InventoryScreen;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR,
};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use ratatui::Frame;

const LABEL_WIDTH: usize = 12;
const FORM_POPUP_WIDTH: u16 = 60;

pub fn draw(frame: &mut Frame<'_>, screen: &InventoryScreen) {
    let (header, body, footer) = layout_regions(frame.area());

    let header_widget = Header::new(screen.criteria(), screen.filter_focus(), screen.is_loading());
    frame.render_widget(header_widget.widget(), header);
    draw_list(frame, body, screen);
    let footer_widget = Footer::new(screen.notice());
    frame.render_widget(footer_widget.widget(footer), footer);

    if screen.modal().is_open() {
        draw_modal(frame, body, screen.modal());
    }
}

fn draw_list(frame: &mut Frame<'_>, area: Rect, screen: &InventoryScreen) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .title(Span::styled(
            format!(" {} of {} records ", screen.filtered().len(), screen.records().len()),
            Style::default().fg(HEADER_TEXT),
        ));

    if screen.filtered().is_empty() {
        let message = if screen.is_loading() {
            "Loading records..."
        } else {
            "No records match the current filters."
        };
        let widget = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )))
        .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let header = Row::new(["Id", "Name", "Type", "Description", "Expires", "Price", "Stock"])
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    let rows = screen.filtered().iter().map(record_row);
    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(20),
        Constraint::Percentage(14),
        Constraint::Percentage(30),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(7),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));

    let mut state = TableState::default().with_selected(Some(screen.selection()));
    frame.render_stateful_widget(table, area, &mut state);
}

fn record_row(record: &VaccineRecord) -> Row<'static> {
    let id = record
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    Row::new([
        Cell::from(id),
        Cell::from(record.name.clone()),
        Cell::from(record.kind.clone()),
        Cell::from(record.description.clone()),
        Cell::from(record.expiration_date.clone()),
        Cell::from(record.price.clone()),
        Cell::from(record.stock.clone()),
    ])
    .style(Style::default().fg(HEADER_TEXT))
}

fn draw_modal(frame: &mut Frame<'_>, body: Rect, modal: &ModalState) {
    let (title, lines) = modal_content(modal);

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let min_width = if modal.form().is_some() {
        FORM_POPUP_WIDTH
    } else {
        0
    };
    let popup_width = content_width.saturating_add(4).max(min_width);
    let popup_height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, popup_width, popup_height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}

fn modal_content(modal: &ModalState) -> (&'static str, Vec<Line<'static>>) {
    match modal {
        ModalState::Closed => ("", Vec::new()),
        ModalState::Adding { form } => (" New vaccine ", form_lines(form)),
        ModalState::Editing { form } => (" Edit vaccine ", form_lines(form)),
        ModalState::ConfirmingCreate => (
            " Saved ",
            vec![
                Line::from(""),
                Line::from("  The vaccine was added successfully."),
                Line::from(""),
                hint_line("Enter/Esc: Close"),
            ],
        ),
        ModalState::ConfirmingEdit { form } => {
            let name = form.record.name.clone();
            (
                " Confirm changes ",
                vec![
                    Line::from(""),
                    Line::from(format!("  Save the changes to '{name}'?")),
                    Line::from(""),
                    hint_line("y/Enter: Save  n/Esc: Back to form"),
                ],
            )
        }
        ModalState::ConfirmingDeactivate { id } => (
            " Deactivate ",
            confirm_lines(format!("  Mark record {id} as inactive?")),
        ),
        ModalState::ConfirmingActivate { id } => (
            " Activate ",
            confirm_lines(format!("  Mark record {id} as active again?")),
        ),
        ModalState::ShowingErrors { errors, .. } => {
            let mut lines = vec![Line::from("")];
            lines.extend(errors.iter().map(|err| {
                Line::from(Span::styled(
                    format!("  • {err}"),
                    Style::default().fg(STATUS_ERROR),
                ))
            }));
            lines.push(Line::from(""));
            lines.push(hint_line("Enter: Back to form  Esc: Close"));
            (" Please fix the form ", lines)
        }
    }
}

fn form_lines(form: &RecordForm) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    for field in FormField::ALL {
        let focused = field == form.focused;
        let cursor = if focused { "▏" } else { "" };
        let label = format!("  {:>width$}: ", field.label(), width = LABEL_WIDTH);
        let mut line = Line::from(vec![
            Span::styled(label, Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)),
            Span::styled(
                format!("{}{}", form.value(field), cursor),
                Style::default().fg(HEADER_TEXT),
            ),
        ]);
        if focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }
    lines.push(Line::from(""));
    lines.push(hint_line("Tab/↓: Next  Shift+Tab/↑: Prev  Enter: Save  Esc: Cancel"));
    lines
}

fn confirm_lines(question: String) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(question),
        Line::from(""),
        hint_line("y/Enter: Confirm  n/Esc: Cancel"),
    ]
}

fn hint_line(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {text}"),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
    ))
}
