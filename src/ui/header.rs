use crate::filter::FilterCriteria;
use crate::model::RecordStatus;
use crate::ui::screen::FilterField;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR,
    STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar with the status toggle and both filter boxes.
pub struct Header<'a> {
    criteria: &'a FilterCriteria,
    focus: Option<FilterField>,
    loading: bool,
}

impl<'a> Header<'a> {
    pub fn new(criteria: &'a FilterCriteria, focus: Option<FilterField>, loading: bool) -> Self {
        Self {
            criteria,
            focus,
            loading,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_color = match self.criteria.status {
            RecordStatus::Active => STATUS_OK,
            RecordStatus::Inactive => STATUS_ERROR,
        };

        let mut title = vec![
            Span::styled("  Vaccine inventory", text_style.fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled("●", Style::default().fg(status_color)),
            Span::styled(format!(" Showing {}", self.criteria.status.label()), text_style),
        ];
        if self.loading {
            title.push(Span::styled("  │  ", separator_style));
            title.push(Span::styled("Loading...", text_style.add_modifier(Modifier::DIM)));
        }

        let filters = Line::from(vec![
            Span::styled("  ", text_style),
            filter_span("Name", &self.criteria.name, self.focus == Some(FilterField::Name)),
            Span::styled("  │  ", separator_style),
            filter_span(
                "Description",
                &self.criteria.description,
                self.focus == Some(FilterField::Description),
            ),
        ]);

        Paragraph::new(vec![Line::from(title), filters]).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn filter_span(label: &str, value: &str, focused: bool) -> Span<'static> {
    let text = if focused {
        format!("{label}: {value}▏")
    } else if value.is_empty() {
        format!("{label}: (any)")
    } else {
        format!("{label}: {value}")
    };
    let style = if focused {
        Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)
    };
    Span::styled(text, style)
}
