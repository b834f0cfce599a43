use crate::ui::screen::Notice;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str = " n: New │ e: Edit │ x: (De)activate │ Tab: Active/Inactive │ /: Filter │ r: Reload │ q: Quit";

/// Key hints, or the last backend notice when there is one.
pub struct Footer<'a> {
    notice: Option<&'a Notice>,
}

impl<'a> Footer<'a> {
    pub fn new(notice: Option<&'a Notice>) -> Self {
        Self { notice }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hint_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let (text, text_style) = match self.notice {
            Some(notice) if notice.is_error() => {
                (format!(" {}", notice.text()), Style::default().fg(STATUS_ERROR))
            }
            Some(notice) => (format!(" {}", notice.text()), Style::default().fg(STATUS_OK)),
            None => (HINTS.to_string(), hint_style),
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(text.chars().count())
            .saturating_sub(version.chars().count());

        let line = Line::from(vec![
            Span::styled(text, text_style),
            Span::styled(" ".repeat(padding), hint_style),
            Span::styled(version, hint_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
