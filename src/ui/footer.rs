use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const BROWSE_HINTS: &str =
    " /: Search │ Tab: Domain │ 1-3: Scope │ Enter: Open │ f: Favourite │ Ctrl+R: More │ q: Quit";
const SEARCH_HINTS: &str = " Type to filter │ Enter: Done │ Esc: Clear │ Ctrl+Q: Quit";

pub struct Footer {
    searching: bool,
}

impl Footer {
    pub fn new(searching: bool) -> Self {
        Self { searching }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = if self.searching {
            SEARCH_HINTS
        } else {
            BROWSE_HINTS
        };
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: the separators are multi-byte.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
