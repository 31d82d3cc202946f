use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Domain, Period};
use crate::strings::{StringKey, Strings};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};

/// Tab bar (domain) on the left, scope bar (period) on the right.
pub struct Header<'a> {
    strings: &'a Strings,
    domain: Domain,
    period: Period,
}

impl<'a> Header<'a> {
    pub fn new(strings: &'a Strings, domain: Domain, period: Period) -> Self {
        Self {
            strings,
            domain,
            period,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::raw(" ")];
        for (idx, domain) in [Domain::Repositories, Domain::Favourites].into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" │ ", separator_style));
            }
            spans.push(self.segment(self.strings.get(domain_key(domain)), domain == self.domain));
        }

        spans.push(Span::styled("   ┃   ", separator_style));

        for period in Period::ALL {
            let label = format!("{} {}", period.index() + 1, self.strings.get(period_key(period)));
            spans.push(self.segment(label, period == self.period));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    fn segment(&self, label: String, active: bool) -> Span<'static> {
        if active {
            Span::styled(
                format!(" {label} "),
                Style::default()
                    .fg(ACCENT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {label} "), Style::default().fg(HEADER_TEXT))
        }
    }
}

pub fn domain_key(domain: Domain) -> StringKey {
    match domain {
        Domain::Repositories => StringKey::Repositories,
        Domain::Favourites => StringKey::Favourites,
    }
}

pub fn period_key(period: Period) -> StringKey {
    match period {
        Period::Day => StringKey::Day,
        Period::Month => StringKey::Month,
        Period::Year => StringKey::Year,
    }
}
