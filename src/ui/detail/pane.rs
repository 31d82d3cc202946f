use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::strings::{StringKey, Strings};
use crate::ui::detail::state::DetailPaneState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STAR, STATUS_ERROR};

pub fn render_detail_pane(frame: &mut Frame, area: Rect, state: &DetailPaneState, strings: &Strings) {
    let text = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);

    let lines: Vec<Line> = match state {
        DetailPaneState::Empty => vec![Line::from(Span::styled(
            strings.get(StringKey::NoSelection),
            muted,
        ))],
        DetailPaneState::Stale { .. } => vec![Line::from(Span::styled(
            strings.get(StringKey::StaleSelection),
            Style::default().fg(STATUS_ERROR),
        ))],
        DetailPaneState::Showing { item, favourite } => {
            let mut title = vec![Span::styled(
                item.title.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )];
            if *favourite {
                title.push(Span::styled(" ★", Style::default().fg(STAR)));
            }

            let description = match &item.description {
                Some(description) if !description.is_empty() => Span::styled(description.clone(), text),
                _ => Span::styled(strings.get(StringKey::NoDescription), muted),
            };
            let language = match &item.language {
                Some(language) => Span::styled(language.clone(), text),
                None => Span::styled(strings.get(StringKey::NoLanguage), muted),
            };

            let mut lines = vec![
                Line::from(title),
                Line::from(""),
                Line::from(description),
                Line::from(""),
                Line::from(language),
                Line::from(Span::styled(strings.format(StringKey::StarsFormat, item.stars), text)),
                Line::from(Span::styled(strings.format(StringKey::ForksFormat, item.forks), text)),
            ];
            if let Some(created) = &item.created {
                lines.push(Line::from(Span::styled(
                    strings.format(StringKey::DateFormat, created),
                    muted,
                )));
            }
            if !item.url.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::styled(format!("{}: ", strings.get(StringKey::OpenInGitHub)), muted),
                    Span::styled(item.url.clone(), Style::default().add_modifier(Modifier::UNDERLINED)),
                ]));
            }
            lines
        }
    };

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}
