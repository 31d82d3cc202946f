use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::strings::StringKey;
use crate::ui::app::App;
use crate::ui::detail::render_detail_pane;
use crate::ui::footer::Footer;
use crate::ui::header::{domain_key, Header};
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STAR,
    STATUS_ERROR,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area);

    frame.render_widget(
        Header::new(app.strings(), app.domain(), app.period()).widget(),
        regions.header,
    );
    draw_search(frame, regions.search, app);
    frame.render_widget(Clear, regions.list);
    draw_list(frame, regions.list, app);
    draw_status(frame, regions.status, app);
    render_detail_pane(frame, regions.detail, app.detail(), app.strings());
    frame.render_widget(
        Footer::new(app.search().editing).widget(regions.footer),
        regions.footer,
    );
}

fn draw_search(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let search = app.search();
    let border = if search.editing {
        FOCUS_BORDER
    } else {
        GLOBAL_BORDER
    };
    let text = if search.text.is_empty() && !search.editing {
        Span::styled(
            format!("/ {}", app.strings().get(StringKey::Search)),
            Style::default().fg(MUTED_TEXT),
        )
    } else {
        Span::styled(search.text.clone(), Style::default().fg(HEADER_TEXT))
    };

    let widget = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(widget, area);

    if search.editing && area.width > 2 && area.height > 2 {
        let offset = search.text.chars().count() as u16;
        let x = area.x + 1 + offset.min(area.width.saturating_sub(3));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_list(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let strings = app.strings();
    let mut title = format!(" {} ", strings.get(domain_key(app.domain())));
    if app.is_refreshing() {
        title.push_str(&strings.get(StringKey::Loading));
        title.push(' ');
    }
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if app.list().is_empty() {
        let empty = Paragraph::new(Span::styled(
            strings.get(StringKey::NoResults),
            Style::default().fg(MUTED_TEXT),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .list()
        .rows()
        .iter()
        .map(|id| {
            let mut spans = Vec::new();
            if app.is_favourite(*id) {
                spans.push(Span::styled("★ ", Style::default().fg(STAR)));
            }
            match app.row_item(*id) {
                Some(item) => {
                    spans.push(Span::styled(
                        item.title.clone(),
                        Style::default().fg(HEADER_TEXT),
                    ));
                    spans.push(Span::styled(
                        format!("  ★{}", item.stars),
                        Style::default().fg(MUTED_TEXT),
                    ));
                }
                None => spans.push(Span::styled(id.to_string(), Style::default().fg(MUTED_TEXT))),
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default().with_selected(app.list().selected());
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let Some(error) = app.list().error() else {
        return;
    };
    let label = Paragraph::new(Span::styled(
        format!(" {error}"),
        Style::default().fg(STATUS_ERROR).add_modifier(Modifier::DIM),
    ));
    frame.render_widget(label, area);
}
