use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom: tabs + scope bar, search bar, the
/// master/detail body, then the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub search: Rect,
    pub list: Rect,
    pub status: Rect,
    pub detail: Rect,
    pub footer: Rect,
}

const HEADER_HEIGHT: u16 = 3;
const SEARCH_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;
const LIST_PERCENT: u16 = 45;

pub fn layout_regions(area: Rect) -> Regions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(LIST_PERCENT),
            Constraint::Percentage(100 - LIST_PERCENT),
        ])
        .split(rows[2]);

    // The error label sits under the list, inside the list column.
    let master = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(STATUS_HEIGHT)])
        .split(columns[0]);

    Regions {
        header: rows[0],
        search: rows[1],
        list: master[0],
        status: master[1],
        detail: columns[1],
        footer: rows[3],
    }
}
