use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::Period;
use crate::ui::app::App;
use crate::ui::search::SearchIntent;

const PAGE_ROWS: isize = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'r') {
        app.request_load_more();
        return;
    }

    if app.search().editing {
        handle_search_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('/') => app.dispatch_search(SearchIntent::Focus),
        KeyCode::Esc => {
            if app.search().is_active() {
                app.dispatch_search(SearchIntent::Cancel);
            } else {
                app.close_detail();
            }
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-PAGE_ROWS),
        KeyCode::PageDown => app.move_selection(PAGE_ROWS),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => {
            app.select_last();
            // Reaching the bottom asks for the next page, like pulling to refresh.
            app.request_load_more();
        }
        KeyCode::Enter => app.open_selected(),
        KeyCode::Tab | KeyCode::BackTab => app.switch_domain(),
        KeyCode::Left => app.previous_scope(),
        KeyCode::Right => app.next_scope(),
        KeyCode::Char('f') => app.toggle_favourite(),
        KeyCode::Char('r') => app.request_load_more(),
        KeyCode::Char('R') => app.reload(),
        KeyCode::Char(ch) => {
            if let Some(period) = ch
                .to_digit(10)
                .and_then(|digit| (digit as usize).checked_sub(1))
                .and_then(Period::from_index)
            {
                app.set_scope(period);
            }
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_search(SearchIntent::Cancel),
        KeyCode::Enter => app.dispatch_search(SearchIntent::Submit),
        KeyCode::Backspace => app.dispatch_search(SearchIntent::Backspace),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_search(SearchIntent::Insert(ch))
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
