use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

mod detail;
mod list;

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App) {
    // Ctrl+C quits from any view.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.current_view {
        View::List => list::handle_list_key(key, app),
        View::Detail => detail::handle_detail_key(key, app),
    }
}
