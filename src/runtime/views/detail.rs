use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_detail_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.detail_scroll_down(),
        KeyCode::Up | KeyCode::Char('k') => app.detail_scroll_up(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.return_to_list();
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::View;
    use crate::catalog::Catalog;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn detail_app() -> App {
        let mut app = App::new(Catalog::builtin());
        app.navigate_to_location("/project/1");
        app
    }

    #[test]
    fn esc_returns_to_the_list() {
        let mut app = detail_app();
        handle_detail_key(key(KeyCode::Esc), &mut app);
        assert_eq!(app.current_view, View::List);
        assert_eq!(app.location, "/");
    }

    #[test]
    fn scroll_keys_move_within_rendered_bounds() {
        let mut app = detail_app();
        app.detail_line_count = 10;
        handle_detail_key(key(KeyCode::Char('j')), &mut app);
        handle_detail_key(key(KeyCode::Down), &mut app);
        assert_eq!(app.detail_scroll, 2);
        handle_detail_key(key(KeyCode::Char('k')), &mut app);
        assert_eq!(app.detail_scroll, 1);
    }

    #[test]
    fn q_quits_from_detail() {
        let mut app = detail_app();
        handle_detail_key(key(KeyCode::Char('q')), &mut app);
        assert!(!app.running);
    }

    #[test]
    fn not_found_detail_still_returns_to_list() {
        let mut app = App::new(Catalog::builtin());
        app.navigate_to_location("/project/999");
        handle_detail_key(key(KeyCode::Backspace), &mut app);
        assert_eq!(app.current_view, View::List);
    }
}
