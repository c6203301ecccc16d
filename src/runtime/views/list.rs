use crate::app::{App, FocusedPane};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_list_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_previous();
            return;
        }
        _ => {}
    }

    match app.focused_pane {
        FocusedPane::Search => handle_search_key(key, app),
        FocusedPane::Categories => handle_categories_key(key, app),
        FocusedPane::Results => handle_results_key(key, app),
    }
}

fn handle_search_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input_clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input_char(c);
        }
        KeyCode::Backspace => app.search_input_backspace(),
        KeyCode::Left => app.search_move_cursor(true),
        KeyCode::Right => app.search_move_cursor(false),
        KeyCode::Home => app.search_cursor_home_end(true),
        KeyCode::End => app.search_cursor_home_end(false),
        // Jump straight to the results for the common search-then-pick flow.
        KeyCode::Enter | KeyCode::Down => {
            app.focused_pane = FocusedPane::Results;
        }
        KeyCode::Esc => app.quit(),
        _ => {}
    }
}

fn handle_categories_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => app.category_cursor_left(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => app.category_cursor_right(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_highlighted_category(),
        KeyCode::Up => {
            app.focused_pane = FocusedPane::Search;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.focused_pane = FocusedPane::Results;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

fn handle_results_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => {
            // Moving past the top hands focus back to the category row.
            if app.filtered_index == 0 {
                app.focused_pane = FocusedPane::Categories;
            } else {
                app.select_previous();
            }
        }
        KeyCode::Enter => app.open_selected_project(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{DetailState, View};
    use crate::catalog::Catalog;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn test_app() -> App {
        App::new(Catalog::builtin())
    }

    fn type_term(app: &mut App, term: &str) {
        for c in term.chars() {
            handle_list_key(key(KeyCode::Char(c)), app);
        }
    }

    #[test]
    fn typing_in_search_pane_narrows_results() {
        let mut app = test_app();
        type_term(&mut app, "本棚");
        assert_eq!(app.search_input.value, "本棚");
        assert_eq!(app.filtered_projects.len(), 1);
        assert_eq!(app.filtered_projects[0].id, 1);
    }

    #[test]
    fn ctrl_x_clears_the_search_term() {
        let mut app = test_app();
        type_term(&mut app, "本棚");
        handle_list_key(ctrl('x'), &mut app);
        assert!(app.search_input.is_empty());
        assert_eq!(app.filtered_projects.len(), 5);
    }

    #[test]
    fn tab_cycles_panes_and_backtab_reverses() {
        let mut app = test_app();
        handle_list_key(key(KeyCode::Tab), &mut app);
        assert_eq!(app.focused_pane, FocusedPane::Categories);
        handle_list_key(key(KeyCode::BackTab), &mut app);
        assert_eq!(app.focused_pane, FocusedPane::Search);
    }

    #[test]
    fn enter_from_search_focuses_results() {
        let mut app = test_app();
        handle_list_key(key(KeyCode::Enter), &mut app);
        assert_eq!(app.focused_pane, FocusedPane::Results);
    }

    #[test]
    fn category_pane_toggles_highlighted_category() {
        let mut app = test_app();
        app.focused_pane = FocusedPane::Categories;
        handle_list_key(key(KeyCode::Enter), &mut app);
        assert_eq!(app.selected_category.as_deref(), Some("木工"));
        // Same key again deselects.
        handle_list_key(key(KeyCode::Enter), &mut app);
        assert_eq!(app.selected_category, None);
        // Move right and select the second category.
        handle_list_key(key(KeyCode::Right), &mut app);
        handle_list_key(key(KeyCode::Char(' ')), &mut app);
        assert_eq!(app.selected_category.as_deref(), Some("ガーデニング"));
        assert_eq!(app.filtered_projects.len(), 2);
    }

    #[test]
    fn enter_on_result_opens_detail_view() {
        let mut app = test_app();
        app.focused_pane = FocusedPane::Results;
        handle_list_key(key(KeyCode::Char('j')), &mut app);
        handle_list_key(key(KeyCode::Enter), &mut app);
        assert_eq!(app.current_view, View::Detail);
        assert_eq!(app.location, "/project/2");
        match &app.detail {
            DetailState::Found(project) => assert_eq!(project.id, 2),
            DetailState::NotFound => panic!("expected Found for id 2"),
        }
    }

    #[test]
    fn enter_on_empty_results_is_a_no_op() {
        let mut app = test_app();
        type_term(&mut app, "該当なし");
        assert!(app.filtered_projects.is_empty());
        app.focused_pane = FocusedPane::Results;
        handle_list_key(key(KeyCode::Enter), &mut app);
        assert_eq!(app.current_view, View::List);
    }

    #[test]
    fn q_in_search_pane_is_text_not_quit() {
        let mut app = test_app();
        handle_list_key(key(KeyCode::Char('q')), &mut app);
        assert!(app.running);
        assert_eq!(app.search_input.value, "q");
    }

    #[test]
    fn q_in_results_pane_quits() {
        let mut app = test_app();
        app.focused_pane = FocusedPane::Results;
        handle_list_key(key(KeyCode::Char('q')), &mut app);
        assert!(!app.running);
    }

    #[test]
    fn up_from_first_result_returns_focus_to_categories() {
        let mut app = test_app();
        app.focused_pane = FocusedPane::Results;
        handle_list_key(key(KeyCode::Up), &mut app);
        assert_eq!(app.focused_pane, FocusedPane::Categories);
    }
}
