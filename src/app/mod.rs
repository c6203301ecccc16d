use crate::catalog::Catalog;
use crate::types::{distinct_categories, Project};

mod navigation;
mod state;
pub use navigation::parse_project_location;
pub use state::{DetailState, FocusedPane, TextInput, View};

pub struct App {
    pub running: bool,
    pub current_view: View,
    pub status_message: Option<String>,

    /// Current navigation location, e.g. "/" or "/project/3". The detail
    /// view resolves its record by parsing the final path segment.
    pub location: String,

    // Read-only catalog, injected at startup.
    catalog: Catalog,

    // List view state (view-scoped, reset when the list is re-entered)
    pub search_input: TextInput,
    pub selected_category: Option<String>,
    pub categories: Vec<String>,
    pub category_cursor: usize,
    pub filtered_projects: Vec<Project>,
    pub filtered_index: usize,
    pub focused_pane: FocusedPane,

    // Detail view state
    pub detail: DetailState,
    pub detail_scroll: usize,
    pub detail_line_count: usize, // Updated by the renderer each frame
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let categories = distinct_categories(catalog.list_all());
        let filtered_projects = catalog.list_all().to_vec();
        Self {
            running: true,
            current_view: View::List,
            status_message: None,
            location: "/".to_string(),
            catalog,
            search_input: TextInput::new(),
            selected_category: None,
            categories,
            category_cursor: 0,
            filtered_projects,
            filtered_index: 0,
            focused_pane: FocusedPane::Search,
            detail: DetailState::NotFound,
            detail_scroll: 0,
            detail_line_count: 0,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Recompute the filtered list: the subsequence of the catalog matching
    /// (category is unselected OR equal) AND (search term is empty OR title
    /// or description contains it case-insensitively). Catalog order is
    /// preserved; there is no re-ranking.
    pub fn apply_filters(&mut self) {
        let term = self.search_input.value.to_lowercase();
        self.filtered_projects = self
            .catalog
            .list_all()
            .iter()
            .filter(|project| {
                let matches_category = self
                    .selected_category
                    .as_deref()
                    .map_or(true, |category| project.category == category);
                let matches_search = term.is_empty()
                    || project.title.to_lowercase().contains(&term)
                    || project.description.to_lowercase().contains(&term);
                matches_category && matches_search
            })
            .cloned()
            .collect();
        if self.filtered_index >= self.filtered_projects.len() {
            self.filtered_index = 0;
        }
    }

    pub fn search_input_char(&mut self, c: char) {
        self.search_input.insert(c);
        self.apply_filters();
    }

    pub fn search_input_backspace(&mut self) {
        self.search_input.backspace();
        self.apply_filters();
    }

    pub fn search_input_clear(&mut self) {
        self.search_input.clear();
        self.apply_filters();
    }

    pub fn search_move_cursor(&mut self, left: bool) {
        if left {
            self.search_input.move_left();
        } else {
            self.search_input.move_right();
        }
    }

    pub fn search_cursor_home_end(&mut self, home: bool) {
        if home {
            self.search_input.home();
        } else {
            self.search_input.end();
        }
    }

    /// Single-select category toggle: selecting the active category
    /// deselects it, selecting another replaces it.
    pub fn toggle_category(&mut self, category: &str) {
        if self.selected_category.as_deref() == Some(category) {
            self.selected_category = None;
            self.set_status("Category filter cleared".to_string());
        } else {
            self.selected_category = Some(category.to_string());
            self.set_status(format!("Category: {}", category));
        }
        self.apply_filters();
    }

    pub fn toggle_highlighted_category(&mut self) {
        if let Some(category) = self.categories.get(self.category_cursor).cloned() {
            self.toggle_category(&category);
        }
    }

    pub fn category_cursor_left(&mut self) {
        if self.category_cursor > 0 {
            self.category_cursor -= 1;
        }
    }

    pub fn category_cursor_right(&mut self) {
        if self.category_cursor + 1 < self.categories.len() {
            self.category_cursor += 1;
        }
    }

    /// Move the result cursor down, clamped at the last entry.
    pub fn select_next(&mut self) {
        if self.filtered_index + 1 < self.filtered_projects.len() {
            self.filtered_index += 1;
        }
    }

    /// Move the result cursor up, clamped at the first entry.
    pub fn select_previous(&mut self) {
        if self.filtered_index > 0 {
            self.filtered_index -= 1;
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.filtered_projects.get(self.filtered_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(Catalog::builtin())
    }

    fn type_term(app: &mut App, term: &str) {
        for c in term.chars() {
            app.search_input_char(c);
        }
    }

    fn filtered_ids(app: &App) -> Vec<u32> {
        app.filtered_projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn empty_filters_return_full_catalog_in_order() {
        let app = test_app();
        assert_eq!(filtered_ids(&app), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn search_matches_title_substring() {
        let mut app = test_app();
        type_term(&mut app, "木製");
        // "シンプルな木製本棚" matches, "ハーブガーデンプランター" does not.
        assert_eq!(filtered_ids(&app), vec![1]);
    }

    #[test]
    fn search_matches_description_substring() {
        let mut app = test_app();
        type_term(&mut app, "廃材");
        assert_eq!(filtered_ids(&app), vec![5]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut app = test_app();
        type_term(&mut app, "diy");
        // Description of id 5 contains "DIY".
        assert_eq!(filtered_ids(&app), vec![5]);
    }

    #[test]
    fn category_filter_selects_exactly_matching_projects() {
        let mut app = test_app();
        app.toggle_category("ガーデニング");
        assert_eq!(filtered_ids(&app), vec![2, 4]);
    }

    #[test]
    fn toggle_category_twice_is_an_idempotent_pair() {
        let mut app = test_app();
        app.toggle_category("木工");
        assert_eq!(filtered_ids(&app), vec![1, 3, 5]);
        app.toggle_category("木工");
        assert_eq!(app.selected_category, None);
        assert_eq!(filtered_ids(&app), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn select_deselect_select_lands_on_second_category() {
        let mut app = test_app();
        type_term(&mut app, "作り方");
        app.toggle_category("木工");
        app.toggle_category("ガーデニング");
        // Single-select: the second toggle replaces the first outright.
        assert_eq!(app.selected_category.as_deref(), Some("ガーデニング"));
        app.search_input_clear();
        assert_eq!(filtered_ids(&app), vec![2, 4]);
    }

    #[test]
    fn search_and_category_are_conjunctive() {
        let mut app = test_app();
        app.toggle_category("木工");
        type_term(&mut app, "シェルフ");
        assert_eq!(filtered_ids(&app), vec![3]);
    }

    #[test]
    fn no_match_yields_empty_result() {
        let mut app = test_app();
        type_term(&mut app, "存在しない検索語");
        assert!(app.filtered_projects.is_empty());
        assert_eq!(app.filtered_index, 0);
    }

    #[test]
    fn filtering_preserves_catalog_order() {
        let mut app = test_app();
        type_term(&mut app, "の");
        let ids = filtered_ids(&app);
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted, "result must be a subsequence of the catalog");
    }

    #[test]
    fn result_cursor_clamps_at_both_ends() {
        let mut app = test_app();
        app.select_previous();
        assert_eq!(app.filtered_index, 0);
        for _ in 0..10 {
            app.select_next();
        }
        assert_eq!(app.filtered_index, 4);
    }

    #[test]
    fn narrowing_search_resets_out_of_range_cursor() {
        let mut app = test_app();
        app.filtered_index = 4;
        type_term(&mut app, "本棚");
        assert_eq!(filtered_ids(&app), vec![1]);
        assert_eq!(app.filtered_index, 0);
    }

    #[test]
    fn categories_derive_from_catalog_in_first_seen_order() {
        let app = test_app();
        assert_eq!(app.categories, vec!["木工", "ガーデニング"]);
    }
}
