use super::*;

/// Parse a navigation location's final path segment as a project id.
/// A missing or non-numeric segment yields `None`; the detail view then
/// shows its not-found state rather than silently falling back to a
/// default record.
pub fn parse_project_location(location: &str) -> Option<u32> {
    location
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}

impl App {
    /// Navigation side effect for the highlighted result: write a location
    /// encoding the id and mount the detail view.
    pub fn open_selected_project(&mut self) {
        let Some(id) = self.selected_project().map(|p| p.id) else {
            return;
        };
        self.navigate_to_location(&format!("/project/{}", id));
    }

    /// Transition to the location's view. "/" is the list; anything else
    /// resolves as a detail location.
    pub fn navigate_to_location(&mut self, location: &str) {
        self.location = location.to_string();
        if location == "/" {
            self.mount_list();
        } else {
            self.mount_detail();
        }
    }

    pub fn return_to_list(&mut self) {
        self.navigate_to_location("/");
    }

    /// Resolve the current location once on mount. Lookup miss and
    /// unparseable locations both land in NotFound, the only recovered
    /// error condition in the app.
    fn mount_detail(&mut self) {
        self.detail = match parse_project_location(&self.location)
            .and_then(|id| self.catalog.find_by_id(id))
        {
            Some(project) => DetailState::Found(project.clone()),
            None => DetailState::NotFound,
        };
        self.detail_scroll = 0;
        self.detail_line_count = 0;
        self.current_view = View::Detail;
        self.clear_status();
    }

    /// List state is scoped to the view: re-entering starts from a clean
    /// search term and no category selection.
    fn mount_list(&mut self) {
        self.search_input.clear();
        self.selected_category = None;
        self.category_cursor = 0;
        self.filtered_index = 0;
        self.focused_pane = FocusedPane::Search;
        self.apply_filters();
        self.current_view = View::List;
        self.clear_status();
    }

    /// Cycle pane focus forward: Search -> Categories -> Results.
    pub fn focus_next(&mut self) {
        self.focused_pane = match self.focused_pane {
            FocusedPane::Search => FocusedPane::Categories,
            FocusedPane::Categories => FocusedPane::Results,
            FocusedPane::Results => FocusedPane::Search,
        };
    }

    /// Cycle pane focus backward.
    pub fn focus_previous(&mut self) {
        self.focused_pane = match self.focused_pane {
            FocusedPane::Search => FocusedPane::Results,
            FocusedPane::Categories => FocusedPane::Search,
            FocusedPane::Results => FocusedPane::Categories,
        };
    }

    pub fn detail_scroll_down(&mut self) {
        if self.detail_scroll + 1 < self.detail_line_count {
            self.detail_scroll += 1;
        }
    }

    pub fn detail_scroll_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }
}
