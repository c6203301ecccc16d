use super::utils::difficulty_color;
use super::*;
use crate::app::FocusedPane;

pub fn render_list_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Length(3), // Category row
            Constraint::Min(0),    // Project cards
            Constraint::Length(3), // Controls
        ])
        .split(body);

    render_search_box(frame, app, chunks[0]);
    render_category_row(frame, app, chunks[1]);
    render_results(frame, app, chunks[2]);
    render_controls(frame, app, chunks[3]);
}

fn pane_border(app: &App, pane: FocusedPane) -> Style {
    if app.focused_pane == pane {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_pane == FocusedPane::Search;
    let search_text = if app.search_input.is_empty() {
        if focused {
            "█".to_string()
        } else {
            "プロジェクトを検索...".to_string()
        }
    } else if focused {
        let (before, after) = app.search_input.split_at_cursor();
        format!("{}█{}", before, after)
    } else {
        app.search_input.value.clone()
    };

    let search_box = Paragraph::new(search_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(pane_border(app, FocusedPane::Search))
                .title(" Search ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, area);
}

fn render_category_row(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_pane == FocusedPane::Categories;
    let mut spans: Vec<Span> = Vec::new();
    for (i, category) in app.categories.iter().enumerate() {
        let selected = app.selected_category.as_deref() == Some(category.as_str());
        let highlighted = focused && i == app.category_cursor;

        let mut style = if selected {
            Style::default().fg(Color::Black).bg(Color::Blue)
        } else {
            Style::default().fg(Color::White)
        };
        if highlighted {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!(" {} ", category), style));
        spans.push(Span::raw(" "));
    }
    if spans.is_empty() {
        spans.push(Span::styled(
            "(no categories)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let row = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(pane_border(app, FocusedPane::Categories))
            .title(" Categories ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(row, area);
}

fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let total = app.catalog().list_all().len();
    let title = if app.search_input.is_empty() && app.selected_category.is_none() {
        format!(" Projects ({}) ", total)
    } else {
        format!(" Projects ({}/{}) ", app.filtered_projects.len(), total)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(pane_border(app, FocusedPane::Results))
        .title(title)
        .padding(Padding::horizontal(1));

    if app.filtered_projects.is_empty() {
        let empty_msg = Paragraph::new("該当するプロジェクトがありません")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty_msg, area);
        return;
    }

    let results_focused = app.focused_pane == FocusedPane::Results;
    let items: Vec<ListItem> = app
        .filtered_projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let cursor_here = results_focused && i == app.filtered_index;
            let title_style = if cursor_here {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let title_line = Line::from(vec![
                Span::styled(project.title.clone(), title_style),
                Span::raw("  "),
                Span::styled(
                    project.difficulty.label(),
                    Style::default().fg(difficulty_color(project.difficulty)),
                ),
                Span::raw("  "),
                Span::styled(project.duration.clone(), Style::default().fg(Color::Gray)),
                Span::raw("  "),
                Span::styled(
                    format!("♥ {}", project.likes),
                    Style::default().fg(Color::Red),
                ),
            ]);
            let description_line = Line::from(Span::styled(
                format!("  {}", project.description),
                Style::default().fg(Color::DarkGray),
            ));

            ListItem::new(vec![title_line, description_line])
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let controls_text = match app.focused_pane {
        FocusedPane::Search => vec![
            Span::styled("Type", Style::default().fg(Color::Yellow)),
            Span::raw(": Search  "),
            Span::styled("Ctrl+X", Style::default().fg(Color::Yellow)),
            Span::raw(": Clear  "),
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(": Next pane  "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(": To results  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(": Quit"),
        ],
        FocusedPane::Categories => vec![
            Span::styled("←→/h/l", Style::default().fg(Color::Yellow)),
            Span::raw(": Highlight  "),
            Span::styled("Enter/Space", Style::default().fg(Color::Yellow)),
            Span::raw(": Toggle  "),
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(": Next pane  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(": Quit"),
        ],
        FocusedPane::Results => vec![
            Span::styled("↑↓/j/k", Style::default().fg(Color::Yellow)),
            Span::raw(": Navigate  "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(": Open  "),
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(": Next pane  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(": Quit"),
        ],
    };

    let controls = Paragraph::new(Line::from(controls_text))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(controls, area);
}
