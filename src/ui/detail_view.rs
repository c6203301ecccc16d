use super::utils::{centered_rect, difficulty_color};
use super::*;
use crate::app::DetailState;
use crate::types::Project;
use ratatui::widgets::Clear;

pub fn render_detail_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let project = match &app.detail {
        DetailState::Found(project) => project.clone(),
        DetailState::NotFound => {
            render_not_found(frame, body);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(0),    // Project body
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let lines = build_project_lines(&project);
    app.detail_line_count = lines.len();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            format!(" {} ", project.title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::horizontal(2));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.detail_scroll as u16, 0));
    frame.render_widget(paragraph, chunks[0]);

    render_controls(frame, chunks[1]);
}

fn build_project_lines(project: &Project) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
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
            Span::raw("  "),
            Span::styled(
                project.category.clone(),
                Style::default().fg(Color::Blue),
            ),
        ]),
        Line::from(Span::styled(
            project.image_url.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            project.description.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];

    lines.push(section_title("必要な材料"));
    if project.materials.is_empty() {
        lines.push(dimmed("（なし）"));
    }
    for material in &project.materials {
        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", material.name)),
            Span::styled(
                material.quantity.clone(),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(section_title("必要な道具"));
    if project.tools.is_empty() {
        lines.push(dimmed("（なし）"));
    }
    for tool in &project.tools {
        let marker = if tool.optional {
            "（オプション）"
        } else {
            "（必須）"
        };
        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", tool.name)),
            Span::styled(marker.to_string(), Style::default().fg(Color::Gray)),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(section_title("手順"));
    if project.steps.is_empty() {
        lines.push(dimmed("（なし）"));
    }
    // Steps render in stored order; the `order` field is display data only.
    for step in &project.steps {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}. ", step.order),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(step.description.clone()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", step.image_url),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}

fn dimmed(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", text),
        Style::default().fg(Color::DarkGray),
    ))
}

fn render_not_found(frame: &mut Frame, body: Rect) {
    let area = centered_rect(50, 5, body);
    frame.render_widget(Clear, area);
    let message = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "プロジェクトが見つかりません",
            Style::default().fg(Color::Red),
        )),
        Line::from(Span::styled(
            "Esc: ホームに戻る",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(message, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls_text = vec![
        Span::styled("↑↓/j/k", Style::default().fg(Color::Yellow)),
        Span::raw(": Scroll  "),
        Span::styled("Esc/h", Style::default().fg(Color::Yellow)),
        Span::raw(": ホームに戻る  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(": Quit"),
    ];
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
