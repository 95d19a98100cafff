//! Project browser rendering
//!
//! Filter bar on top, list on the left, detail pane on the right. The
//! filter bar doubles as the search input while it has focus.

use crate::app::AppState;
use crate::content::Project;
use crate::theme::{UiConstants, UiText};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Render the projects tab
pub fn render_projects(f: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_filter_bar(f, state, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(UiConstants::PROJECT_LIST_PCT),
            Constraint::Percentage(100 - UiConstants::PROJECT_LIST_PCT),
        ])
        .split(chunks[1]);

    let results = state.filter.results();
    render_project_list(f, state, &results, body[0]);
    render_project_detail(f, state, &results, body[1]);
}

/// Render the search and category filter bar
fn render_filter_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let theme = &state.theme;
    let filter = &state.filter;

    let mut spans: Vec<Span> = vec![Span::styled(UiText::SEARCH_PROMPT, theme.text_muted())];
    if filter.is_input_active() {
        spans.push(Span::styled(filter.pending().to_string(), theme.accent()));
        spans.push(Span::styled("▌", theme.accent()));
    } else if filter.query().is_empty() {
        spans.push(Span::styled("(press / to search)", theme.text_muted()));
    } else {
        spans.push(Span::styled(filter.query().to_string(), theme.text()));
    }

    spans.push(Span::styled("    Category: ", theme.text_muted()));
    match filter.category() {
        Some(category) => spans.push(Span::styled(category.to_string(), theme.accent())),
        None => spans.push(Span::styled("all", theme.text())),
    }

    let border = if filter.is_input_active() {
        theme.border_active()
    } else {
        theme.border()
    };
    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Filter ")
            .border_style(border),
    );
    f.render_widget(widget, area);
}

/// Render the filtered project list
fn render_project_list(f: &mut Frame, state: &AppState, results: &[&'static Project], area: Rect) {
    let theme = &state.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Projects ({}) ", results.len()))
        .border_style(theme.border());

    if results.is_empty() {
        let empty = Paragraph::new(Span::styled(UiText::NO_PROJECTS, theme.text_muted()))
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = results
        .iter()
        .map(|project| {
            let marker = if project.featured { "★ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, theme.warning()),
                Span::styled(project.title, theme.text()),
                Span::styled(format!("  {}", project.year), theme.text_muted()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected())
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.project_selection.min(results.len() - 1)));
    f.render_stateful_widget(list, area, &mut list_state);
}

/// Render the detail pane for the selected project
fn render_project_detail(
    f: &mut Frame,
    state: &AppState,
    results: &[&'static Project],
    area: Rect,
) {
    let theme = &state.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Detail ")
        .border_style(theme.border());

    let Some(project) = results.get(state.project_selection).copied() else {
        let empty = Paragraph::new(Span::styled(
            "Select a project to see details",
            theme.text_muted(),
        ))
        .block(block)
        .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    };

    let categories = project
        .categories
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(project.title, theme.title())),
        Line::from(vec![
            Span::styled(format!("{}  ", project.year), theme.text_muted()),
            Span::styled(categories, theme.accent()),
        ]),
        Line::from(""),
        Line::from(Span::styled(project.summary, theme.text())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Built with: ", theme.text_muted()),
            Span::styled(project.technologies.join(", "), theme.text()),
        ]),
    ];

    if project.repo_url.is_some() || project.demo_url.is_some() {
        lines.push(Line::from(""));
    }
    if let Some(url) = project.repo_url {
        lines.push(Line::from(vec![
            Span::styled("Source: ", theme.text_muted()),
            Span::styled(url, theme.accent()),
        ]));
    }
    if let Some(url) = project.demo_url {
        lines.push(Line::from(vec![
            Span::styled("Demo:   ", theme.text_muted()),
            Span::styled(url, theme.accent()),
        ]));
    }

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}
