//! Portfolio browser rendering
//!
//! The tabbed screen shown after the opening sequence: about, projects,
//! skills, and contact tabs under a shared banner and tab bar.

use super::{header, projects};
use crate::app::{AppState, PortfolioTab};
use crate::components::particles::ParticleField;
use crate::content::{self, PROFILE};
use crate::theme::UiConstants;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the browse screen for the active tab
pub fn render_browse(f: &mut Frame, state: &AppState, particles: &ParticleField, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(UiConstants::HEADER_HEIGHT),
            Constraint::Length(UiConstants::TAB_BAR_HEIGHT),
            Constraint::Min(1),
        ])
        .split(area);

    header::render_banner(f, chunks[0], &state.theme);
    header::render_tab_bar(f, state, chunks[1]);

    match state.tab {
        PortfolioTab::About => render_about(f, state, particles, chunks[2]),
        PortfolioTab::Projects => projects::render_projects(f, state, chunks[2]),
        PortfolioTab::Skills => render_skills(f, state, chunks[2]),
        PortfolioTab::Contact => render_contact(f, state, chunks[2]),
    }
}

/// Render the about tab: bio paragraphs plus featured work, over the
/// drifting particle backdrop when motion allows it
fn render_about(f: &mut Frame, state: &AppState, particles: &ParticleField, area: Rect) {
    let theme = &state.theme;

    if state.particles_visible() {
        particles.render(f, area, theme, true);
    }

    let mut lines: Vec<Line> = Vec::new();

    for paragraph in PROFILE.bio {
        lines.push(Line::from(Span::styled(*paragraph, theme.text())));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("Featured work", theme.header())));
    lines.push(Line::from(""));
    for project in content::featured_projects() {
        lines.push(Line::from(vec![
            Span::styled("  ▪ ", theme.accent()),
            Span::styled(project.title, theme.text_bold()),
            Span::styled(format!("  ({})", project.year), theme.text_muted()),
        ]));
    }

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" About ")
                .border_style(theme.border()),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

/// Render the skills tab as an accordion of groups
fn render_skills(f: &mut Frame, state: &AppState, area: Rect) {
    let theme = &state.theme;
    let mut lines: Vec<Line> = Vec::new();

    for (i, group) in content::SKILL_GROUPS.iter().enumerate() {
        let marker = if state.accordion.is_open(i) { "▾" } else { "▸" };
        let header_style = if state.accordion.selected() == i {
            theme.selected()
        } else {
            theme.unselected()
        };
        lines.push(Line::from(Span::styled(
            format!(" {} {} ", marker, group.title),
            header_style,
        )));

        if state.accordion.is_open(i) {
            lines.push(Line::from(Span::styled(
                format!("   {}", group.blurb),
                theme.text_muted(),
            )));
            lines.push(Line::from(Span::styled(
                format!("   {}", group.skills.join(", ")),
                theme.text(),
            )));
        }
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Skills ")
                .border_style(theme.border()),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

/// Render the contact tab
fn render_contact(f: &mut Frame, state: &AppState, area: Rect) {
    let theme = &state.theme;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "Get in touch, I read everything.",
        theme.text(),
    )));
    lines.push(Line::from(""));

    for entry in PROFILE.contact {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", entry.label), theme.accent()),
            Span::styled(entry.value, theme.text()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Based in {}", PROFILE.location),
        theme.text_muted(),
    )));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Contact ")
            .border_style(theme.border()),
    );
    f.render_widget(widget, area);
}
