//! Banner and common widget rendering
//!
//! This module contains the ASCII art banner, the tab bar, and the
//! navigation bar with its context-sensitive key hints.

use crate::app::AppState;
use crate::components::keybindings::KeybindingContext;
use crate::content::PROFILE;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// ASCII art banner
const BANNER: [&str; 5] = [
    " _                           __       _  _        ",
    "| |_  ___  _ _  _ __   ___  / _| ___ | |(_) ___   ",
    "|  _|/ -_)| '_|| '  \\ / _ \\|  _|/ _ \\| || |/ _ \\  ",
    " \\__|\\___||_|  |_|_|_|\\___/|_|  \\___/|_||_|\\___/  ",
    "                                                  ",
];

/// Render the ASCII art banner with name and tagline underneath
pub fn render_banner(f: &mut Frame, area: Rect, theme: &Theme) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut lines: Vec<Line> = BANNER
        .iter()
        .map(|row| Line::from(Span::styled(*row, theme.title())))
        .collect();
    lines.push(Line::from(vec![
        Span::styled(PROFILE.name, theme.text_bold()),
        Span::styled("  ", theme.text()),
        Span::styled(PROFILE.location, theme.text_muted()),
    ]));
    lines.push(Line::from(Span::styled(PROFILE.tagline, theme.text_muted())));

    let banner = Paragraph::new(lines)
        .block(Block::default().borders(Borders::NONE))
        .alignment(Alignment::Center);
    f.render_widget(banner, area);
}

/// Render the tab bar for the browse screen
pub fn render_tab_bar(f: &mut Frame, state: &AppState, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let theme = &state.theme;

    let titles: Vec<Line> = crate::app::PortfolioTab::all()
        .into_iter()
        .map(|tab| Line::from(format!(" {} ", tab)))
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.tab.index())
        .style(theme.tab_inactive())
        .highlight_style(theme.tab_active())
        .divider(Span::styled("|", theme.text_muted()));
    f.render_widget(tabs, area);
}

/// Render the navigation bar: status message left, key hints right
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let theme = &state.theme;

    let nav_items = keybinding_ctx.get_nav_items(state.key_context());
    let mut hint_spans: Vec<Span> = Vec::new();
    let mut hints_width = 0usize;
    for (i, item) in nav_items.iter().enumerate() {
        if i > 0 {
            hint_spans.push(Span::styled("  ", theme.text_muted()));
            hints_width += 2;
        }
        hints_width += item.key_display.len() + 1 + item.action_label.len();
        hint_spans.push(Span::styled(item.key_display.clone(), theme.accent()));
        hint_spans.push(Span::styled(" ", theme.text_muted()));
        hint_spans.push(Span::styled(item.action_label.clone(), theme.text_muted()));
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(hints_width.min(u16::MAX as usize) as u16),
        ])
        .split(area);

    let status = Paragraph::new(Span::styled(state.status_message.clone(), theme.hint()));
    f.render_widget(status, chunks[0]);

    let hints = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Right);
    f.render_widget(hints, chunks[1]);
}
