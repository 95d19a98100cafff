//! Help overlay component
//!
//! Displays context-sensitive help in a centered window drawn over the
//! active screen. Content comes straight from the keybinding registry, so
//! the overlay can never drift out of sync with actual key dispatch.

#![allow(dead_code)]

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::KeyContext;
use crate::theme::{Theme, UiConstants, UiText};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    theme: Theme,
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given context
    pub fn new(theme: Theme, context: KeyContext, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(context);
        let content = Self::build_content(&theme, &sections, context);
        Self { theme, content }
    }

    /// Build the help content from sections
    fn build_content(
        theme: &Theme,
        sections: &[HelpSection],
        context: KeyContext,
    ) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        // Header
        lines.push(Line::from(vec![Span::styled(
            "  Keyboard Shortcuts  ",
            theme.title(),
        )]));
        lines.push(Line::from(""));

        // Current context
        lines.push(Line::from(vec![
            Span::styled("Current: ", theme.text_muted()),
            Span::styled(context_label(context), theme.header()),
        ]));
        lines.push(Line::from(""));

        // Sections
        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                theme.success().add_modifier(ratatui::style::Modifier::BOLD),
            )]));
            lines.push(Line::from(""));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::styled("    ", Style::default()),
                    Span::styled(format!("{:<10}", key), theme.title()),
                    Span::styled(description.clone(), theme.text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        // Footer
        lines.push(Line::from(""));
        lines.push(Line::from(vec![Span::styled(
            UiText::HELP_FOOTER,
            theme.text_muted(),
        )]));

        lines
    }

    /// Render the help overlay centered on `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        // Too cramped to be readable; the nav bar hints remain available
        if parent.width < UiConstants::HELP_MIN_WIDTH || parent.height < 8 {
            return;
        }

        let area = centered_area(parent);
        f.render_widget(Clear, area);

        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_active())
            .style(Style::default().bg(self.theme.palette().bg_alt));

        let paragraph = Paragraph::new(self.content.clone()).block(block);
        f.render_widget(paragraph, area);
    }

    /// Update help content for a new context
    pub fn update_context(&mut self, context: KeyContext, keybinding_ctx: &KeybindingContext) {
        let sections = keybinding_ctx.get_help_content(context);
        self.content = Self::build_content(&self.theme, &sections, context);
    }
}

/// Compute the centered overlay rectangle within `parent`
fn centered_area(parent: Rect) -> Rect {
    let width = (parent.width as u32 * UiConstants::HELP_WIDTH_PCT as u32 / 100) as u16;
    let width = width
        .max(UiConstants::HELP_MIN_WIDTH)
        .min(UiConstants::HELP_MAX_WIDTH)
        .min(parent.width);
    let height = (parent.height as u32 * UiConstants::HELP_HEIGHT_PCT as u32 / 100) as u16;
    let height = height.max(8).min(parent.height);

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Human label for a key context
fn context_label(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Opening => "Opening",
        KeyContext::About => "About",
        KeyContext::Projects => "Projects",
        KeyContext::ProjectSearch => "Project Search",
        KeyContext::Skills => "Skills",
        KeyContext::Contact => "Contact",
    }
}

/// Quick help builder for generating plain-text help content
pub fn build_quick_help(context: KeyContext) -> Vec<String> {
    let keybinding_ctx = KeybindingContext::new();
    let sections = keybinding_ctx.get_help_content(context);

    let mut lines = Vec::new();
    for section in sections {
        lines.push(format!("-- {} --", section.title));
        for (key, desc) in section.items {
            lines.push(format!("  {}: {}", key, desc));
        }
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_ends_with_close_hint() {
        let ctx = KeybindingContext::new();
        let overlay = HelpOverlay::new(Theme::default(), KeyContext::Projects, &ctx);
        let last = overlay.content.last().unwrap();
        let text: String = last.spans.iter().map(|s| s.content.clone()).collect();
        assert!(text.contains("Press ? or Esc to close"));
    }

    #[test]
    fn test_quick_help_lists_sections() {
        let lines = build_quick_help(KeyContext::Skills);
        assert!(lines.iter().any(|l| l.contains("Navigation")));
        assert!(lines.iter().any(|l| l.contains("Open/close section")));
    }

    #[test]
    fn test_centered_area_fits_parent() {
        let parent = Rect::new(0, 0, 120, 40);
        let area = centered_area(parent);
        assert!(area.width <= parent.width);
        assert!(area.height <= parent.height);
        assert!(area.x >= parent.x && area.y >= parent.y);
        assert!(area.x + area.width <= parent.x + parent.width);
        assert!(area.y + area.height <= parent.y + parent.height);
    }
}
