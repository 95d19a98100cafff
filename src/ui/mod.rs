//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `header` - ASCII banner, tab bar, and navigation bar rendering
//! - `opening` - The animated opening screen
//! - `browse` - The tabbed portfolio browser (about, skills, contact)
//! - `projects` - Project list, filter bar, and detail pane
//!
//! Rendering is a pure function of state. Nothing in here mutates the app,
//! arms timers, or reads the clock.

#![allow(dead_code)]

mod browse;
mod header;
mod opening;
mod projects;

use crate::app::{AppMode, AppState};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::particles::ParticleField;
use crate::sequencer::OpeningSequencer;
use crate::theme::UiConstants;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

/// Render the complete UI based on application state
pub fn render(
    f: &mut Frame,
    state: &AppState,
    sequencer: &OpeningSequencer,
    particles: &ParticleField,
    keybinding_ctx: &KeybindingContext,
    frame: u64,
) {
    // Fill the whole frame so the theme background applies edge to edge
    let background = Block::default().style(Style::default().bg(state.theme.palette().bg));
    f.render_widget(background, f.area());

    // Create main layout with nav bar at bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),                              // Main content area
            Constraint::Length(UiConstants::NAV_BAR_HEIGHT), // Navigation bar
        ])
        .split(f.area());

    let content_area = main_chunks[0];
    let nav_bar_area = main_chunks[1];

    // Render main content based on mode
    match state.mode {
        AppMode::Opening => {
            opening::render_opening(f, state, sequencer, particles, frame, content_area);
        }
        AppMode::Browsing => {
            browse::render_browse(f, state, particles, content_area);
        }
    }

    // Render navigation bar
    header::render_nav_bar(f, state, keybinding_ctx, nav_bar_area);

    // Render help overlay if visible (on top of everything)
    if state.help_visible {
        let overlay = HelpOverlay::new(state.theme, state.key_context(), keybinding_ctx);
        overlay.render(f, f.area());
    }
}
