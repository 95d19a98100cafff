//! Opening screen rendering
//!
//! Draws the splash name with its stage-dependent treatment, plus the
//! particle backdrop and skip hint. All timing decisions live in the
//! sequencer; this module only maps the current stage to a visual
//! treatment.

use crate::app::AppState;
use crate::components::particles::ParticleField;
use crate::content::PROFILE;
use crate::sequencer::{AnimationStage, OpeningSequencer};
use crate::theme::UiText;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Frames per half-cycle of the frozen-stage pulse
const PULSE_FRAMES: u64 = 10;

/// Render the opening screen for the current animation stage
pub fn render_opening(
    f: &mut Frame,
    state: &AppState,
    sequencer: &OpeningSequencer,
    particles: &ParticleField,
    frame: u64,
    area: Rect,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let stage = sequencer.stage();
    if stage.should_hide() {
        // Finished draws nothing; browse mode takes over on the next frame
        return;
    }

    let theme = &state.theme;

    if state.particles_visible() {
        particles.render(f, area, theme, stage.should_fade_background());
    }

    let splash = splash_lines(state, stage, frame);
    let splash_height = (splash.len() as u16).min(area.height);
    let top = area.y + area.height.saturating_sub(splash_height) / 2;
    let splash_area = Rect::new(area.x, top, area.width, splash_height);

    let paragraph = Paragraph::new(splash).alignment(Alignment::Center);
    f.render_widget(paragraph, splash_area);

    // Skip hint pinned to the bottom row
    if area.height >= 2 {
        let hint_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        let hint = Paragraph::new(Span::styled(UiText::SKIP_HINT, theme.hint()))
            .alignment(Alignment::Center);
        f.render_widget(hint, hint_area);
    }
}

/// Build the centered splash block for the given stage
fn splash_lines(state: &AppState, stage: AnimationStage, frame: u64) -> Vec<Line<'static>> {
    let theme = &state.theme;
    let name = spaced_name(PROFILE.name);

    let name_style = match stage {
        AnimationStage::Frozen => {
            // Reduced motion shows a steady frame instead of the pulse
            if state.reduced_motion || (frame / PULSE_FRAMES) % 2 == 0 {
                theme.splash_name()
            } else {
                theme.splash_name_dim()
            }
        }
        AnimationStage::Flashing => theme.splash_name_flash(),
        AnimationStage::Revealing | AnimationStage::Finished => theme.splash_name(),
    };

    let mut lines = vec![Line::from(Span::styled(name, name_style))];

    match stage {
        AnimationStage::Frozen => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(UiText::PULSE_HINT, theme.hint())));
        }
        AnimationStage::Flashing => {}
        AnimationStage::Revealing | AnimationStage::Finished => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                PROFILE.tagline,
                theme.splash_tagline(),
            )));
            lines.push(Line::from(Span::styled(
                PROFILE.location,
                theme.text_muted(),
            )));
        }
    }

    lines
}

/// Letter-spaced uppercase rendition of the owner's name
fn spaced_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() * 2);
    for (i, c) in name.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c.to_ascii_uppercase());
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
