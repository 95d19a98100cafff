//! Ambient particle field for the opening screen
//!
//! A sparse set of glyphs drifting slowly upward behind the splash text.
//! Particles live in normalized `[0, 1)` coordinates and are projected onto
//! the terminal grid at render time, so the field survives resizes without
//! any repositioning logic.
//!
//! # Design Principles
//!
//! - **Deterministic when seeded**: `from_seed` makes motion reproducible
//! - **Frame-rate independent**: movement scales with elapsed time
//! - **Purely decorative**: the field never affects input or state

use crate::theme::Theme;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;

/// Number of particles in the field
pub const PARTICLE_COUNT: usize = 30;

/// A single drifting glyph in normalized coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
struct Particle {
    /// Horizontal position in `[0, 1)`
    x: f32,
    /// Vertical position in `[0, 1)`
    y: f32,
    /// Horizontal velocity in field widths per second
    dx: f32,
    /// Vertical velocity in field heights per second
    dy: f32,
    /// Glyph drawn for this particle
    glyph: char,
}

/// Field of ambient particles
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Create a field with randomized positions and velocities
    pub fn new() -> Self {
        let mut rng = rand::rng();
        Self {
            particles: Self::generate(&mut rng),
        }
    }

    /// Create a field from a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            particles: Self::generate(&mut rng),
        }
    }

    fn generate(rng: &mut impl Rng) -> Vec<Particle> {
        (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.random_range(0.0..1.0),
                y: rng.random_range(0.0..1.0),
                dx: rng.random_range(-0.015..0.015),
                dy: rng.random_range(-0.04..-0.01),
                glyph: if rng.random_bool(0.15) { '✦' } else { '·' },
            })
            .collect()
    }

    /// Advance every particle by `dt`, wrapping at the field edges
    pub fn tick(&mut self, dt: Duration) {
        let secs = dt.as_secs_f32();
        for p in &mut self.particles {
            p.x = wrap_unit(p.x + p.dx * secs);
            p.y = wrap_unit(p.y + p.dy * secs);
        }
    }

    /// Render the field into `area`
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, faded: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;
        let height = area.height as usize;
        let mut grid = vec![vec![' '; width]; height];

        for p in &self.particles {
            let col = ((p.x * width as f32) as usize).min(width - 1);
            let row = ((p.y * height as f32) as usize).min(height - 1);
            grid[row][col] = p.glyph;
        }

        let style = theme.particles(faded);
        let lines: Vec<Line> = grid
            .into_iter()
            .map(|row| Line::from(Span::styled(row.into_iter().collect::<String>(), style)))
            .collect();

        f.render_widget(Paragraph::new(lines), area);
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap a coordinate into `[0, 1)`.
///
/// `rem_euclid` alone is not enough: for tiny negative inputs it can round
/// up to exactly 1.0, which would land a particle one cell off the grid.
fn wrap_unit(v: f32) -> f32 {
    let r = v.rem_euclid(1.0);
    if r >= 1.0 {
        0.0
    } else {
        r
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_has_expected_count() {
        let field = ParticleField::from_seed(1);
        assert_eq!(field.particles.len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_same_seed_same_motion() {
        let mut a = ParticleField::from_seed(7);
        let mut b = ParticleField::from_seed(7);
        assert_eq!(a, b);

        for _ in 0..100 {
            a.tick(Duration::from_millis(50));
            b.tick(Duration::from_millis(50));
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = ParticleField::from_seed(1);
        let b = ParticleField::from_seed(2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_tick_keeps_particles_in_bounds() {
        let mut field = ParticleField::from_seed(42);
        for _ in 0..1_000 {
            field.tick(Duration::from_millis(250));
        }
        for p in &field.particles {
            assert!((0.0..1.0).contains(&p.x), "x out of bounds: {}", p.x);
            assert!((0.0..1.0).contains(&p.y), "y out of bounds: {}", p.y);
        }
    }

    #[test]
    fn test_tick_moves_particles() {
        let mut field = ParticleField::from_seed(3);
        let before = field.clone();
        field.tick(Duration::from_secs(1));
        assert_ne!(field, before);
    }

    #[test]
    fn test_zero_duration_tick_is_identity() {
        let mut field = ParticleField::from_seed(9);
        let before = field.clone();
        field.tick(Duration::ZERO);
        assert_eq!(field, before);
    }

    #[test]
    fn test_wrap_unit_stays_below_one() {
        assert_eq!(wrap_unit(0.25), 0.25);
        assert_eq!(wrap_unit(1.25), 0.25);
        assert!((0.0..1.0).contains(&wrap_unit(-0.003)));
        // A hair below zero wraps to just under one, never to one itself
        assert!(wrap_unit(-1.0e-9) < 1.0);
    }
}
