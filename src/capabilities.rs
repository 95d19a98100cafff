//! Environment capability detection
//!
//! Detects the presentation surface (interactive terminal vs headless), the
//! user's motion preference, and the terminal geometry. No shelling out;
//! every probe is a std or crossterm call.
//!
//! # Design
//!
//! - **Never panics**: every probe degrades to a safe default when the
//!   environment gives no answer
//! - **Headless-safe**: terminal probes only run when a terminal exists, so
//!   detection works under pipes, cron and CI
//! - **Override first**: an explicit `TERMFOLIO_REDUCED_MOTION` setting
//!   beats any heuristic
//!
//! # Integration
//!
//! Call `EnvCapabilities::detect()` at startup before presenting the TUI.
//! The sequencer samples the motion preference once when its run starts.

// Library API - consumed by the app shell and the sequencer
#![allow(dead_code)]

use anyhow::Result;
use std::env;
use std::fmt;
use std::io::IsTerminal;
use tracing::{debug, warn};

/// Environment variable that overrides motion preference detection.
///
/// Truthy values (`1`, `true`, `yes`, `on`) force reduced motion; falsy
/// values (`0`, `false`, `no`, `off`) force the full animation.
pub const REDUCED_MOTION_ENV: &str = "TERMFOLIO_REDUCED_MOTION";

/// Whether an interactive presentation surface exists.
///
/// Determined by asking whether stdout is a terminal. When it is not
/// (pipes, redirects, CI), the TUI cannot be presented and terminal
/// probes are skipped entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceState {
    /// Stdout is a terminal, so the TUI can be drawn
    Interactive,
    /// Stdout is not a terminal, so there is no screen to animate on
    Headless,
}

impl SurfaceState {
    /// Returns true if an interactive terminal is available.
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Interactive)
    }
}

impl fmt::Display for SurfaceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interactive => write!(f, "interactive"),
            Self::Headless => write!(f, "headless"),
        }
    }
}

/// The user's animation preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPreference {
    /// Full animation timeline
    Standard,
    /// Minimal motion: the opening collapses to a single short delay
    Reduced,
}

impl MotionPreference {
    /// Returns true if the user prefers reduced motion.
    pub fn is_reduced(self) -> bool {
        matches!(self, Self::Reduced)
    }
}

impl fmt::Display for MotionPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Reduced => write!(f, "reduced"),
        }
    }
}

/// Aggregated environment detection results.
///
/// Created via `EnvCapabilities::detect()` at startup. The app shell uses
/// the surface state to decide whether a TUI can run at all; the sequencer
/// samples the motion preference once when its run starts.
#[derive(Debug, Clone)]
pub struct EnvCapabilities {
    /// Detected presentation surface
    pub surface: SurfaceState,
    /// Detected motion preference
    pub motion: MotionPreference,
}

impl EnvCapabilities {
    /// Detect the environment.
    ///
    /// This function never panics. A missing or malformed environment
    /// yields `Headless` and `Standard` rather than an error.
    pub fn detect() -> Self {
        let surface = detect_surface();
        let motion = detect_motion_preference(surface);

        debug!("environment detection: surface={surface}, motion={motion}");

        Self { surface, motion }
    }

    /// An interactive, full-motion environment.
    ///
    /// Used by tests and docs that need a known-good environment without
    /// touching real detection.
    pub fn full_motion() -> Self {
        Self {
            surface: SurfaceState::Interactive,
            motion: MotionPreference::Standard,
        }
    }

    /// Force reduced motion regardless of what detection found.
    ///
    /// Backs the `--reduced-motion` command-line flag.
    pub fn with_reduced_motion(mut self) -> Self {
        self.motion = MotionPreference::Reduced;
        self
    }

    /// Returns true if the motion preference is reduced.
    pub fn reduced_motion(&self) -> bool {
        self.motion.is_reduced()
    }
}

impl fmt::Display for EnvCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface: {}, motion: {}", self.surface, self.motion)
    }
}

// ============================================================================
// Detection Functions
// ============================================================================

/// Detect whether an interactive presentation surface exists.
///
/// Asks stdout directly; stderr may still be a terminal when stdout is
/// piped, but the TUI draws to stdout so that is the one that matters.
pub fn detect_surface() -> SurfaceState {
    if std::io::stdout().is_terminal() {
        SurfaceState::Interactive
    } else {
        SurfaceState::Headless
    }
}

/// Smallest geometry the full layout renders comfortably in.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 16;

/// Whether a terminal of the given geometry is too small for the layout.
#[inline]
pub const fn is_cramped(cols: u16, rows: u16) -> bool {
    cols < MIN_COLS || rows < MIN_ROWS
}

/// Sanity-check the terminal geometry, warning when the layout will not
/// fit. Headless surfaces skip the probe entirely.
pub fn check_terminal_geometry(surface: SurfaceState) {
    if !surface.is_interactive() {
        return;
    }
    match crossterm::terminal::size() {
        Ok((cols, rows)) if is_cramped(cols, rows) => {
            warn!("terminal is {cols}x{rows}; at least {MIN_COLS}x{MIN_ROWS} renders fully");
        }
        Ok((cols, rows)) => debug!("terminal geometry {cols}x{rows}"),
        Err(e) => debug!("terminal size probe failed: {e}"),
    }
}

/// Detect the motion preference from the environment.
///
/// Resolution order:
/// 1. `TERMFOLIO_REDUCED_MOTION` override, when set to a recognized value
/// 2. Headless surfaces report `Standard` (there is nothing to animate,
///    and no terminal to probe)
/// 3. `TERM=dumb` terminals get reduced motion
/// 4. Everything else gets the full animation
pub fn detect_motion_preference(surface: SurfaceState) -> MotionPreference {
    if let Ok(raw) = env::var(REDUCED_MOTION_ENV) {
        match parse_motion_override(&raw) {
            Some(pref) => {
                debug!("motion preference forced to {pref} by {REDUCED_MOTION_ENV}");
                return pref;
            }
            None => {
                warn!("unrecognized {REDUCED_MOTION_ENV} value {raw:?}, falling back to detection");
            }
        }
    }

    if !surface.is_interactive() {
        return MotionPreference::Standard;
    }

    match env::var("TERM") {
        Ok(term) if term == "dumb" => MotionPreference::Reduced,
        _ => MotionPreference::Standard,
    }
}

/// Detect the motion preference with Result return for callers that need
/// error context.
///
/// Unlike [`detect_motion_preference`] which always succeeds, this variant
/// returns an error when `TERMFOLIO_REDUCED_MOTION` is set to a value it
/// cannot interpret.
pub fn detect_motion_preference_strict(surface: SurfaceState) -> Result<MotionPreference> {
    if let Ok(raw) = env::var(REDUCED_MOTION_ENV) {
        return match parse_motion_override(&raw) {
            Some(pref) => Ok(pref),
            None => anyhow::bail!(
                "{REDUCED_MOTION_ENV} is set to {raw:?}, expected one of \
                 1/true/yes/on or 0/false/no/off"
            ),
        };
    }
    Ok(detect_motion_preference(surface))
}

/// Interpret an override value as a motion preference.
///
/// Returns `None` for values that are neither clearly truthy nor clearly
/// falsy; callers decide whether that is a warning or an error.
pub fn parse_motion_override(raw: &str) -> Option<MotionPreference> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(MotionPreference::Reduced),
        "0" | "false" | "no" | "off" => Some(MotionPreference::Standard),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
