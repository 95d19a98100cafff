//! Centralized theme and styling for the TUI
//!
//! This module provides a single source of truth for all colors, styles,
//! and visual constants used throughout the application. Two palettes are
//! available (dark and light); the active one can be toggled at runtime
//! and the choice is persisted in the state file.
//!
//! # Usage
//! ```rust
//! use termfolio::theme::{Theme, ThemeMode};
//!
//! let mut theme = Theme::new(ThemeMode::Dark);
//! let title_style = theme.title();
//! theme.toggle();
//! assert_eq!(theme.mode(), ThemeMode::Light);
//! ```

#![allow(dead_code)]

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

// =============================================================================
// THEME MODE
// =============================================================================

/// Which of the two palettes is active.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark backdrop with bright accents (default)
    #[default]
    Dark,
    /// Light backdrop for bright terminals
    Light,
}

impl ThemeMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Returns true for the dark mode.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Full set of colors one theme mode paints with.
///
/// All colors are defined here rather than hardcoded in components, so the
/// two palettes stay structurally identical and mode switches touch nothing
/// but the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------
    /// Primary background for panels
    pub bg: Color,
    /// Contrast background for alternating areas
    pub bg_alt: Color,
    /// Default foreground text color
    pub fg: Color,
    /// Secondary/muted text color
    pub fg_muted: Color,

    // -------------------------------------------------------------------------
    // Accent Colors (branding, emphasis)
    // -------------------------------------------------------------------------
    /// Primary accent - borders, titles, highlights
    pub accent: Color,
    /// Secondary accent - selected items, emphasis
    pub accent_alt: Color,

    // -------------------------------------------------------------------------
    // Semantic Colors (status, feedback)
    // -------------------------------------------------------------------------
    /// Success/positive feedback
    pub success: Color,
    /// Warning/caution feedback
    pub warning: Color,
    /// Error/danger feedback
    pub error: Color,

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------
    /// Inactive/unfocused border color
    pub border: Color,
    /// Active border color
    pub border_active: Color,
    /// Selected item highlight background
    pub selected_bg: Color,
    /// Selected item text (for contrast on the highlight)
    pub selected_fg: Color,
    /// Navigation hint color
    pub hint: Color,
    /// Particle glyphs in the opening backdrop
    pub particle: Color,
    /// Particle glyphs once the backdrop fades
    pub particle_faded: Color,
}

impl Palette {
    /// Dark palette (default).
    pub const DARK: Palette = Palette {
        bg: Color::Rgb(16, 18, 28),
        bg_alt: Color::Rgb(24, 26, 38),
        fg: Color::White,
        fg_muted: Color::Gray,
        accent: Color::Cyan,
        accent_alt: Color::Yellow,
        success: Color::Green,
        warning: Color::Yellow,
        error: Color::Red,
        border: Color::DarkGray,
        border_active: Color::Cyan,
        selected_bg: Color::Cyan,
        selected_fg: Color::Black,
        hint: Color::DarkGray,
        particle: Color::DarkGray,
        particle_faded: Color::Rgb(44, 48, 64),
    };

    /// Light palette.
    pub const LIGHT: Palette = Palette {
        bg: Color::Rgb(242, 241, 235),
        bg_alt: Color::Rgb(228, 227, 220),
        fg: Color::Black,
        fg_muted: Color::DarkGray,
        accent: Color::Blue,
        accent_alt: Color::Magenta,
        success: Color::Green,
        warning: Color::Rgb(176, 116, 0),
        error: Color::Red,
        border: Color::Gray,
        border_active: Color::Blue,
        selected_bg: Color::Blue,
        selected_fg: Color::White,
        hint: Color::Gray,
        particle: Color::Gray,
        particle_faded: Color::Rgb(208, 207, 200),
    };
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Runtime theme: the active mode plus semantic style lookups.
///
/// Components ask the theme for styles by meaning (`title`, `selected`,
/// `hint`) instead of reaching into the palette, so a mode toggle
/// recolors the whole UI on the next draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    mode: ThemeMode,
}

impl Theme {
    /// Create a theme in the given mode.
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// The active mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Switch to the other mode.
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// The active palette.
    pub fn palette(&self) -> &'static Palette {
        match self.mode {
            ThemeMode::Dark => &Palette::DARK,
            ThemeMode::Light => &Palette::LIGHT,
        }
    }

    // -------------------------------------------------------------------------
    // Text Styles
    // -------------------------------------------------------------------------

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.palette().fg)
    }

    /// Muted/secondary text
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.palette().fg_muted)
    }

    /// Bold text
    pub fn text_bold(&self) -> Style {
        Style::default()
            .fg(self.palette().fg)
            .add_modifier(Modifier::BOLD)
    }

    // -------------------------------------------------------------------------
    // Title/Header Styles
    // -------------------------------------------------------------------------

    /// Main title style (accent, bold)
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.palette().accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Section header style
    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.palette().accent_alt)
            .add_modifier(Modifier::BOLD)
    }

    /// Active tab label
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.palette().accent_alt)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive tab label
    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.palette().fg_muted)
    }

    // -------------------------------------------------------------------------
    // Border/Block Styles
    // -------------------------------------------------------------------------

    /// Inactive border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.palette().border)
    }

    /// Active border style
    pub fn border_active(&self) -> Style {
        Style::default().fg(self.palette().border_active)
    }

    // -------------------------------------------------------------------------
    // Selection Styles
    // -------------------------------------------------------------------------

    /// Selected/highlighted item
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.palette().selected_fg)
            .bg(self.palette().selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Unselected list item
    pub fn unselected(&self) -> Style {
        Style::default().fg(self.palette().fg_muted)
    }

    // -------------------------------------------------------------------------
    // Status/Feedback Styles
    // -------------------------------------------------------------------------

    /// Success message style
    pub fn success(&self) -> Style {
        Style::default().fg(self.palette().success)
    }

    /// Warning message style
    pub fn warning(&self) -> Style {
        Style::default().fg(self.palette().warning)
    }

    /// Error message style
    pub fn error(&self) -> Style {
        Style::default().fg(self.palette().error)
    }

    /// Plain accent text
    pub fn accent(&self) -> Style {
        Style::default().fg(self.palette().accent)
    }

    /// Navigation hint (keybindings)
    pub fn hint(&self) -> Style {
        Style::default().fg(self.palette().hint)
    }

    // -------------------------------------------------------------------------
    // Opening Screen Styles
    // -------------------------------------------------------------------------

    /// The name while frozen; the pulse alternates this with its dim variant
    pub fn splash_name(&self) -> Style {
        Style::default()
            .fg(self.palette().accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Dim half of the frozen-name pulse
    pub fn splash_name_dim(&self) -> Style {
        Style::default()
            .fg(self.palette().accent)
            .add_modifier(Modifier::DIM)
    }

    /// High-contrast flash treatment of the name
    pub fn splash_name_flash(&self) -> Style {
        Style::default()
            .fg(self.palette().accent_alt)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    /// Tagline lines during and after the reveal
    pub fn splash_tagline(&self) -> Style {
        Style::default().fg(self.palette().fg)
    }

    /// Particle backdrop glyphs
    pub fn particles(&self, faded: bool) -> Style {
        if faded {
            Style::default().fg(self.palette().particle_faded)
        } else {
            Style::default().fg(self.palette().particle)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Header height (with ASCII art banner)
    pub const HEADER_HEIGHT: u16 = 8;

    /// Tab bar height
    pub const TAB_BAR_HEIGHT: u16 = 1;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Help overlay width percentage
    pub const HELP_WIDTH_PCT: u16 = 60;

    /// Help overlay height percentage
    pub const HELP_HEIGHT_PCT: u16 = 70;

    /// Minimum help overlay width
    pub const HELP_MIN_WIDTH: u16 = 40;

    /// Maximum help overlay width
    pub const HELP_MAX_WIDTH: u16 = 80;

    /// Width percentage of the project list next to the detail pane
    pub const PROJECT_LIST_PCT: u16 = 42;
}

// =============================================================================
// TEXT CONSTANTS
// =============================================================================

/// Common UI text strings
pub struct UiText;

impl UiText {
    // Opening screen
    pub const SKIP_HINT: &'static str = "Press Enter or Space to skip";
    pub const PULSE_HINT: &'static str = "loading portfolio";

    // Navigation prompts
    pub const NAV_HINT: &'static str =
        "Tab/←→ switch tabs · t theme · ? help · q quit";
    pub const SEARCH_PROMPT: &'static str = "Search: ";

    // Status messages
    pub const NO_PROJECTS: &'static str = "No projects match the current filter";
    pub const HELP_FOOTER: &'static str = "Press ? or Esc to close";
}
