//! termfolio library
//!
//! Core functionality for the termfolio terminal portfolio browser: the
//! opening animation sequencer and its timer model, the environment
//! detection that feeds it, the content catalogue, and the TUI shell
//! around them.

pub mod app;
pub mod capabilities;
pub mod cli;
pub mod components;
pub mod content;
pub mod error;
pub mod sequencer;
pub mod storage;
pub mod theme;
pub mod timer;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState, KeyContext, PortfolioTab};
pub use capabilities::{EnvCapabilities, MotionPreference, SurfaceState};
pub use error::TermfolioError;
pub use sequencer::{AnimationStage, OpeningSequencer, SequencerEvent};
pub use storage::StateFile;
pub use theme::{Theme, ThemeMode};
pub use timer::{TimerId, TimerSet};
