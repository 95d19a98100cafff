//! Persistent application state
//!
//! A single small JSON file remembers two things across runs: whether the
//! opening sequence has already played, and which theme was chosen. Nothing
//! else persists. A missing file simply means a first run; callers decide
//! whether a corrupt file is fatal (the TUI logs a warning and falls back
//! to defaults, the `reset` subcommand treats it as an error).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::theme::ThemeMode;

/// Persistent state, stored as pretty-printed JSON.
///
/// Every field carries `#[serde(default)]` so files written by older
/// versions keep loading after new fields appear.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateFile {
    /// Whether the opening sequence has played to completion or been skipped
    #[serde(default)]
    pub seen_intro: bool,
    /// Theme chosen on a previous run
    #[serde(default)]
    pub theme: ThemeMode,
}

impl StateFile {
    /// Load state from the given path, failing if the file is missing or
    /// malformed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read state file: {}", path.display()))?;
        let state = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse state file: {}", path.display()))?;
        Ok(state)
    }

    /// Load state, treating a missing file as a first run.
    ///
    /// A file that exists but cannot be read or parsed is still an error;
    /// silently discarding a corrupt file would also discard the theme
    /// choice it may hold.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save state to the given path, creating parent directories as needed.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create state directory: {}", parent.display())
            })?;
        }
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize state")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write state file: {}", path.display()))?;
        Ok(())
    }
}

/// Directory the state and log files live in.
///
/// Resolution order: `$XDG_STATE_HOME/termfolio`, then
/// `$HOME/.local/state/termfolio`, then `/tmp/termfolio` for environments
/// with no home at all.
fn state_dir() -> PathBuf {
    if let Ok(dir) = env::var("XDG_STATE_HOME") {
        if !dir.is_empty() {
            return PathBuf::from(dir).join("termfolio");
        }
    }
    if let Ok(home) = env::var("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home).join(".local/state/termfolio");
        }
    }
    PathBuf::from("/tmp/termfolio")
}

/// Where the state file lives unless `--state-file` overrides it.
pub fn default_state_path() -> PathBuf {
    state_dir().join("state.json")
}

/// Where the TUI writes its log, next to the state file.
pub fn default_log_path() -> PathBuf {
    state_dir().join("termfolio.log")
}
