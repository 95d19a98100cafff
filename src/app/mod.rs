//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, ProjectFilter, etc.)
//! - Main module - App struct and event loop
//!
//! The loop runs single-threaded: sequencer timers, debounce timers, and
//! particle motion are all advanced by polling with an explicit `Instant`,
//! never by background threads.

mod state;

// Re-export state types for external use
pub use state::{
    AccordionState, AppMode, AppState, KeyContext, PortfolioTab, ProjectFilter, SEARCH_DEBOUNCE,
};

use crate::capabilities::EnvCapabilities;
use crate::components::keybindings::KeybindingContext;
use crate::components::particles::ParticleField;
use crate::error::Result;
use crate::sequencer::{OpeningSequencer, SequencerEvent};
use crate::storage::StateFile;
use crate::theme::Theme;
use crate::ui;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Main application struct
pub struct App {
    state: AppState,
    /// Drives the opening animation
    sequencer: OpeningSequencer,
    /// Receiver for the sequencer's completion notification
    seq_rx: Receiver<SequencerEvent>,
    /// Ambient backdrop behind the splash text
    particles: ParticleField,
    /// Keybinding context for dispatch tables and navigation hints
    keybinding_context: KeybindingContext,
    /// Environment snapshot taken once at startup
    caps: EnvCapabilities,
    /// Where persistent state is written
    state_path: PathBuf,
    /// Set by the signal handler, checked once per loop iteration
    shutdown: Arc<AtomicBool>,
    /// Frame counter, drives the frozen-stage pulse
    frame: u64,
    /// Previous tick instant, for particle movement
    last_tick: Instant,
}

impl App {
    /// Create a new application instance
    pub fn new(
        caps: EnvCapabilities,
        persisted: StateFile,
        state_path: PathBuf,
        replay: bool,
        shutdown: Arc<AtomicBool>,
    ) -> Self {
        info!("creating app instance");
        let (seq_tx, seq_rx) = mpsc::channel();

        let skip_opening = persisted.seen_intro && !replay;
        if skip_opening {
            debug!("opening already seen, starting in browse mode");
        }

        let state = AppState {
            mode: if skip_opening {
                AppMode::Browsing
            } else {
                AppMode::Opening
            },
            theme: Theme::new(persisted.theme),
            seen_intro: persisted.seen_intro,
            reduced_motion: caps.reduced_motion(),
            ..AppState::default()
        };

        Self {
            state,
            sequencer: OpeningSequencer::new(seq_tx),
            seq_rx,
            particles: ParticleField::new(),
            keybinding_context: KeybindingContext::new(),
            caps,
            state_path,
            shutdown,
            frame: 0,
            last_tick: Instant::now(),
        }
    }

    /// Get reference to the current application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get reference to keybinding context
    #[allow(dead_code)] // API method available for future use
    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Run the main application loop
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        info!("starting main application loop");

        if self.state.mode == AppMode::Opening {
            self.sequencer.start(&self.caps, Instant::now());
        }
        self.last_tick = Instant::now();

        loop {
            if self.shutdown.load(Ordering::Relaxed) {
                info!("shutdown signal received, leaving main loop");
                self.sequencer.teardown();
                break;
            }

            let now = Instant::now();

            // Advance animation timers before reading input so a due
            // transition is visible on the very next frame
            if self.state.mode == AppMode::Opening {
                self.sequencer.poll(now);
            }
            self.drain_sequencer_events();

            // Handle input events
            if crossterm::event::poll(Duration::from_millis(50))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key_event(key_event)? {
                        break; // Exit requested
                    }
                }
            }

            self.tick(now);

            // Render UI
            terminal.draw(|f| {
                ui::render(
                    f,
                    &self.state,
                    &self.sequencer,
                    &self.particles,
                    &self.keybinding_context,
                    self.frame,
                );
            })?;
            self.frame = self.frame.wrapping_add(1);
        }

        Ok(())
    }

    /// Per-iteration bookkeeping between input and render
    fn tick(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        if self.state.particles_visible() {
            self.particles.tick(dt);
        }

        if self.state.filter.tick(now) {
            self.state.clamp_project_selection();
        }
    }

    /// Apply any notification the sequencer has published
    fn drain_sequencer_events(&mut self) {
        while let Ok(event) = self.seq_rx.try_recv() {
            match event {
                SequencerEvent::Completed => self.finish_opening(),
            }
        }
    }

    /// Leave the opening screen and enter browse mode
    fn finish_opening(&mut self) {
        if self.state.mode != AppMode::Opening {
            return;
        }
        info!("opening sequence complete, entering browse mode");
        self.state.mode = AppMode::Browsing;
        self.state.status_message = "Welcome! Press ? for help".to_string();

        if !self.state.seen_intro {
            self.state.seen_intro = true;
            if let Err(e) = self.persist_state() {
                warn!("failed to record seen intro: {e}");
            }
        }
    }

    /// Write the persisted slice of state to disk
    fn persist_state(&self) -> anyhow::Result<()> {
        let file = StateFile {
            seen_intro: self.state.seen_intro,
            theme: self.state.theme.mode(),
        };
        file.save_to_file(&self.state_path)
    }

    /// Handle keyboard input events
    ///
    /// Returns `Ok(true)` when the application should exit.
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<bool> {
        // Help overlay swallows everything except its own dismiss keys
        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.state.help_visible = false;
            }
            return Ok(false);
        }

        let context = self.state.key_context();

        // Global help toggle, except where ordinary keys are captured
        if key_event.code == KeyCode::Char('?')
            && !matches!(context, KeyContext::Opening | KeyContext::ProjectSearch)
        {
            self.state.help_visible = true;
            return Ok(false);
        }

        match context {
            KeyContext::Opening => self.handle_opening_keys(key_event),
            KeyContext::ProjectSearch => {
                self.handle_search_keys(key_event);
                Ok(false)
            }
            _ => self.handle_browse_keys(key_event, context),
        }
    }

    /// Keys on the opening screen
    fn handle_opening_keys(&mut self, key_event: KeyEvent) -> Result<bool> {
        match key_event.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => {
                debug!("skip requested");
                self.sequencer.skip();
                self.drain_sequencer_events();
                Ok(false)
            }
            KeyCode::Char('q') => {
                info!("quit during opening");
                self.sequencer.teardown();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Keys shared by all browse tabs, then per-tab handling
    fn handle_browse_keys(&mut self, key_event: KeyEvent, context: KeyContext) -> Result<bool> {
        match key_event.code {
            KeyCode::Char('q') => {
                info!("quit requested");
                return Ok(true);
            }
            KeyCode::Tab | KeyCode::Right => self.switch_tab(true),
            KeyCode::BackTab | KeyCode::Left => self.switch_tab(false),
            KeyCode::Char('t') => self.toggle_theme(),
            _ => match context {
                KeyContext::Projects => self.handle_project_keys(key_event),
                KeyContext::Skills => self.handle_skill_keys(key_event),
                _ => {}
            },
        }
        Ok(false)
    }

    fn switch_tab(&mut self, forward: bool) {
        self.state.tab = if forward {
            self.state.tab.next()
        } else {
            self.state.tab.previous()
        };
        debug!("switched tab to {}", self.state.tab);
        self.state.status_message = format!("Viewing {}", self.state.tab);
    }

    fn toggle_theme(&mut self) {
        self.state.theme.toggle();
        self.state.status_message = format!("Theme: {}", self.state.theme.mode());
        if let Err(e) = self.persist_state() {
            warn!("failed to persist theme: {e}");
        }
    }

    /// Keys on the projects tab while the search field is unfocused
    fn handle_project_keys(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Up => self.state.select_previous_project(),
            KeyCode::Down => self.state.select_next_project(),
            KeyCode::Char('/') => {
                self.state.filter.begin_input();
                self.state.status_message = "Type to search, Enter to apply".to_string();
            }
            KeyCode::Char('c') => {
                self.state.filter.cycle_category();
                self.state.clamp_project_selection();
                self.state.status_message = match self.state.filter.category() {
                    Some(category) => format!("Category: {}", category),
                    None => "Category filter cleared".to_string(),
                };
            }
            KeyCode::Esc => {
                self.state.filter.clear();
                self.state.clamp_project_selection();
                self.state.status_message = "Filters cleared".to_string();
            }
            _ => {}
        }
    }

    /// Keys while the search field has focus
    fn handle_search_keys(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc => self.state.filter.cancel_input(),
            KeyCode::Enter => {
                self.state.filter.commit();
                self.state.clamp_project_selection();
            }
            KeyCode::Backspace => self.state.filter.backspace(Instant::now()),
            KeyCode::Char(c) => self.state.filter.push_char(c, Instant::now()),
            _ => {}
        }
    }

    /// Keys on the skills tab
    fn handle_skill_keys(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Up => self.state.accordion.select_previous(),
            KeyCode::Down => self.state.accordion.select_next(),
            KeyCode::Enter => self.state.accordion.toggle_selected(),
            _ => {}
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
