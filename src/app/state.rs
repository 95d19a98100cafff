//! Application state definitions
//!
//! All UI state lives in one place and is owned by the event loop; nothing
//! outside the loop mutates it, so there is no locking. The opening
//! sequencer keeps its own stage and is not mirrored here.

use std::time::{Duration, Instant};

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::content::{self, Project, ProjectCategory};
use crate::theme::Theme;

/// Top-level application modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Opening animation overlay owns the whole screen
    Opening,
    /// Normal portfolio browsing
    Browsing,
}

/// Tabs of the browsing mode, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum PortfolioTab {
    About,
    Projects,
    Skills,
    Contact,
}

impl PortfolioTab {
    /// All tabs in display order.
    pub fn all() -> Vec<PortfolioTab> {
        PortfolioTab::iter().collect()
    }

    /// Position of this tab in the tab bar.
    pub fn index(self) -> usize {
        PortfolioTab::iter().position(|tab| tab == self).unwrap_or(0)
    }

    /// The tab to the right, wrapping around.
    pub fn next(self) -> PortfolioTab {
        let tabs = Self::all();
        tabs[(self.index() + 1) % tabs.len()]
    }

    /// The tab to the left, wrapping around.
    pub fn previous(self) -> PortfolioTab {
        let tabs = Self::all();
        tabs[(self.index() + tabs.len() - 1) % tabs.len()]
    }
}

/// Key dispatch context derived from the full state.
///
/// Finer-grained than [`AppMode`]: each browsing tab binds its own keys,
/// and an active search input captures ordinary characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyContext {
    /// Opening overlay: skip or quit only
    Opening,
    /// About tab
    About,
    /// Projects tab, list focused
    Projects,
    /// Projects tab with the search input focused
    ProjectSearch,
    /// Skills tab (accordion)
    Skills,
    /// Contact tab
    Contact,
}

/// Accordion state for the skills tab.
///
/// At most one section is open at a time; opening a section closes
/// whichever one was open before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionState {
    selected: usize,
    open: Option<usize>,
    len: usize,
}

impl AccordionState {
    /// Create an accordion over `len` sections with the first one open.
    pub fn new(len: usize) -> Self {
        Self {
            selected: 0,
            open: if len > 0 { Some(0) } else { None },
            len,
        }
    }

    /// Move the selection down, stopping at the last section.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.len {
            self.selected += 1;
        }
    }

    /// Move the selection up, stopping at the first section.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Open the selected section, or close it if it is already open.
    pub fn toggle_selected(&mut self) {
        if self.open == Some(self.selected) {
            self.open = None;
        } else if self.selected < self.len {
            self.open = Some(self.selected);
        }
    }

    /// Whether the section at `index` is open.
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Currently selected section.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Currently open section, if any.
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the accordion has no sections at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// How long typing must pause before a pending search query is applied.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Project list filter: category plus debounced text search.
///
/// Typing edits `pending`; the query only takes effect once typing pauses
/// for [`SEARCH_DEBOUNCE`] or the user presses Enter. This keeps the list
/// from reshuffling under the cursor on every keystroke.
#[derive(Debug, Clone)]
pub struct ProjectFilter {
    /// Query currently applied to the list
    query: String,
    /// Text in the input box, not yet applied
    pending: String,
    /// Whether the search input has focus
    input_active: bool,
    /// Category filter; `None` means all categories
    category: Option<ProjectCategory>,
    /// When `pending` last changed; drives the debounce
    last_edit: Option<Instant>,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            pending: String::new(),
            input_active: false,
            category: None,
            last_edit: None,
        }
    }

    /// The query currently applied to the list.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The text sitting in the input box.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Whether the search input has focus.
    pub fn is_input_active(&self) -> bool {
        self.input_active
    }

    /// Active category filter, if any.
    pub fn category(&self) -> Option<ProjectCategory> {
        self.category
    }

    /// Whether any filter narrows the list right now.
    pub fn is_filtering(&self) -> bool {
        !self.query.is_empty() || self.category.is_some()
    }

    /// Give the search input focus.
    pub fn begin_input(&mut self) {
        self.pending = self.query.clone();
        self.input_active = true;
    }

    /// Drop input focus, discarding unapplied edits.
    pub fn cancel_input(&mut self) {
        self.pending = self.query.clone();
        self.input_active = false;
        self.last_edit = None;
    }

    /// Append a typed character to the pending query.
    pub fn push_char(&mut self, c: char, now: Instant) {
        self.pending.push(c);
        self.last_edit = Some(now);
    }

    /// Delete the last character of the pending query.
    pub fn backspace(&mut self, now: Instant) {
        self.pending.pop();
        self.last_edit = Some(now);
    }

    /// Apply the pending query immediately and drop input focus.
    pub fn commit(&mut self) {
        self.query = self.pending.clone();
        self.input_active = false;
        self.last_edit = None;
    }

    /// Apply the pending query if typing has paused long enough.
    ///
    /// Returns true when the applied query actually changed, so the caller
    /// knows to re-clamp list selections.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(edited_at) = self.last_edit else {
            return false;
        };
        if now.saturating_duration_since(edited_at) < SEARCH_DEBOUNCE {
            return false;
        }
        self.last_edit = None;
        if self.query == self.pending {
            return false;
        }
        self.query = self.pending.clone();
        true
    }

    /// Advance the category filter: all -> first category -> ... -> all.
    pub fn cycle_category(&mut self) {
        let categories = content::all_categories();
        self.category = match self.category {
            None => categories.first().copied(),
            Some(current) => {
                let idx = categories.iter().position(|c| *c == current);
                match idx {
                    Some(i) if i + 1 < categories.len() => Some(categories[i + 1]),
                    _ => None,
                }
            }
        };
    }

    /// Clear the query and the category filter.
    pub fn clear(&mut self) {
        self.query.clear();
        self.pending.clear();
        self.category = None;
        self.input_active = false;
        self.last_edit = None;
    }

    /// Projects that pass both filters, in content order.
    pub fn results(&self) -> Vec<&'static Project> {
        content::filter_projects(self.category, &self.query)
    }
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Active browsing tab
    pub tab: PortfolioTab,
    /// Active theme
    pub theme: Theme,
    /// Skills accordion
    pub accordion: AccordionState,
    /// Project list filter
    pub filter: ProjectFilter,
    /// Selected row in the filtered project list
    pub project_selection: usize,
    /// Whether the help overlay is visible
    pub help_visible: bool,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether the opening had already been seen before this run
    pub seen_intro: bool,
    /// Motion preference snapshot; gates the particle backdrop
    pub reduced_motion: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Opening, // every run opens with the sequence unless bypassed
            tab: PortfolioTab::About,
            theme: Theme::default(),
            accordion: AccordionState::new(content::SKILL_GROUPS.len()),
            filter: ProjectFilter::new(),
            project_selection: 0,
            help_visible: false,
            status_message: "Welcome".to_string(),
            seen_intro: false,
            reduced_motion: false,
        }
    }
}

impl AppState {
    /// The key dispatch context for the current state.
    pub fn key_context(&self) -> KeyContext {
        match self.mode {
            AppMode::Opening => KeyContext::Opening,
            AppMode::Browsing => match self.tab {
                PortfolioTab::About => KeyContext::About,
                PortfolioTab::Projects => {
                    if self.filter.is_input_active() {
                        KeyContext::ProjectSearch
                    } else {
                        KeyContext::Projects
                    }
                }
                PortfolioTab::Skills => KeyContext::Skills,
                PortfolioTab::Contact => KeyContext::Contact,
            },
        }
    }

    /// Whether the drifting particle backdrop is active right now.
    ///
    /// The field runs behind the opening overlay and the about tab, and is
    /// dropped entirely under reduced motion.
    pub fn particles_visible(&self) -> bool {
        !self.reduced_motion
            && match self.mode {
                AppMode::Opening => true,
                AppMode::Browsing => self.tab == PortfolioTab::About,
            }
    }

    /// Move the project selection down within the filtered list.
    pub fn select_next_project(&mut self) {
        let len = self.filter.results().len();
        if len > 0 && self.project_selection + 1 < len {
            self.project_selection += 1;
        }
    }

    /// Move the project selection up.
    pub fn select_previous_project(&mut self) {
        self.project_selection = self.project_selection.saturating_sub(1);
    }

    /// Pull the selection back into range after the filter changed.
    pub fn clamp_project_selection(&mut self) {
        let len = self.filter.results().len();
        if len == 0 {
            self.project_selection = 0;
        } else if self.project_selection >= len {
            self.project_selection = len - 1;
        }
    }

    /// The project the selection currently points at.
    pub fn selected_project(&self) -> Option<&'static Project> {
        self.filter.results().get(self.project_selection).copied()
    }
}
