//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current key
//! context. The same registry drives dispatch, the nav bar and the help
//! overlay, so the three can never disagree about what a key does.

#![allow(dead_code)]

use crate::app::KeyContext;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    NextTab,
    PrevTab,
    Select,
    Skip,
    Search,
    CycleCategory,
    ClearFilters,
    ApplySearch,
    CancelSearch,
    ToggleTheme,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Context-specific keybindings
    context_bindings: HashMap<KeyContext, Vec<Keybinding>>,
    /// Global keybindings (available while browsing)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            context_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all contexts
    fn register_defaults(&mut self) {
        // Global bindings (everywhere except the opening overlay and an
        // active search input, both of which swallow ordinary keys)
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
        ];

        // Tab and theme keys shared by every browsing tab
        let browse_bindings = vec![
            Keybinding::new(KeyCode::Tab, KeyAction::NextTab, "Tab", "Next tab"),
            Keybinding::new(KeyCode::BackTab, KeyAction::PrevTab, "Sh+Tab", "Previous tab"),
            Keybinding::new(KeyCode::Right, KeyAction::NextTab, "Right", "Next tab"),
            Keybinding::new(KeyCode::Left, KeyAction::PrevTab, "Left", "Previous tab"),
            Keybinding::new(KeyCode::Char('t'), KeyAction::ToggleTheme, "T", "Toggle theme"),
        ];

        // Opening overlay: skip or quit, nothing else
        self.context_bindings.insert(
            KeyContext::Opening,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Skip, "Enter", "Skip intro"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Skip, "Space", "Skip intro"),
                Keybinding::new(KeyCode::Esc, KeyAction::Skip, "Esc", "Skip intro"),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            ],
        );

        // About and Contact: static pages, tabs only
        self.context_bindings
            .insert(KeyContext::About, browse_bindings.clone());
        self.context_bindings
            .insert(KeyContext::Contact, browse_bindings.clone());

        // Projects: list navigation plus filtering
        let mut project_bindings = browse_bindings.clone();
        project_bindings.extend(vec![
            Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous project"),
            Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next project"),
            Keybinding::new(KeyCode::Char('/'), KeyAction::Search, "/", "Search"),
            Keybinding::new(KeyCode::Char('c'), KeyAction::CycleCategory, "C", "Cycle category"),
            Keybinding::new(KeyCode::Esc, KeyAction::ClearFilters, "Esc", "Clear filters"),
        ]);
        self.context_bindings
            .insert(KeyContext::Projects, project_bindings);

        // Search input: typing captures everything else
        self.context_bindings.insert(
            KeyContext::ProjectSearch,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::ApplySearch, "Enter", "Apply search"),
                Keybinding::new(KeyCode::Esc, KeyAction::CancelSearch, "Esc", "Cancel search"),
            ],
        );

        // Skills: accordion navigation
        let mut skills_bindings = browse_bindings.clone();
        skills_bindings.extend(vec![
            Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous section"),
            Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next section"),
            Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Open/close section"),
        ]);
        self.context_bindings
            .insert(KeyContext::Skills, skills_bindings);
    }

    /// Get keybindings for a specific context (includes global bindings)
    pub fn get_bindings(&self, context: KeyContext) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        // Add context-specific bindings
        if let Some(context_bindings) = self.context_bindings.get(&context) {
            bindings.extend(context_bindings.iter());
        }

        // Add global bindings (except where ordinary keys are captured)
        if context != KeyContext::Opening && context != KeyContext::ProjectSearch {
            bindings.extend(self.global_bindings.iter());
        }

        bindings
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, context: KeyContext) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(context);

        // Select key bindings to show in nav bar (most important ones)
        let priority_actions = match context {
            KeyContext::Opening => vec![KeyAction::Skip, KeyAction::Quit],
            KeyContext::About | KeyContext::Contact => vec![
                KeyAction::NextTab,
                KeyAction::PrevTab,
                KeyAction::ToggleTheme,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            KeyContext::Projects => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Search,
                KeyAction::CycleCategory,
                KeyAction::NextTab,
                KeyAction::PrevTab,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            KeyContext::ProjectSearch => {
                vec![KeyAction::ApplySearch, KeyAction::CancelSearch]
            }
            KeyContext::Skills => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Select,
                KeyAction::NextTab,
                KeyAction::PrevTab,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        // Combine paired keys into single items for cleaner display
        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_nav = false;
        let mut has_tabs = false;

        for action in priority_actions {
            if (action == KeyAction::NavigateUp || action == KeyAction::NavigateDown) && has_nav {
                continue;
            }
            if (action == KeyAction::NextTab || action == KeyAction::PrevTab) && has_tabs {
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                if action == KeyAction::NavigateUp || action == KeyAction::NavigateDown {
                    items.push(NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: "Navigate".to_string(),
                    });
                    has_nav = true;
                } else if action == KeyAction::NextTab || action == KeyAction::PrevTab {
                    items.push(NavBarItem {
                        key_display: "Tab".to_string(),
                        action_label: "Switch tab".to_string(),
                    });
                    has_tabs = true;
                } else {
                    items.push(NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                    });
                }
            }
        }

        items
    }

    /// Get full help content for a context (for help overlay)
    pub fn get_help_content(&self, context: KeyContext) -> Vec<HelpSection> {
        let mut sections = Vec::new();

        // Navigation section
        let nav_bindings: Vec<_> = self
            .get_bindings(context)
            .into_iter()
            .filter(|b| {
                matches!(
                    b.action,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::NextTab
                        | KeyAction::PrevTab
                )
            })
            .collect();

        if !nav_bindings.is_empty() {
            sections.push(HelpSection {
                title: "Navigation".to_string(),
                items: nav_bindings
                    .iter()
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect(),
            });
        }

        // Actions section
        let action_bindings: Vec<_> = self
            .get_bindings(context)
            .into_iter()
            .filter(|b| {
                matches!(
                    b.action,
                    KeyAction::Select
                        | KeyAction::Skip
                        | KeyAction::Search
                        | KeyAction::CycleCategory
                        | KeyAction::ClearFilters
                        | KeyAction::ApplySearch
                        | KeyAction::CancelSearch
                        | KeyAction::ToggleTheme
                )
            })
            .collect();

        if !action_bindings.is_empty() {
            sections.push(HelpSection {
                title: "Actions".to_string(),
                items: action_bindings
                    .iter()
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect(),
            });
        }

        // General section
        let general_bindings: Vec<_> = self
            .get_bindings(context)
            .into_iter()
            .filter(|b| matches!(b.action, KeyAction::Help | KeyAction::Quit))
            .collect();

        if !general_bindings.is_empty() {
            sections.push(HelpSection {
                title: "General".to_string(),
                items: general_bindings
                    .iter()
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect(),
            });
        }

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_context_has_bindings() {
        let ctx = KeybindingContext::new();
        for context in [
            KeyContext::Opening,
            KeyContext::About,
            KeyContext::Projects,
            KeyContext::ProjectSearch,
            KeyContext::Skills,
            KeyContext::Contact,
        ] {
            assert!(
                !ctx.get_bindings(context).is_empty(),
                "no bindings for {context:?}"
            );
            assert!(
                !ctx.get_nav_items(context).is_empty(),
                "no nav items for {context:?}"
            );
        }
    }

    #[test]
    fn test_opening_excludes_global_bindings() {
        let ctx = KeybindingContext::new();
        let bindings = ctx.get_bindings(KeyContext::Opening);
        assert!(
            !bindings.iter().any(|b| b.action == KeyAction::Help),
            "help must not be offered during the opening overlay"
        );
        assert!(bindings.iter().any(|b| b.action == KeyAction::Skip));
    }

    #[test]
    fn test_search_input_captures_ordinary_keys() {
        let ctx = KeybindingContext::new();
        let bindings = ctx.get_bindings(KeyContext::ProjectSearch);
        assert!(
            !bindings.iter().any(|b| b.action == KeyAction::Quit),
            "q must type a letter while searching, not quit"
        );
    }

    #[test]
    fn test_nav_items_combine_paired_keys() {
        let ctx = KeybindingContext::new();
        let items = ctx.get_nav_items(KeyContext::Projects);
        let nav_count = items.iter().filter(|i| i.action_label == "Navigate").count();
        let tab_count = items
            .iter()
            .filter(|i| i.action_label == "Switch tab")
            .count();
        assert_eq!(nav_count, 1, "Up/Down collapse into one nav item");
        assert_eq!(tab_count, 1, "Tab keys collapse into one item");
    }

    #[test]
    fn test_help_content_has_sections() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(KeyContext::Skills);
        assert!(sections.iter().any(|s| s.title == "Navigation"));
        assert!(sections.iter().any(|s| s.title == "Actions"));
        assert!(sections.iter().any(|s| s.title == "General"));
    }
}
