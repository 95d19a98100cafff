//! Portfolio content model
//!
//! Static, embedded content: the profile, project list and skill groups are
//! compiled into the binary. There is no content file to load and nothing to
//! fetch, so the browsing UI and the `projects` subcommand both query the
//! same constants through the functions at the bottom of this module.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

/// Category a project belongs to.
///
/// Parses from and displays as lowercase, which is what the `--category`
/// command-line flag and the category filter in the UI show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    /// Browser-facing work
    Web,
    /// HTTP services and data plumbing
    Api,
    /// Command-line and terminal tools
    Cli,
    /// Reusable libraries
    Library,
}

/// One portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Project {
    /// Stable identifier, also usable in URLs
    pub slug: &'static str,
    /// Display title
    pub title: &'static str,
    /// One-paragraph summary shown in the detail pane
    pub summary: &'static str,
    /// Technologies used, most significant first
    pub technologies: &'static [&'static str],
    /// Categories the project files under
    pub categories: &'static [ProjectCategory],
    /// Source repository, if public
    pub repo_url: Option<&'static str>,
    /// Live demo, if hosted
    pub demo_url: Option<&'static str>,
    /// Year the bulk of the work happened
    pub year: u16,
    /// Whether the project is pinned at the top of the list
    pub featured: bool,
}

impl Project {
    /// Whether this project files under the given category.
    pub fn in_category(&self, category: ProjectCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Case-insensitive text match over title, summary and technologies.
    ///
    /// An empty or whitespace-only query matches every project.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.summary.to_lowercase().contains(&needle)
            || self
                .technologies
                .iter()
                .any(|tech| tech.to_lowercase().contains(&needle))
    }
}

/// Contact channel shown on the contact tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactEntry {
    pub label: &'static str,
    pub value: &'static str,
}

/// The site owner's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    /// Bio paragraphs for the about tab
    pub bio: &'static [&'static str],
    pub contact: &'static [ContactEntry],
}

/// One accordion section on the skills tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    /// One-line summary shown while the section is collapsed
    pub blurb: &'static str,
    pub skills: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    name: "Rocky Hartmann",
    tagline: "Systems-minded engineer building fast, reliable software",
    location: "Hamburg, Germany",
    bio: &[
        "I build backends, terminal tools and the occasional frontend, with a \
         soft spot for problems where correctness and latency both matter. \
         Most of my recent work is in Rust; before that I spent years in \
         TypeScript and Python shops.",
        "Away from the keyboard I climb, tinker with synthesizers and keep an \
         ever-growing queue of half-read systems papers.",
    ],
    contact: &[
        ContactEntry {
            label: "Email",
            value: "rocky@rockyhartmann.dev",
        },
        ContactEntry {
            label: "GitHub",
            value: "github.com/rockyh",
        },
        ContactEntry {
            label: "Mastodon",
            value: "@rockyh@hachyderm.io",
        },
        ContactEntry {
            label: "LinkedIn",
            value: "linkedin.com/in/rocky-hartmann",
        },
    ],
};

pub const PROJECTS: &[Project] = &[
    Project {
        slug: "driftline",
        title: "Driftline",
        summary: "Realtime collaborative whiteboard backend. Operational \
                  transforms over WebSockets with Redis-backed presence, \
                  holding p99 round trips under 40ms at a few thousand \
                  concurrent boards.",
        technologies: &["Rust", "WebSockets", "Redis", "PostgreSQL"],
        categories: &[ProjectCategory::Api, ProjectCategory::Web],
        repo_url: Some("https://github.com/rockyh/driftline"),
        demo_url: Some("https://driftline.rockyhartmann.dev"),
        year: 2024,
        featured: true,
    },
    Project {
        slug: "lumberjack",
        title: "Lumberjack",
        summary: "Terminal viewer for structured logs: stream JSON lines in, \
                  filter by field, fold stack traces, and diff two time \
                  windows side by side.",
        technologies: &["Rust", "ratatui", "serde"],
        categories: &[ProjectCategory::Cli],
        repo_url: Some("https://github.com/rockyh/lumberjack"),
        demo_url: None,
        year: 2024,
        featured: true,
    },
    Project {
        slug: "hexgrid",
        title: "hexgrid",
        summary: "Procedural map toolkit for hex-based games. Deterministic \
                  terrain generation, pathfinding and field-of-view, with \
                  wasm bindings for in-browser previews.",
        technologies: &["Rust", "WebAssembly", "TypeScript"],
        categories: &[ProjectCategory::Library],
        repo_url: Some("https://github.com/rockyh/hexgrid"),
        demo_url: Some("https://hexgrid.rockyhartmann.dev"),
        year: 2022,
        featured: true,
    },
    Project {
        slug: "tidewatch",
        title: "Tidewatch",
        summary: "Tide forecast API and caching proxy for a sailing club. \
                  Normalizes three upstream providers into one schema and \
                  serves cached predictions when upstreams are down.",
        technologies: &["Rust", "axum", "SQLite"],
        categories: &[ProjectCategory::Api],
        repo_url: Some("https://github.com/rockyh/tidewatch"),
        demo_url: None,
        year: 2023,
        featured: false,
    },
    Project {
        slug: "parcelwatch",
        title: "Parcelwatch",
        summary: "Package tracking dashboard built for a small logistics \
                  team: courier webhooks, delivery-window prediction, and a \
                  wallboard view that survives flaky warehouse wifi.",
        technologies: &["TypeScript", "Angular", "PostgreSQL"],
        categories: &[ProjectCategory::Web],
        repo_url: None,
        demo_url: None,
        year: 2021,
        featured: false,
    },
    Project {
        slug: "knotbook",
        title: "knotbook",
        summary: "Markdown note CLI with backlinks and a tiny query \
                  language. Notes stay plain files; the index rebuilds in \
                  milliseconds on every run.",
        technologies: &["Rust", "clap"],
        categories: &[ProjectCategory::Cli, ProjectCategory::Library],
        repo_url: Some("https://github.com/rockyh/knotbook"),
        demo_url: None,
        year: 2022,
        featured: false,
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        blurb: "Daily drivers and long-term acquaintances",
        skills: &["Rust", "TypeScript", "Python", "SQL", "Bash"],
    },
    SkillGroup {
        title: "Backend & Infrastructure",
        blurb: "Services that stay up and stay observable",
        skills: &[
            "axum",
            "PostgreSQL",
            "Redis",
            "Docker",
            "Nginx",
            "systemd",
            "GitHub Actions",
        ],
    },
    SkillGroup {
        title: "Frontend",
        blurb: "Enough to ship the whole feature",
        skills: &["Angular", "HTML/CSS", "Canvas", "WebSockets"],
    },
    SkillGroup {
        title: "Tooling & Practice",
        blurb: "How the work actually gets done",
        skills: &[
            "git",
            "property-based testing",
            "profiling",
            "tracing",
            "code review",
        ],
    },
];

// ============================================================================
// Queries
// ============================================================================

/// Categories that actually occur in the project list, in first-seen order.
pub fn all_categories() -> Vec<ProjectCategory> {
    let mut seen = Vec::new();
    for project in PROJECTS {
        for category in project.categories {
            if !seen.contains(category) {
                seen.push(*category);
            }
        }
    }
    seen
}

/// Every distinct technology across all projects, sorted.
pub fn all_technologies() -> Vec<&'static str> {
    let mut techs: Vec<&'static str> = Vec::new();
    for project in PROJECTS {
        for tech in project.technologies {
            if !techs.contains(tech) {
                techs.push(tech);
            }
        }
    }
    techs.sort_unstable();
    techs
}

/// Projects pinned at the top of the list.
pub fn featured_projects() -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.featured).collect()
}

/// Projects matching both the category filter and the search query.
///
/// `None` for the category means "all categories"; an empty query matches
/// everything. Order of the source list is preserved.
pub fn filter_projects(
    category: Option<ProjectCategory>,
    query: &str,
) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|project| match category {
            Some(cat) => project.in_category(cat),
            None => true,
        })
        .filter(|project| project.matches_query(query))
        .collect()
}
