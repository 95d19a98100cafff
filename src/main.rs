//! termfolio - Main entry point
//!
//! Parses the command line, then either runs one of the plain-stdout
//! subcommands or sets the terminal up for the TUI and hands control to
//! the app loop.

use anyhow::Context;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{debug, info, warn};

use termfolio::app::App;
use termfolio::capabilities::{self, EnvCapabilities};
use termfolio::cli::{Cli, Commands};
use termfolio::content::{self, ProjectCategory};
use termfolio::storage::{self, StateFile};

/// Initialize logging to a file so it never draws over the TUI
fn init_tui_logging(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .init();
    Ok(())
}

/// Initialize stderr logging for the non-TUI subcommands
fn init_stderr_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let state_path = cli
        .state_file
        .clone()
        .unwrap_or_else(storage::default_state_path);

    match cli.command {
        Some(Commands::Projects {
            category,
            ref search,
            json,
        }) => {
            init_stderr_logging();
            run_projects_listing(category, search.as_deref().unwrap_or(""), json)
        }
        Some(Commands::Reset) => {
            init_stderr_logging();
            run_reset(&state_path)
        }
        None => run_tui(&cli, &state_path),
    }
}

/// Print the project catalogue to stdout
fn run_projects_listing(
    category: Option<ProjectCategory>,
    query: &str,
    json: bool,
) -> anyhow::Result<()> {
    let projects = content::filter_projects(category, query);

    if json {
        let payload =
            serde_json::to_string_pretty(&projects).context("Failed to serialize projects")?;
        println!("{payload}");
        return Ok(());
    }

    if projects.is_empty() {
        println!("No projects match the given filters");
        return Ok(());
    }

    for project in projects {
        let categories = project
            .categories
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} ({}, {})", project.title, project.year, categories);
        println!("    {}", project.summary);
        if let Some(url) = project.repo_url {
            println!("    {url}");
        }
        println!();
    }
    Ok(())
}

/// Clear the seen-intro flag so the opening plays again
fn run_reset(state_path: &Path) -> anyhow::Result<()> {
    let mut state = StateFile::load_or_default(state_path)
        .with_context(|| format!("Failed to read state file: {}", state_path.display()))?;
    state.seen_intro = false;
    state.save_to_file(state_path)?;
    println!("Opening animation will play on the next run");
    Ok(())
}

/// Run the TUI
fn run_tui(cli: &Cli, state_path: &Path) -> anyhow::Result<()> {
    let log_path = storage::default_log_path();
    if let Err(e) = init_tui_logging(&log_path) {
        // The app works fine without a log file
        eprintln!("warning: logging disabled: {e}");
    }
    info!("termfolio starting up");

    let mut caps = EnvCapabilities::detect();
    if cli.reduced_motion {
        caps = caps.with_reduced_motion();
    }

    if !caps.surface.is_interactive() {
        anyhow::bail!("stdout is not a terminal; try `termfolio projects` for a plain listing");
    }
    capabilities::check_terminal_geometry(caps.surface);

    let mut persisted = match StateFile::load_or_default(state_path) {
        Ok(state) => state,
        Err(e) => {
            warn!("state file unreadable, starting fresh: {e}");
            StateFile::default()
        }
    };
    if let Some(mode) = cli.theme {
        persisted.theme = mode;
    }

    // Signal handlers set a flag the app loop checks once per iteration
    let shutdown = Arc::new(AtomicBool::new(false));
    for signal in [
        signal_hook::consts::SIGINT,
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGHUP,
    ] {
        if let Err(e) = signal_hook::flag::register(signal, Arc::clone(&shutdown)) {
            warn!("failed to register handler for signal {signal}: {e}");
            // Continue anyway; ctrl-c still reaches us as a key event in raw mode
        }
    }
    debug!("signal handlers initialized");

    // Initialize terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Create and run application
    let mut app = App::new(
        caps,
        persisted,
        state_path.to_path_buf(),
        cli.replay,
        shutdown,
    );
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    info!("termfolio exiting");
    Ok(result?)
}
