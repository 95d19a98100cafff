use crate::content::ProjectCategory;
use crate::theme::ThemeMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// termfolio - a terminal portfolio browser
#[derive(Parser)]
#[command(name = "termfolio")]
#[command(about = "Browse Rocky Hartmann's portfolio from the terminal")]
#[command(version)]
pub struct Cli {
    /// Shorten the opening animation to a single brief frame.
    ///
    /// The same effect is available through the TERMFOLIO_REDUCED_MOTION
    /// environment variable; the flag wins when both are set.
    #[arg(long, global = true)]
    pub reduced_motion: bool,

    /// Play the opening animation even if it has been seen before
    #[arg(long, global = true)]
    pub replay: bool,

    /// Override the persisted theme for this run
    #[arg(long, global = true, value_name = "MODE")]
    pub theme: Option<ThemeMode>,

    /// Use an alternate state file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub state_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects on stdout without starting the TUI
    Projects {
        /// Only show projects in this category
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<ProjectCategory>,

        /// Only show projects matching this text
        #[arg(short, long, value_name = "QUERY")]
        search: Option<String>,

        /// Emit JSON instead of a human-readable listing
        #[arg(long)]
        json: bool,
    },
    /// Forget that the opening animation has been seen
    Reset,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_args() {
        // Running with no args should succeed (defaults to TUI mode)
        let result = Cli::try_parse_from(["termfolio"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.reduced_motion);
        assert!(!cli.replay);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["termfolio", "--reduced-motion", "--replay"]).unwrap();
        assert!(cli.reduced_motion);
        assert!(cli.replay);
    }

    #[test]
    fn test_cli_theme_override() {
        let cli = Cli::try_parse_from(["termfolio", "--theme", "light"]).unwrap();
        assert_eq!(cli.theme, Some(ThemeMode::Light));

        let bad = Cli::try_parse_from(["termfolio", "--theme", "sepia"]);
        assert!(bad.is_err());
    }

    #[test]
    fn test_cli_projects_command() {
        let cli = Cli::try_parse_from([
            "termfolio",
            "projects",
            "--category",
            "cli",
            "--search",
            "log",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Projects {
                category,
                search,
                json,
            }) => {
                assert_eq!(category, Some(ProjectCategory::Cli));
                assert_eq!(search.as_deref(), Some("log"));
                assert!(!json);
            }
            _ => panic!("Expected Projects command"),
        }
    }

    #[test]
    fn test_cli_projects_rejects_unknown_category() {
        let result = Cli::try_parse_from(["termfolio", "projects", "--category", "desktop"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_reset_command() {
        let cli = Cli::try_parse_from(["termfolio", "reset"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Reset)));
    }

    #[test]
    fn test_cli_projects_json_flag() {
        let cli = Cli::try_parse_from(["termfolio", "projects", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Projects { json, .. }) => assert!(json),
            _ => panic!("Expected Projects command"),
        }
    }
}
