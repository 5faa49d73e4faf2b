//! Command-line interface for ui5-create.
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug output
//! - `--quiet` - Only report errors
//! - `--project-dir <DIR>` - Start the project search in `DIR` instead of the working directory
//! - `--no-color` - Disable colored output
//!
//! Logs are written to stderr. On success the only stdout output is the status line of the
//! created artifact (plus the questions of an interactive session).
//!
//! # Examples
//!
//! ```bash
//! ui5-create create view --name Main --controller
//! ui5-create --verbose create controller --name Detail --modules sap.m
//! ui5-create --project-dir ./my-app create -i
//! ```

pub mod create;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runtime configuration derived from the global flags.
///
/// Built once per invocation and passed to the command, so tests can inject their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log filter directive. When `None`, `RUST_LOG` is used, falling back to `warn`.
    pub log_level: Option<String>,

    /// Directory the project search starts from; the working directory when `None`.
    pub project_dir: Option<PathBuf>,

    /// Disable ANSI colors in messages and errors.
    pub no_color: bool,
}

impl CliConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The log filter this configuration selects.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        }
    }

    /// Install the global tracing subscriber and apply the color setting.
    ///
    /// Call once at startup. Later calls leave the existing subscriber in place.
    pub fn init(&self) {
        if self.no_color {
            colored::control::set_override(false);
        }

        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(!self.no_color)
            .try_init();
    }
}

/// Main CLI structure for ui5-create.
#[derive(Parser, Debug)]
#[command(
    name = "ui5-create",
    about = "Add views, controllers, controls, components and bootstraps to UI5 applications",
    version,
    long_about = "Resolves what to create from command line arguments or interactive questions, \
                  validates it against the libraries installed in the project and hands the \
                  request to the generator."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Directory to start the project search from
    #[arg(long, global = true, value_name = "DIR")]
    project_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Add an artifact to the project.
    ///
    /// See [`create::CreateCommand`] for options.
    Create(create::CreateCommand),
}

impl Cli {
    /// Build a [`CliConfig`] from the parsed global flags.
    ///
    /// - `--verbose` logs at `debug`
    /// - `--quiet` logs at `error`
    /// - otherwise `RUST_LOG` decides, defaulting to `warn`
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            project_dir: self.project_dir.clone(),
            no_color: self.no_color,
        }
    }

    /// Execute the CLI with an injected configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::Create(cmd) => cmd.execute(&config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_config() {
        let cli = Cli::parse_from(["ui5-create", "--verbose", "create", "view"]);
        assert_eq!(cli.build_config().log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_quiet_config() {
        let cli = Cli::parse_from(["ui5-create", "create", "view", "--quiet"]);
        assert_eq!(cli.build_config().log_level.as_deref(), Some("error"));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["ui5-create", "-v", "-q", "create"]).is_err());
    }

    #[test]
    fn test_project_dir_is_passed_through() {
        let cli = Cli::parse_from(["ui5-create", "create", "--project-dir", "/tmp/app", "component"]);
        let config = cli.build_config();

        assert_eq!(config.project_dir, Some(PathBuf::from("/tmp/app")));
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_default_config() {
        assert_eq!(CliConfig::new(), CliConfig::default());
    }
}
