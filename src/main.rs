//! ui5-create CLI entry point
//!
//! Parses the command line, sets up logging, runs the command and turns failures into
//! user-friendly messages with exit status 1.

use anyhow::Result;
use clap::Parser;
use ui5_create::cli;
use ui5_create::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let config = cli.build_config();
    config.init();

    match cli.execute_with_config(config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
