//! Add an artifact to an application project.
//!
//! # Examples
//!
//! ```bash
//! # A view with controller that uses the sap.m library
//! ui5-create create view --name Main --controller --namespaces sap.m
//!
//! # A view that becomes the root view, without a route
//! ui5-create create view --name App --root --route=false
//!
//! # A bootstrap page using an installed theme library
//! ui5-create create bootstrap --theme sap_fancy_theme
//!
//! # Ask for everything
//! ui5-create create -i
//! ```

use anyhow::Result;
use clap::Args;
use clap::builder::BoolishValueParser;
use std::path::Path;
use tracing::debug;

use super::CliConfig;
use crate::core::ArtifactType;
use crate::create::CreateOperation;
use crate::generator::SummaryGenerator;
use crate::project::FsWorkspace;
use crate::prompt::TerminalPrompter;
use crate::resolver::CreateArgs;

/// Command to add a view, controller, control, component or bootstrap.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CreateCommand {
    /// Artifact type: view, controller, control, component or bootstrap
    #[arg(value_name = "TYPE")]
    pub artifact_type: Option<ArtifactType>,

    /// Name of the artifact (required for views, controllers and controls)
    #[arg(long)]
    pub name: Option<String>,

    /// Create a controller together with the view
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = BoolishValueParser::new())]
    pub controller: Option<bool>,

    /// Add a route for the view
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = BoolishValueParser::new())]
    pub route: Option<bool>,

    /// Use the view as the application's root view
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true", value_parser = BoolishValueParser::new())]
    pub root: Option<bool>,

    /// Theme of the bootstrap page
    #[arg(long)]
    pub theme: Option<String>,

    /// Libraries the view uses (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub namespaces: Option<Vec<String>>,

    /// Modules the artifact requires (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub modules: Option<Vec<String>>,

    /// Ask for missing values instead of failing
    #[arg(short, long)]
    pub interactive: bool,
}

impl CreateCommand {
    /// The pipeline arguments for this invocation.
    #[must_use]
    pub fn into_args(self) -> CreateArgs {
        let trim_list = |list: Vec<String>| -> Vec<String> {
            list.into_iter().map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect()
        };

        CreateArgs {
            artifact_type: self.artifact_type,
            name: self.name,
            controller: self.controller,
            route: self.route,
            root: self.root,
            theme: self.theme,
            namespaces: self.namespaces.map(trim_list),
            modules: self.modules.map(trim_list),
            interactive: self.interactive,
        }
    }

    /// Run the command against the project containing the configured directory.
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let start = match &config.project_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        let workspace = FsWorkspace::discover(Path::new(&start))?;
        debug!("Creating artifact in {}", workspace.root_dir().display());

        let operation =
            CreateOperation::new(workspace, TerminalPrompter::stdio(), SummaryGenerator::new());
        let message = operation.execute(self.into_args()).await?;

        println!("{message}");
        Ok(())
    }
}
