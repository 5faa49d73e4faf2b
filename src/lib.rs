//! ui5-create - add artifacts to UI5 application projects
//!
//! The crate implements the decision engine behind a "create artifact" command: given an
//! artifact type (view, controller, control, component or bootstrap) and the project's
//! installed dependencies, it decides what exactly to create, validates the request against
//! the dependency graph and hands a fully resolved [`CreationRequest`] to a generator.
//!
//! # Pipeline
//!
//! ```text
//! argv / interactive answers
//!   → RequestValidator (structural checks, no I/O)
//!   → InteractiveResolver (fills missing fields)
//!   → ResourceIndex lookups (namespaces, modules, themes)
//!   → build_request (adds the absolute save path)
//!   → dispatch (one generator call, status line or error)
//! ```
//!
//! # Modules
//!
//! - [`core`] - error types, [`ArtifactType`](core::ArtifactType) and
//!   [`KnownIdentifier`](core::KnownIdentifier)
//! - [`project`] - project model, collaborator traits and the filesystem workspace
//! - [`resolver`] - resource index, validator, interactive resolver and request builder
//! - [`prompt`] - questions, answers and the terminal prompter
//! - [`generator`] - the generator boundary and the result adapter
//! - [`create`] - the operation tying everything together
//! - [`cli`] - command-line interface
//! - [`utils`] - path helpers
//!
//! # Example
//!
//! ```rust,no_run
//! use ui5_create::create::CreateOperation;
//! use ui5_create::core::ArtifactType;
//! use ui5_create::generator::SummaryGenerator;
//! use ui5_create::project::FsWorkspace;
//! use ui5_create::prompt::TerminalPrompter;
//! use ui5_create::resolver::CreateArgs;
//! use std::path::Path;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let workspace = FsWorkspace::discover(Path::new("."))?;
//! let operation =
//!     CreateOperation::new(workspace, TerminalPrompter::stdio(), SummaryGenerator::new());
//!
//! let message = operation
//!     .execute(CreateArgs {
//!         artifact_type: Some(ArtifactType::View),
//!         name: Some("Main".to_string()),
//!         controller: Some(true),
//!         ..CreateArgs::default()
//!     })
//!     .await?;
//! assert_eq!(message, "Add new view with corresponding controller");
//! # Ok(())
//! # }
//! ```
//!
//! [`CreationRequest`]: resolver::CreationRequest

pub mod cli;
pub mod constants;
pub mod core;
pub mod create;
pub mod generator;
pub mod project;
pub mod prompt;
pub mod resolver;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
