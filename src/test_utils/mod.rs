//! Test utilities for ui5-create
//!
//! This module provides collaborators and fixtures for testing the create pipeline without
//! a terminal or a real generator:
//!
//! - [`FakeWorkspace`], [`StaticReader`] - hand-built dependency trees and resource listings
//! - [`ScriptedPrompter`] - scripted interactive answers, recording the questions asked
//! - [`StubGenerator`] - canned generator results with call counting
//! - [`ProjectFixture`] - on-disk projects with installed dependencies
//!
//! # Example
//!
//! ```rust,no_run
//! use ui5_create::create::CreateOperation;
//! use ui5_create::resolver::CreateArgs;
//! use ui5_create::test_utils::{FakeWorkspace, ScriptedPrompter, StubGenerator};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let operation = CreateOperation::new(
//!     FakeWorkspace::application("/project", "webapp"),
//!     ScriptedPrompter::default(),
//!     StubGenerator::with_message("Add new Component to project"),
//! );
//! operation.execute(CreateArgs::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod fakes;
pub mod fixtures;

pub use fakes::{FakeWorkspace, ScriptedPrompter, StaticReader, StubGenerator};
pub use fixtures::ProjectFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. With `None`, logging is enabled only when `RUST_LOG`
/// is set:
///
/// ```bash
/// RUST_LOG=ui5_create=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            // No logging if neither is provided
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
