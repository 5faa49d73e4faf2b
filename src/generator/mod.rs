//! The generator boundary.
//!
//! Generating and persisting the artifact files happens outside of this crate. The create
//! pipeline hands the finished [`CreationRequest`] to a [`Generator`] exactly once and only
//! inspects the status message it reports back ([`dispatch`]).
//!
//! The binary ships [`SummaryGenerator`], which writes nothing and reports what a full
//! generator would have created.

pub mod dispatch;
pub mod summary;

pub use dispatch::dispatch;
pub use summary::SummaryGenerator;

use anyhow::Result;
use serde::Serialize;
use std::future::Future;

use crate::project::Project;
use crate::resolver::CreationRequest;

/// Arguments of a single generator call.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptions<'a> {
    /// Artifact name, if the request carries one
    pub name: Option<&'a str>,
    /// The resolved request
    pub meta_information: &'a CreationRequest,
    /// The project the artifact is added to
    pub project: &'a Project,
}

impl<'a> GenerateOptions<'a> {
    /// Options for generating `request` inside `project`.
    #[must_use]
    pub fn new(request: &'a CreationRequest, project: &'a Project) -> Self {
        Self {
            name: request.name.as_deref(),
            meta_information: request,
            project,
        }
    }
}

/// What a generator reports after a call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    /// One line describing what was created; absent when nothing usable happened
    pub status_message: Option<String>,
}

impl GenerationResult {
    /// A result carrying `message`.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            status_message: Some(message.into()),
        }
    }
}

/// Creates artifacts from resolved requests.
///
/// Generation is a non-idempotent side effect; callers invoke it at most once per request.
pub trait Generator: Send + Sync {
    /// Create the artifact described by `options`.
    fn create(
        &self,
        options: GenerateOptions<'_>,
    ) -> impl Future<Output = Result<GenerationResult>> + Send;
}
