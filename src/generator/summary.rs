//! Generator that reports what it would create.

use anyhow::{Context, Result};
use tracing::debug;

use super::{GenerateOptions, GenerationResult, Generator};
use crate::core::ArtifactType;
use crate::resolver::CreationRequest;

/// Describes the resolved request instead of writing files.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryGenerator;

impl SummaryGenerator {
    /// Create the generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The status line for `request`.
    #[must_use]
    pub fn status_message(request: &CreationRequest) -> String {
        match request.artifact_type {
            ArtifactType::View => {
                let mut message = String::from("Add new view");
                if request.controller == Some(true) {
                    message.push_str(" with corresponding controller");
                }
                if request.route == Some(true) {
                    message.push_str(" and route to project");
                }
                message
            }
            ArtifactType::Controller => "Add new controller".to_string(),
            ArtifactType::Control => "Add new control".to_string(),
            ArtifactType::Component => "Add new Component to project".to_string(),
            ArtifactType::Bootstrap => "Create bootstrap for project".to_string(),
        }
    }
}

impl Generator for SummaryGenerator {
    async fn create(&self, options: GenerateOptions<'_>) -> Result<GenerationResult> {
        let request = serde_json::to_string_pretty(options.meta_information)
            .context("Failed to serialize creation request")?;
        debug!("Creation request:\n{}", request);

        Ok(GenerationResult::with_message(Self::status_message(options.meta_information)))
    }
}
