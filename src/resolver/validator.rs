//! Request Validator.
//!
//! Validation runs in two phases with a fixed precedence:
//!
//! 1. **Structural checks** ([`RequestValidator::check_arguments`],
//!    [`RequestValidator::check_project`]) need no dependency I/O and run first, so a command
//!    that is going to fail anyway never probes resource collections.
//! 2. **Identifier checks** ([`RequestValidator::validate_answers`]) match supplied
//!    namespaces, modules and themes against the [`ResourceIndex`].
//!
//! Matching is case-insensitive. Matched identifiers keep the order of the index, not the
//! order in which they were supplied.

use anyhow::Result;
use tracing::debug;

use super::{CreateArgs, CreationRequest, ResolvedAnswers, ResourceIndex, ValidatedAnswers};
use crate::core::{ArtifactType, CreateError, KnownIdentifier};
use crate::project::{Project, ProjectKind};

/// Validates create requests against a project's resource index.
#[derive(Debug, Clone, Copy)]
pub struct RequestValidator<'a> {
    index: &'a ResourceIndex,
}

impl<'a> RequestValidator<'a> {
    /// Create a validator backed by `index`.
    #[must_use]
    pub const fn new(index: &'a ResourceIndex) -> Self {
        Self {
            index,
        }
    }

    /// Fail fast on omitted arguments. Interactive sessions ask for them instead.
    pub fn check_arguments(args: &CreateArgs) -> Result<(), CreateError> {
        if args.interactive {
            return Ok(());
        }

        let Some(artifact_type) = args.artifact_type else {
            return Err(CreateError::MissingComponent);
        };
        if artifact_type.requires_name() && args.name.as_deref().is_none_or(str::is_empty) {
            return Err(CreateError::MissingName);
        }

        Ok(())
    }

    /// Only application projects are supported.
    pub fn check_project(project: &Project) -> Result<(), CreateError> {
        if project.kind == ProjectKind::Application {
            Ok(())
        } else {
            Err(CreateError::UnsupportedProjectType {
                project_type: project.kind.to_string(),
            })
        }
    }

    /// Match the supplied identifiers of a resolved request against the index.
    ///
    /// - views: `namespaces` populate `namespace_list`
    /// - views, controllers and controls: `modules` populate `module_list`
    /// - bootstraps: a supplied `theme` must name an installed theme library
    ///
    /// Lists that were not supplied, or that are irrelevant for the type, stay empty.
    pub async fn validate_answers(&self, answers: ResolvedAnswers) -> Result<ValidatedAnswers> {
        let artifact_type = answers.artifact_type;
        if artifact_type.requires_name() && answers.name.is_none() {
            return Err(CreateError::MissingName.into());
        }

        let namespace_list = match (&answers.namespaces, artifact_type) {
            (Some(requested), ArtifactType::View) => self.resolve_identifiers(requested).await?,
            _ => Vec::new(),
        };
        let module_list = match &answers.modules {
            Some(requested) if artifact_type.uses_modules() => {
                self.resolve_identifiers(requested).await?
            }
            _ => Vec::new(),
        };
        let theme = match answers.theme {
            Some(theme) if artifact_type == ArtifactType::Bootstrap => {
                Some(self.resolve_theme(&theme).await?.name)
            }
            theme => theme,
        };

        Ok(ValidatedAnswers {
            artifact_type,
            name: answers.name,
            controller: answers.controller,
            root_view: answers.root_view,
            route: answers.route,
            theme,
            namespace_list,
            module_list,
        })
    }

    /// Match supplied names against the known components.
    ///
    /// Each known component is kept when any supplied name matches it, so the result
    /// follows index order. An empty result for a non-empty input is an error.
    pub async fn resolve_identifiers(&self, requested: &[String]) -> Result<Vec<KnownIdentifier>> {
        let known = self.index.list_components().await?;
        let matched: Vec<KnownIdentifier> = known
            .iter()
            .filter(|identifier| requested.iter().any(|name| identifier.matches(name)))
            .cloned()
            .collect();

        debug!(
            "Matched {} of {} requested identifiers against {} known components",
            matched.len(),
            requested.len(),
            known.len()
        );

        if matched.is_empty() && !requested.is_empty() {
            return Err(CreateError::NoValidIdentifier.into());
        }
        Ok(matched)
    }

    /// Find the theme library providing `theme`; the first match in index order wins.
    pub async fn resolve_theme(&self, theme: &str) -> Result<KnownIdentifier> {
        let themes = self.index.list_theme_libraries().await?;
        themes.iter().find(|known| known.matches(theme)).cloned().ok_or_else(|| {
            CreateError::UnknownTheme {
                theme: theme.to_string(),
            }
            .into()
        })
    }

    /// Re-validate a request that already went through the pipeline.
    ///
    /// Checking never modifies the request, so checking a valid request again returns it
    /// unchanged.
    pub async fn check(&self, request: CreationRequest) -> Result<CreationRequest> {
        if request.artifact_type.requires_name() && request.name.as_deref().is_none_or(str::is_empty)
        {
            return Err(CreateError::MissingName.into());
        }

        let known = self.index.list_components().await?;
        let all_known = request
            .namespace_list
            .iter()
            .chain(&request.module_list)
            .all(|identifier| known.contains(identifier));
        if !all_known {
            return Err(CreateError::NoValidIdentifier.into());
        }

        if request.artifact_type == ArtifactType::Bootstrap
            && let Some(theme) = &request.theme
        {
            self.resolve_theme(theme).await?;
        }

        Ok(request)
    }
}
