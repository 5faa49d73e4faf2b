//! Creation Request Builder.
//!
//! Request fields come from two sources: command line arguments and interactive answers.
//! While the request is assembled every field carries its provenance as a [`Field`]:
//! supplied on the command line, waiting for a prompt, or deliberately left unset. Once the
//! draft is complete the provenance is dropped and only plain values remain.
//!
//! ```text
//! CreateArgs ──► RequestDraft ──(prompts)──► ResolvedAnswers ──(validator)──► ValidatedAnswers
//!                                                                                   │
//!                                                            build_request(.., project)
//!                                                                                   ▼
//!                                                                           CreationRequest
//! ```

use anyhow::Result;
use std::path::Path;

use super::{CreateArgs, CreationRequest};
use crate::core::{ArtifactType, CreateError, KnownIdentifier};
use crate::project::Project;
use crate::utils::resolve_absolute;

/// One request field during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// Given on the command line or answered interactively
    Supplied(T),
    /// Missing and the session is interactive; ask when the field is relevant
    Prompt,
    /// Missing and never asked for
    Unset,
}

impl<T> Field<T> {
    /// Tag an optional argument: present values are supplied, absent ones are prompted
    /// for in interactive sessions.
    pub fn from_arg(value: Option<T>, interactive: bool) -> Self {
        match value {
            Some(value) => Field::Supplied(value),
            None if interactive => Field::Prompt,
            None => Field::Unset,
        }
    }

    /// Whether the field still waits for an interactive answer.
    #[must_use]
    pub const fn needs_prompt(&self) -> bool {
        matches!(self, Field::Prompt)
    }

    /// The supplied value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Field::Supplied(value) => Some(value),
            Field::Prompt | Field::Unset => None,
        }
    }

    /// Drop the provenance. Fields that were never answered become `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Supplied(value) => Some(value),
            Field::Prompt | Field::Unset => None,
        }
    }
}

/// A request under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDraft {
    pub artifact_type: Field<ArtifactType>,
    pub name: Field<String>,
    pub controller: Field<bool>,
    pub root_view: Field<bool>,
    pub route: Field<bool>,
    pub theme: Field<String>,
    pub namespaces: Field<Vec<String>>,
    pub modules: Field<Vec<String>>,
}

impl RequestDraft {
    /// Start a draft from command line arguments.
    ///
    /// In interactive sessions every missing field is marked [`Field::Prompt`]; the
    /// resolver decides which of them are relevant for the chosen artifact type.
    #[must_use]
    pub fn from_args(args: CreateArgs) -> Self {
        let interactive = args.interactive;
        Self {
            artifact_type: Field::from_arg(args.artifact_type, interactive),
            name: Field::from_arg(args.name, interactive),
            controller: Field::from_arg(args.controller, interactive),
            root_view: Field::from_arg(args.root, interactive),
            route: Field::from_arg(args.route, interactive),
            theme: Field::from_arg(args.theme, interactive),
            namespaces: Field::from_arg(args.namespaces, interactive),
            modules: Field::from_arg(args.modules, interactive),
        }
    }

    /// Finish the draft. Fields still waiting for a prompt are not relevant for the
    /// artifact type and become unset.
    pub fn into_answers(self) -> Result<ResolvedAnswers, CreateError> {
        let artifact_type = self.artifact_type.into_option().ok_or(CreateError::MissingComponent)?;

        Ok(ResolvedAnswers {
            artifact_type,
            name: self.name.into_option().filter(|name| !name.is_empty()),
            controller: self.controller.into_option(),
            root_view: self.root_view.into_option(),
            route: self.route.into_option(),
            theme: self.theme.into_option(),
            namespaces: self.namespaces.into_option(),
            modules: self.modules.into_option(),
        })
    }
}

/// Plain request values after argument parsing and prompting, before identifier checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAnswers {
    pub artifact_type: ArtifactType,
    pub name: Option<String>,
    pub controller: Option<bool>,
    pub root_view: Option<bool>,
    pub route: Option<bool>,
    pub theme: Option<String>,
    /// Namespaces as supplied, not yet matched against the index
    pub namespaces: Option<Vec<String>>,
    /// Modules as supplied, not yet matched against the index
    pub modules: Option<Vec<String>>,
}

/// Request values whose identifiers were matched against the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAnswers {
    pub artifact_type: ArtifactType,
    pub name: Option<String>,
    pub controller: Option<bool>,
    pub root_view: Option<bool>,
    pub route: Option<bool>,
    pub theme: Option<String>,
    pub namespace_list: Vec<KnownIdentifier>,
    pub module_list: Vec<KnownIdentifier>,
}

/// Build the request handed to the generator.
///
/// `savePath` is the project's web-app directory made absolute; all other fields are
/// copied from the validated answers.
pub fn build_request(answers: ValidatedAnswers, project: &Project) -> Result<CreationRequest> {
    let save_path = resolve_absolute(&project.root_dir, Path::new(project.webapp_path()))?;

    Ok(CreationRequest {
        artifact_type: answers.artifact_type,
        name: answers.name,
        controller: answers.controller,
        root_view: answers.root_view,
        route: answers.route,
        theme: answers.theme,
        namespace_list: answers.namespace_list,
        module_list: answers.module_list,
        save_path,
    })
}
