//! Error handling for ui5-create
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** so the pipeline can report precise failures
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`CreateError`] - Enumerated failure cases of the create pipeline
//! - [`ErrorContext`] - Wrapper that adds suggestions and details for display
//!
//! The `Display` output of the request-level variants ([`CreateError::MissingComponent`],
//! [`CreateError::MissingName`], [`CreateError::UnsupportedProjectType`],
//! [`CreateError::NoValidIdentifier`] and [`CreateError::Generation`]) is part of the
//! observable command contract. Callers and scripts match on these strings, so they must
//! not be reworded.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ui5_create::core::{CreateError, user_friendly_error};
//!
//! let ctx = user_friendly_error(anyhow::Error::from(CreateError::MissingName));
//! ctx.display(); // Shows colored error with a suggestion
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for create operations
///
/// Variants fall into three groups:
///
/// ## Request errors (terminal, never retried)
/// - [`MissingComponent`], [`MissingName`] - omitted input in non-interactive mode
/// - [`UnsupportedProjectType`] - the project is not an application
/// - [`NoValidIdentifier`], [`UnknownTheme`] - supplied identifiers match nothing installed
///
/// ## Generation errors
/// - [`Generation`] - the generator returned no status message
///
/// ## Environment errors
/// - [`ProjectDescriptorNotFound`], [`InvalidProjectDescriptor`], [`PromptCancelled`], ...
///
/// [`MissingComponent`]: CreateError::MissingComponent
/// [`MissingName`]: CreateError::MissingName
/// [`UnsupportedProjectType`]: CreateError::UnsupportedProjectType
/// [`NoValidIdentifier`]: CreateError::NoValidIdentifier
/// [`UnknownTheme`]: CreateError::UnknownTheme
/// [`Generation`]: CreateError::Generation
/// [`ProjectDescriptorNotFound`]: CreateError::ProjectDescriptorNotFound
/// [`InvalidProjectDescriptor`]: CreateError::InvalidProjectDescriptor
/// [`PromptCancelled`]: CreateError::PromptCancelled
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreateError {
    /// No artifact type was given outside interactive mode
    #[error("Component needed. You can run this command without component in interactive mode")]
    MissingComponent,

    /// The artifact type needs a name and none was given outside interactive mode
    #[error(
        "Missing mandatory parameter 'name'. You can run this command without name in interactive mode"
    )]
    MissingName,

    /// The target project is not an application
    #[error("Create command is currently only supported for projects of type application")]
    UnsupportedProjectType {
        /// The project type that was found instead
        project_type: String,
    },

    /// Supplied namespaces/modules matched no installed library
    #[error("No valid library/module provided. Use the add command to add the needed library.")]
    NoValidIdentifier,

    /// Supplied theme matched no installed theme library
    #[error(
        "No valid theme library provided for theme '{theme}'. Use the add command to add the needed theme library."
    )]
    UnknownTheme {
        /// The theme as supplied on the command line
        theme: String,
    },

    /// The generator resolved without a status message
    #[error("Internal error while adding component")]
    Generation,

    /// The user aborted an interactive question
    #[error("Interactive session cancelled")]
    PromptCancelled,

    /// The artifact type token is not one of the supported types
    #[error("Invalid artifact type: {value}")]
    InvalidArtifactType {
        /// The rejected token
        value: String,
    },

    /// No `ui5.yaml` was found
    #[error("Project descriptor ui5.yaml not found in {path} or any parent directory")]
    ProjectDescriptorNotFound {
        /// Directory the search started from
        path: String,
    },

    /// A `ui5.yaml` or `package.json` could not be parsed
    #[error("Invalid project descriptor {file}: {reason}")]
    InvalidProjectDescriptor {
        /// File that failed to parse
        file: String,
        /// Parser message
        reason: String,
    },

    /// Catch-all for errors without a dedicated variant
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

/// Error context wrapper that provides user-friendly error information
///
/// Combines a [`CreateError`] with an optional suggestion (printed in green) and optional
/// details (printed in yellow).
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: CreateError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context without suggestion or details
    #[must_use]
    pub const fn new(error: CreateError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: red and bold label, message unchanged
    /// - Details: yellow
    /// - Suggestion: green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognizes [`CreateError`] anywhere in the error chain and [`std::io::Error`] at the
/// root; everything else is reported with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(create_error) = error.chain().find_map(|e| e.downcast_ref::<CreateError>()) {
        return create_error_context(create_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>()
        && io_error.kind() == std::io::ErrorKind::PermissionDenied
    {
        return ErrorContext::new(CreateError::Other {
            message: error.to_string(),
        })
        .with_suggestion("Check the file permissions of the project directory");
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(CreateError::Other {
        message,
    })
}

fn create_error_context(error: CreateError) -> ErrorContext {
    match &error {
        CreateError::MissingComponent => ErrorContext::new(error)
            .with_suggestion("Pass an artifact type (view, controller, control, component, bootstrap) or use --interactive, -i"),

        CreateError::MissingName => ErrorContext::new(error)
            .with_suggestion("Pass --name <NAME> or use --interactive, -i"),

        CreateError::UnsupportedProjectType { project_type } => {
            let details = format!("The project in this directory is of type '{project_type}'");
            ErrorContext::new(error)
                .with_details(details)
                .with_suggestion("Run the command inside a project whose ui5.yaml declares 'type: application'")
        }

        CreateError::NoValidIdentifier => ErrorContext::new(error)
            .with_details("Namespaces and modules are matched case-insensitively against the libraries installed as project dependencies"),

        CreateError::UnknownTheme { .. } => ErrorContext::new(error)
            .with_details("Themes are matched against the theme libraries installed as project dependencies"),

        CreateError::Generation => ErrorContext::new(error)
            .with_details("The generator finished without reporting what it created"),

        CreateError::ProjectDescriptorNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Run the command inside a project directory or pass --project-dir"),

        CreateError::InvalidProjectDescriptor { file, .. } => {
            let suggestion = format!("Check the syntax of {file}");
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        _ => ErrorContext::new(error),
    }
}
