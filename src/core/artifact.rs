//! Artifact abstractions
//!
//! An artifact is the unit the create command adds to an application project. The set of
//! artifact types is closed; each type decides which request fields are meaningful for it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of artifacts that can be added to an application project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactType {
    /// An XML view, optionally with controller, route or as root view
    View,

    /// A standalone controller
    Controller,

    /// A custom control
    Control,

    /// The application component
    Component,

    /// The bootstrap HTML page, optionally themed
    Bootstrap,
}

impl ArtifactType {
    /// All artifact types, in the order they are offered interactively.
    pub const ALL: [ArtifactType; 5] = [
        ArtifactType::View,
        ArtifactType::Controller,
        ArtifactType::Control,
        ArtifactType::Component,
        ArtifactType::Bootstrap,
    ];

    /// Whether a request for this type must carry a name.
    ///
    /// Components and bootstraps fall back to generator defaults when unnamed.
    #[must_use]
    pub const fn requires_name(self) -> bool {
        matches!(self, ArtifactType::View | ArtifactType::Controller | ArtifactType::Control)
    }

    /// Whether a supplied `modules` list is matched into `moduleList` for this type.
    ///
    /// Views accept modules next to their namespaces.
    #[must_use]
    pub const fn uses_modules(self) -> bool {
        matches!(self, ArtifactType::View | ArtifactType::Controller | ArtifactType::Control)
    }

    /// Human readable label used by the interactive type selection.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ArtifactType::View => "View",
            ArtifactType::Controller => "Controller",
            ArtifactType::Control => "Custom Control",
            ArtifactType::Component => "Component",
            ArtifactType::Bootstrap => "Bootstrap",
        }
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactType::View => write!(f, "view"),
            ArtifactType::Controller => write!(f, "controller"),
            ArtifactType::Control => write!(f, "control"),
            ArtifactType::Component => write!(f, "component"),
            ArtifactType::Bootstrap => write!(f, "bootstrap"),
        }
    }
}

impl std::str::FromStr for ArtifactType {
    type Err = crate::core::CreateError;

    /// Parses both the CLI token and the interactive label.
    ///
    /// Case, whitespace, `-` and `_` are ignored, so `"Custom Control"`, `custom-control`
    /// and `control` all map to [`ArtifactType::Control`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "view" => Ok(ArtifactType::View),
            "controller" => Ok(ArtifactType::Controller),
            "control" | "customcontrol" => Ok(ArtifactType::Control),
            "component" => Ok(ArtifactType::Component),
            "bootstrap" => Ok(ArtifactType::Bootstrap),
            _ => Err(crate::core::CreateError::InvalidArtifactType {
                value: s.to_string(),
            }),
        }
    }
}

/// Canonical shape of a validated namespace, module or theme reference.
///
/// Only the lower-cased name survives validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KnownIdentifier {
    /// Lower-cased identifier name
    pub name: String,
}

impl KnownIdentifier {
    /// Create an identifier, normalizing the name to lower case.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_lowercase(),
        }
    }

    /// Case-insensitive comparison against a user supplied name.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.name == candidate.to_lowercase()
    }
}

impl fmt::Display for KnownIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
