//! Parsing of `ui5.yaml` project descriptors and `package.json` manifests.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Map;
use std::path::Path;

use super::{ProjectKind, ProjectMetadata, ProjectResources};
use crate::core::CreateError;

/// The first document of a `ui5.yaml`.
///
/// ```yaml
/// specVersion: "3.0"
/// type: application
/// metadata:
///   name: my.app
/// resources:
///   configuration:
///     paths:
///       webapp: app
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
    /// Descriptor schema version
    #[serde(default)]
    pub spec_version: Option<String>,
    /// Declared project type
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    /// Project metadata
    pub metadata: ProjectMetadata,
    /// Resource configuration, if declared
    #[serde(default)]
    pub resources: Option<ProjectResources>,
}

impl ProjectDescriptor {
    /// Load the descriptor from a `ui5.yaml` file.
    ///
    /// Only the first YAML document is read; additional documents (extensions) are ignored.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read project descriptor: {}", path.display()))?;
        Self::parse(&content).map_err(|reason| {
            CreateError::InvalidProjectDescriptor {
                file: path.display().to_string(),
                reason,
            }
            .into()
        })
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        let document = serde_yaml::Deserializer::from_str(content)
            .next()
            .ok_or_else(|| "descriptor is empty".to_string())?;
        Self::deserialize(document).map_err(|e| e.to_string())
    }
}

/// The parts of a `package.json` the dependency walk needs.
///
/// Dependency maps keep declaration order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    /// Package name
    #[serde(default)]
    pub name: Option<String>,
    /// Runtime dependencies
    #[serde(default)]
    pub dependencies: Map<String, serde_json::Value>,
    /// Development dependencies
    #[serde(default)]
    pub dev_dependencies: Map<String, serde_json::Value>,
}

impl PackageJson {
    /// Load a `package.json`, returning `None` when the file does not exist.
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let package = serde_json::from_str(&content).map_err(|e| {
            anyhow::Error::from(CreateError::InvalidProjectDescriptor {
                file: path.display().to_string(),
                reason: e.to_string(),
            })
        })?;
        Ok(Some(package))
    }

    /// Dependency names in declaration order, optionally followed by dev dependencies.
    pub fn dependency_names(&self, include_dev: bool) -> Vec<String> {
        let mut names: Vec<String> = self.dependencies.keys().cloned().collect();
        if include_dev {
            for name in self.dev_dependencies.keys() {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
        }
        names
    }
}
