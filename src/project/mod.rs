//! Project model and the collaborators that produce it
//!
//! The create pipeline never builds dependency trees or lists files itself. It consumes:
//!
//! - a [`TreeProvider`] that yields the dependency tree ([`DependencyNode`]) and the
//!   processed [`Project`]
//! - a [`CollectionProvider`] that yields per-dependency [`ResourceReader`]s
//!
//! Both are constructed once per command invocation and are read-only afterwards.
//! [`FsWorkspace`] implements both over an on-disk project (`ui5.yaml`, `package.json`
//! and `node_modules`).

pub mod collection;
pub mod descriptor;
pub mod workspace;

pub use collection::{DependencyCollection, FsReader, Resource, ResourceCollections, ResourceReader};
pub use descriptor::{PackageJson, ProjectDescriptor};
pub use workspace::FsWorkspace;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::path::PathBuf;

use crate::constants::DEFAULT_WEBAPP_PATH;

/// The kind of a project as declared by the `type` field of its descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectKind {
    /// A deployable application; the only kind the create command supports
    Application,
    /// A control library
    Library,
    /// A theme library (`theme-library`, legacy `themelib`)
    ThemeLibrary,
    /// A generic module
    Module,
    /// Any other declared type, kept verbatim
    Other(String),
}

impl From<String> for ProjectKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "application" => ProjectKind::Application,
            "library" => ProjectKind::Library,
            "theme-library" | "themelib" => ProjectKind::ThemeLibrary,
            "module" => ProjectKind::Module,
            _ => ProjectKind::Other(value),
        }
    }
}

impl From<ProjectKind> for String {
    fn from(kind: ProjectKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectKind::Application => write!(f, "application"),
            ProjectKind::Library => write!(f, "library"),
            ProjectKind::ThemeLibrary => write!(f, "theme-library"),
            ProjectKind::Module => write!(f, "module"),
            ProjectKind::Other(kind) => write!(f, "{kind}"),
        }
    }
}

/// Descriptor metadata of a project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Project name
    pub name: String,
    /// Library namespace (e.g. `sap.m`), when the project declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// A node of the dependency tree. The root node is the project itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyNode {
    /// Unique dependency id (the package name)
    pub id: String,
    /// Descriptor metadata, absent for nodes that were only referenced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProjectMetadata>,
    /// Declared project type
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    /// Location on disk, when the node was read from the filesystem
    #[serde(skip)]
    pub path: Option<PathBuf>,
    /// Dependencies in declaration order
    #[serde(default)]
    pub dependencies: Vec<DependencyNode>,
}

impl DependencyNode {
    /// Create a node without metadata or dependencies.
    pub fn new(id: impl Into<String>, kind: ProjectKind) -> Self {
        Self {
            id: id.into(),
            metadata: None,
            kind,
            path: None,
            dependencies: Vec::new(),
        }
    }

    /// Attach descriptor metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: ProjectMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Append a dependency.
    #[must_use]
    pub fn with_dependency(mut self, dependency: DependencyNode) -> Self {
        self.dependencies.push(dependency);
        self
    }
}

/// Identity of the project that owns a [`Resource`] or a [`ResourceReader`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Dependency id of the owning project
    pub id: String,
    /// Declared project type
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    /// Descriptor metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProjectMetadata>,
}

impl From<&DependencyNode> for ProjectInfo {
    fn from(node: &DependencyNode) -> Self {
        Self {
            id: node.id.clone(),
            kind: node.kind.clone(),
            metadata: node.metadata.clone(),
        }
    }
}

/// Configured resource paths of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePaths {
    /// Web-app root, relative to the project directory
    pub webapp: String,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            webapp: DEFAULT_WEBAPP_PATH.to_string(),
        }
    }
}

/// The `resources.configuration` section of a project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceConfiguration {
    /// Configured paths
    #[serde(default)]
    pub paths: ResourcePaths,
}

/// The `resources` section of a project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectResources {
    /// Resource configuration
    #[serde(default)]
    pub configuration: ResourceConfiguration,
}

/// The project tree as loaded, before processing applies defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTree {
    /// Project id
    pub id: String,
    /// Declared project type
    pub kind: ProjectKind,
    /// Descriptor metadata
    pub metadata: ProjectMetadata,
    /// Resources section as declared, if any
    pub resources: Option<ProjectResources>,
    /// Project directory
    pub root_dir: PathBuf,
}

/// The processed project the create command runs against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Declared project type; must be [`ProjectKind::Application`]
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    /// Descriptor metadata
    pub metadata: ProjectMetadata,
    /// Resource configuration with defaults applied
    pub resources: ProjectResources,
    /// Project directory that relative configuration paths resolve against
    #[serde(skip)]
    pub root_dir: PathBuf,
    /// Root view of the application, when one is configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<String>,
}

impl Project {
    /// Whether the project already declares a root view.
    #[must_use]
    pub fn has_entry_point(&self) -> bool {
        self.entry_point.is_some()
    }

    /// Configured web-app path, relative to the project directory.
    #[must_use]
    pub fn webapp_path(&self) -> &str {
        &self.resources.configuration.paths.webapp
    }
}

/// Produces the dependency tree and the processed project.
pub trait TreeProvider: Send + Sync {
    /// Build the dependency tree rooted at the project.
    fn generate_dependency_tree(&self) -> impl Future<Output = Result<DependencyNode>> + Send;

    /// Load the project tree of the root project.
    fn generate_project_tree(&self) -> impl Future<Output = Result<ProjectTree>> + Send;

    /// Apply defaults and derive the [`Project`] from a loaded tree.
    fn process_tree(&self, tree: ProjectTree) -> impl Future<Output = Result<Project>> + Send;
}

/// Produces the resource collections for a dependency tree.
pub trait CollectionProvider: Send + Sync {
    /// Create one reader per dependency of `tree`.
    fn create_collections_for_tree(
        &self,
        tree: &DependencyNode,
    ) -> impl Future<Output = Result<ResourceCollections>> + Send;
}
