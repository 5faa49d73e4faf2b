//! Filesystem-backed project collaborators.
//!
//! [`FsWorkspace`] reads an on-disk project:
//!
//! - the root `ui5.yaml` describes the project itself
//! - `package.json` lists dependencies (the root also contributes `devDependencies`)
//! - dependencies are resolved through `node_modules`, searched from the depending package
//!   upward to the project root
//! - only packages that carry a `ui5.yaml` become nodes of the tree
//!
//! Shared packages are expanded once. Later references to an already visited id are recorded
//! as leaf nodes, which also terminates dependency cycles.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace, warn};

use super::descriptor::{PackageJson, ProjectDescriptor};
use super::{
    CollectionProvider, DependencyCollection, DependencyNode, FsReader, Project, ProjectInfo,
    ProjectKind, ProjectTree, ResourceCollections, ResourceReader, TreeProvider,
};
use crate::constants::{
    APP_MANIFEST, LIBRARY_SOURCE_DIR, NODE_MODULES, PACKAGE_JSON, PROJECT_DESCRIPTOR,
};
use crate::resolver::DependencyGraph;
use crate::utils::{find_project_root, resolve_absolute};

/// Project collaborators over a project directory.
#[derive(Debug, Clone)]
pub struct FsWorkspace {
    root_dir: PathBuf,
}

impl FsWorkspace {
    /// Create a workspace for the project rooted at `root_dir`.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Locate the project containing `start` and create a workspace for it.
    pub fn discover(start: &Path) -> Result<Self> {
        let root_dir = find_project_root(start)?;
        debug!("Using project root {}", root_dir.display());
        Ok(Self::new(root_dir))
    }

    /// The project directory.
    #[must_use]
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn load_node(&self, id: String, dir: &Path) -> Result<DependencyNode> {
        let descriptor = ProjectDescriptor::load(&dir.join(PROJECT_DESCRIPTOR))?;
        let mut node = DependencyNode::new(id, descriptor.kind).with_metadata(descriptor.metadata);
        node.path = Some(dir.to_path_buf());
        Ok(node)
    }

    /// Find `name` in the nearest `node_modules`, starting at `from` and stopping at the
    /// project root's parent.
    fn locate_package(&self, from: &Path, name: &str) -> Option<PathBuf> {
        let mut current = Some(from);

        while let Some(dir) = current {
            let candidate = dir.join(NODE_MODULES).join(name);
            trace!("Probing {}", candidate.display());
            if candidate.join(PACKAGE_JSON).is_file() || candidate.join(PROJECT_DESCRIPTOR).is_file() {
                return Some(candidate);
            }
            if dir == self.root_dir.as_path() {
                break;
            }
            current = dir.parent();
        }

        None
    }

    fn resolve_dependencies(
        &self,
        dir: &Path,
        include_dev: bool,
        visited: &mut HashSet<String>,
    ) -> Result<Vec<DependencyNode>> {
        let Some(package) = PackageJson::load_optional(&dir.join(PACKAGE_JSON))? else {
            return Ok(Vec::new());
        };

        let mut dependencies = Vec::new();
        for name in package.dependency_names(include_dev) {
            let Some(package_dir) = self.locate_package(dir, &name) else {
                debug!("Dependency '{}' of {} is not installed, skipping", name, dir.display());
                continue;
            };
            if !package_dir.join(PROJECT_DESCRIPTOR).is_file() {
                trace!("Dependency '{}' has no {}, skipping", name, PROJECT_DESCRIPTOR);
                continue;
            }

            let mut node = self.load_node(name.clone(), &package_dir)?;
            if visited.insert(name) {
                node.dependencies = self.resolve_dependencies(&package_dir, false, visited)?;
            }
            dependencies.push(node);
        }

        Ok(dependencies)
    }

    /// Root view configured in the web-app's `manifest.json`.
    ///
    /// A missing, unreadable or malformed manifest means the application has no entry
    /// point yet.
    fn read_entry_point(webapp_dir: &Path) -> Option<String> {
        let manifest_path = webapp_dir.join(APP_MANIFEST);
        if !manifest_path.is_file() {
            return None;
        }

        let manifest = std::fs::read_to_string(&manifest_path)
            .context("Failed to read")
            .and_then(|content| {
                serde_json::from_str::<serde_json::Value>(&content).context("Failed to parse")
            });
        let manifest = match manifest {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!("Ignoring {}: {:#}", manifest_path.display(), e);
                return None;
            }
        };

        match &manifest["sap.ui5"]["rootView"] {
            serde_json::Value::String(view) => Some(view.clone()),
            serde_json::Value::Object(view) => {
                view.get("viewName").and_then(|name| name.as_str()).map(str::to_string)
            }
            _ => None,
        }
    }
}

impl TreeProvider for FsWorkspace {
    async fn generate_dependency_tree(&self) -> Result<DependencyNode> {
        let package = PackageJson::load_optional(&self.root_dir.join(PACKAGE_JSON))?;
        let descriptor = ProjectDescriptor::load(&self.root_dir.join(PROJECT_DESCRIPTOR))?;
        let root_id = package
            .and_then(|p| p.name)
            .unwrap_or_else(|| descriptor.metadata.name.clone());

        let mut visited = HashSet::from([root_id.clone()]);
        let mut root = self.load_node(root_id, &self.root_dir)?;
        root.dependencies = self.resolve_dependencies(&self.root_dir, true, &mut visited)?;

        debug!(
            "Dependency tree of '{}' has {} direct dependencies",
            root.id,
            root.dependencies.len()
        );
        Ok(root)
    }

    async fn generate_project_tree(&self) -> Result<ProjectTree> {
        let descriptor = ProjectDescriptor::load(&self.root_dir.join(PROJECT_DESCRIPTOR))?;

        Ok(ProjectTree {
            id: descriptor.metadata.name.clone(),
            kind: descriptor.kind,
            metadata: descriptor.metadata,
            resources: descriptor.resources,
            root_dir: self.root_dir.clone(),
        })
    }

    async fn process_tree(&self, tree: ProjectTree) -> Result<Project> {
        let resources = tree.resources.unwrap_or_default();
        let webapp_dir =
            resolve_absolute(&tree.root_dir, Path::new(&resources.configuration.paths.webapp))?;
        let entry_point = if tree.kind == ProjectKind::Application {
            Self::read_entry_point(&webapp_dir)
        } else {
            None
        };

        Ok(Project {
            kind: tree.kind,
            metadata: tree.metadata,
            resources,
            root_dir: tree.root_dir,
            entry_point,
        })
    }
}

impl CollectionProvider for FsWorkspace {
    async fn create_collections_for_tree(
        &self,
        tree: &DependencyNode,
    ) -> Result<ResourceCollections> {
        let graph = DependencyGraph::from_tree(tree);
        let mut readers: Vec<Arc<dyn ResourceReader>> = Vec::new();

        for node in graph.reachable_dependencies() {
            let Some(dir) = &node.path else {
                continue;
            };
            let source_dir = dir.join(LIBRARY_SOURCE_DIR);
            let base_dir = if source_dir.is_dir() { source_dir } else { dir.clone() };
            readers.push(Arc::new(FsReader::new(ProjectInfo::from(node), base_dir)));
        }

        debug!("Created {} dependency readers", readers.len());
        Ok(ResourceCollections {
            dependencies: DependencyCollection {
                readers,
            },
        })
    }
}
