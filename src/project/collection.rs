//! Resource collections: per-dependency virtual file listings.
//!
//! Each dependency of a project contributes one or more [`ResourceReader`]s. A reader knows
//! the project that owns it and answers a single question: which resources under its virtual
//! `/resources/` namespace match a glob pattern.

use anyhow::{Context, Result};
use futures::future::BoxFuture;
use glob::Pattern;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, trace};
use walkdir::WalkDir;

use super::ProjectInfo;
use crate::constants::VIRTUAL_RESOURCES_PREFIX;

/// A resource listed by a reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Virtual path, e.g. `/resources/sap/m/library.js`
    pub path: String,
    /// Project that provides the resource
    pub project: ProjectInfo,
}

/// Lists the resources one dependency provides.
pub trait ResourceReader: Send + Sync + fmt::Debug {
    /// The project this reader belongs to.
    fn project(&self) -> &ProjectInfo;

    /// List all resources whose virtual path matches `pattern`.
    fn by_glob<'a>(&'a self, pattern: &'a str) -> BoxFuture<'a, Result<Vec<Resource>>>;
}

/// Readers of all dependencies of a project.
#[derive(Debug, Clone, Default)]
pub struct DependencyCollection {
    /// One reader per dependency, in tree order
    pub readers: Vec<Arc<dyn ResourceReader>>,
}

impl DependencyCollection {
    /// Readers owned by the dependency with the given id.
    pub fn readers_for<'a>(
        &'a self,
        dependency_id: &'a str,
    ) -> impl Iterator<Item = &'a Arc<dyn ResourceReader>> + 'a {
        self.readers.iter().filter(move |reader| reader.project().id == dependency_id)
    }
}

/// Resource collections created for a dependency tree.
#[derive(Debug, Clone, Default)]
pub struct ResourceCollections {
    /// Collection over the dependencies (the root project is not included)
    pub dependencies: DependencyCollection,
}

/// A [`ResourceReader`] over a directory on disk.
///
/// Files below `base_dir` are exposed as `/resources/<relative path>`. Symlinks are not
/// followed.
#[derive(Debug, Clone)]
pub struct FsReader {
    project: ProjectInfo,
    base_dir: PathBuf,
}

impl FsReader {
    /// Create a reader exposing `base_dir` on behalf of `project`.
    pub fn new(project: ProjectInfo, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            project,
            base_dir: base_dir.into(),
        }
    }

    fn list_matching(&self, pattern: &str) -> Result<Vec<Resource>> {
        let matcher =
            Pattern::new(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        if !self.base_dir.is_dir() {
            debug!("Reader base {} does not exist, listing nothing", self.base_dir.display());
            return Ok(Vec::new());
        }

        let mut resources = Vec::new();
        for entry in WalkDir::new(&self.base_dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file())
        {
            let Ok(relative) = entry.path().strip_prefix(&self.base_dir) else {
                continue;
            };
            let virtual_path = format!(
                "{VIRTUAL_RESOURCES_PREFIX}{}",
                relative.to_string_lossy().replace('\\', "/")
            );

            trace!("Checking resource: {}", virtual_path);
            if matcher.matches(&virtual_path) {
                resources.push(Resource {
                    path: virtual_path,
                    project: self.project.clone(),
                });
            }
        }

        debug!(
            "Reader for '{}' found {} resources matching '{}'",
            self.project.id,
            resources.len(),
            pattern
        );
        Ok(resources)
    }
}

impl ResourceReader for FsReader {
    fn project(&self) -> &ProjectInfo {
        &self.project
    }

    fn by_glob<'a>(&'a self, pattern: &'a str) -> BoxFuture<'a, Result<Vec<Resource>>> {
        Box::pin(async move { self.list_matching(pattern) })
    }
}
