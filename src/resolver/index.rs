//! Resource Index: which libraries and theme libraries a project depends on.
//!
//! The index only looks at the immediate dependencies of the project, since only those can be
//! used from the artifacts the command creates. Each dependency's readers are probed in
//! declaration order, one at a time, so the resulting listings are stable and repeatable.
//!
//! Both listings are computed on first use and memoised for the lifetime of the index.

use anyhow::Result;
use std::collections::HashSet;
use tokio::sync::OnceCell;
use tracing::{debug, trace};

use super::DependencyGraph;
use crate::constants::{ALL_RESOURCES_GLOB, THEME_LIBRARY_PREFIX};
use crate::core::KnownIdentifier;
use crate::project::{DependencyNode, ProjectInfo, ProjectKind, ResourceCollections};

/// Known components and theme libraries of one project.
#[derive(Debug)]
pub struct ResourceIndex {
    tree: DependencyNode,
    collections: ResourceCollections,
    components: OnceCell<Vec<KnownIdentifier>>,
    theme_libraries: OnceCell<Vec<KnownIdentifier>>,
}

impl ResourceIndex {
    /// Create an index over a dependency tree and the collections created for it.
    pub fn new(tree: DependencyNode, collections: ResourceCollections) -> Self {
        Self {
            tree,
            collections,
            components: OnceCell::new(),
            theme_libraries: OnceCell::new(),
        }
    }

    /// Namespaces (or module names) provided by the project's direct dependencies.
    ///
    /// Identifiers come from the project owning each listed resource: its `namespace`, or
    /// its `name` when no namespace is declared. Theme libraries are not components. The
    /// result is deduplicated and keeps dependency declaration order.
    pub async fn list_components(&self) -> Result<&[KnownIdentifier]> {
        let components = self.components.get_or_try_init(|| self.collect_components()).await?;
        Ok(components)
    }

    /// Theme libraries among the project's direct dependencies.
    ///
    /// A theme library named `themelib_sap_fancy_theme` provides the theme
    /// `sap_fancy_theme`.
    pub async fn list_theme_libraries(&self) -> Result<&[KnownIdentifier]> {
        let themes =
            self.theme_libraries.get_or_init(|| async { self.collect_theme_libraries() }).await;
        Ok(themes)
    }

    async fn collect_components(&self) -> Result<Vec<KnownIdentifier>> {
        let graph = DependencyGraph::from_tree(&self.tree);
        let mut seen = HashSet::new();
        let mut components = Vec::new();

        for dependency in graph.direct_dependencies() {
            for reader in self.collections.dependencies.readers_for(&dependency.id) {
                let resources = reader.by_glob(ALL_RESOURCES_GLOB).await?;
                trace!("Dependency '{}' lists {} resources", dependency.id, resources.len());

                for resource in resources {
                    if resource.project.kind == ProjectKind::ThemeLibrary {
                        continue;
                    }
                    let Some(identifier) = component_identifier(&resource.project) else {
                        continue;
                    };
                    if seen.insert(identifier.name.clone()) {
                        components.push(identifier);
                    }
                }
            }
        }

        debug!(
            "Known components: [{}]",
            components.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(", ")
        );
        Ok(components)
    }

    fn collect_theme_libraries(&self) -> Vec<KnownIdentifier> {
        let graph = DependencyGraph::from_tree(&self.tree);
        let mut seen = HashSet::new();
        let mut themes = Vec::new();

        for dependency in graph.direct_dependencies() {
            for reader in self.collections.dependencies.readers_for(&dependency.id) {
                let project = reader.project();
                if project.kind != ProjectKind::ThemeLibrary {
                    continue;
                }
                let Some(identifier) = theme_identifier(project) else {
                    continue;
                };
                if seen.insert(identifier.name.clone()) {
                    themes.push(identifier);
                }
            }
        }

        debug!(
            "Known theme libraries: [{}]",
            themes.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join(", ")
        );
        themes
    }
}

fn component_identifier(project: &ProjectInfo) -> Option<KnownIdentifier> {
    let metadata = project.metadata.as_ref()?;
    let name = metadata.namespace.as_deref().unwrap_or(metadata.name.as_str());
    (!name.is_empty()).then(|| KnownIdentifier::new(name))
}

fn theme_identifier(project: &ProjectInfo) -> Option<KnownIdentifier> {
    let name = project.metadata.as_ref()?.name.as_str();
    let theme = name.strip_prefix(THEME_LIBRARY_PREFIX).unwrap_or(name);
    (!theme.is_empty()).then(|| KnownIdentifier::new(theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{DependencyCollection, ProjectMetadata, ResourceReader};
    use crate::test_utils::StaticReader;
    use std::sync::Arc;

    fn info(id: &str, kind: ProjectKind, name: &str, namespace: Option<&str>) -> ProjectInfo {
        ProjectInfo {
            id: id.to_string(),
            kind,
            metadata: Some(ProjectMetadata {
                name: name.to_string(),
                namespace: namespace.map(str::to_string),
            }),
        }
    }

    fn index(dependencies: &[&str], readers: Vec<Arc<dyn ResourceReader>>) -> ResourceIndex {
        let mut tree = DependencyNode::new("app", ProjectKind::Application);
        for id in dependencies {
            tree = tree.with_dependency(DependencyNode::new(*id, ProjectKind::Library));
        }
        ResourceIndex::new(
            tree,
            ResourceCollections {
                dependencies: DependencyCollection {
                    readers,
                },
            },
        )
    }

    #[tokio::test]
    async fn test_components_follow_declaration_order() {
        let index = index(
            &["lib-b", "lib-a"],
            vec![
                Arc::new(StaticReader::with_resources(
                    info("lib-a", ProjectKind::Library, "lib-a", Some("alpha")),
                    &["/resources/alpha/library.js"],
                )),
                Arc::new(StaticReader::with_resources(
                    info("lib-b", ProjectKind::Library, "lib-b", Some("Beta")),
                    &["/resources/beta/library.js", "/resources/beta/Button.js"],
                )),
            ],
        );

        let components = index.list_components().await.unwrap();
        assert_eq!(components, &[KnownIdentifier::new("beta"), KnownIdentifier::new("alpha")]);
    }

    #[tokio::test]
    async fn test_component_falls_back_to_name() {
        let index = index(
            &["fake-dependency"],
            vec![Arc::new(StaticReader::with_resources(
                info("fake-dependency", ProjectKind::Library, "sample", None),
                &["/resources/sample"],
            ))],
        );

        assert_eq!(index.list_components().await.unwrap(), &[KnownIdentifier::new("sample")]);
    }

    #[tokio::test]
    async fn test_empty_dependencies_yield_empty_listings() {
        let index = index(&[], Vec::new());

        assert!(index.list_components().await.unwrap().is_empty());
        assert!(index.list_theme_libraries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transitive_dependencies_are_not_components() {
        let tree = DependencyNode::new("app", ProjectKind::Application).with_dependency(
            DependencyNode::new("lib-a", ProjectKind::Library)
                .with_dependency(DependencyNode::new("deep", ProjectKind::Library)),
        );
        let index = ResourceIndex::new(
            tree,
            ResourceCollections {
                dependencies: DependencyCollection {
                    readers: vec![Arc::new(StaticReader::with_resources(
                        info("deep", ProjectKind::Library, "deep", Some("deep")),
                        &["/resources/deep/library.js"],
                    ))],
                },
            },
        );

        assert!(index.list_components().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_theme_libraries_strip_prefix() {
        let index = index(
            &["fancy-theme", "lib-a"],
            vec![
                Arc::new(StaticReader::with_resources(
                    info("fancy-theme", ProjectKind::ThemeLibrary, "themelib_sap_fancy_theme", None),
                    &["/resources/sap/fancy/library.source.less"],
                )),
                Arc::new(StaticReader::with_resources(
                    info("lib-a", ProjectKind::Library, "lib-a", Some("alpha")),
                    &["/resources/alpha/library.js"],
                )),
            ],
        );

        assert_eq!(
            index.list_theme_libraries().await.unwrap(),
            &[KnownIdentifier::new("sap_fancy_theme")]
        );
        // Theme libraries do not count as components
        assert_eq!(index.list_components().await.unwrap(), &[KnownIdentifier::new("alpha")]);
    }

    #[tokio::test]
    async fn test_listing_is_memoised() {
        let reader = Arc::new(StaticReader::with_resources(
            info("lib-a", ProjectKind::Library, "lib-a", Some("alpha")),
            &["/resources/alpha/library.js"],
        ));
        let index = index(&["lib-a"], vec![reader.clone() as Arc<dyn ResourceReader>]);

        let first = index.list_components().await.unwrap().to_vec();
        let second = index.list_components().await.unwrap().to_vec();

        assert_eq!(first, second);
        assert_eq!(reader.glob_calls(), 1);
    }
}
