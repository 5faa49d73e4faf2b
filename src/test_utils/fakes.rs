//! In-memory collaborators for driving the create pipeline in tests.

use anyhow::{Result, anyhow};
use futures::future::BoxFuture;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::core::CreateError;
use crate::generator::{GenerateOptions, GenerationResult, Generator};
use crate::project::{
    CollectionProvider, DependencyCollection, DependencyNode, Project, ProjectInfo, ProjectKind,
    ProjectMetadata, ProjectResources, ProjectTree, Resource, ResourceCollections, ResourceReader,
    TreeProvider,
};
use crate::prompt::{Answer, Prompter, Question};
use crate::resolver::CreationRequest;

/// A reader with a fixed resource list.
///
/// Every pattern is answered with all resources, like a stubbed glob lookup.
#[derive(Debug)]
pub struct StaticReader {
    project: ProjectInfo,
    paths: Vec<String>,
    glob_calls: AtomicUsize,
}

impl StaticReader {
    /// A reader that lists nothing.
    pub fn new(project: ProjectInfo) -> Self {
        Self::with_resources(project, &[])
    }

    /// A reader listing `paths`, all owned by `project`.
    pub fn with_resources(project: ProjectInfo, paths: &[&str]) -> Self {
        Self {
            project,
            paths: paths.iter().map(|p| (*p).to_string()).collect(),
            glob_calls: AtomicUsize::new(0),
        }
    }

    /// How often `by_glob` was called.
    pub fn glob_calls(&self) -> usize {
        self.glob_calls.load(Ordering::SeqCst)
    }
}

impl ResourceReader for StaticReader {
    fn project(&self) -> &ProjectInfo {
        &self.project
    }

    fn by_glob<'a>(&'a self, _pattern: &'a str) -> BoxFuture<'a, Result<Vec<Resource>>> {
        self.glob_calls.fetch_add(1, Ordering::SeqCst);
        let resources = self
            .paths
            .iter()
            .map(|path| Resource {
                path: path.clone(),
                project: self.project.clone(),
            })
            .collect();
        Box::pin(async move { Ok(resources) })
    }
}

/// A project with a hand-built dependency tree.
///
/// ```rust,no_run
/// use ui5_create::test_utils::FakeWorkspace;
///
/// let workspace = FakeWorkspace::application("/project", "app")
///     .with_library("fake-dependency", "sample")
///     .with_theme_library("fancy-theme", "themelib_sap_fancy_theme");
/// ```
#[derive(Debug, Clone)]
pub struct FakeWorkspace {
    project: Project,
    tree: DependencyNode,
    readers: Vec<Arc<dyn ResourceReader>>,
    collection_calls: Arc<AtomicUsize>,
}

impl FakeWorkspace {
    /// An application at `root_dir` whose web-app lives in `webapp`.
    pub fn application(root_dir: impl Into<PathBuf>, webapp: &str) -> Self {
        let mut resources = ProjectResources::default();
        resources.configuration.paths.webapp = webapp.to_string();
        let metadata = ProjectMetadata {
            name: "my.app".to_string(),
            namespace: None,
        };

        Self {
            project: Project {
                kind: ProjectKind::Application,
                metadata: metadata.clone(),
                resources,
                root_dir: root_dir.into(),
                entry_point: None,
            },
            tree: DependencyNode::new("my-app", ProjectKind::Application).with_metadata(metadata),
            readers: Vec::new(),
            collection_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Change the declared project type.
    #[must_use]
    pub fn with_kind(mut self, kind: ProjectKind) -> Self {
        self.project.kind = kind.clone();
        self.tree.kind = kind;
        self
    }

    /// Give the application a root view.
    #[must_use]
    pub fn with_entry_point(mut self, view: &str) -> Self {
        self.project.entry_point = Some(view.to_string());
        self
    }

    /// Add a direct library dependency providing `namespace`.
    #[must_use]
    pub fn with_library(self, id: &str, namespace: &str) -> Self {
        let info = ProjectInfo {
            id: id.to_string(),
            kind: ProjectKind::Library,
            metadata: Some(ProjectMetadata {
                name: id.to_string(),
                namespace: Some(namespace.to_string()),
            }),
        };
        let library_js = format!("/resources/{}/library.js", namespace.replace('.', "/"));
        self.with_reader(StaticReader::with_resources(info, &[library_js.as_str()]))
    }

    /// Add a direct theme library dependency named `library_name`.
    #[must_use]
    pub fn with_theme_library(self, id: &str, library_name: &str) -> Self {
        let info = ProjectInfo {
            id: id.to_string(),
            kind: ProjectKind::ThemeLibrary,
            metadata: Some(ProjectMetadata {
                name: library_name.to_string(),
                namespace: None,
            }),
        };
        self.with_reader(StaticReader::with_resources(info, &["/resources/themes/library.source.less"]))
    }

    /// Add a direct dependency backed by `reader`.
    #[must_use]
    pub fn with_reader(mut self, reader: StaticReader) -> Self {
        let project = reader.project();
        let mut node = DependencyNode::new(project.id.clone(), project.kind.clone());
        node.metadata = project.metadata.clone();
        self.tree.dependencies.push(node);
        self.readers.push(Arc::new(reader));
        self
    }

    /// How often resource collections were created.
    pub fn collection_calls(&self) -> usize {
        self.collection_calls.load(Ordering::SeqCst)
    }
}

impl TreeProvider for FakeWorkspace {
    async fn generate_dependency_tree(&self) -> Result<DependencyNode> {
        Ok(self.tree.clone())
    }

    async fn generate_project_tree(&self) -> Result<ProjectTree> {
        Ok(ProjectTree {
            id: self.tree.id.clone(),
            kind: self.project.kind.clone(),
            metadata: self.project.metadata.clone(),
            resources: Some(self.project.resources.clone()),
            root_dir: self.project.root_dir.clone(),
        })
    }

    async fn process_tree(&self, tree: ProjectTree) -> Result<Project> {
        Ok(Project {
            kind: tree.kind,
            metadata: tree.metadata,
            resources: tree.resources.unwrap_or_default(),
            root_dir: tree.root_dir,
            entry_point: self.project.entry_point.clone(),
        })
    }
}

impl CollectionProvider for FakeWorkspace {
    async fn create_collections_for_tree(
        &self,
        _tree: &DependencyNode,
    ) -> Result<ResourceCollections> {
        self.collection_calls.fetch_add(1, Ordering::SeqCst);
        Ok(ResourceCollections {
            dependencies: DependencyCollection {
                readers: self.readers.clone(),
            },
        })
    }
}

/// Answers questions from a script, recording what was asked.
///
/// Once the script runs out, further questions cancel the session.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<Answer>>,
    questions: Mutex<Vec<Question>>,
}

impl ScriptedPrompter {
    /// A prompter giving `answers` in order.
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            questions: Mutex::new(Vec::new()),
        }
    }

    /// Names of the asked questions, in order.
    pub fn asked(&self) -> Vec<String> {
        self.questions().into_iter().map(|q| q.name).collect()
    }

    /// The asked questions, in order.
    pub fn questions(&self) -> Vec<Question> {
        self.questions.lock().map(|q| q.clone()).unwrap_or_default()
    }
}

impl Prompter for ScriptedPrompter {
    async fn run(&self, question: &Question) -> Result<Answer> {
        self.questions.lock().map_err(|_| anyhow!("prompter state poisoned"))?.push(question.clone());

        let answer =
            self.answers.lock().map_err(|_| anyhow!("prompter state poisoned"))?.pop_front();
        answer.ok_or_else(|| CreateError::PromptCancelled.into())
    }
}

/// A generator returning a canned result and capturing its calls.
#[derive(Debug)]
pub struct StubGenerator {
    result: std::result::Result<GenerationResult, String>,
    calls: AtomicUsize,
    last_name: Mutex<Option<String>>,
    last_request: Mutex<Option<CreationRequest>>,
}

impl StubGenerator {
    /// A generator that reports `message`.
    pub fn with_message(message: &str) -> Self {
        Self::returning(GenerationResult::with_message(message))
    }

    /// A generator that resolves with `result`.
    pub fn returning(result: GenerationResult) -> Self {
        Self::new(Ok(result))
    }

    /// A generator that fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self::new(Err(message.to_string()))
    }

    fn new(result: std::result::Result<GenerationResult, String>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            last_name: Mutex::new(None),
            last_request: Mutex::new(None),
        }
    }

    /// Number of `create` calls.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The `name` argument of the last call.
    pub fn last_name(&self) -> Option<String> {
        self.last_name.lock().ok().and_then(|name| name.clone())
    }

    /// The request of the last call.
    pub fn last_request(&self) -> Option<CreationRequest> {
        self.last_request.lock().ok().and_then(|request| request.clone())
    }
}

impl Generator for StubGenerator {
    async fn create(&self, options: GenerateOptions<'_>) -> Result<GenerationResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut name) = self.last_name.lock() {
            *name = options.name.map(str::to_string);
        }
        if let Ok(mut request) = self.last_request.lock() {
            *request = Some(options.meta_information.clone());
        }

        self.result.clone().map_err(|message| anyhow!(message))
    }
}
