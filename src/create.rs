//! The create operation: from arguments to a generated artifact.
//!
//! [`CreateOperation`] wires the pipeline together over injected collaborators:
//!
//! 1. cheap argument checks (missing type or name outside interactive mode)
//! 2. project loading and the application-only check
//! 3. dependency tree, resource collections and the [`ResourceIndex`]
//! 4. interactive questions for missing fields, when requested
//! 5. identifier checks and the final [`CreationRequest`]
//! 6. a single generator call
//!
//! Every step is awaited in order. Any failure ends the operation before the generator is
//! called, so a failed invocation has no side effects.

use anyhow::Result;
use tracing::{debug, info};

use crate::generator::{GenerateOptions, Generator, dispatch};
use crate::project::{CollectionProvider, Project, TreeProvider};
use crate::prompt::Prompter;
use crate::resolver::{
    CreateArgs, CreationRequest, InteractiveResolver, RequestDraft, RequestValidator,
    ResourceIndex, build_request,
};

/// A request ready for dispatch, together with the project it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCreation {
    /// The request handed to the generator
    pub request: CreationRequest,
    /// The processed project
    pub project: Project,
}

/// Runs the create pipeline for one invocation.
///
/// `W` provides both the dependency tree and the resource collections; for the binary this
/// is [`FsWorkspace`](crate::project::FsWorkspace).
#[derive(Debug)]
pub struct CreateOperation<W, P, G> {
    workspace: W,
    prompter: P,
    generator: G,
}

impl<W, P, G> CreateOperation<W, P, G>
where
    W: TreeProvider + CollectionProvider,
    P: Prompter,
    G: Generator,
{
    /// Create an operation over the given collaborators.
    pub const fn new(workspace: W, prompter: P, generator: G) -> Self {
        Self {
            workspace,
            prompter,
            generator,
        }
    }

    /// The generator the operation dispatches to.
    pub const fn generator(&self) -> &G {
        &self.generator
    }

    /// The prompter interactive sessions use.
    pub const fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Resolve and validate the request without calling the generator.
    pub async fn resolve(&self, args: CreateArgs) -> Result<ResolvedCreation> {
        RequestValidator::check_arguments(&args)?;

        let project_tree = self.workspace.generate_project_tree().await?;
        let project = self.workspace.process_tree(project_tree).await?;
        RequestValidator::check_project(&project)?;

        let tree = self.workspace.generate_dependency_tree().await?;
        let collections = self.workspace.create_collections_for_tree(&tree).await?;
        let index = ResourceIndex::new(tree, collections);

        let interactive = args.interactive;
        let mut draft = RequestDraft::from_args(args);
        if interactive {
            debug!("Starting interactive session");
            draft = InteractiveResolver::new(&self.prompter, &index, &project).resolve(draft).await?;
        }

        let answers = draft.into_answers()?;
        let validated = RequestValidator::new(&index).validate_answers(answers).await?;
        let request = build_request(validated, &project)?;
        debug!("Resolved {} request for {}", request.artifact_type, request.save_path.display());

        Ok(ResolvedCreation {
            request,
            project,
        })
    }

    /// Run the whole pipeline and return the generator's status message.
    pub async fn execute(&self, args: CreateArgs) -> Result<String> {
        let ResolvedCreation {
            request,
            project,
        } = self.resolve(args).await?;

        let message =
            dispatch(&self.generator, GenerateOptions::new(&request, &project)).await?;
        info!("{}", message);
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArtifactType, CreateError, KnownIdentifier};
    use crate::project::ProjectKind;
    use crate::prompt::Answer;
    use crate::test_utils::{FakeWorkspace, ScriptedPrompter, StubGenerator};
    use std::path::PathBuf;

    fn operation(
        workspace: FakeWorkspace,
        answers: Vec<Answer>,
    ) -> CreateOperation<FakeWorkspace, ScriptedPrompter, StubGenerator> {
        CreateOperation::new(
            workspace,
            ScriptedPrompter::new(answers),
            StubGenerator::with_message("Add new view"),
        )
    }

    #[tokio::test]
    async fn test_structural_errors_come_before_project_checks() {
        let workspace = FakeWorkspace::application("/project", "webapp").with_kind(ProjectKind::Library);
        let operation = operation(workspace, Vec::new());

        let err = operation.execute(CreateArgs::default()).await.unwrap_err();
        assert_eq!(err.downcast_ref::<CreateError>(), Some(&CreateError::MissingComponent));
        assert_eq!(operation.generator().call_count(), 0);
    }

    #[tokio::test]
    async fn test_project_type_is_checked_in_interactive_mode() {
        let workspace = FakeWorkspace::application("/project", "webapp").with_kind(ProjectKind::Library);
        let operation = operation(workspace, vec![Answer::Choice("View".to_string())]);

        let err = operation
            .execute(CreateArgs {
                interactive: true,
                ..CreateArgs::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CreateError>(),
            Some(CreateError::UnsupportedProjectType { .. })
        ));
        assert!(operation.prompter().asked().is_empty());
        assert_eq!(operation.generator().call_count(), 0);
    }

    #[tokio::test]
    async fn test_resolve_builds_request() {
        let workspace = FakeWorkspace::application("/project", "app").with_library("fake-dependency", "sample");
        let operation = operation(workspace, Vec::new());

        let resolved = operation
            .resolve(CreateArgs {
                artifact_type: Some(ArtifactType::View),
                name: Some("test".to_string()),
                controller: Some(true),
                namespaces: Some(vec!["Sample".to_string()]),
                ..CreateArgs::default()
            })
            .await
            .unwrap();

        assert_eq!(resolved.request.namespace_list, vec![KnownIdentifier::new("sample")]);
        assert_eq!(resolved.request.save_path, PathBuf::from("/project/app"));
        assert_eq!(operation.generator().call_count(), 0);
    }

    #[tokio::test]
    async fn test_interactive_execute() {
        let workspace = FakeWorkspace::application("/project", "webapp");
        let operation = operation(workspace, vec![
            Answer::Choice("View".to_string()),
            Answer::Text("Main".to_string()),
            Answer::Bool(false),
            Answer::Bool(true),
        ]);

        let message = operation
            .execute(CreateArgs {
                interactive: true,
                ..CreateArgs::default()
            })
            .await
            .unwrap();

        assert_eq!(message, "Add new view");
        let request = operation.generator().last_request().unwrap();
        assert_eq!(request.name.as_deref(), Some("Main"));
        assert_eq!(request.root_view, Some(true));
        assert_eq!(request.route, None);
        assert_eq!(operation.generator().call_count(), 1);
    }
}
