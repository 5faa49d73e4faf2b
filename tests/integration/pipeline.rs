//! Create pipeline scenarios over in-memory collaborators.

use std::path::PathBuf;
use ui5_create::core::{ArtifactType, CreateError, KnownIdentifier};
use ui5_create::create::CreateOperation;
use ui5_create::project::ProjectKind;
use ui5_create::prompt::Answer;
use ui5_create::resolver::CreateArgs;
use ui5_create::test_utils::{FakeWorkspace, ScriptedPrompter, StubGenerator, init_test_logging};

type Operation = CreateOperation<FakeWorkspace, ScriptedPrompter, StubGenerator>;

fn app() -> FakeWorkspace {
    FakeWorkspace::application("/project", "app")
        .with_library("fake-dependency", "sample")
        .with_library("sap-m", "sap.m")
        .with_theme_library("fancy-theme", "themelib_sap_fancy_theme")
}

fn operation(workspace: FakeWorkspace, generator: StubGenerator) -> Operation {
    init_test_logging(None);
    CreateOperation::new(workspace, ScriptedPrompter::default(), generator)
}

fn args(artifact_type: ArtifactType) -> CreateArgs {
    CreateArgs {
        artifact_type: Some(artifact_type),
        ..CreateArgs::default()
    }
}

fn create_error(err: &anyhow::Error) -> Option<&CreateError> {
    err.downcast_ref::<CreateError>()
}

#[tokio::test]
async fn test_root_view_without_controller_or_route() {
    let operation = operation(app(), StubGenerator::with_message("Add new view"));

    let message = operation
        .execute(CreateArgs {
            name: Some("test".to_string()),
            controller: Some(false),
            route: Some(false),
            root: Some(true),
            ..args(ArtifactType::View)
        })
        .await
        .unwrap();

    assert_eq!(message, "Add new view");
    let request = operation.generator().last_request().unwrap();
    assert_eq!(request.artifact_type, ArtifactType::View);
    assert_eq!(request.name.as_deref(), Some("test"));
    assert_eq!(request.controller, Some(false));
    assert_eq!(request.route, Some(false));
    assert_eq!(request.root_view, Some(true));
    assert!(request.namespace_list.is_empty());
    assert_eq!(request.save_path, PathBuf::from("/project/app"));
    assert_eq!(operation.generator().last_name().as_deref(), Some("test"));
    assert_eq!(operation.generator().call_count(), 1);
}

#[tokio::test]
async fn test_view_namespaces_are_matched_case_insensitively() {
    let operation = operation(
        app(),
        StubGenerator::with_message("Add new view with corresponding controller"),
    );

    let message = operation
        .execute(CreateArgs {
            name: Some("test".to_string()),
            controller: Some(true),
            namespaces: Some(vec!["Sample".to_string(), "unknown".to_string()]),
            ..args(ArtifactType::View)
        })
        .await
        .unwrap();

    assert_eq!(message, "Add new view with corresponding controller");
    let request = operation.generator().last_request().unwrap();
    assert_eq!(request.namespace_list, vec![KnownIdentifier::new("sample")]);
}

#[tokio::test]
async fn test_matches_keep_index_order() {
    let operation = operation(app(), StubGenerator::with_message("Add new view"));

    let resolved = operation
        .resolve(CreateArgs {
            name: Some("test".to_string()),
            namespaces: Some(vec!["SAP.M".to_string(), "sample".to_string()]),
            ..args(ArtifactType::View)
        })
        .await
        .unwrap();

    assert_eq!(
        resolved.request.namespace_list,
        vec![KnownIdentifier::new("sample"), KnownIdentifier::new("sap.m")]
    );
}

#[tokio::test]
async fn test_unknown_namespaces_fail_without_dispatch() {
    let operation = operation(app(), StubGenerator::with_message("Add new view"));

    let err = operation
        .execute(CreateArgs {
            name: Some("test".to_string()),
            namespaces: Some(vec!["sap.ui.core".to_string()]),
            ..args(ArtifactType::View)
        })
        .await
        .unwrap_err();

    assert_eq!(create_error(&err), Some(&CreateError::NoValidIdentifier));
    assert_eq!(
        err.to_string(),
        "No valid library/module provided. Use the add command to add the needed library."
    );
    assert_eq!(operation.generator().call_count(), 0);
}

#[tokio::test]
async fn test_view_with_unknown_modules_fails_without_dispatch() {
    let operation = operation(app(), StubGenerator::with_message("Add new view"));

    let err = operation
        .execute(CreateArgs {
            name: Some("test".to_string()),
            controller: Some(true),
            route: Some(false),
            modules: Some(vec!["xy".to_string()]),
            ..args(ArtifactType::View)
        })
        .await
        .unwrap_err();

    assert_eq!(create_error(&err), Some(&CreateError::NoValidIdentifier));
    assert_eq!(operation.generator().call_count(), 0);
}

#[tokio::test]
async fn test_view_modules_are_resolved() {
    let operation = operation(app(), StubGenerator::with_message("Add new view"));

    let resolved = operation
        .resolve(CreateArgs {
            name: Some("test".to_string()),
            modules: Some(vec!["Sample".to_string()]),
            ..args(ArtifactType::View)
        })
        .await
        .unwrap();

    assert_eq!(resolved.request.module_list, vec![KnownIdentifier::new("sample")]);
    assert!(resolved.request.namespace_list.is_empty());
}

#[tokio::test]
async fn test_controller_modules_are_resolved() {
    let operation = operation(app(), StubGenerator::with_message("Add new controller"));

    let message = operation
        .execute(CreateArgs {
            name: Some("Detail".to_string()),
            modules: Some(vec!["sap.m".to_string()]),
            ..args(ArtifactType::Controller)
        })
        .await
        .unwrap();

    assert_eq!(message, "Add new controller");
    let request = operation.generator().last_request().unwrap();
    assert_eq!(request.module_list, vec![KnownIdentifier::new("sap.m")]);
    assert!(request.namespace_list.is_empty());
}

#[tokio::test]
async fn test_control_with_unknown_module_fails() {
    let operation = operation(app(), StubGenerator::with_message("Add new control"));

    let err = operation
        .execute(CreateArgs {
            name: Some("Fancy".to_string()),
            modules: Some(vec!["missing.lib".to_string()]),
            ..args(ArtifactType::Control)
        })
        .await
        .unwrap_err();

    assert_eq!(create_error(&err), Some(&CreateError::NoValidIdentifier));
    assert_eq!(operation.generator().call_count(), 0);
}

#[tokio::test]
async fn test_component_needs_no_name() {
    let operation = operation(app(), StubGenerator::with_message("Add new Component to project"));

    let message = operation.execute(args(ArtifactType::Component)).await.unwrap();

    assert_eq!(message, "Add new Component to project");
    assert_eq!(operation.generator().last_name(), None);
}

#[tokio::test]
async fn test_bootstrap_theme_resolves_against_theme_libraries() {
    let operation = operation(app(), StubGenerator::with_message("Create bootstrap for project"));

    let resolved = operation
        .resolve(CreateArgs {
            theme: Some("SAP_Fancy_Theme".to_string()),
            ..args(ArtifactType::Bootstrap)
        })
        .await
        .unwrap();

    assert_eq!(resolved.request.theme.as_deref(), Some("sap_fancy_theme"));
}

#[tokio::test]
async fn test_named_bootstrap_with_theme() {
    let operation = operation(app(), StubGenerator::with_message("Create bootstrap for project"));

    let message = operation
        .execute(CreateArgs {
            name: Some("test".to_string()),
            theme: Some("sap_fancy_theme".to_string()),
            ..args(ArtifactType::Bootstrap)
        })
        .await
        .unwrap();

    assert_eq!(message, "Create bootstrap for project");
    let request = operation.generator().last_request().unwrap();
    assert_eq!(request.artifact_type, ArtifactType::Bootstrap);
    assert_eq!(request.theme.as_deref(), Some("sap_fancy_theme"));
    assert_eq!(operation.generator().last_name().as_deref(), Some("test"));
}

#[tokio::test]
async fn test_bootstrap_with_unknown_theme_fails() {
    let operation = operation(app(), StubGenerator::with_message("Create bootstrap for project"));

    let err = operation
        .execute(CreateArgs {
            theme: Some("sap_belize".to_string()),
            ..args(ArtifactType::Bootstrap)
        })
        .await
        .unwrap_err();

    assert!(matches!(create_error(&err), Some(CreateError::UnknownTheme { .. })));
    assert_eq!(operation.generator().call_count(), 0);
}

#[tokio::test]
async fn test_missing_type_fails_before_loading_dependencies() {
    let workspace = app();
    let operation = operation(workspace.clone(), StubGenerator::with_message("unused"));

    let err = operation.execute(CreateArgs::default()).await.unwrap_err();

    assert_eq!(create_error(&err), Some(&CreateError::MissingComponent));
    assert_eq!(
        err.to_string(),
        "Component needed. You can run this command without component in interactive mode"
    );
    assert_eq!(workspace.collection_calls(), 0);
    assert_eq!(operation.generator().call_count(), 0);
}

#[tokio::test]
async fn test_missing_name_fails_before_loading_dependencies() {
    let workspace = app();
    let operation = operation(workspace.clone(), StubGenerator::with_message("unused"));

    let err = operation.execute(args(ArtifactType::View)).await.unwrap_err();

    assert_eq!(create_error(&err), Some(&CreateError::MissingName));
    assert_eq!(workspace.collection_calls(), 0);
    assert_eq!(operation.generator().call_count(), 0);
}

#[tokio::test]
async fn test_empty_name_counts_as_missing() {
    let operation = operation(app(), StubGenerator::with_message("unused"));

    let err = operation
        .execute(CreateArgs {
            name: Some(String::new()),
            ..args(ArtifactType::Controller)
        })
        .await
        .unwrap_err();

    assert_eq!(create_error(&err), Some(&CreateError::MissingName));
}

#[tokio::test]
async fn test_library_project_is_rejected() {
    let workspace = app().with_kind(ProjectKind::Library);
    let operation = operation(workspace.clone(), StubGenerator::with_message("unused"));

    let err = operation
        .execute(CreateArgs {
            name: Some("test".to_string()),
            ..args(ArtifactType::View)
        })
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Create command is currently only supported for projects of type application"
    );
    assert_eq!(workspace.collection_calls(), 0);
    assert_eq!(operation.generator().call_count(), 0);
}

#[tokio::test]
async fn test_generator_without_message_is_internal_error() {
    let operation = operation(
        app(),
        StubGenerator::returning(ui5_create::generator::GenerationResult::default()),
    );

    let err = operation.execute(args(ArtifactType::Component)).await.unwrap_err();

    assert_eq!(create_error(&err), Some(&CreateError::Generation));
    assert_eq!(err.to_string(), "Internal error while adding component");
    assert_eq!(operation.generator().call_count(), 1);
}

#[tokio::test]
async fn test_failing_generator_is_internal_error() {
    let operation = operation(app(), StubGenerator::failing("disk full"));

    let err = operation.execute(args(ArtifactType::Component)).await.unwrap_err();

    assert_eq!(create_error(&err), Some(&CreateError::Generation));
}

#[tokio::test]
async fn test_interactive_fills_only_missing_fields() {
    init_test_logging(None);
    let operation = CreateOperation::new(
        app(),
        ScriptedPrompter::new([
            Answer::Bool(true),
            Answer::Choices(vec!["sap.m".to_string()]),
        ]),
        StubGenerator::with_message("Add new view with corresponding controller"),
    );

    operation
        .execute(CreateArgs {
            name: Some("Main".to_string()),
            root: Some(false),
            route: Some(false),
            interactive: true,
            ..args(ArtifactType::View)
        })
        .await
        .unwrap();

    assert_eq!(operation.prompter().asked(), vec!["controller", "namespaces"]);
    let request = operation.generator().last_request().unwrap();
    assert_eq!(request.controller, Some(true));
    assert_eq!(request.namespace_list, vec![KnownIdentifier::new("sap.m")]);
}

#[tokio::test]
async fn test_existing_root_view_asks_for_route_only() {
    init_test_logging(None);
    let operation = CreateOperation::new(
        app().with_entry_point("my.app.view.App"),
        ScriptedPrompter::new([Answer::Bool(true)]),
        StubGenerator::with_message("Add new view and route to project"),
    );

    operation
        .execute(CreateArgs {
            name: Some("Detail".to_string()),
            controller: Some(false),
            namespaces: Some(Vec::new()),
            interactive: true,
            ..args(ArtifactType::View)
        })
        .await
        .unwrap();

    assert_eq!(operation.prompter().asked(), vec!["route"]);
    let request = operation.generator().last_request().unwrap();
    assert_eq!(request.route, Some(true));
    assert_eq!(request.root_view, None);
}

#[tokio::test]
async fn test_cancelled_session_does_not_dispatch() {
    let operation = operation(app(), StubGenerator::with_message("unused"));

    let err = operation
        .execute(CreateArgs {
            interactive: true,
            ..CreateArgs::default()
        })
        .await
        .unwrap_err();

    assert_eq!(create_error(&err), Some(&CreateError::PromptCancelled));
    assert_eq!(operation.prompter().asked(), vec!["type"]);
    assert_eq!(operation.generator().call_count(), 0);
}
