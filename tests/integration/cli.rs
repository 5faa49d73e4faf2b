//! The `ui5-create` binary against on-disk projects.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use ui5_create::test_utils::ProjectFixture;

fn project() -> ProjectFixture {
    let mut fixture = ProjectFixture::application("my.app", "webapp").unwrap();
    fixture.add_library("sample-lib", "sample").unwrap();
    fixture.add_library("openui5-sap-m", "sap.m").unwrap();
    fixture.add_theme_library("fancy-theme", "themelib_sap_fancy_theme").unwrap();
    fixture
}

fn ui5_create(fixture_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("ui5-create").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--no-color")
        .arg("--project-dir")
        .arg(fixture_dir)
        .arg("create");
    cmd
}

#[test]
fn test_create_view_prints_status_line() {
    let fixture = project();

    ui5_create(fixture.path())
        .args(["view", "--name", "Main", "--controller", "--route", "--namespaces", "sap.m"])
        .assert()
        .success()
        .stdout("Add new view with corresponding controller and route to project\n");
}

#[test]
fn test_create_root_view() {
    let fixture = project();

    ui5_create(fixture.path())
        .args(["view", "--name", "App", "--controller=false", "--route=false", "--root"])
        .assert()
        .success()
        .stdout("Add new view\n");
}

#[test]
fn test_create_controller_with_modules() {
    let fixture = project();

    ui5_create(fixture.path())
        .args(["controller", "--name", "Detail", "--modules", "Sample,sap.m"])
        .assert()
        .success()
        .stdout("Add new controller\n");
}

#[test]
fn test_create_component_and_bootstrap() {
    let fixture = project();

    ui5_create(fixture.path())
        .arg("component")
        .assert()
        .success()
        .stdout("Add new Component to project\n");

    ui5_create(fixture.path())
        .args(["bootstrap", "--theme", "sap_fancy_theme"])
        .assert()
        .success()
        .stdout("Create bootstrap for project\n");
}

#[test]
fn test_project_dir_can_be_a_subdirectory() {
    let fixture = project();
    fixture.write("webapp/view/.keep", "").unwrap();

    Command::cargo_bin("ui5-create")
        .unwrap()
        .arg("--project-dir")
        .arg(fixture.path().join("webapp/view"))
        .args(["create", "component"])
        .assert()
        .success()
        .stdout("Add new Component to project\n");
}

#[test]
fn test_missing_type_fails() {
    let fixture = project();

    ui5_create(fixture.path())
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "Component needed. You can run this command without component in interactive mode",
        ));
}

#[test]
fn test_missing_name_fails() {
    let fixture = project();

    ui5_create(fixture.path())
        .arg("control")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Missing mandatory parameter 'name'. You can run this command without name in interactive mode",
        ));
}

#[test]
fn test_unknown_library_fails() {
    let fixture = project();

    ui5_create(fixture.path())
        .args(["view", "--name", "Main", "--namespaces", "sap.ui.table"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "No valid library/module provided. Use the add command to add the needed library.",
        ));
}

#[test]
fn test_unknown_theme_fails() {
    let fixture = project();

    ui5_create(fixture.path())
        .args(["bootstrap", "--theme", "sap_belize"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("sap_belize"));
}

#[test]
fn test_library_project_is_rejected() {
    let fixture = ProjectFixture::of_type("my.lib", "library").unwrap();

    ui5_create(fixture.path())
        .args(["view", "--name", "Main"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Create command is currently only supported for projects of type application",
        ));
}

#[test]
fn test_library_project_with_broken_manifest_is_rejected() {
    let fixture = ProjectFixture::of_type("my.lib", "library").unwrap();
    fixture.write("webapp/manifest.json", "{ not json").unwrap();

    ui5_create(fixture.path())
        .args(["view", "--name", "Main"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Create command is currently only supported for projects of type application",
        ));
}

#[test]
fn test_broken_manifest_does_not_block_creation() {
    let fixture = project();
    fixture.write("webapp/manifest.json", "{ not json").unwrap();

    ui5_create(fixture.path())
        .args(["view", "--name", "Main", "--root=false", "--route=false"])
        .assert()
        .success()
        .stdout("Add new view\n");
}

#[test]
fn test_missing_descriptor_fails() {
    let temp = TempDir::new().unwrap();

    ui5_create(temp.path())
        .arg("component")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ui5.yaml not found"));
}

#[test]
fn test_invalid_type_is_a_usage_error() {
    let fixture = project();

    ui5_create(fixture.path())
        .arg("widget")
        .assert()
        .failure()
        .stderr(predicate::str::contains("widget"));
}

#[test]
fn test_interactive_session_reads_stdin() {
    let fixture = project();

    ui5_create(fixture.path())
        .arg("-i")
        .write_stdin("component\n\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Add new Component to project\n"));
}

#[test]
fn test_interactive_session_cancelled_on_eof() {
    let fixture = project();

    ui5_create(fixture.path())
        .arg("-i")
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Interactive session cancelled"));
}
