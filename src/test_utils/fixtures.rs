//! On-disk project fixtures
//!
//! [`ProjectFixture`] lays out a project the way npm leaves it after installing
//! dependencies: a root `ui5.yaml` and `package.json`, plus one directory per dependency
//! under `node_modules`.

use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary project directory.
///
/// The directory is removed when the fixture is dropped.
#[derive(Debug)]
pub struct ProjectFixture {
    temp_dir: TempDir,
    dependencies: Vec<String>,
}

impl ProjectFixture {
    /// An application project named `name` with its web-app in `webapp`.
    pub fn application(name: &str, webapp: &str) -> Result<Self> {
        let fixture = Self {
            temp_dir: TempDir::new().context("Failed to create temp directory")?,
            dependencies: Vec::new(),
        };
        fixture.write(
            "ui5.yaml",
            &format!(
                "specVersion: \"3.0\"\ntype: application\nmetadata:\n  name: {name}\nresources:\n  configuration:\n    paths:\n      webapp: {webapp}\n"
            ),
        )?;
        fixture.write_package_json(name)?;
        Ok(fixture)
    }

    /// A project of any other type.
    pub fn of_type(name: &str, project_type: &str) -> Result<Self> {
        let fixture = Self {
            temp_dir: TempDir::new().context("Failed to create temp directory")?,
            dependencies: Vec::new(),
        };
        fixture.write("ui5.yaml", &format!("type: {project_type}\nmetadata:\n  name: {name}\n"))?;
        fixture.write_package_json(name)?;
        Ok(fixture)
    }

    /// Project directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Install a library providing `namespace` as package `package`.
    pub fn add_library(&mut self, package: &str, namespace: &str) -> Result<()> {
        let base = format!("node_modules/{package}");
        self.write(
            &format!("{base}/ui5.yaml"),
            &format!("specVersion: \"3.0\"\ntype: library\nmetadata:\n  name: {package}\n  namespace: {namespace}\n"),
        )?;
        self.write(
            &format!("{base}/package.json"),
            &json!({ "name": package, "version": "1.0.0" }).to_string(),
        )?;
        self.write(&format!("{base}/src/{}/library.js", namespace.replace('.', "/")), "")?;
        self.add_dependency(package)
    }

    /// Install a theme library named `library_name` as package `package`.
    pub fn add_theme_library(&mut self, package: &str, library_name: &str) -> Result<()> {
        let base = format!("node_modules/{package}");
        self.write(
            &format!("{base}/ui5.yaml"),
            &format!("specVersion: \"3.0\"\ntype: theme-library\nmetadata:\n  name: {library_name}\n"),
        )?;
        self.write(
            &format!("{base}/package.json"),
            &json!({ "name": package, "version": "1.0.0" }).to_string(),
        )?;
        self.write(&format!("{base}/src/themes/library.source.less"), "")?;
        self.add_dependency(package)
    }

    /// Configure a root view in the web-app's `manifest.json`.
    pub fn set_root_view(&self, webapp: &str, view: &str) -> Result<()> {
        let manifest = json!({
            "sap.app": { "id": "my.app" },
            "sap.ui5": { "rootView": { "viewName": view, "type": "XML" } }
        });
        self.write(&format!("{webapp}/manifest.json"), &manifest.to_string())
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> Result<()> {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
    }

    fn add_dependency(&mut self, package: &str) -> Result<()> {
        self.dependencies.push(package.to_string());
        let name = self.package_name()?;
        self.write_package_json(&name)
    }

    fn package_name(&self) -> Result<String> {
        let content = fs::read_to_string(self.path().join("package.json"))?;
        let package: serde_json::Value = serde_json::from_str(&content)?;
        Ok(package["name"].as_str().unwrap_or_default().to_string())
    }

    fn write_package_json(&self, name: &str) -> Result<()> {
        let dependencies: serde_json::Map<String, serde_json::Value> =
            self.dependencies.iter().map(|d| (d.clone(), json!("^1.0.0"))).collect();
        let package = json!({
            "name": name,
            "version": "1.0.0",
            "dependencies": dependencies,
        });
        self.write("package.json", &serde_json::to_string_pretty(&package)?)
    }
}
