//! Global constants used throughout the ui5-create codebase.
//!
//! File names, default paths and glob patterns that several modules agree on are
//! defined here so they are discoverable in one place.

/// File name of the project descriptor that marks a project root.
pub const PROJECT_DESCRIPTOR: &str = "ui5.yaml";

/// File name of the npm package manifest listing dependencies.
pub const PACKAGE_JSON: &str = "package.json";

/// Directory npm installs dependencies into.
pub const NODE_MODULES: &str = "node_modules";

/// Web-app path used when a project does not configure one.
pub const DEFAULT_WEBAPP_PATH: &str = "webapp";

/// Application descriptor inside the web-app directory.
pub const APP_MANIFEST: &str = "manifest.json";

/// Source directory of libraries and theme libraries.
///
/// Readers fall back to the project directory when it does not exist.
pub const LIBRARY_SOURCE_DIR: &str = "src";

/// Virtual prefix under which dependency resources are exposed.
pub const VIRTUAL_RESOURCES_PREFIX: &str = "/resources/";

/// Broad glob used to probe whether a dependency contributes any resources.
pub const ALL_RESOURCES_GLOB: &str = "/resources/**/*";

/// Prefix that theme library names carry in front of the theme they provide.
pub const THEME_LIBRARY_PREFIX: &str = "themelib_";

/// Answer that cancels an interactive session.
pub const CANCEL_ANSWER: &str = ":q";
