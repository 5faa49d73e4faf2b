//! Cross-cutting utilities.

pub mod paths;

pub use paths::{find_project_root, normalize_path, resolve_absolute};
