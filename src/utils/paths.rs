//! Path utilities for normalization and project root discovery.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::constants::PROJECT_DESCRIPTOR;
use crate::core::CreateError;

/// Normalizes a path by resolving `.` and `..` components.
///
/// Resolution is purely logical: symbolic links are not followed and the path does not
/// need to exist. Absolute paths stay absolute, relative paths stay relative.
///
/// # Examples
///
/// ```rust,no_run
/// use ui5_create::utils::normalize_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(normalize_path(Path::new("/foo/./bar/../baz")), PathBuf::from("/foo/baz"));
/// ```
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            std::path::Component::CurDir => {} // Skip .
            std::path::Component::ParentDir => {
                components.pop(); // Remove previous component for ..
            }
            c => components.push(c),
        }
    }

    components.iter().collect()
}

/// Resolves `path` against `base` into a normalized absolute path.
///
/// Absolute inputs are only normalized. A relative `base` is first made absolute using the
/// current working directory.
pub fn resolve_absolute(base: &Path, path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else if base.is_absolute() {
        base.join(path)
    } else {
        std::env::current_dir()?.join(base).join(path)
    };

    Ok(normalize_path(&joined))
}

/// Finds the project root by searching for `ui5.yaml` in the directory hierarchy.
///
/// Starts at `start` and walks up to the filesystem root, returning the first directory
/// that contains a descriptor. The closest descriptor wins, so nested projects resolve to
/// themselves.
///
/// # Errors
///
/// Returns [`CreateError::ProjectDescriptorNotFound`] when no directory on the way up
/// contains a `ui5.yaml`.
pub fn find_project_root(start: &Path) -> Result<PathBuf> {
    let mut current = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());

    loop {
        if current.join(PROJECT_DESCRIPTOR).is_file() {
            return Ok(current);
        }

        if !current.pop() {
            return Err(CreateError::ProjectDescriptorNotFound {
                path: start.display().to_string(),
            }
            .into());
        }
    }
}
