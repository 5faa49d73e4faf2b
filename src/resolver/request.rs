//! Request values flowing through the create pipeline.
//!
//! [`CreateArgs`] is what the caller supplied, [`CreationRequest`] is what the generator
//! receives. Everything in between lives in the builder.

use serde::Serialize;
use std::path::PathBuf;

use crate::core::{ArtifactType, KnownIdentifier};

/// Arguments of one create invocation, as supplied on the command line.
///
/// `None` means "not supplied"; lists that were supplied but empty stay `Some(vec![])`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateArgs {
    /// Positional artifact type
    pub artifact_type: Option<ArtifactType>,
    /// `--name`
    pub name: Option<String>,
    /// `--controller`
    pub controller: Option<bool>,
    /// `--route`
    pub route: Option<bool>,
    /// `--root`, becomes `rootView`
    pub root: Option<bool>,
    /// `--theme`
    pub theme: Option<String>,
    /// `--namespaces`
    pub namespaces: Option<Vec<String>>,
    /// `--modules`
    pub modules: Option<Vec<String>>,
    /// `--interactive`, `-i`
    pub interactive: bool,
}

/// The fully resolved description of the artifact to generate.
///
/// Every field is always present in the serialized form. Fields that were neither supplied
/// nor asked for serialize as `null`.
///
/// ```json
/// {
///   "type": "view",
///   "name": "test",
///   "controller": false,
///   "rootView": true,
///   "route": false,
///   "theme": null,
///   "namespaceList": [],
///   "moduleList": [],
///   "savePath": "/home/me/my-app/webapp"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationRequest {
    /// Artifact to create
    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,
    /// Artifact name; always set for views, controllers and controls
    pub name: Option<String>,
    /// Create a controller together with the view
    pub controller: Option<bool>,
    /// Register the view as the application's root view
    pub root_view: Option<bool>,
    /// Add a route for the view
    pub route: Option<bool>,
    /// Theme of the bootstrap
    pub theme: Option<String>,
    /// Libraries the view uses, in index order
    pub namespace_list: Vec<KnownIdentifier>,
    /// Modules the controller or control uses, in index order
    pub module_list: Vec<KnownIdentifier>,
    /// Absolute web-app directory of the project
    pub save_path: PathBuf,
}
