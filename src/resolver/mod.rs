//! Request resolution for the create command.
//!
//! This module turns command line arguments and interactive answers into a validated
//! [`CreationRequest`]. It consists of:
//!
//! - [`ResourceIndex`] - known components and theme libraries of the project's dependencies
//! - [`DependencyGraph`] - deduplicated traversal of the dependency tree (petgraph)
//! - [`RequestValidator`] - structural checks and identifier matching
//! - [`InteractiveResolver`] - the question flow for missing fields
//! - [`builder`] - provenance-tagged drafts and the final [`build_request`]
//!
//! # Resolution Flow
//!
//! ```text
//! CreateArgs
//!   │ RequestValidator::check_arguments     (no I/O)
//!   │ RequestValidator::check_project       (no dependency I/O)
//!   ▼
//! RequestDraft ── InteractiveResolver::resolve (interactive sessions only)
//!   │
//!   ▼
//! ResolvedAnswers ── RequestValidator::validate_answers (ResourceIndex lookups)
//!   │
//!   ▼
//! ValidatedAnswers ── build_request(.., &Project) ──► CreationRequest
//! ```
//!
//! Errors in earlier steps take precedence: a request that fails a structural check never
//! reaches the resource collections.

pub mod builder;
pub mod dependency_graph;
pub mod index;
pub mod interactive;
pub mod request;
pub mod validator;

pub use builder::{Field, RequestDraft, ResolvedAnswers, ValidatedAnswers, build_request};
pub use dependency_graph::DependencyGraph;
pub use index::ResourceIndex;
pub use interactive::{InteractiveResolver, ResolverState};
pub use request::{CreateArgs, CreationRequest};
pub use validator::RequestValidator;
