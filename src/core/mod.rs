//! Core types and error handling
//!
//! - [`error`] - [`CreateError`], [`ErrorContext`] and [`user_friendly_error`]
//! - [`artifact`] - [`ArtifactType`] and [`KnownIdentifier`]

pub mod artifact;
pub mod error;

pub use artifact::{ArtifactType, KnownIdentifier};
pub use error::{CreateError, ErrorContext, user_friendly_error};
