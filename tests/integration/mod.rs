//! Integration test suite for ui5-create
//!
//! End-to-end tests of the create pipeline and the `ui5-create` binary.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **pipeline**: the create operation over in-memory workspaces, prompters and generators
//! - **cli**: the binary against on-disk projects with installed libraries

mod cli;
mod pipeline;
