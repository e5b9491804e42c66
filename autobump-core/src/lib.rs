//! Embeddable core library for autobump.
//!
//! Provides a clap-free entry point suitable for linking into a CI job runner
//! or any other host process that owns version-control submission.
//!
//! # Port traits
//!
//! The boundary with the host is expressed in [`ports`]:
//! - [`PrHandler`](ports::PrHandler): supplies the ordered changes and describes their results
//! - [`Publisher`](ports::Publisher): turns a successful run into a commit/PR
//!
//! The [`adapters`] module provides filesystem-backed and in-memory publishers.
//!
//! # Entry points
//!
//! - [`ChangeSet::run`](engine::ChangeSet::run): execute changes in order, fail-fast
//! - [`describe`](describe::describe): PR title and body from the results
//! - [`run_pipeline`](pipeline::run_pipeline): both of the above, then publish once

pub mod adapters;
pub mod describe;
pub mod engine;
pub mod handler;
pub mod pipeline;
pub mod ports;

pub use describe::{PR_TITLE, describe};
pub use engine::{ChangeSet, ChangeSetError, EngineState, FnChange};
pub use handler::BumpHandler;
pub use pipeline::{ToolError, run_pipeline};
pub use ports::{PrHandler, Publisher};

// Re-export the domain surface so embedders don't need autobump-domain directly.
pub use autobump_domain::{Change, ChangeError};
