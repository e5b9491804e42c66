//! Shared DTOs for the autobump workspace.
//!
//! # Design constraints
//! - `Options` is loaded once and never mutated afterwards.
//! - `RunRecord` is serialized to disk by publishers; prefer adding optional
//!   fields over changing semantics.

pub mod bump;
pub mod change;
pub mod options;
pub mod rewrite;
pub mod run;

pub use bump::{BumpSpec, MatchMode, Selector};
pub use change::{ChangeResult, PrMetadata};
pub use options::Options;
pub use rewrite::{FileEdit, RewriteSummary};
pub use run::{RunRecord, ToolInfo};

/// Schema identifiers.
pub mod schema {
    pub const AUTOBUMP_RUN_V1: &str = "autobump.run.v1";
}
