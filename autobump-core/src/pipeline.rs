//! The full bump run: execute the change set, describe it, publish once.

use crate::engine::{ChangeSet, ChangeSetError};
use crate::ports::{PrHandler, Publisher};
use autobump_types::{RunRecord, ToolInfo};
use chrono::Utc;
use tracing::{debug, info};

/// Error type for pipeline results.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error(transparent)]
    ChangeSet(#[from] ChangeSetError),
    #[error("publish failed: {0:#}")]
    Publish(anyhow::Error),
}

impl ToolError {
    /// Short name of the step that failed, for the fatal log line.
    pub fn step(&self) -> &str {
        match self {
            ToolError::ChangeSet(err) => err.change_name(),
            ToolError::Publish(_) => "publish",
        }
    }
}

/// Run the handler's changes and hand the outcome to `publisher`.
///
/// A failed change set never reaches the publisher.
pub fn run_pipeline(
    handler: &dyn PrHandler,
    publisher: &dyn Publisher,
    tool: ToolInfo,
) -> Result<RunRecord, ToolError> {
    let mut record = RunRecord::new(tool, Utc::now());

    let mut set = ChangeSet::new(handler.changes());
    debug!(changes = set.len(), "running change set");
    let results = set.run()?;

    record.pr = handler.describe(&results);
    record.results = results;
    record.ended_at = Some(Utc::now());

    publisher.publish(&record).map_err(ToolError::Publish)?;
    info!(title = %record.pr.title, "published change set");

    Ok(record)
}
