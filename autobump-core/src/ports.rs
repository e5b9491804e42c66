//! Port traits at the boundary with the changeset publisher.

use crate::describe::describe;
use autobump_domain::Change;
use autobump_types::{ChangeResult, PrMetadata, RunRecord};

/// Supplies the ordered changes of a run and formats their results as a PR.
pub trait PrHandler {
    fn changes(&self) -> Vec<Box<dyn Change + '_>>;

    fn describe(&self, results: &[ChangeResult]) -> PrMetadata {
        describe(results)
    }
}

/// Turns a successful run into a commit and pull request (or a stand-in for one).
pub trait Publisher {
    fn publish(&self, record: &RunRecord) -> anyhow::Result<()>;
}
