//! Sequential, fail-fast executor over an ordered list of changes.

use autobump_domain::{Change, ChangeError};
use autobump_types::ChangeResult;
use tracing::{debug, info, warn};

/// Where a change set is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// About to execute the change at this index.
    Pending(usize),
    Succeeded,
    Failed,
}

impl EngineState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, EngineState::Pending(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChangeSetError {
    #[error("change #{index} ({name}) failed: {source}")]
    ChangeFailed {
        index: usize,
        name: String,
        #[source]
        source: ChangeError,
    },
}

impl ChangeSetError {
    /// Name of the change that stopped the run.
    pub fn change_name(&self) -> &str {
        match self {
            ChangeSetError::ChangeFailed { name, .. } => name,
        }
    }
}

/// An ordered sequence of changes. Construction order is execution order.
pub struct ChangeSet<'a> {
    changes: Vec<Box<dyn Change + 'a>>,
    state: EngineState,
}

impl<'a> ChangeSet<'a> {
    pub fn new(changes: Vec<Box<dyn Change + 'a>>) -> Self {
        Self {
            changes,
            state: EngineState::Pending(0),
        }
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Execute every change in order.
    ///
    /// The first error moves the set to [`EngineState::Failed`]; later changes do not run and the
    /// results gathered so far are dropped. Calling `run` again re-executes every change.
    pub fn run(&mut self) -> Result<Vec<ChangeResult>, ChangeSetError> {
        let mut results = Vec::with_capacity(self.changes.len());
        self.state = EngineState::Pending(0);

        while let EngineState::Pending(index) = self.state {
            let Some(change) = self.changes.get(index) else {
                self.state = EngineState::Succeeded;
                break;
            };

            let name = change.name().to_string();
            debug!(index, change = %name, "executing change");

            match change.execute() {
                Ok(message) => {
                    debug!(index, change = %name, message = %message, "change succeeded");
                    results.push(ChangeResult::new(index, name, message));
                    self.state = EngineState::Pending(index + 1);
                }
                Err(source) => {
                    warn!(index, change = %name, error = %source, "change failed; stopping");
                    self.state = EngineState::Failed;
                    return Err(ChangeSetError::ChangeFailed {
                        index,
                        name,
                        source,
                    });
                }
            }
        }

        info!(changes = results.len(), "change set succeeded");
        Ok(results)
    }
}

/// A named closure as a [`Change`].
pub struct FnChange<F> {
    name: String,
    f: F,
}

impl<F> FnChange<F>
where
    F: Fn() -> Result<String, ChangeError>,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Change for FnChange<F>
where
    F: Fn() -> Result<String, ChangeError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self) -> Result<String, ChangeError> {
        (self.f)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(name: &str, message: &'static str) -> Box<dyn Change> {
        Box::new(FnChange::new(name, move || Ok(message.to_string())))
    }

    #[test]
    fn empty_set_succeeds_without_results() {
        let mut set = ChangeSet::new(vec![]);
        assert_eq!(set.state(), EngineState::Pending(0));

        let results = set.run().expect("empty run");

        assert!(results.is_empty());
        assert_eq!(set.state(), EngineState::Succeeded);
        assert!(set.state().is_terminal());
    }

    #[test]
    fn results_keep_sequence_positions() {
        let mut set = ChangeSet::new(vec![ok("a", "first"), ok("b", ""), ok("c", "third")]);

        let results = set.run().expect("run");

        assert_eq!(
            results,
            vec![
                ChangeResult::new(0, "a", "first"),
                ChangeResult::new(1, "b", ""),
                ChangeResult::new(2, "c", "third"),
            ]
        );
    }

    #[test]
    fn failure_reports_index_and_name() {
        let mut set = ChangeSet::new(vec![
            ok("a", "first"),
            Box::new(FnChange::new("broken", || {
                Err(ChangeError::execution("bad input"))
            })),
        ]);

        let err = set.run().expect_err("second change fails");

        assert_eq!(set.state(), EngineState::Failed);
        assert_eq!(err.change_name(), "broken");
        assert_eq!(err.to_string(), "change #1 (broken) failed: change failed: bad input");
    }
}
