//! Default publisher implementations.

use crate::ports::Publisher;
use anyhow::Context;
use autobump_types::RunRecord;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use std::cell::RefCell;
use tracing::debug;

pub const PR_TITLE_FILE: &str = "pr-title.txt";
pub const PR_BODY_FILE: &str = "pr-body.md";
pub const RUN_RECORD_FILE: &str = "run.json";
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Ignores everything in the output directory, including itself.
const GITIGNORE_CONTENTS: &str = "*\n";

/// Writes the PR title, body and run record into `out_dir` for a downstream
/// job to commit and open the pull request.
///
/// The directory also gets a `.gitignore` matching everything.
#[derive(Debug, Clone)]
pub struct FsPublisher {
    out_dir: Utf8PathBuf,
}

impl FsPublisher {
    pub fn new(out_dir: Utf8PathBuf) -> Self {
        Self { out_dir }
    }

    pub fn out_dir(&self) -> &Utf8Path {
        &self.out_dir
    }
}

impl Publisher for FsPublisher {
    fn publish(&self, record: &RunRecord) -> anyhow::Result<()> {
        fs::create_dir_all(&self.out_dir).with_context(|| format!("create {}", self.out_dir))?;

        let ignore = self.out_dir.join(GITIGNORE_FILE);
        fs::write(&ignore, GITIGNORE_CONTENTS).with_context(|| format!("write {}", ignore))?;

        let title = self.out_dir.join(PR_TITLE_FILE);
        fs::write(&title, format!("{}\n", record.pr.title))
            .with_context(|| format!("write {}", title))?;

        let body = self.out_dir.join(PR_BODY_FILE);
        fs::write(&body, &record.pr.body).with_context(|| format!("write {}", body))?;

        let run = self.out_dir.join(RUN_RECORD_FILE);
        let json = serde_json::to_string_pretty(record).context("serialize run record")?;
        fs::write(&run, json).with_context(|| format!("write {}", run))?;

        debug!(out_dir = %self.out_dir, "wrote publish artifacts");
        Ok(())
    }
}

/// Keeps published records in memory, for embedding and tests.
#[derive(Debug, Default)]
pub struct InMemoryPublisher {
    published: RefCell<Vec<RunRecord>>,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<RunRecord> {
        self.published.borrow().clone()
    }
}

impl Publisher for InMemoryPublisher {
    fn publish(&self, record: &RunRecord) -> anyhow::Result<()> {
        self.published.borrow_mut().push(record.clone());
        Ok(())
    }
}
