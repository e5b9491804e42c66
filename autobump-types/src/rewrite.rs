use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Outcome of one file-tree rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteSummary {
    /// Regular files visited.
    pub files_scanned: u64,
    /// Files accepted by the selector (and therefore read).
    pub files_selected: u64,
    /// Files actually written, in traversal order.
    #[serde(default)]
    pub edits: Vec<FileEdit>,
}

impl RewriteSummary {
    pub fn files_modified(&self) -> usize {
        self.edits.len()
    }

    pub fn is_noop(&self) -> bool {
        self.edits.is_empty()
    }
}

/// A single rewritten file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEdit {
    /// Path relative to the rewrite root.
    pub path: Utf8PathBuf,
    pub replacements: u64,
    pub before_sha256: String,
    pub after_sha256: String,
}
