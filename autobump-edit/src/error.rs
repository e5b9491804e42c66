//! Error types for autobump-edit.
//!
//! Every failure is fatal to the rewrite call that hit it. Files rewritten
//! before the failure stay rewritten.

use camino::Utf8PathBuf;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The file-system step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsAction {
    Walk,
    Read,
    Stat,
    Write,
    SetPermissions,
}

impl fmt::Display for FsAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FsAction::Walk => "walk",
            FsAction::Read => "read",
            FsAction::Stat => "stat",
            FsAction::Write => "write",
            FsAction::SetPermissions => "set permissions on",
        })
    }
}

#[derive(Debug, Error)]
pub enum RewriteError {
    /// A walk, read or write failed on `path`.
    #[error("failed to {action} {path}")]
    FileSystem {
        path: Utf8PathBuf,
        action: FsAction,
        #[source]
        source: std::io::Error,
    },

    /// A selected file has a name that is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },

    /// An empty search literal matches everywhere and is never idempotent.
    #[error("search literal must not be empty")]
    EmptyPattern,
}

impl RewriteError {
    pub(crate) fn fs(path: impl Into<Utf8PathBuf>, action: FsAction, source: std::io::Error) -> Self {
        RewriteError::FileSystem {
            path: path.into(),
            action,
            source,
        }
    }

    /// The offending path, when the error is tied to one.
    pub fn path(&self) -> Option<String> {
        match self {
            RewriteError::FileSystem { path, .. } => Some(path.to_string()),
            RewriteError::NonUtf8Path { path } => Some(path.display().to_string()),
            RewriteError::EmptyPattern => None,
        }
    }
}

/// Result type alias using RewriteError.
pub type RewriteResult<T> = Result<T, RewriteError>;
