use autobump_edit::RewriteError;
use thiserror::Error;

/// A named, self-contained mutation of the working tree.
///
/// `execute` returns the commit message for what it did. Doing nothing is a
/// success: return an empty or neutral message, never an error.
pub trait Change {
    fn name(&self) -> &str;

    fn execute(&self) -> Result<String, ChangeError>;
}

#[derive(Debug, Error)]
pub enum ChangeError {
    /// The tree rewrite failed while reading or writing a file.
    #[error("file system error: {0}")]
    FileSystem(#[from] RewriteError),

    /// The change's own inputs were unusable.
    #[error("change failed: {message}")]
    Execution { message: String },
}

impl ChangeError {
    pub fn execution(message: impl Into<String>) -> Self {
        ChangeError::Execution {
            message: message.into(),
        }
    }
}
