use serde::{Deserialize, Serialize};

/// The message produced by one successful change, with its position in the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeResult {
    pub index: usize,
    pub name: String,
    /// Commit message. May be empty for changes that had nothing to do.
    pub message: String,
}

impl ChangeResult {
    pub fn new(index: usize, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Pull request title and body handed to the publisher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrMetadata {
    pub title: String,
    pub body: String,
}
