use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bumper options, as read from the YAML config file.
///
/// Unknown keys are ignored and both maps default to empty, so a config that
/// only sets `images` is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Component name -> image reference (e.g. `fluent-bit: fluent/fluent-bit`).
    pub images: BTreeMap<String, String>,

    /// Component name -> acceptable versions, oldest first. The last entry is
    /// the version the tree is synchronized to.
    pub versions: BTreeMap<String, Vec<String>>,
}

impl Options {
    pub fn image(&self, component: &str) -> Option<&str> {
        self.images.get(component).map(String::as_str)
    }

    /// Configured versions for `component`; empty when none are configured.
    pub fn versions_for(&self, component: &str) -> &[String] {
        self.versions
            .get(component)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
