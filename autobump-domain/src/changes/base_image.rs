use crate::change::{Change, ChangeError};
use crate::changes::manifest_selector;
use autobump_edit::apply_bump;
use autobump_types::BumpSpec;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

/// Swaps one pinned base image for another in every build manifest.
#[derive(Debug, Clone)]
pub struct BaseImageBump {
    name: String,
    label: String,
    root: Utf8PathBuf,
    spec: BumpSpec,
}

impl BaseImageBump {
    pub const DEBIAN_OLD: &'static str = "debian:testing-20211201-slim";
    pub const DEBIAN_NEW: &'static str = "debian:testing-20220101-slim";

    /// `label` names the image in messages, e.g. "Debian base image".
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        root: &Utf8Path,
        spec: BumpSpec,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            root: root.to_path_buf(),
            spec,
        }
    }

    pub fn debian(root: &Utf8Path) -> Self {
        Self::new(
            "debian-base-image",
            "Debian base image",
            root,
            BumpSpec::new(Self::DEBIAN_OLD, Self::DEBIAN_NEW, manifest_selector()),
        )
    }

    pub fn spec(&self) -> &BumpSpec {
        &self.spec
    }
}

impl Change for BaseImageBump {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self) -> Result<String, ChangeError> {
        let summary = apply_bump(&self.root, &self.spec)?;
        debug!(
            change = %self.name,
            files_modified = summary.files_modified(),
            files_selected = summary.files_selected,
            "base image bump finished"
        );

        if summary.is_noop() {
            return Ok(format!(
                "No changes: {} already at {}",
                self.label, self.spec.new
            ));
        }
        Ok(format!("Bump {} {}", self.label, self.spec.new))
    }
}
