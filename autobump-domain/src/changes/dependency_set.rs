use crate::change::{Change, ChangeError};
use crate::changes::manifest_selector;
use autobump_edit::apply_bump;
use autobump_types::{BumpSpec, MatchMode, Options};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

/// Moves every reference to an older acceptable version of a component onto the newest one.
///
/// The versions come from `Options::versions[component]`, oldest first. The image reference is
/// `Options::images[component]` when configured, otherwise the component name itself.
#[derive(Debug, Clone)]
pub struct DependencySetBump<'a> {
    root: Utf8PathBuf,
    component: String,
    options: &'a Options,
}

impl<'a> DependencySetBump<'a> {
    pub fn new(root: &Utf8Path, component: impl Into<String>, options: &'a Options) -> Self {
        Self {
            root: root.to_path_buf(),
            component: component.into(),
            options,
        }
    }

    fn image(&self) -> &str {
        self.options
            .image(&self.component)
            .unwrap_or(self.component.as_str())
    }

    /// One spec per superseded version, in configured order.
    ///
    /// Specs match whole version tokens, so `1.8.1` never rewrites inside `1.8.12`.
    fn plan(&self) -> Result<Vec<BumpSpec>, ChangeError> {
        let versions = self.options.versions_for(&self.component);
        for version in versions {
            if version.is_empty() || version.chars().any(char::is_whitespace) {
                return Err(ChangeError::execution(format!(
                    "invalid version {:?} configured for {}",
                    version, self.component
                )));
            }
        }

        let Some((target, older)) = versions.split_last() else {
            return Ok(vec![]);
        };

        let image = self.image();
        let new = format!("{image}:{target}");
        Ok(older
            .iter()
            .filter(|v| *v != target)
            .map(|v| {
                BumpSpec::new(format!("{image}:{v}"), new.clone(), manifest_selector())
                    .with_mode(MatchMode::Token)
            })
            .collect())
    }
}

impl Change for DependencySetBump<'_> {
    fn name(&self) -> &str {
        &self.component
    }

    fn execute(&self) -> Result<String, ChangeError> {
        let specs = self.plan()?;
        if specs.is_empty() {
            debug!(component = %self.component, "no superseded versions configured");
            return Ok(String::new());
        }

        let mut files_modified = 0;
        for spec in &specs {
            files_modified += apply_bump(&self.root, spec)?.files_modified();
        }
        debug!(component = %self.component, files_modified, "dependency set bump finished");

        if files_modified == 0 {
            return Ok(String::new());
        }
        Ok(format!("Bump {} to {}", self.component, specs[0].new))
    }
}
