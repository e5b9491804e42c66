use crate::change::Change;
use autobump_types::{Options, Selector};
use camino::Utf8Path;

mod base_image;
mod dependency_set;

pub use base_image::BaseImageBump;
pub use dependency_set::DependencySetBump;

/// Build manifests are files whose base name starts with this.
pub const MANIFEST_PREFIX: &str = "Dockerfile";

pub const FLUENT_BIT_COMPONENT: &str = "fluent-bit";

pub(crate) fn manifest_selector() -> Selector {
    Selector::base_name_prefix(MANIFEST_PREFIX)
}

/// The changes of a bump run, in execution order.
pub fn builtin_changes<'a>(root: &Utf8Path, options: &'a Options) -> Vec<Box<dyn Change + 'a>> {
    vec![
        Box::new(BaseImageBump::debian(root)),
        Box::new(DependencySetBump::new(root, FLUENT_BIT_COMPONENT, options)),
    ]
}
