use crate::ports::PrHandler;
use autobump_domain::{Change, builtin_changes};
use autobump_types::Options;
use camino::{Utf8Path, Utf8PathBuf};

/// The standard bump run: built-in changes bound to a repository root and loaded options.
#[derive(Debug, Clone)]
pub struct BumpHandler<'a> {
    root: Utf8PathBuf,
    options: &'a Options,
}

impl<'a> BumpHandler<'a> {
    pub fn new(root: &Utf8Path, options: &'a Options) -> Self {
        Self {
            root: root.to_path_buf(),
            options,
        }
    }
}

impl PrHandler for BumpHandler<'_> {
    fn changes(&self) -> Vec<Box<dyn Change + '_>> {
        builtin_changes(&self.root, self.options)
    }
}
