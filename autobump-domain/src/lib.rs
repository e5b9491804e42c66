//! Domain logic: the mutation units a bump run is made of.
//!
//! This crate owns *what* gets bumped and the commit message describing it. It does not own *how*
//! files are rewritten; that's the `autobump-edit` crate. Ordering and failure handling across
//! changes belong to `autobump-core`.

mod change;
mod changes;

pub use change::{Change, ChangeError};
pub use changes::{
    BaseImageBump, DependencySetBump, FLUENT_BIT_COMPONENT, MANIFEST_PREFIX, builtin_changes,
};
