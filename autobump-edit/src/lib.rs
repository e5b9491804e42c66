//! File-tree rewriter for autobump.
//!
//! Responsibilities:
//! - Walk a root directory in a stable order.
//! - Pick files with a [`Selector`].
//! - Replace every occurrence of a literal, writing only files whose contents change.
//! - Optionally respect version token boundaries ([`MatchMode::Token`]).

mod error;

pub use error::{FsAction, RewriteError, RewriteResult};

use autobump_types::{BumpSpec, FileEdit, MatchMode, RewriteSummary, Selector};
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use sha2::{Digest, Sha256};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// Apply one [`BumpSpec`] below `root`.
pub fn apply_bump(root: &Utf8Path, spec: &BumpSpec) -> RewriteResult<RewriteSummary> {
    rewrite_tree_with_mode(root, &spec.selector, &spec.old, &spec.new, spec.mode)
}

/// Replace every `old` with `new` in the files below `root` accepted by `selector`.
///
/// Stops at the first I/O failure. Files already written stay written.
pub fn rewrite_tree(
    root: &Utf8Path,
    selector: &Selector,
    old: &str,
    new: &str,
) -> RewriteResult<RewriteSummary> {
    rewrite_tree_with_mode(root, selector, old, new, MatchMode::Literal)
}

/// Like [`rewrite_tree`], recognising occurrences of `old` according to `mode`.
pub fn rewrite_tree_with_mode(
    root: &Utf8Path,
    selector: &Selector,
    old: &str,
    new: &str,
    mode: MatchMode,
) -> RewriteResult<RewriteSummary> {
    if old.is_empty() {
        return Err(RewriteError::EmptyPattern);
    }
    if !mode.find(new, old).is_empty() {
        warn!(old, new, ?mode, "replacement matches the search literal; rewrite is not idempotent");
    }

    let mut summary = RewriteSummary::default();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        summary.files_scanned += 1;

        let Some(abs) = Utf8Path::from_path(entry.path()) else {
            let lossy = Utf8PathBuf::from(entry.path().to_string_lossy().into_owned());
            if selector.matches(relative(root, &lossy)) {
                return Err(RewriteError::NonUtf8Path {
                    path: entry.path().to_path_buf(),
                });
            }
            continue;
        };

        let rel = relative(root, abs);
        if !selector.matches(rel) {
            trace!(path = %rel, "not selected");
            continue;
        }
        summary.files_selected += 1;

        if let Some(edit) = rewrite_file(abs, rel, old, new, mode)? {
            debug!(path = %edit.path, replacements = edit.replacements, "rewrote file");
            summary.edits.push(edit);
        }
    }

    Ok(summary)
}

fn relative<'a>(root: &Utf8Path, abs: &'a Utf8Path) -> &'a Utf8Path {
    abs.strip_prefix(root).unwrap_or(abs)
}

fn rewrite_file(
    abs: &Utf8Path,
    rel: &Utf8Path,
    old: &str,
    new: &str,
    mode: MatchMode,
) -> RewriteResult<Option<FileEdit>> {
    let contents =
        fs::read_to_string(abs).map_err(|e| RewriteError::fs(abs, FsAction::Read, e))?;

    let offsets = mode.find(&contents, old);
    if offsets.is_empty() {
        return Ok(None);
    }
    let replacements = offsets.len() as u64;

    let updated = replace_at(&contents, &offsets, old.len(), new);
    if updated == contents {
        return Ok(None);
    }

    write_preserving_permissions(abs, &updated)?;

    Ok(Some(FileEdit {
        path: rel.to_path_buf(),
        replacements,
        before_sha256: sha256_hex(contents.as_bytes()),
        after_sha256: sha256_hex(updated.as_bytes()),
    }))
}

/// Splice `new` over the `len`-byte matches starting at `offsets`.
fn replace_at(contents: &str, offsets: &[usize], len: usize, new: &str) -> String {
    let mut out = String::with_capacity(contents.len());
    let mut last = 0;
    for &at in offsets {
        out.push_str(&contents[last..at]);
        out.push_str(new);
        last = at + len;
    }
    out.push_str(&contents[last..]);
    out
}

fn write_preserving_permissions(abs: &Utf8Path, contents: &str) -> RewriteResult<()> {
    let permissions = fs::metadata(abs)
        .map_err(|e| RewriteError::fs(abs, FsAction::Stat, e))?
        .permissions();

    fs::write(abs, contents).map_err(|e| RewriteError::fs(abs, FsAction::Write, e))?;

    fs::set_permissions(abs, permissions)
        .map_err(|e| RewriteError::fs(abs, FsAction::SetPermissions, e))
}

fn walk_error(root: &Utf8Path, err: walkdir::Error) -> RewriteError {
    let path = walk_error_path(root, err.path());
    RewriteError::fs(path, FsAction::Walk, err.into())
}

/// The entry walkdir failed on, or `root` when it reports none.
fn walk_error_path(root: &Utf8Path, path: Option<&std::path::Path>) -> Utf8PathBuf {
    path.map_or_else(
        || root.to_path_buf(),
        |p| Utf8PathBuf::from(p.to_string_lossy().into_owned()),
    )
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
