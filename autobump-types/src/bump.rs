use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// File-selection predicate for a rewrite.
///
/// Evaluated against the path relative to the rewrite root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Selector {
    /// Base name starts with the given prefix (`Dockerfile` matches `Dockerfile.a`).
    BaseNamePrefix(String),
    /// Base name equals the given string.
    BaseNameEquals(String),
    /// Relative path starts with the given path, component-wise.
    PathPrefix(Utf8PathBuf),
}

impl Selector {
    pub fn base_name_prefix(prefix: impl Into<String>) -> Self {
        Selector::BaseNamePrefix(prefix.into())
    }

    pub fn matches(&self, rel: &Utf8Path) -> bool {
        match self {
            Selector::BaseNamePrefix(prefix) => rel
                .file_name()
                .is_some_and(|name| name.starts_with(prefix.as_str())),
            Selector::BaseNameEquals(expected) => rel.file_name() == Some(expected.as_str()),
            Selector::PathPrefix(prefix) => rel.starts_with(prefix),
        }
    }
}

/// How occurrences of `old` are recognised in file contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Every occurrence of the literal.
    #[default]
    Literal,
    /// Only occurrences not followed by a version character, so `img:1.8.1`
    /// does not match inside `img:1.8.12`.
    Token,
}

impl MatchMode {
    /// Characters that continue a version or tag token.
    pub fn continues_token(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '.' || c == '_'
    }

    /// Byte offsets of the occurrences of `old` in `haystack` under this mode.
    pub fn find(self, haystack: &str, old: &str) -> Vec<usize> {
        haystack
            .match_indices(old)
            .map(|(at, _)| at)
            .filter(|&at| match self {
                MatchMode::Literal => true,
                MatchMode::Token => !haystack[at + old.len()..]
                    .chars()
                    .next()
                    .is_some_and(Self::continues_token),
            })
            .collect()
    }
}

/// One literal substitution: every matching `old` in a selected file becomes `new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BumpSpec {
    pub old: String,
    pub new: String,
    pub selector: Selector,
    #[serde(default)]
    pub mode: MatchMode,
}

impl BumpSpec {
    pub fn new(old: impl Into<String>, new: impl Into<String>, selector: Selector) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
            selector,
            mode: MatchMode::Literal,
        }
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }
}
