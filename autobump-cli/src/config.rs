//! Configuration file loading for autobump.
//!
//! The config file is YAML with two maps, `images` and `versions`. Unknown
//! keys are ignored so the same file can carry settings for other tools.

use autobump_types::Options;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file is missing or unreadable.
    #[error("read config file {path}")]
    Load {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for `Options`.
    #[error("parse config file {path}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Load and parse the config file at `path`.
pub fn load_options(path: &Utf8Path) -> Result<Options, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let options = parse_options(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        config = %path,
        images = options.images.len(),
        versions = options.versions.len(),
        "loaded options"
    );
    Ok(options)
}

/// Parse options from YAML text. An empty document yields the defaults.
pub fn parse_options(contents: &str) -> Result<Options, serde_yaml::Error> {
    if contents.trim().is_empty() {
        return Ok(Options::default());
    }
    serde_yaml::from_str(contents)
}
