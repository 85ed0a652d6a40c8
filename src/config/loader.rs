use crate::config::schema::{FinderConfig, ValidationError};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the searched folder when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "csfinder.toml";

/// Where a config was read from, shown in front of every config error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    Inline,
    File(PathBuf),
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigOrigin::Inline => f.write_str("inline config"),
            ConfigOrigin::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{origin}: malformed config: {source}")]
    Malformed {
        origin: ConfigOrigin,
        #[source]
        source: toml_edit::de::Error,
    },

    #[error("{origin}: {source}")]
    Invalid {
        origin: ConfigOrigin,
        #[source]
        source: ValidationError,
    },
}

fn parse(input: &str, origin: ConfigOrigin) -> Result<FinderConfig, ConfigError> {
    let config: FinderConfig = match toml_edit::de::from_str(input) {
        Ok(config) => config,
        Err(source) => return Err(ConfigError::Malformed { origin, source }),
    };
    match config.validate() {
        Ok(()) => Ok(config.normalize()),
        Err(source) => Err(ConfigError::Invalid { origin, source }),
    }
}

/// Parse a config held in memory.
pub fn load_from_str(input: &str) -> Result<FinderConfig, ConfigError> {
    parse(input, ConfigOrigin::Inline)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<FinderConfig, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&contents, ConfigOrigin::File(path.to_path_buf()))
}

/// Resolve the effective config.
///
/// An explicit path must load. Otherwise `csfinder.toml` in `search_root` is
/// used when present, and the defaults when not.
pub fn discover(
    explicit: Option<&Path>,
    search_root: Option<&Path>,
) -> Result<FinderConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }

    match search_root.map(|root| root.join(CONFIG_FILE_NAME)) {
        Some(candidate) if candidate.is_file() => {
            tracing::debug!(path = %candidate.display(), "using config file");
            load_from_path(candidate)
        }
        _ => Ok(FinderConfig::default()),
    }
}
