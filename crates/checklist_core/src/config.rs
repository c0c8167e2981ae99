//! Runtime configuration for front ends.
//!
//! # Responsibility
//! - Resolve data directory, log directory and log level from optional
//!   overrides and defaults.
//! - Create the data directory before the store is opened.
//!
//! # Invariants
//! - Resolved directories are absolute.
//! - The log level is one of `trace|debug|info|warn|error`.

use crate::db::db_path_in;
use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_DATA_DIR_NAME: &str = ".checklist";
const LOG_DIR_NAME: &str = "logs";

/// Caller-supplied overrides; `None` means use the default.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: &'static str,
}

#[derive(Debug)]
pub enum ConfigError {
    NoHomeDir,
    CurrentDir(std::io::Error),
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoHomeDir => write!(f, "cannot determine home directory"),
            Self::CurrentDir(err) => write!(f, "cannot determine current directory: {err}"),
            Self::CreateDir { path, source } => {
                write!(f, "failed to create `{}`: {source}", path.display())
            }
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CurrentDir(err) => Some(err),
            Self::CreateDir { source, .. } => Some(source),
            Self::NoHomeDir | Self::InvalidLogLevel(_) => None,
        }
    }
}

impl AppConfig {
    /// Resolves overrides against defaults and creates the data directory.
    ///
    /// Defaults: data in `~/.checklist`, logs in `<data_dir>/logs`, level
    /// from [`default_log_level`].
    ///
    /// # Errors
    /// - `NoHomeDir` when no data dir is given and home cannot be found.
    /// - `CreateDir` when the data directory cannot be created.
    /// - `InvalidLogLevel` for unknown levels.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let log_level = match overrides.log_level.as_deref() {
            Some(level) => normalize_level(level).map_err(ConfigError::InvalidLogLevel)?,
            None => default_log_level(),
        };

        let data_dir = match overrides.data_dir {
            Some(dir) => absolutize(dir)?,
            None => dirs::home_dir()
                .ok_or(ConfigError::NoHomeDir)?
                .join(DEFAULT_DATA_DIR_NAME),
        };
        std::fs::create_dir_all(&data_dir).map_err(|source| ConfigError::CreateDir {
            path: data_dir.clone(),
            source,
        })?;

        let log_dir = match overrides.log_dir {
            Some(dir) => absolutize(dir)?,
            None => data_dir.join(LOG_DIR_NAME),
        };

        Ok(Self {
            data_dir,
            log_dir,
            log_level,
        })
    }

    /// Location of the item database.
    pub fn db_path(&self) -> PathBuf {
        db_path_in(&self.data_dir)
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf, ConfigError> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
    Ok(cwd.join(Path::new(&path)))
}
