//! SQLite storage bootstrap for the checklist store.
//!
//! # Responsibility
//! - Open and configure SQLite connections backing the item store.
//! - Stamp and verify the schema version before any item is read.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Item data is never read or written before migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

/// File name of the item database inside the data directory.
pub const DB_FILE_NAME: &str = "checklist.sqlite3";

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "item database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Returns the database file path for a data directory.
pub fn db_path_in(data_dir: &Path) -> PathBuf {
    data_dir.join(DB_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::{db_path_in, DbError, DB_FILE_NAME};
    use std::path::Path;

    #[test]
    fn db_path_joins_file_name() {
        let path = db_path_in(Path::new("/tmp/checklist"));
        assert!(path.ends_with(DB_FILE_NAME));
    }

    #[test]
    fn unsupported_version_message_names_both_versions() {
        let err = DbError::UnsupportedSchemaVersion {
            db_version: 7,
            latest_supported: 1,
        };
        let message = err.to_string();
        assert!(message.contains('7'));
        assert!(message.contains('1'));
    }
}
