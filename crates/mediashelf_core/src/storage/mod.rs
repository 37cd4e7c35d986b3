//! Key-value storage contracts and implementations.
//!
//! # Responsibility
//! - Define the backend contract the store persists its blob through.
//! - Keep SQLite details out of store/service orchestration.
//!
//! # Invariants
//! - A `save` fully overwrites any prior value under the same key.
//! - Backends never interpret the stored text; codec concerns stay above.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteKvStorage;

/// Fixed key the full catalogue snapshot is stored under.
pub const COLLECTION_KEY: &str = "media_collection";

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport error for key-value reads and writes.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Failure reported by a non-SQLite backend implementation.
    Backend(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "storage backend failure: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Backend contract for single-key blob persistence.
pub trait StorageBackend {
    /// Returns the value stored under `key`, or `None` when absent.
    fn load(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> StorageResult<()>;
}
