//! Key-value store boundary between the writer and reader roles.
//!
//! # Responsibility
//! - Define the `get`/`set` contract both roles integrate through.
//! - Provide an in-memory fake and a durable SQLite implementation.
//!
//! # Invariants
//! - Values are opaque strings; encoding belongs to the sync layer.
//! - An absent key is `Ok(None)`, never an error.
//! - Errors are transport failures only; content problems never surface here.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level store failure.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Shared persistence contract between the writer and reader roles.
///
/// The store is injected into each role rather than reached as an ambient
/// singleton, so tests can substitute [`MemoryStore`].
pub trait KeyValueStore {
    /// Returns the current value under `key`, or `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the value under `key` in full.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}
