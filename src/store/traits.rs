//! Store trait and error types
//!
//! The trait exists so the pagination driver and exporter can run against an
//! in-memory store in tests instead of a file on disk.

use crate::store::DealerRecord;
use thiserror::Error;

/// Errors that can occur during store operations
///
/// Store errors are run-fatal: a store that cannot durably persist must not
/// silently continue accumulating unsaved work.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Database error: {0}")]
    Database(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for dealer store backends
pub trait DealerStore {
    /// Ensures a single empty dealers table exists
    ///
    /// Drops any pre-existing table of the same name first. Idempotent, and
    /// safe to call when the underlying file or table does not yet exist.
    fn reset(&mut self) -> StoreResult<()>;

    /// Appends one record as a durable row
    ///
    /// Every call commits before returning. Never updates or deletes; the
    /// store holds no uniqueness constraint, so duplicate rows across pages
    /// and runs are permitted.
    fn insert(&mut self, record: &DealerRecord) -> StoreResult<()>;

    /// Reads back all persisted records in insertion order
    fn read_all(&self) -> StoreResult<Vec<DealerRecord>>;

    /// Counts persisted records
    fn count(&self) -> StoreResult<u64>;
}
