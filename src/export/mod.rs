//! CSV export of the dealer store
//!
//! Export is a separate path from scraping: it opens the store read-only,
//! reads everything back, and writes a delimited file. It never mutates the
//! store.

mod csv_file;

pub use csv_file::export_csv;

use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur during export
///
/// Destination failures are fatal to the export operation only; a read
/// failure from the store propagates as the store's own error kind.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
