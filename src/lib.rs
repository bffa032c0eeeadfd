//! Dockside: a paginated dealer-directory scraper
//!
//! This crate extracts dealer records (name, address, phone, website) from a
//! paginated listing rendered in a real browser, validates contact fields,
//! persists accepted records into SQLite, and exports the store to CSV.

pub mod config;
pub mod export;
pub mod fetcher;
pub mod scrape;
pub mod store;
pub mod validate;

use thiserror::Error;

/// Main error type for Dockside operations
#[derive(Debug, Error)]
pub enum DocksideError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] fetcher::FetchError),

    #[error("Storage error: {0}")]
    Store(#[from] store::StoreError),

    #[error("Export error: {0}")]
    Export(#[from] export::ExportError),

    #[error("Validation error: {0}")]
    Validation(#[from] validate::ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid listing URL template: {0}")]
    InvalidUrl(String),

    #[error("Unknown phone region: {0}")]
    UnknownRegion(String),
}

/// Result type alias for Dockside operations
pub type Result<T> = std::result::Result<T, DocksideError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use fetcher::{FetchError, PageFetcher};
pub use scrape::{RunSummary, Scraper};
pub use store::{DealerRecord, DealerStore, SqliteStore};
pub use validate::{validate_phone, validate_website, ValidationError};
