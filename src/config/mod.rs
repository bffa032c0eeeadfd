//! Configuration loading and validation
//!
//! Configuration is a TOML file describing the listing source, the WebDriver
//! endpoint, and output paths. It is parsed with serde and validated before
//! any scraping starts.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, FetcherConfig, ListingConfig, OutputConfig};
pub use validation::validate;
