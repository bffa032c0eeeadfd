//! Pagination driver for the dealer listing
//!
//! This module contains the core scraping loop: it walks every page index,
//! pulls record fragments through the page fetcher, validates candidates,
//! and writes accepted records to the store.

mod driver;

pub use driver::{RunSummary, Scraper};

/// CSS selector for one dealer record on a listing page
pub const RECORD_SELECTOR: &str = ".dealer";

/// Selector for the dealer name inside a record fragment
pub const NAME_SELECTOR: &str = "h2";

/// Selector for the dealer address inside a record fragment
pub const ADDRESS_SELECTOR: &str = ".dealer-address";

/// Selector and attribute carrying the phone number
pub const PHONE_SELECTOR: &str = ".dealer-phone";
pub const PHONE_ATTR: &str = "data-title";

/// Selector and attribute carrying the website link
pub const WEBSITE_SELECTOR: &str = r#"a[title="Website"]"#;
pub const WEBSITE_ATTR: &str = "href";
