use serde::Deserialize;

/// Main configuration structure for Dockside
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub listing: ListingConfig,
    pub fetcher: FetcherConfig,
    pub output: OutputConfig,
}

/// Listing source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
    /// Listing URL template with a `{page}` placeholder for the zero-based
    /// page index (e.g., "https://example.com/dealers?page={page}")
    #[serde(rename = "url-template")]
    pub url_template: String,

    /// Total number of listing pages to visit
    ///
    /// The listing does not advertise its own length, so the bound is
    /// configured rather than discovered. Empty pages are not treated as
    /// the end of data.
    #[serde(rename = "total-pages")]
    pub total_pages: u32,

    /// ISO country code assumed for domestic phone numbers (e.g., "US")
    #[serde(rename = "phone-region")]
    pub phone_region: String,
}

/// WebDriver endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// URL of the WebDriver server (e.g., "http://localhost:4444")
    #[serde(rename = "webdriver-url")]
    pub webdriver_url: String,

    /// How long to wait for the record selector to appear (milliseconds)
    #[serde(rename = "selector-timeout-ms", default = "default_selector_timeout")]
    pub selector_timeout_ms: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,

    /// Path to the CSV export file
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}

fn default_selector_timeout() -> u64 {
    10_000
}

impl ListingConfig {
    /// Builds the concrete listing URL for a zero-based page index
    pub fn page_url(&self, page: u32) -> String {
        self.url_template.replace("{page}", &page.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_substitution() {
        let listing = ListingConfig {
            url_template: "https://example.com/dealers?page={page}".to_string(),
            total_pages: 3,
            phone_region: "US".to_string(),
        };

        assert_eq!(
            listing.page_url(0),
            "https://example.com/dealers?page=0"
        );
        assert_eq!(
            listing.page_url(42),
            "https://example.com/dealers?page=42"
        );
    }
}
