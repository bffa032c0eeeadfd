use crate::config::types::{Config, FetcherConfig, ListingConfig, OutputConfig};
use crate::validate::region_from_code;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_listing_config(&config.listing)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates listing configuration
fn validate_listing_config(config: &ListingConfig) -> Result<(), ConfigError> {
    if config.total_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "total_pages must be >= 1, got {}",
            config.total_pages
        )));
    }

    if !config.url_template.contains("{page}") {
        return Err(ConfigError::InvalidUrl(format!(
            "url_template must contain a {{page}} placeholder, got '{}'",
            config.url_template
        )));
    }

    // The substituted template must be a well-formed http(s) URL
    let sample = config.page_url(0);
    let url = Url::parse(&sample)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid url_template '{}': {}", sample, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "url_template must use HTTP or HTTPS, got '{}'",
            url.scheme()
        )));
    }

    if region_from_code(&config.phone_region).is_none() {
        return Err(ConfigError::UnknownRegion(config.phone_region.clone()));
    }

    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    Url::parse(&config.webdriver_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid webdriver_url: {}", e)))?;

    if config.selector_timeout_ms < 100 {
        return Err(ConfigError::Validation(format!(
            "selector_timeout_ms must be >= 100ms, got {}ms",
            config.selector_timeout_ms
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database_path cannot be empty".to_string(),
        ));
    }

    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            listing: ListingConfig {
                url_template: "https://example.com/dealers?page={page}".to_string(),
                total_pages: 10,
                phone_region: "US".to_string(),
            },
            fetcher: FetcherConfig {
                webdriver_url: "http://localhost:4444".to_string(),
                selector_timeout_ms: 10_000,
            },
            output: OutputConfig {
                database_path: "./dealers.db".to_string(),
                csv_path: "./dealers.csv".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_zero_pages_rejected() {
        let mut config = valid_config();
        config.listing.total_pages = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_page_placeholder_rejected() {
        let mut config = valid_config();
        config.listing.url_template = "https://example.com/dealers".to_string();
        assert!(matches!(validate(&config), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_non_http_template_rejected() {
        let mut config = valid_config();
        config.listing.url_template = "ftp://example.com/dealers?page={page}".to_string();
        assert!(matches!(validate(&config), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_unknown_region_rejected() {
        let mut config = valid_config();
        config.listing.phone_region = "ZZ".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::UnknownRegion(_))
        ));
    }

    #[test]
    fn test_empty_csv_path_rejected() {
        let mut config = valid_config();
        config.output.csv_path = String::new();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }
}
