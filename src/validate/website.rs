use crate::validate::{ValidationError, ValidationResult};
use url::Url;

/// Validates a raw website URL string
///
/// Succeeds only if the string parses as an absolute URL with a non-empty
/// host. Purely structural; no reachability check is made.
///
/// # Arguments
///
/// * `raw` - The raw URL string as extracted from the listing
///
/// # Returns
///
/// * `Ok(())` - The URL has both a scheme and a host
/// * `Err(ValidationError::InvalidWebsite)` - Otherwise
pub fn validate_website(raw: &str) -> ValidationResult {
    let url = Url::parse(raw).map_err(|e| ValidationError::InvalidWebsite {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;

    // A parsed URL always has a scheme; the host is the part that can be
    // absent (e.g., "mailto:" or "data:" URLs).
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidWebsite {
            value: raw.to_string(),
            reason: "missing host".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_https_url() {
        assert!(validate_website("https://acme.example/dealer").is_ok());
    }

    #[test]
    fn test_valid_http_url() {
        assert!(validate_website("http://example.com").is_ok());
    }

    #[test]
    fn test_bare_words_rejected() {
        assert!(validate_website("not a url").is_err());
    }

    #[test]
    fn test_relative_path_rejected() {
        assert!(validate_website("/dealers/acme").is_err());
    }

    #[test]
    fn test_url_without_host_rejected() {
        let result = validate_website("mailto:sales@acme.example");
        assert!(matches!(
            result,
            Err(ValidationError::InvalidWebsite { .. })
        ));
    }
}
