use crate::validate::{ValidationError, ValidationResult};
use phonenumber::country;

/// Resolves an ISO country code from the configuration into a phone region
///
/// Returns `None` for codes the scraper does not support, which is reported
/// as a configuration error before any scraping starts.
pub fn region_from_code(code: &str) -> Option<country::Id> {
    match code.to_ascii_uppercase().as_str() {
        "US" => Some(country::Id::US),
        "CA" => Some(country::Id::CA),
        "GB" => Some(country::Id::GB),
        "AU" => Some(country::Id::AU),
        "NZ" => Some(country::Id::NZ),
        "IE" => Some(country::Id::IE),
        "DE" => Some(country::Id::DE),
        "FR" => Some(country::Id::FR),
        "MX" => Some(country::Id::MX),
        _ => None,
    }
}

/// Validates a raw phone number assumed to be domestic for `region`
///
/// The check is purely syntactic/semantic against the region's numbering
/// plan: the string must parse as a number and the parsed number must be
/// plausible (valid area code, exchange, and length). No carrier lookup or
/// network call is made.
///
/// # Arguments
///
/// * `raw` - The raw phone string as extracted from the listing
/// * `region` - The region the number is assumed to belong to
///
/// # Returns
///
/// * `Ok(())` - The number is well-formed for the region
/// * `Err(ValidationError)` - `PhoneUnparseable` if the string cannot be
///   parsed, `PhoneImplausible` if it parses but fails the plan check
pub fn validate_phone(raw: &str, region: country::Id) -> ValidationResult {
    let parsed = phonenumber::parse(Some(region), raw).map_err(|e| {
        ValidationError::PhoneUnparseable {
            value: raw.to_string(),
            reason: e.to_string(),
        }
    })?;

    if !phonenumber::is_valid(&parsed) {
        return Err(ValidationError::PhoneImplausible {
            value: raw.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_us_number() {
        assert!(validate_phone("2125550123", country::Id::US).is_ok());
    }

    #[test]
    fn test_valid_us_number_with_punctuation() {
        assert!(validate_phone("(212) 555-0123", country::Id::US).is_ok());
    }

    #[test]
    fn test_too_few_digits_rejected() {
        assert!(validate_phone("555-0100", country::Id::US).is_err());
    }

    #[test]
    fn test_invalid_exchange_rejected() {
        // 10 digits, but the exchange starts with 1 which NANP forbids
        let result = validate_phone("5551234567", country::Id::US);
        assert!(matches!(
            result,
            Err(ValidationError::PhoneImplausible { .. })
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(validate_phone("call me maybe", country::Id::US).is_err());
    }

    #[test]
    fn test_region_from_code() {
        assert_eq!(region_from_code("us"), Some(country::Id::US));
        assert_eq!(region_from_code("GB"), Some(country::Id::GB));
        assert_eq!(region_from_code("ZZ"), None);
    }
}
