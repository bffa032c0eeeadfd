//! Field validation for extracted dealer records
//!
//! Pure, structural checks: phone numbers are validated against the national
//! numbering plan for the configured region, website URLs must have a scheme
//! and a host. Nothing here touches the network.

mod phone;
mod website;

pub use phone::{region_from_code, validate_phone};
pub use website::validate_website;

use thiserror::Error;

/// Errors produced when a record field fails validation
///
/// Phone failures are split into two kinds so diagnostics can distinguish a
/// string that is not a number at all from one that parses but cannot exist
/// under the numbering plan. Both reject the record.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("unparseable phone number '{value}': {reason}")]
    PhoneUnparseable { value: String, reason: String },

    #[error("implausible phone number '{value}'")]
    PhoneImplausible { value: String },

    #[error("invalid website URL '{value}': {reason}")]
    InvalidWebsite { value: String, reason: String },

    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },
}

/// Result type for validation operations
pub type ValidationResult = Result<(), ValidationError>;
