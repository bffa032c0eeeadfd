//! Record store for accepted dealer records
//!
//! This module defines the dealer record type, the store trait, and the
//! SQLite backend. The store is append-only within a run: `reset` rebuilds
//! the table for a fresh snapshot, `insert` appends one durable row at a
//! time, and `read_all` yields rows in insertion order.

mod schema;
mod sqlite;
mod traits;

pub use schema::{table_exists, CREATE_TABLE_SQL, DROP_TABLE_SQL, TABLE_NAME};
pub use sqlite::SqliteStore;
pub use traits::{DealerStore, StoreError, StoreResult};

use crate::validate::ValidationError;
use serde::Serialize;

/// One dealer record, the unit of extraction and storage
///
/// Field order matters: it defines the column order in the database schema
/// and the header order in the CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealerRecord {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl DealerRecord {
    /// Builds a candidate record from raw extracted fields
    ///
    /// All fields are whitespace-trimmed. Optional fields that are absent or
    /// empty after trimming become `None`. A missing or empty `name` or
    /// `address` rejects the candidate.
    pub fn from_raw(
        name: Option<String>,
        address: Option<String>,
        phone: Option<String>,
        website: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = non_empty(name).ok_or(ValidationError::MissingField { field: "name" })?;
        let address =
            non_empty(address).ok_or(ValidationError::MissingField { field: "address" })?;

        Ok(Self {
            name,
            address,
            phone: non_empty(phone),
            website: non_empty(website),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_trims_fields() {
        let record = DealerRecord::from_raw(
            Some("  Acme Marine  ".to_string()),
            Some("1 Dock Rd\n".to_string()),
            Some(" 2125550123 ".to_string()),
            None,
        )
        .unwrap();

        assert_eq!(record.name, "Acme Marine");
        assert_eq!(record.address, "1 Dock Rd");
        assert_eq!(record.phone, Some("2125550123".to_string()));
        assert_eq!(record.website, None);
    }

    #[test]
    fn test_from_raw_empty_optionals_become_none() {
        let record = DealerRecord::from_raw(
            Some("Acme".to_string()),
            Some("1 Dock Rd".to_string()),
            Some("   ".to_string()),
            Some(String::new()),
        )
        .unwrap();

        assert_eq!(record.phone, None);
        assert_eq!(record.website, None);
    }

    #[test]
    fn test_from_raw_missing_name_rejected() {
        let result = DealerRecord::from_raw(
            None,
            Some("1 Dock Rd".to_string()),
            None,
            None,
        );
        assert!(matches!(
            result,
            Err(ValidationError::MissingField { field: "name" })
        ));
    }

    #[test]
    fn test_from_raw_blank_address_rejected() {
        let result = DealerRecord::from_raw(
            Some("Acme".to_string()),
            Some("   ".to_string()),
            None,
            None,
        );
        assert!(matches!(
            result,
            Err(ValidationError::MissingField { field: "address" })
        ));
    }
}
