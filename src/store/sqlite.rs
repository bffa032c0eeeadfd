//! SQLite store implementation
//!
//! This module provides the SQLite-based implementation of the DealerStore
//! trait. Writes autocommit one row at a time: scraping sessions can run for
//! hours, and an interrupted run must leave the store consistent through the
//! last completed record.

use crate::store::schema::{table_exists, CREATE_TABLE_SQL, DROP_TABLE_SQL, TABLE_NAME};
use crate::store::traits::{DealerStore, StoreError, StoreResult};
use crate::store::DealerRecord;
use rusqlite::{params, Connection, OpenFlags};
use std::path::Path;

/// SQLite store backend
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a database at the given path for writing
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStore)` - Successfully opened/created database
    /// * `Err(StoreError)` - Failed to open database
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            tracing::info!("Database file '{}' not found, creating it", path.display());
        }

        let conn = Connection::open(path)?;

        // Durability over throughput: every insert must survive interruption.
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "FULL")?;

        Ok(Self { conn })
    }

    /// Opens an existing database read-only (for export)
    ///
    /// Fails if the file does not exist; never creates or mutates anything.
    pub fn open_read_only(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(Self { conn })
    }

    /// Creates an in-memory store (for tests)
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }
}

impl DealerStore for SqliteStore {
    fn reset(&mut self) -> StoreResult<()> {
        if table_exists(&self.conn)? {
            self.conn.execute(DROP_TABLE_SQL, [])?;
            tracing::info!("Dropped existing '{}' table", TABLE_NAME);
        }

        self.conn.execute(CREATE_TABLE_SQL, [])?;
        tracing::info!("Created '{}' table", TABLE_NAME);

        Ok(())
    }

    fn insert(&mut self, record: &DealerRecord) -> StoreResult<()> {
        // Autocommit: each execute is its own durable transaction.
        self.conn.execute(
            "INSERT INTO dealers (name, address, phone, website) VALUES (?1, ?2, ?3, ?4)",
            params![record.name, record.address, record.phone, record.website],
        )?;
        Ok(())
    }

    fn read_all(&self) -> StoreResult<Vec<DealerRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, address, phone, website FROM dealers ORDER BY rowid")?;

        let records = stmt
            .query_map([], |row| {
                Ok(DealerRecord {
                    name: row.get(0)?,
                    address: row.get(1)?,
                    phone: row.get(2)?,
                    website: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn count(&self) -> StoreResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM dealers", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(name: &str) -> DealerRecord {
        DealerRecord {
            name: name.to_string(),
            address: "1 Dock Rd".to_string(),
            phone: Some("2125550123".to_string()),
            website: Some("https://acme.example".to_string()),
        }
    }

    #[test]
    fn test_reset_creates_empty_table() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.reset().unwrap();
        assert_eq!(store.read_all().unwrap().len(), 0);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut store = SqliteStore::open_in_memory().unwrap();

        store.reset().unwrap();
        assert_eq!(store.read_all().unwrap().len(), 0);

        store.insert(&sample_record("Acme")).unwrap();
        store.reset().unwrap();
        assert_eq!(store.read_all().unwrap().len(), 0);
    }

    #[test]
    fn test_insert_read_round_trip_preserves_order() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.reset().unwrap();

        let records: Vec<_> = (0..5)
            .map(|i| sample_record(&format!("Dealer {}", i)))
            .collect();
        for record in &records {
            store.insert(record).unwrap();
        }

        let read_back = store.read_all().unwrap();
        assert_eq!(read_back, records);
    }

    #[test]
    fn test_nullable_fields_round_trip() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.reset().unwrap();

        let record = DealerRecord {
            name: "No Contact Marine".to_string(),
            address: "2 Pier Ln".to_string(),
            phone: None,
            website: None,
        };
        store.insert(&record).unwrap();

        assert_eq!(store.read_all().unwrap(), vec![record]);
    }

    #[test]
    fn test_duplicates_are_permitted() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.reset().unwrap();

        let record = sample_record("Acme");
        store.insert(&record).unwrap();
        store.insert(&record).unwrap();

        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_insert_without_table_is_an_error() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let result = store.insert(&sample_record("Acme"));
        assert!(matches!(result, Err(StoreError::Sqlite(_))));
    }

    #[test]
    fn test_read_only_store_cannot_mutate() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("dealers.db");

        {
            let mut store = SqliteStore::open(&db_path).unwrap();
            store.reset().unwrap();
            store.insert(&sample_record("Acme")).unwrap();
        }

        let mut read_only = SqliteStore::open_read_only(&db_path).unwrap();
        assert_eq!(read_only.count().unwrap(), 1);
        assert!(read_only.insert(&sample_record("Evil")).is_err());
        assert!(read_only.reset().is_err());
    }
}
