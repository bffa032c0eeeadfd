use crate::export::ExportResult;
use crate::store::DealerStore;
use std::path::Path;

/// Header row of the export file, in schema column order
const HEADER: [&str; 4] = ["name", "address", "phone", "website"];

/// Exports all stored records to a CSV file
///
/// Writes a header row followed by one row per record, in the order the
/// store yields them (insertion order). Any existing file at the path is
/// overwritten. Absent optional fields become empty cells; quoting and
/// escaping follow standard CSV rules.
///
/// # Arguments
///
/// * `store` - The store to read from; never mutated
/// * `path` - Destination file path
///
/// # Returns
///
/// * `Ok(count)` - Number of records written (excluding the header)
/// * `Err(ExportError)` - Destination could not be written, or the store
///   read failed
pub fn export_csv<S: DealerStore>(store: &S, path: &Path) -> ExportResult<u64> {
    let records = store.read_all()?;

    tracing::info!(
        "Exporting {} dealer records to {}",
        records.len(),
        path.display()
    );

    // The header must be present even for an empty store, so it is written
    // explicitly rather than derived from the first serialized row.
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(HEADER)?;

    for record in &records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(records.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DealerRecord, SqliteStore};

    fn populated_store(records: &[DealerRecord]) -> SqliteStore {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.reset().unwrap();
        for record in records {
            store.insert(record).unwrap();
        }
        store
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let store = populated_store(&[DealerRecord {
            name: "Acme Marine".to_string(),
            address: "1 Dock Rd".to_string(),
            phone: Some("2125550123".to_string()),
            website: Some("https://acme.example".to_string()),
        }]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dealers.csv");

        let count = export_csv(&store, &path).unwrap();
        assert_eq!(count, 1);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "name,address,phone,website");
        assert_eq!(
            lines[1],
            "Acme Marine,1 Dock Rd,2125550123,https://acme.example"
        );
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn test_export_empty_store_still_writes_header() {
        let store = populated_store(&[]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        let count = export_csv(&store, &path).unwrap();
        assert_eq!(count, 0);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "name,address,phone,website\n");
    }

    #[test]
    fn test_export_quotes_fields_with_commas() {
        let store = populated_store(&[DealerRecord {
            name: "Acme Marine".to_string(),
            address: "1 Dock Rd, Pier 9".to_string(),
            phone: None,
            website: None,
        }]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quoted.csv");
        export_csv(&store, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"1 Dock Rd, Pier 9\""));
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let store = populated_store(&[]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dealers.csv");
        std::fs::write(&path, "stale contents that should disappear").unwrap();

        export_csv(&store, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "name,address,phone,website\n");
    }

    #[test]
    fn test_export_to_unwritable_destination_fails() {
        let store = populated_store(&[]);
        let result = export_csv(&store, Path::new("/nonexistent/dir/out.csv"));
        assert!(result.is_err());
    }
}
