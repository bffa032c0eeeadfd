//! Database schema definitions
//!
//! One table: the four record fields, with `name` and `address` non-null.
//! There is deliberately no uniqueness constraint; a dealer appearing on two
//! pages becomes two rows.

/// Name of the dealers table
pub const TABLE_NAME: &str = "dealers";

/// SQL to create the dealers table
pub const CREATE_TABLE_SQL: &str = "
CREATE TABLE dealers (
    name TEXT NOT NULL,
    address TEXT NOT NULL,
    phone TEXT,
    website TEXT
)";

/// SQL to drop the dealers table if it exists
pub const DROP_TABLE_SQL: &str = "DROP TABLE IF EXISTS dealers";

/// Checks whether the dealers table exists in the given connection
pub fn table_exists(conn: &rusqlite::Connection) -> Result<bool, rusqlite::Error> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [TABLE_NAME],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
