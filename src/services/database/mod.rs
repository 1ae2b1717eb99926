// Database service module
// SQLite connection and events table management

use anyhow::{Context, Result};
use rusqlite::Connection;

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the SQLite database at `path`.
    ///
    /// # Arguments
    /// * `path` - Path to the SQLite database file (or ":memory:" for in-memory)
    ///
    /// # Examples
    /// ```
    /// use event_scheduler::services::database::Database;
    /// let db = Database::new(":memory:").unwrap();
    /// ```
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .context(format!("Failed to open database at {}", path))?;

        Ok(Self { conn })
    }

    /// Create the events table if it doesn't exist
    pub fn initialize_schema(&self) -> Result<()> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS events (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    event_date TEXT NOT NULL,
                    title TEXT NOT NULL,
                    description TEXT,
                    event_time TEXT,
                    event_color TEXT
                )",
                [],
            )
            .context("Failed to create events table")?;

        self.conn
            .execute(
                "CREATE INDEX IF NOT EXISTS idx_events_event_date ON events (event_date)",
                [],
            )
            .context("Failed to create event_date index")?;

        Ok(())
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, reporting any error SQLite raises on close.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| e)
            .context("Failed to close database")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_new_database_in_memory() {
        let result = Database::new(":memory:");
        assert!(result.is_ok(), "Should create in-memory database");
    }

    #[test]
    fn test_new_database_with_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_str().unwrap();

        let result = Database::new(db_path_str);
        assert!(result.is_ok(), "Should create file-based database");
        assert!(Path::new(db_path_str).exists(), "Database file should exist");
    }

    #[test]
    fn test_new_database_in_missing_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("no").join("such").join("dir.db");

        let result = Database::new(db_path.to_str().unwrap());
        assert!(result.is_err());
    }

    #[test]
    fn test_initialize_schema_is_idempotent() {
        let db = Database::new(":memory:").unwrap();
        assert!(db.initialize_schema().is_ok());
        assert!(db.initialize_schema().is_ok());
    }

    #[test]
    fn test_events_table_exists() {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();

        let count: i64 = db
            .connection()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='events'",
                [],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(count, 1, "Events table should exist");
    }

    #[test]
    fn test_events_table_columns() {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();

        let mut stmt = db.connection().prepare("PRAGMA table_info(events)").unwrap();
        let columns: Vec<String> = stmt
            .query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();

        assert_eq!(
            columns,
            vec![
                "id",
                "event_date",
                "title",
                "description",
                "event_time",
                "event_color"
            ]
        );
    }

    #[test]
    fn test_close() {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();
        assert!(db.close().is_ok());
    }
}
