//! Database module for the boxer registry.

use rusqlite::{Connection, Result as SqliteResult};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Thread-safe database connection pool.
pub type DbPool = Arc<Mutex<Connection>>;

/// Initialize database with schema.
///
/// Creates the `boxers` table holding one row per registered boxer,
/// including the cumulative fight/win counters. The `UNIQUE` constraint
/// on `name` is the source of truth for duplicate detection.
///
/// # Arguments
///
/// * `path` - Path to the SQLite database file (use `:memory:` for in-memory)
///
/// # Errors
///
/// Returns an error if the database cannot be opened or schema creation fails.
pub fn init_db<P: AsRef<Path>>(path: P) -> SqliteResult<DbPool> {
    let conn = Connection::open(path)?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS boxers (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            name   TEXT NOT NULL UNIQUE,
            weight INTEGER NOT NULL,
            height INTEGER NOT NULL,
            reach  REAL NOT NULL,
            age    INTEGER NOT NULL,
            fights INTEGER NOT NULL DEFAULT 0,
            wins   INTEGER NOT NULL DEFAULT 0
        );
        ",
    )?;

    Ok(Arc::new(Mutex::new(conn)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_db_creates_table() {
        let db = init_db(":memory:").expect("Failed to init db");
        let conn = db.lock().unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"boxers".to_string()));
    }

    #[test]
    fn test_init_db_idempotent() {
        let db = init_db(":memory:").expect("Failed to init db");
        let conn = db.lock().unwrap();

        // Run the schema again - should not fail due to IF NOT EXISTS
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS boxers (
                id     INTEGER PRIMARY KEY AUTOINCREMENT,
                name   TEXT NOT NULL UNIQUE,
                weight INTEGER NOT NULL,
                height INTEGER NOT NULL,
                reach  REAL NOT NULL,
                age    INTEGER NOT NULL,
                fights INTEGER NOT NULL DEFAULT 0,
                wins   INTEGER NOT NULL DEFAULT 0
            );
            ",
        )
        .expect("Schema should be idempotent");
    }

    #[test]
    fn test_counter_defaults() {
        let db = init_db(":memory:").expect("Failed to init db");
        let conn = db.lock().unwrap();

        conn.execute(
            "INSERT INTO boxers (name, weight, height, reach, age) VALUES ('Ali', 210, 74, 78.0, 28)",
            [],
        )
        .expect("Failed to insert boxer");

        let (fights, wins): (i32, i32) = conn
            .query_row(
                "SELECT fights, wins FROM boxers WHERE name = 'Ali'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .expect("Failed to query boxer");

        assert_eq!(fights, 0);
        assert_eq!(wins, 0);
    }

    #[test]
    fn test_name_unique_constraint() {
        let db = init_db(":memory:").expect("Failed to init db");
        let conn = db.lock().unwrap();

        conn.execute(
            "INSERT INTO boxers (name, weight, height, reach, age) VALUES ('Ali', 210, 74, 78.0, 28)",
            [],
        )
        .expect("First insert should succeed");

        let result = conn.execute(
            "INSERT INTO boxers (name, weight, height, reach, age) VALUES ('Ali', 180, 72, 74.0, 30)",
            [],
        );

        assert!(result.is_err(), "Duplicate name should fail");
    }

    #[test]
    fn test_ids_are_assigned_in_creation_order() {
        let db = init_db(":memory:").expect("Failed to init db");
        let conn = db.lock().unwrap();

        conn.execute(
            "INSERT INTO boxers (name, weight, height, reach, age) VALUES ('First', 150, 68, 70.0, 25)",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO boxers (name, weight, height, reach, age) VALUES ('Second', 160, 69, 71.0, 26)",
            [],
        )
        .unwrap();

        let ids: Vec<i64> = conn
            .prepare("SELECT id FROM boxers ORDER BY id")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert_eq!(ids, vec![1, 2]);
    }
}
