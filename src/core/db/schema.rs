//! Schema Module
//!
//! DDL for the three tables and a check for which of them are missing.

use rusqlite::Connection;

/// Tables the application reads and writes.
pub const REQUIRED_TABLES: [&str; 3] = ["department", "role", "employee"];

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS department (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS role (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    salary REAL NOT NULL,
    department_id INTEGER REFERENCES department (id)
);

CREATE TABLE IF NOT EXISTS employee (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    role_id INTEGER REFERENCES role (id),
    manager_id INTEGER REFERENCES employee (id)
);
"#;

/// Creates any of the three tables that do not exist yet.
pub fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}

/// Returns the required tables absent from `sqlite_master`, in schema order.
pub fn missing_tables(conn: &Connection) -> rusqlite::Result<Vec<&'static str>> {
    let mut stmt =
        conn.prepare("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")?;

    let mut missing = Vec::new();
    for table in REQUIRED_TABLES {
        let count: i64 = stmt.query_row([table], |row| row.get(0))?;
        if count == 0 {
            missing.push(table);
        }
    }
    Ok(missing)
}
