//! Connection Management Module
//!
//! Opens the single SQLite connection the process works with and owns it
//! for the lifetime of the [`Database`] value.

use crate::config::DatabaseConfig;
use crate::core::db::schema;
use crate::core::{EmsError, Result};
use rusqlite::Connection;
use std::time::Duration;
use tracing::{debug, error, info};

/// Owner of the database connection.
///
/// Constructed once at startup by [`Database::connect`] and handed to the
/// interaction loop; every data operation is a method on this type.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Connects to the database described by `config`.
    ///
    /// Enables foreign key enforcement, applies the busy timeout and then
    /// either creates missing tables or verifies they exist, depending on
    /// `config.init_schema`.
    ///
    /// # Errors
    ///
    /// Returns `EmsError::Connection` if the file cannot be opened or the
    /// schema cannot be prepared.
    pub fn connect(config: &DatabaseConfig) -> Result<Self> {
        debug!(path = %config.path, "opening database");
        let conn = Connection::open(&config.path).map_err(|e| {
            error!(path = %config.path, error = %e, "failed to open database");
            EmsError::Connection(format!("unable to open {}: {}", config.path, e))
        })?;

        conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))
            .map_err(|e| EmsError::Connection(format!("unable to set busy timeout: {}", e)))?;

        let db = Database::prepare(conn, config.init_schema)?;
        info!(path = %config.path, "connected to database");
        Ok(db)
    }

    /// Opens a fresh in-memory database with the schema created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| EmsError::Connection(format!("unable to open in-memory database: {}", e)))?;
        Database::prepare(conn, true)
    }

    fn prepare(conn: Connection, init_schema: bool) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| EmsError::Connection(format!("unable to enable foreign keys: {}", e)))?;

        if init_schema {
            schema::ensure_schema(&conn)
                .map_err(|e| EmsError::Connection(format!("unable to create schema: {}", e)))?;
        } else {
            let missing = schema::missing_tables(&conn)
                .map_err(|e| EmsError::Connection(format!("unable to inspect schema: {}", e)))?;
            if !missing.is_empty() {
                return Err(EmsError::Connection(format!(
                    "database is missing table(s): {}",
                    missing.join(", ")
                )));
            }
        }

        Ok(Database { conn })
    }

    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}
