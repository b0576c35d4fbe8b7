//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::queries::SqliteStore;
use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Private in-memory database (tests, dry runs).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Stamp store view over this connection.
    pub fn store(&self) -> SqliteStore<'_> {
        SqliteStore::new(&self.conn)
    }
}
