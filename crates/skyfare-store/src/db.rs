//! Database connection management
//!
//! Connections are opened by the surrounding application and passed into
//! the repository per request; nothing in this crate holds one across
//! calls.

use crate::errors::{persistence, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(|e| persistence("open", e))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(|e| persistence("open_in_memory", e))
}

/// Configure a connection with the settings the repository expects
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute("PRAGMA foreign_keys = ON", [])
        .map_err(|e| persistence("configure", e))?;

    // journal_mode returns the resulting mode as a row, so it cannot go
    // through execute()
    conn.query_row("PRAGMA journal_mode = WAL", [], |_| Ok(()))
        .map_err(|e| persistence("configure", e))?;

    Ok(())
}
