//! Airport lookups
//!
//! Airports are read-only reference data for this component.

use rusqlite::{Connection, OptionalExtension};
use skyfare_core::model::Airport;

use crate::errors::{persistence, Result};

/// Airport repository over an injected connection
pub struct AirportRepo;

impl AirportRepo {
    /// List airports, optionally restricted to domestic ones
    pub fn airports(conn: &Connection, domestic_only: bool) -> Result<Vec<Airport>> {
        let sql = if domestic_only {
            "SELECT airport_pk, code, name, city, country, is_domestic
             FROM airports
             WHERE is_domestic = 1"
        } else {
            "SELECT airport_pk, code, name, city, country, is_domestic
             FROM airports"
        };

        let mut stmt = conn.prepare(sql).map_err(|e| persistence("airports", e))?;

        let airports = stmt
            .query_map([], |row| {
                let is_domestic: i64 = row.get(5)?;
                Ok(Airport {
                    airport_pk: row.get(0)?,
                    code: row.get(1)?,
                    name: row.get(2)?,
                    city: row.get(3)?,
                    country: row.get(4)?,
                    is_domestic: is_domestic != 0,
                })
            })
            .map_err(|e| persistence("airports", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| persistence("airports", e))?;

        Ok(airports)
    }

    /// Resolve an exact airport code to its primary key
    ///
    /// An empty code short-circuits to `Ok(None)` without touching the
    /// store; an unknown code is also `Ok(None)`.
    pub fn airport_code_to_id(conn: &Connection, code: &str) -> Result<Option<i64>> {
        if code.is_empty() {
            return Ok(None);
        }

        conn.query_row(
            "SELECT airport_pk FROM airports WHERE code = ?1",
            [code],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| persistence("airport_code_to_id", e))
    }
}
