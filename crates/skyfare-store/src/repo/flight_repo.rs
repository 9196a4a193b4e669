//! Flight repository
//!
//! Flight CRUD with the append-only audit trail, the two capped
//! listings, and search. Every mutation and its audit entry commit in
//! one transaction, gated on the affected-row count.

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, ToSql, Transaction};
use skyfare_core::model::{Flight, FlightModification};

use crate::errors::{invalid_input, persistence, write_conflict, Result};
use crate::repo::datetime_from_epoch;
use crate::repo::search::{
    build_search_query, map_enriched_row, FlightSearchFilters, ENRICHED_SELECT,
};

/// Flight repository over an injected connection
pub struct FlightRepo;

impl FlightRepo {
    /// Fetch one flight by primary key
    ///
    /// On a hit, depart and arrival airport code and name are attached
    /// by separate pk lookups. A missing flight is `Ok(None)`, never an
    /// error; a dangling airport id leaves that side's enrichment unset.
    pub fn get_flight(conn: &Connection, flight_id: i64) -> Result<Option<Flight>> {
        let found = conn
            .query_row(
                "SELECT flight_pk, depart_airport_id, arrival_airport_id, depart_time, arrival_time, class_type
                 FROM flights
                 WHERE flight_pk = ?1",
                [flight_id],
                |row| {
                    let depart_time: i64 = row.get(3)?;
                    let arrival_time: i64 = row.get(4)?;
                    let class_type: String = row.get(5)?;

                    let mut flight = Flight::new(
                        row.get(1)?,
                        row.get(2)?,
                        datetime_from_epoch(depart_time),
                        datetime_from_epoch(arrival_time),
                        class_type,
                    );
                    flight.flight_pk = Some(row.get(0)?);
                    Ok(flight)
                },
            )
            .optional()
            .map_err(|e| persistence("get_flight", e))?;

        let mut flight = match found {
            Some(flight) => flight,
            None => return Ok(None),
        };

        if let Some((code, name)) = Self::airport_code_name(conn, flight.depart_airport_id)? {
            flight.depart_airport_code = Some(code);
            flight.depart_airport_name = Some(name);
        }
        if let Some((code, name)) = Self::airport_code_name(conn, flight.arrival_airport_id)? {
            flight.arrival_airport_code = Some(code);
            flight.arrival_airport_name = Some(name);
        }

        Ok(Some(flight))
    }

    /// Insert a flight and its "ADDED:" audit row in one transaction
    ///
    /// Any caller-supplied flight_pk is ignored; the store assigns a
    /// fresh key, read from last_insert_rowid inside the transaction.
    pub fn add_flight(
        conn: &mut Connection,
        flight: &Flight,
        reason: &str,
        account_id: i64,
    ) -> Result<i64> {
        let tx = conn.transaction().map_err(|e| persistence("add_flight", e))?;

        let affected = tx
            .execute(
                "INSERT INTO flights (depart_airport_id, arrival_airport_id, depart_time, arrival_time, class_type)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![
                    flight.depart_airport_id,
                    flight.arrival_airport_id,
                    flight.depart_time.timestamp(),
                    flight.arrival_time.timestamp(),
                    flight.class_type,
                ],
            )
            .map_err(|e| persistence("add_flight", e))?;

        if affected != 1 {
            return Err(write_conflict("add_flight", None, affected));
        }

        let flight_pk = tx.last_insert_rowid();
        Self::insert_modification(&tx, flight_pk, account_id, &format!("ADDED: {}", reason))?;
        tx.commit().map_err(|e| persistence("add_flight", e))?;

        tracing::debug!(flight_pk, account_id, "flight added");
        Ok(flight_pk)
    }

    /// Overwrite a flight row and append an "UPDATE:" audit entry
    ///
    /// Full-row replace by pk; there is no partial-field update. An
    /// affected count other than one rolls back and surfaces as a
    /// write conflict with no audit row.
    pub fn update_flight(
        conn: &mut Connection,
        flight: &Flight,
        reason: &str,
        account_id: i64,
    ) -> Result<i64> {
        let flight_pk = flight
            .flight_pk
            .ok_or_else(|| invalid_input("update_flight", "flight has no primary key"))?;

        let tx = conn
            .transaction()
            .map_err(|e| persistence("update_flight", e))?;

        let affected = tx
            .execute(
                "UPDATE flights
                 SET depart_airport_id = ?1, arrival_airport_id = ?2, depart_time = ?3,
                     arrival_time = ?4, class_type = ?5
                 WHERE flight_pk = ?6",
                rusqlite::params![
                    flight.depart_airport_id,
                    flight.arrival_airport_id,
                    flight.depart_time.timestamp(),
                    flight.arrival_time.timestamp(),
                    flight.class_type,
                    flight_pk,
                ],
            )
            .map_err(|e| persistence("update_flight", e))?;

        if affected != 1 {
            return Err(write_conflict("update_flight", Some(flight_pk), affected));
        }

        Self::insert_modification(&tx, flight_pk, account_id, &format!("UPDATE: {}", reason))?;
        tx.commit().map_err(|e| persistence("update_flight", e))?;

        tracing::debug!(flight_pk, account_id, "flight updated");
        Ok(flight_pk)
    }

    /// Delete a flight and append a "REMOVED:" audit entry
    ///
    /// Permanent; there is no soft delete. The audit row outlives the
    /// flight (flight_modifications carries no foreign key).
    pub fn remove_flight(
        conn: &mut Connection,
        flight: &Flight,
        reason: &str,
        account_id: i64,
    ) -> Result<()> {
        let flight_pk = flight
            .flight_pk
            .ok_or_else(|| invalid_input("remove_flight", "flight has no primary key"))?;

        let tx = conn
            .transaction()
            .map_err(|e| persistence("remove_flight", e))?;

        let affected = tx
            .execute(
                "DELETE FROM flights WHERE flight_pk = ?1",
                [flight_pk],
            )
            .map_err(|e| persistence("remove_flight", e))?;

        if affected != 1 {
            return Err(write_conflict("remove_flight", Some(flight_pk), affected));
        }

        Self::insert_modification(&tx, flight_pk, account_id, &format!("REMOVED: {}", reason))?;
        tx.commit().map_err(|e| persistence("remove_flight", e))?;

        tracing::debug!(flight_pk, account_id, "flight removed");
        Ok(())
    }

    /// The account's 5 most recent flights by order time, newest first
    ///
    /// Each order row resolves through [`Self::get_flight`], so results
    /// carry the same enrichment as a direct lookup. Orders whose flight
    /// has since been removed are skipped.
    pub fn recent_flights(conn: &Connection, account_id: i64) -> Result<Vec<Flight>> {
        let mut stmt = conn
            .prepare("SELECT flight_id FROM orders WHERE account_id = ?1 ORDER BY time DESC LIMIT 5")
            .map_err(|e| persistence("recent_flights", e))?;

        let flight_ids: Vec<i64> = stmt
            .query_map([account_id], |row| row.get(0))
            .map_err(|e| persistence("recent_flights", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| persistence("recent_flights", e))?;

        let mut flights = Vec::with_capacity(flight_ids.len());
        for flight_id in flight_ids {
            if let Some(flight) = Self::get_flight(conn, flight_id)? {
                flights.push(flight);
            }
        }

        Ok(flights)
    }

    /// Flights departing at or after the current time, newest row first,
    /// capped at 10, fully enriched
    pub fn newly_added_flights(conn: &Connection) -> Result<Vec<Flight>> {
        Self::newly_added_flights_at(conn, Utc::now())
    }

    /// Same listing with an explicit time boundary (inclusive)
    pub fn newly_added_flights_at(conn: &Connection, now: DateTime<Utc>) -> Result<Vec<Flight>> {
        let sql = format!(
            "{} WHERE flights.depart_time >= ?1 ORDER BY flights.flight_pk DESC LIMIT 10",
            ENRICHED_SELECT
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| persistence("newly_added_flights", e))?;

        let flights = stmt
            .query_map([now.timestamp()], map_enriched_row)
            .map_err(|e| persistence("newly_added_flights", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| persistence("newly_added_flights", e))?;

        Ok(flights)
    }

    /// Search flights by the given filters
    ///
    /// Active filters AND together; with none set, every flight is
    /// returned. Rows always carry full airport enrichment for both
    /// endpoints. Unlike the two listing methods there is no row cap.
    pub fn search(conn: &Connection, filters: &FlightSearchFilters) -> Result<Vec<Flight>> {
        let (sql, params) = build_search_query(filters);
        let mut stmt = conn.prepare(&sql).map_err(|e| persistence("search", e))?;

        let param_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();
        let flights = stmt
            .query_map(&param_refs[..], map_enriched_row)
            .map_err(|e| persistence("search", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| persistence("search", e))?;

        Ok(flights)
    }

    /// Audit entries for a flight, oldest first
    pub fn modifications_for_flight(
        conn: &Connection,
        flight_id: i64,
    ) -> Result<Vec<FlightModification>> {
        let mut stmt = conn
            .prepare(
                "SELECT flight_id, account_id, comment, time
                 FROM flight_modifications
                 WHERE flight_id = ?1
                 ORDER BY time, id",
            )
            .map_err(|e| persistence("modifications_for_flight", e))?;

        let mods = stmt
            .query_map([flight_id], |row| {
                let comment: String = row.get(2)?;
                let time: i64 = row.get(3)?;
                Ok(FlightModification::new(
                    row.get(0)?,
                    row.get(1)?,
                    comment,
                    datetime_from_epoch(time),
                ))
            })
            .map_err(|e| persistence("modifications_for_flight", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| persistence("modifications_for_flight", e))?;

        Ok(mods)
    }

    fn airport_code_name(conn: &Connection, airport_id: i64) -> Result<Option<(String, String)>> {
        conn.query_row(
            "SELECT code, name FROM airports WHERE airport_pk = ?1",
            [airport_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()
        .map_err(|e| persistence("get_flight", e))
    }

    fn insert_modification(
        tx: &Transaction<'_>,
        flight_id: i64,
        account_id: i64,
        comment: &str,
    ) -> Result<()> {
        tx.execute(
            "INSERT INTO flight_modifications (flight_id, account_id, comment, time)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![flight_id, account_id, comment, Utc::now().timestamp()],
        )
        .map_err(|e| persistence("insert_modification", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations;
    use chrono::TimeZone;

    fn setup_test_db() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        crate::db::configure(&conn).unwrap();
        migrations::apply_migrations(&mut conn).unwrap();
        conn
    }

    fn seed_airport(conn: &Connection, code: &str, domestic: bool) -> i64 {
        conn.execute(
            "INSERT INTO airports (code, name, city, country, is_domestic) VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![code, format!("{} International", code), "City", "Country", domestic as i64],
        )
        .unwrap();
        conn.last_insert_rowid()
    }

    fn sample_flight(depart_airport_id: i64, arrival_airport_id: i64) -> Flight {
        Flight::new(
            depart_airport_id,
            arrival_airport_id,
            Utc.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 5, 1, 11, 30, 0).unwrap(),
            "economy",
        )
    }

    #[test]
    fn test_add_and_get_flight() {
        let mut conn = setup_test_db();
        let sfo = seed_airport(&conn, "SFO", true);
        let jfk = seed_airport(&conn, "JFK", true);

        let flight_pk =
            FlightRepo::add_flight(&mut conn, &sample_flight(sfo, jfk), "new route", 1).unwrap();

        let retrieved = FlightRepo::get_flight(&conn, flight_pk)
            .unwrap()
            .expect("flight should exist");

        assert_eq!(retrieved.flight_pk, Some(flight_pk));
        assert_eq!(retrieved.depart_airport_code.as_deref(), Some("SFO"));
        assert_eq!(retrieved.arrival_airport_name.as_deref(), Some("JFK International"));
    }

    #[test]
    fn test_get_missing_flight_is_none() {
        let conn = setup_test_db();
        assert!(FlightRepo::get_flight(&conn, 404).unwrap().is_none());
    }

    #[test]
    fn test_update_unknown_pk_is_write_conflict() {
        let mut conn = setup_test_db();
        let sfo = seed_airport(&conn, "SFO", true);
        let jfk = seed_airport(&conn, "JFK", true);

        let mut flight = sample_flight(sfo, jfk);
        flight.flight_pk = Some(9999);

        let err = FlightRepo::update_flight(&mut conn, &flight, "no-op", 1).unwrap_err();
        assert_eq!(err.code(), "ERR_WRITE_CONFLICT");
    }
}
