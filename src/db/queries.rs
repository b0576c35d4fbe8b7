//! SQLite implementation of `StampStore`.

use crate::db::store::StampStore;
use crate::errors::StoreError;
use crate::models::stamp::{NewStamp, Stamp, StampId};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rusqlite::{Connection, ErrorCode, OptionalExtension, Row, params};

const SELECT_STAMP: &str = "SELECT id, date, clock_in_at, clock_out_at, break_start_at, break_end_at, created_at, updated_at
     FROM stamps";

pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn load_by_id(&self, id: StampId) -> Result<Option<Stamp>, StoreError> {
        let sql = format!("{SELECT_STAMP} WHERE id = ?1");
        let stamp = self
            .conn
            .query_row(&sql, [id.get()], map_row)
            .optional()?;
        Ok(stamp)
    }

    /// Run a guarded `UPDATE` and reload the row.
    ///
    /// Zero affected rows means the guard no longer holds (or the row is
    /// gone): report it instead of silently overwriting.
    fn guarded_update(
        &self,
        id: StampId,
        sql: &str,
        at: DateTime<Utc>,
    ) -> Result<Stamp, StoreError> {
        let changed = self.conn.execute(sql, params![fmt_ts(&at), id.get()])?;

        match (changed, self.load_by_id(id)?) {
            (0, Some(current)) => Err(StoreError::Conflict { date: current.date }),
            (_, Some(updated)) => Ok(updated),
            (_, None) => Err(StoreError::Missing { id }),
        }
    }
}

impl StampStore for SqliteStore<'_> {
    fn find_by_date(&self, date: NaiveDate) -> Result<Option<Stamp>, StoreError> {
        let sql = format!("{SELECT_STAMP} WHERE date = ?1");
        let stamp = self
            .conn
            .query_row(&sql, [fmt_date(&date)], map_row)
            .optional()?;
        Ok(stamp)
    }

    fn create(&self, new: NewStamp) -> Result<Stamp, StoreError> {
        let at = fmt_ts(&new.clock_in_at);

        let inserted = self.conn.execute(
            "INSERT INTO stamps (date, clock_in_at, clock_out_at, break_start_at, break_end_at, created_at, updated_at)
             VALUES (?1, ?2, NULL, NULL, NULL, ?2, ?2)",
            params![fmt_date(&new.date), at],
        );

        match inserted {
            Ok(_) => {}
            // UNIQUE(date): another clock-in won the race
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
                return Err(StoreError::Conflict { date: new.date });
            }
            Err(e) => return Err(e.into()),
        }

        let id = StampId::new(self.conn.last_insert_rowid());
        self.load_by_id(id)?.ok_or(StoreError::Missing { id })
    }

    fn set_clock_out(&self, id: StampId, clock_out_at: DateTime<Utc>) -> Result<Stamp, StoreError> {
        self.guarded_update(
            id,
            "UPDATE stamps
             SET clock_out_at = ?1, updated_at = ?1
             WHERE id = ?2
               AND clock_out_at IS NULL
               AND NOT (break_start_at IS NOT NULL AND break_end_at IS NULL)",
            clock_out_at,
        )
    }

    fn set_break_start(
        &self,
        id: StampId,
        break_start_at: DateTime<Utc>,
    ) -> Result<Stamp, StoreError> {
        self.guarded_update(
            id,
            "UPDATE stamps
             SET break_start_at = ?1, break_end_at = NULL, updated_at = ?1
             WHERE id = ?2
               AND clock_out_at IS NULL
               AND (break_start_at IS NULL OR break_end_at IS NOT NULL)",
            break_start_at,
        )
    }

    fn set_break_end(&self, id: StampId, break_end_at: DateTime<Utc>) -> Result<Stamp, StoreError> {
        self.guarded_update(
            id,
            "UPDATE stamps
             SET break_end_at = ?1, updated_at = ?1
             WHERE id = ?2
               AND break_start_at IS NOT NULL
               AND break_end_at IS NULL",
            break_end_at,
        )
    }

    fn find_in_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Stamp>, StoreError> {
        let sql = format!("{SELECT_STAMP} WHERE date BETWEEN ?1 AND ?2 ORDER BY date ASC");
        let mut stmt = self.conn.prepare(&sql)?;

        let rows = stmt.query_map(params![fmt_date(&from), fmt_date(&to)], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

pub fn map_row(row: &Row) -> rusqlite::Result<Stamp> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| corrupt(1, format!("invalid date: {date_str}")))?;

    Ok(Stamp {
        id: StampId::new(row.get("id")?),
        date,
        clock_in_at: required_ts(row, 2, "clock_in_at")?,
        clock_out_at: optional_ts(row, 3, "clock_out_at")?,
        break_start_at: optional_ts(row, 4, "break_start_at")?,
        break_end_at: optional_ts(row, 5, "break_end_at")?,
        created_at: required_ts(row, 6, "created_at")?,
        updated_at: required_ts(row, 7, "updated_at")?,
    })
}

fn required_ts(row: &Row, idx: usize, col: &str) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(col)?;
    parse_ts(&raw).ok_or_else(|| corrupt(idx, format!("invalid {col}: {raw}")))
}

fn optional_ts(row: &Row, idx: usize, col: &str) -> rusqlite::Result<Option<DateTime<Utc>>> {
    let raw: Option<String> = row.get(col)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_ts(&s)
            .map(Some)
            .ok_or_else(|| corrupt(idx, format!("invalid {col}: {s}"))),
    }
}

fn corrupt(idx: usize, msg: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        rusqlite::types::Type::Text,
        Box::new(StoreError::Corrupt(msg)),
    )
}

/// Stored form: RFC 3339, UTC, millisecond precision (sorts lexicographically).
pub fn fmt_ts(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_ts(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn fmt_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
