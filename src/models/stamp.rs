use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque stamp identifier (row id in the SQLite store).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StampId(i64);

impl StampId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for StampId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One clock record per calendar date.
///
/// A stamp is a frozen value: the state machine never changes one in place,
/// it asks the store for the next value instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stamp {
    pub id: StampId,
    pub date: NaiveDate,                       // ⇔ stamps.date (TEXT "YYYY-MM-DD", UNIQUE)
    pub clock_in_at: DateTime<Utc>,            // ⇔ stamps.clock_in_at (RFC 3339)
    pub clock_out_at: Option<DateTime<Utc>>,   // ⇔ stamps.clock_out_at
    pub break_start_at: Option<DateTime<Utc>>, // ⇔ stamps.break_start_at
    pub break_end_at: Option<DateTime<Utc>>,   // ⇔ stamps.break_end_at
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Stamp {
    /// Freshly clocked-in stamp, every optional field absent.
    pub fn clocked_in(id: StampId, date: NaiveDate, clock_in_at: DateTime<Utc>) -> Self {
        Self {
            id,
            date,
            clock_in_at,
            clock_out_at: None,
            break_start_at: None,
            break_end_at: None,
            created_at: clock_in_at,
            updated_at: clock_in_at,
        }
    }

    /// `break_start_at` set and `break_end_at` still absent.
    pub fn has_open_break(&self) -> bool {
        self.break_start_at.is_some() && self.break_end_at.is_none()
    }

    pub fn is_clocked_out(&self) -> bool {
        self.clock_out_at.is_some()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Input of `StampStore::create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewStamp {
    pub date: NaiveDate,
    pub clock_in_at: DateTime<Utc>,
}
