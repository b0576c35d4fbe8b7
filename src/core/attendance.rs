//! Attendance read path: validate the requested dates, load stamps and run
//! them through the calculator. Never writes.

use crate::core::logic::Core;
use crate::db::store::StampStore;
use crate::errors::AttendanceError;
use crate::models::attendance::{AttendanceRecord, AttendanceReport};
use crate::utils::date::parse_strict_date;
use chrono::{NaiveDate, TimeZone};

pub struct AttendanceLogic;

impl AttendanceLogic {
    /// Attendance record for one `YYYY-MM-DD` date.
    pub fn get_by_date<S: StampStore + ?Sized, Tz: TimeZone>(
        store: &S,
        tz: &Tz,
        date: &str,
    ) -> Result<AttendanceRecord, AttendanceError> {
        let date = validate_date(date, "Date")?;

        let stamp = store
            .find_by_date(date)?
            .ok_or(AttendanceError::NotFound { date })?;

        Ok(Core::from_stamp(tz, &stamp))
    }

    /// Records for `[from, to]` (inclusive, ascending) plus their summary.
    pub fn get_by_date_range<S: StampStore + ?Sized, Tz: TimeZone>(
        store: &S,
        tz: &Tz,
        from: &str,
        to: &str,
    ) -> Result<AttendanceReport, AttendanceError> {
        let from = validate_date(from, "From date")?;
        let to = validate_date(to, "To date")?;

        if from > to {
            return Err(AttendanceError::InvalidDateRange { from, to });
        }

        Self::report(store, tz, from, to)
    }

    /// Same as `get_by_date_range` for already-parsed bounds.
    pub fn report<S: StampStore + ?Sized, Tz: TimeZone>(
        store: &S,
        tz: &Tz,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<AttendanceReport, AttendanceError> {
        if from > to {
            return Err(AttendanceError::InvalidDateRange { from, to });
        }

        let records: Vec<AttendanceRecord> = store
            .find_in_range(from, to)?
            .iter()
            .map(|s| Core::from_stamp(tz, s))
            .collect();
        let summary = Core::summarize(&records);

        Ok(AttendanceReport { records, summary })
    }
}

fn validate_date(raw: &str, label: &str) -> Result<NaiveDate, AttendanceError> {
    parse_strict_date(raw)
        .ok_or_else(|| AttendanceError::Validation(format!("{label} must be in YYYY-MM-DD format")))
}
