//! Stamp State Machine.
//!
//! ```text
//! ∅ --clock_in--> Working --break_start--> OnBreak --break_end--> Working
//! Working --clock_out--> ClockedOut
//! OnBreak --clock_out--> rejected (StillOnBreak)
//! ```
//!
//! Every operation reads the day's stamp once, checks its precondition and
//! asks the store for at most one write. `today` and `now` come from the
//! caller so the machine can run against a fixed clock.

use crate::db::store::StampStore;
use crate::errors::StampError;
use crate::models::stamp::{NewStamp, Stamp};
use crate::models::stamp_action::StampAction;
use crate::models::work_status::{CurrentStatus, WorkStatus};
use crate::utils::date::parse_strict_date;
use chrono::{DateTime, NaiveDate, Utc};

pub struct StampLogic;

impl StampLogic {
    pub fn get_status<S: StampStore + ?Sized>(
        store: &S,
        today: NaiveDate,
    ) -> Result<CurrentStatus, StampError> {
        let stamp = store.find_by_date(today)?;
        Ok(CurrentStatus {
            status: WorkStatus::from_stamp(stamp.as_ref()),
            stamp,
        })
    }

    pub fn clock_in<S: StampStore + ?Sized>(
        store: &S,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Stamp, StampError> {
        if store.find_by_date(today)?.is_some() {
            return Err(StampError::AlreadyClockedIn { date: today });
        }

        Ok(store.create(NewStamp {
            date: today,
            clock_in_at: now,
        })?)
    }

    pub fn clock_out<S: StampStore + ?Sized>(
        store: &S,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Stamp, StampError> {
        let stamp = Self::require_stamp(store, today)?;

        if stamp.is_clocked_out() {
            return Err(StampError::AlreadyClockedOut { date: today });
        }
        // a break has to be closed explicitly before leaving
        if stamp.has_open_break() {
            return Err(StampError::StillOnBreak { date: today });
        }

        Ok(store.set_clock_out(stamp.id, now)?)
    }

    pub fn break_start<S: StampStore + ?Sized>(
        store: &S,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Stamp, StampError> {
        let stamp = Self::require_stamp(store, today)?;

        if stamp.is_clocked_out() {
            return Err(StampError::AlreadyClockedOut { date: today });
        }
        if stamp.has_open_break() {
            return Err(StampError::AlreadyOnBreak { date: today });
        }

        Ok(store.set_break_start(stamp.id, now)?)
    }

    pub fn break_end<S: StampStore + ?Sized>(
        store: &S,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Stamp, StampError> {
        let stamp = Self::require_stamp(store, today)?;

        // covers both "never started" and "already ended"
        if !stamp.has_open_break() {
            return Err(StampError::NotOnBreak { date: today });
        }

        Ok(store.set_break_end(stamp.id, now)?)
    }

    /// Dispatch a single action to its operation.
    pub fn apply<S: StampStore + ?Sized>(
        store: &S,
        action: StampAction,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Stamp, StampError> {
        match action {
            StampAction::ClockIn => Self::clock_in(store, today, now),
            StampAction::ClockOut => Self::clock_out(store, today, now),
            StampAction::BreakStart => Self::break_start(store, today, now),
            StampAction::BreakEnd => Self::break_end(store, today, now),
        }
    }

    /// Raw stamp for an explicit `YYYY-MM-DD` date.
    pub fn find<S: StampStore + ?Sized>(store: &S, date: &str) -> Result<Stamp, StampError> {
        let date = parse_strict_date(date)
            .ok_or_else(|| StampError::Validation("Date must be in YYYY-MM-DD format".into()))?;

        store
            .find_by_date(date)?
            .ok_or(StampError::StampNotFound { date })
    }

    fn require_stamp<S: StampStore + ?Sized>(
        store: &S,
        today: NaiveDate,
    ) -> Result<Stamp, StampError> {
        store
            .find_by_date(today)?
            .ok_or(StampError::NotClockedIn { date: today })
    }
}
