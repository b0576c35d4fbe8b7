//! Abstract stamp storage consumed by the state machine and the read path.

use crate::errors::StoreError;
use crate::models::stamp::{NewStamp, Stamp, StampId};
use chrono::{DateTime, NaiveDate, Utc};

/// One operation per need of the core. Implementations own durability and
/// must reject lost updates (two writers on the same date) with
/// `StoreError::Conflict` rather than overwrite.
pub trait StampStore {
    fn find_by_date(&self, date: NaiveDate) -> Result<Option<Stamp>, StoreError>;

    fn create(&self, new: NewStamp) -> Result<Stamp, StoreError>;

    fn set_clock_out(&self, id: StampId, clock_out_at: DateTime<Utc>) -> Result<Stamp, StoreError>;

    /// Opens a new break; a previously closed break interval is replaced.
    fn set_break_start(
        &self,
        id: StampId,
        break_start_at: DateTime<Utc>,
    ) -> Result<Stamp, StoreError>;

    fn set_break_end(&self, id: StampId, break_end_at: DateTime<Utc>) -> Result<Stamp, StoreError>;

    /// Stamps with `from <= date <= to`, ascending by date.
    fn find_in_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Stamp>, StoreError>;
}
