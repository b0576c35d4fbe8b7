//! Attendance Calculation Engine.
//!
//! Pure, total functions: every input yields a figure, degenerate or
//! inverted timestamps clamp to zero instead of failing.

pub mod breaks;
pub mod late_night;
pub mod record;
pub mod summary;
pub mod worked;

pub use breaks::calculate_break_minutes;
pub use late_night::calculate_late_night_minutes;
pub use record::calculate_attendance_from_stamp;
pub use summary::calculate_attendance_summary;
pub use worked::{calculate_overtime_minutes, calculate_work_minutes};

/// Standard working day: 8h.
pub const STANDARD_WORK_MINUTES: i64 = 480;
/// Late-night window start (inclusive, local hour).
pub const LATE_NIGHT_START_HOUR: u32 = 22;
/// Late-night window end (exclusive, local hour).
pub const LATE_NIGHT_END_HOUR: u32 = 5;
/// Statutory limit: 40h.
pub const WEEKLY_STATUTORY_LIMIT_MINUTES: i64 = 2400;

use chrono::{DateTime, Utc};

/// Whole minutes from `start` to `end`, floored (negative when inverted).
pub(crate) fn floor_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_milliseconds().div_euclid(60_000)
}
