use super::{STANDARD_WORK_MINUTES, floor_minutes};
use chrono::{DateTime, Utc};

/// Worked minutes = elapsed (in → out) minus break.
///
/// An open shift (no clock-out yet) counts as 0: mid-shift time is not
/// estimated.
pub fn calculate_work_minutes(
    clock_in_at: DateTime<Utc>,
    clock_out_at: Option<DateTime<Utc>>,
    break_minutes: i64,
) -> i64 {
    let Some(clock_out_at) = clock_out_at else {
        return 0;
    };

    (floor_minutes(clock_in_at, clock_out_at) - break_minutes).max(0)
}

/// Per-day overtime: minutes beyond the standard 8h day.
pub fn calculate_overtime_minutes(work_minutes: i64) -> i64 {
    (work_minutes - STANDARD_WORK_MINUTES).max(0)
}
