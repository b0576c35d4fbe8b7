//! Late-night premium minutes (22:00-05:00 local wall clock).
//!
//! The shift is walked one minute at a time and each step is classified by
//! its *local* hour, so shifts crossing midnight (or a DST change) need no
//! special casing.

use super::{LATE_NIGHT_END_HOUR, LATE_NIGHT_START_HOUR};
use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};

pub fn is_late_night_hour(hour: u32) -> bool {
    hour >= LATE_NIGHT_START_HOUR || hour < LATE_NIGHT_END_HOUR
}

/// Minutes of `[clock_in_at, clock_out_at)` whose local hour in `tz` falls in
/// the late-night window, excluding the closed break `[break_start_at,
/// break_end_at)`.
pub fn calculate_late_night_minutes<Tz: TimeZone>(
    tz: &Tz,
    clock_in_at: DateTime<Utc>,
    clock_out_at: Option<DateTime<Utc>>,
    break_start_at: Option<DateTime<Utc>>,
    break_end_at: Option<DateTime<Utc>>,
) -> i64 {
    let Some(clock_out_at) = clock_out_at else {
        return 0;
    };

    let on_break = |t: DateTime<Utc>| match (break_start_at, break_end_at) {
        (Some(start), Some(end)) => t >= start && t < end,
        _ => false,
    };

    let step = Duration::minutes(1);
    let mut minutes = 0;
    let mut t = clock_in_at;

    while t < clock_out_at {
        let hour = t.with_timezone(tz).hour();
        if is_late_night_hour(hour) && !on_break(t) {
            minutes += 1;
        }
        t += step;
    }

    minutes
}
