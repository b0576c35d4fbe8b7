use super::floor_minutes;
use chrono::{DateTime, Utc};

/// Break length in whole minutes; 0 unless both bounds are recorded.
pub fn calculate_break_minutes(
    break_start_at: Option<DateTime<Utc>>,
    break_end_at: Option<DateTime<Utc>>,
) -> i64 {
    match (break_start_at, break_end_at) {
        (Some(start), Some(end)) => floor_minutes(start, end).max(0),
        _ => 0,
    }
}
