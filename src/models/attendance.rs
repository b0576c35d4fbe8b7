use super::stamp::StampId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Per-day attendance: one stamp plus the minute figures derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: StampId,
    pub date: NaiveDate,
    pub clock_in_at: DateTime<Utc>,
    pub clock_out_at: Option<DateTime<Utc>>,
    pub break_start_at: Option<DateTime<Utc>>,
    pub break_end_at: Option<DateTime<Utc>>,
    pub break_minutes: i64,
    pub work_minutes: i64,
    pub overtime_minutes: i64,   // beyond 480 min on this day
    pub late_night_minutes: i64, // 22:00-05:00 local
    pub statutory_overtime_minutes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Totals over a queried range of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub total_work_minutes: i64,
    pub total_break_minutes: i64,
    pub total_overtime_minutes: i64,
    pub total_late_night_minutes: i64,
    pub total_statutory_overtime_minutes: i64,
    pub work_days: usize,
}

/// Records (ascending by date) together with their summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceReport {
    pub records: Vec<AttendanceRecord>,
    pub summary: AttendanceSummary,
}
