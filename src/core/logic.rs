use crate::core::calculator::{calculate_attendance_from_stamp, calculate_attendance_summary};
use crate::models::attendance::{AttendanceRecord, AttendanceSummary};
use crate::models::stamp::Stamp;
use chrono::TimeZone;

pub struct Core;

impl Core {
    pub fn from_stamp<Tz: TimeZone>(tz: &Tz, stamp: &Stamp) -> AttendanceRecord {
        calculate_attendance_from_stamp(tz, stamp)
    }

    pub fn summarize(records: &[AttendanceRecord]) -> AttendanceSummary {
        calculate_attendance_summary(records)
    }
}
