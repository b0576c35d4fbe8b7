use super::WEEKLY_STATUTORY_LIMIT_MINUTES;
use crate::models::attendance::{AttendanceRecord, AttendanceSummary};

/// Sum a range of records.
///
/// Statutory overtime is NOT the sum of the per-record values: it is
/// recomputed as the range's total work beyond 2400 minutes, whatever span
/// the caller queried.
pub fn calculate_attendance_summary(records: &[AttendanceRecord]) -> AttendanceSummary {
    let summary = records
        .iter()
        .fold(AttendanceSummary::default(), |acc, r| AttendanceSummary {
            total_work_minutes: acc.total_work_minutes + r.work_minutes,
            total_break_minutes: acc.total_break_minutes + r.break_minutes,
            total_overtime_minutes: acc.total_overtime_minutes + r.overtime_minutes,
            total_late_night_minutes: acc.total_late_night_minutes + r.late_night_minutes,
            total_statutory_overtime_minutes: acc.total_statutory_overtime_minutes
                + r.statutory_overtime_minutes,
            work_days: acc.work_days + 1,
        });

    AttendanceSummary {
        total_statutory_overtime_minutes: (summary.total_work_minutes
            - WEEKLY_STATUTORY_LIMIT_MINUTES)
            .max(0),
        ..summary
    }
}
