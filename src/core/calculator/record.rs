use super::{
    calculate_break_minutes, calculate_late_night_minutes, calculate_overtime_minutes,
    calculate_work_minutes,
};
use crate::models::attendance::AttendanceRecord;
use crate::models::stamp::Stamp;
use chrono::TimeZone;

/// Project one stamp into its attendance record.
///
/// `statutory_overtime_minutes` mirrors the daily overtime here; the range
/// figure is recomputed by `calculate_attendance_summary`.
pub fn calculate_attendance_from_stamp<Tz: TimeZone>(tz: &Tz, stamp: &Stamp) -> AttendanceRecord {
    let break_minutes = calculate_break_minutes(stamp.break_start_at, stamp.break_end_at);
    let work_minutes = calculate_work_minutes(stamp.clock_in_at, stamp.clock_out_at, break_minutes);
    let overtime_minutes = calculate_overtime_minutes(work_minutes);
    let late_night_minutes = calculate_late_night_minutes(
        tz,
        stamp.clock_in_at,
        stamp.clock_out_at,
        stamp.break_start_at,
        stamp.break_end_at,
    );

    AttendanceRecord {
        id: stamp.id,
        date: stamp.date,
        clock_in_at: stamp.clock_in_at,
        clock_out_at: stamp.clock_out_at,
        break_start_at: stamp.break_start_at,
        break_end_at: stamp.break_end_at,
        break_minutes,
        work_minutes,
        overtime_minutes,
        late_night_minutes,
        statutory_overtime_minutes: overtime_minutes,
        created_at: stamp.created_at,
        updated_at: stamp.updated_at,
    }
}
