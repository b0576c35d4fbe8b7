// src/export/model.rs

use crate::models::attendance::AttendanceRecord;
use crate::utils::time::format_local_time;
use chrono::FixedOffset;
use serde::Serialize;

/// Flat row for CSV / JSON / XLSX; times are local `HH:MM`, empty when absent.
#[derive(Serialize, Clone, Debug)]
pub struct AttendanceExport {
    pub date: String,
    pub clock_in: String,
    pub break_start: String,
    pub break_end: String,
    pub clock_out: String,
    pub break_minutes: i64,
    pub work_minutes: i64,
    pub overtime_minutes: i64,
    pub late_night_minutes: i64,
    pub statutory_overtime_minutes: i64,
}

impl AttendanceExport {
    pub fn from_record(r: &AttendanceRecord, tz: &FixedOffset) -> Self {
        let local = |t: Option<&chrono::DateTime<chrono::Utc>>| {
            t.map(|t| format_local_time(t, tz)).unwrap_or_default()
        };

        Self {
            date: r.date.format("%Y-%m-%d").to_string(),
            clock_in: format_local_time(&r.clock_in_at, tz),
            break_start: local(r.break_start_at.as_ref()),
            break_end: local(r.break_end_at.as_ref()),
            clock_out: local(r.clock_out_at.as_ref()),
            break_minutes: r.break_minutes,
            work_minutes: r.work_minutes,
            overtime_minutes: r.overtime_minutes,
            late_night_minutes: r.late_night_minutes,
            statutory_overtime_minutes: r.statutory_overtime_minutes,
        }
    }
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "clock_in",
        "break_start",
        "break_end",
        "clock_out",
        "break_minutes",
        "work_minutes",
        "overtime_minutes",
        "late_night_minutes",
        "statutory_overtime_minutes",
    ]
}

pub(crate) fn export_to_row(e: &AttendanceExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.clock_in.clone(),
        e.break_start.clone(),
        e.break_end.clone(),
        e.clock_out.clone(),
        e.break_minutes.to_string(),
        e.work_minutes.to_string(),
        e.overtime_minutes.to_string(),
        e.late_night_minutes.to_string(),
        e.statutory_overtime_minutes.to_string(),
    ]
}
