use chrono::{FixedOffset, Utc};
use rtimesheet::core::calculator::{
    calculate_attendance_from_stamp, calculate_attendance_summary, calculate_break_minutes,
    calculate_late_night_minutes, calculate_overtime_minutes, calculate_work_minutes,
    late_night::is_late_night_hour,
};
use rtimesheet::models::attendance::{AttendanceRecord, AttendanceSummary};
use rtimesheet::models::stamp::{Stamp, StampId};

mod common;
use common::{date, utc};

fn stamp(
    day: &str,
    clock_in: &str,
    clock_out: Option<&str>,
    brk: Option<(&str, Option<&str>)>,
) -> Stamp {
    Stamp {
        clock_out_at: clock_out.map(utc),
        break_start_at: brk.map(|(s, _)| utc(s)),
        break_end_at: brk.and_then(|(_, e)| e.map(utc)),
        ..Stamp::clocked_in(StampId::new(1), date(day), utc(clock_in))
    }
}

fn tokyo() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).unwrap()
}

#[test]
fn break_requires_both_bounds() {
    let s = utc("2025-01-24T12:00:00Z");
    let e = utc("2025-01-24T12:45:00Z");

    assert_eq!(calculate_break_minutes(Some(s), Some(e)), 45);
    assert_eq!(calculate_break_minutes(Some(s), None), 0);
    assert_eq!(calculate_break_minutes(None, Some(e)), 0);
    assert_eq!(calculate_break_minutes(Some(e), Some(s)), 0);
}

#[test]
fn minutes_are_floored() {
    let brk = calculate_break_minutes(
        Some(utc("2025-01-24T12:00:00Z")),
        Some(utc("2025-01-24T12:00:59.999Z")),
    );
    assert_eq!(brk, 0);

    let work = calculate_work_minutes(
        utc("2025-01-24T09:00:30Z"),
        Some(utc("2025-01-24T17:01:00Z")),
        0,
    );
    assert_eq!(work, 480);
}

#[test]
fn open_shift_counts_zero_work() {
    assert_eq!(calculate_work_minutes(utc("2025-01-24T09:00:00Z"), None, 0), 0);
}

#[test]
fn work_never_negative() {
    let inverted = calculate_work_minutes(
        utc("2025-01-24T18:00:00Z"),
        Some(utc("2025-01-24T09:00:00Z")),
        0,
    );
    assert_eq!(inverted, 0);

    let break_longer_than_shift = calculate_work_minutes(
        utc("2025-01-24T09:00:00Z"),
        Some(utc("2025-01-24T10:00:00Z")),
        90,
    );
    assert_eq!(break_longer_than_shift, 0);
}

#[test]
fn overtime_beyond_eight_hours() {
    assert_eq!(calculate_overtime_minutes(0), 0);
    assert_eq!(calculate_overtime_minutes(480), 0);
    assert_eq!(calculate_overtime_minutes(481), 1);
    assert_eq!(calculate_overtime_minutes(960), 480);
}

#[test]
fn late_night_hours() {
    assert!(is_late_night_hour(22));
    assert!(is_late_night_hour(23));
    assert!(is_late_night_hour(0));
    assert!(is_late_night_hour(4));
    assert!(!is_late_night_hour(5));
    assert!(!is_late_night_hour(21));
}

#[test]
fn late_night_day_shift_is_zero() {
    let mins = calculate_late_night_minutes(
        &Utc,
        utc("2025-01-24T09:00:00Z"),
        Some(utc("2025-01-24T18:00:00Z")),
        None,
        None,
    );
    assert_eq!(mins, 0);
}

#[test]
fn late_night_across_midnight() {
    let mins = calculate_late_night_minutes(
        &Utc,
        utc("2025-01-24T22:00:00Z"),
        Some(utc("2025-01-25T02:00:00Z")),
        None,
        None,
    );
    assert_eq!(mins, 240);
}

#[test]
fn late_night_window_edges() {
    // 21:00-23:00 → only 22:00-23:00
    let evening = calculate_late_night_minutes(
        &Utc,
        utc("2025-01-24T21:00:00Z"),
        Some(utc("2025-01-24T23:00:00Z")),
        None,
        None,
    );
    assert_eq!(evening, 60);

    // 04:00-06:00 → only 04:00-05:00
    let morning = calculate_late_night_minutes(
        &Utc,
        utc("2025-01-24T04:00:00Z"),
        Some(utc("2025-01-24T06:00:00Z")),
        None,
        None,
    );
    assert_eq!(morning, 60);
}

#[test]
fn late_night_excludes_closed_break() {
    // 20:00-02:00 with break 21:30-22:30: 240 late minutes, 30 of them on break
    let mins = calculate_late_night_minutes(
        &Utc,
        utc("2025-01-24T20:00:00Z"),
        Some(utc("2025-01-25T02:00:00Z")),
        Some(utc("2025-01-24T21:30:00Z")),
        Some(utc("2025-01-24T22:30:00Z")),
    );
    assert_eq!(mins, 210);
}

#[test]
fn late_night_ignores_open_break() {
    let mins = calculate_late_night_minutes(
        &Utc,
        utc("2025-01-24T22:00:00Z"),
        Some(utc("2025-01-25T01:00:00Z")),
        Some(utc("2025-01-24T23:00:00Z")),
        None,
    );
    assert_eq!(mins, 180);
}

#[test]
fn late_night_uses_local_hour() {
    // 13:00-17:00 UTC is 22:00-02:00 in +09:00
    let clock_in = utc("2025-01-24T13:00:00Z");
    let clock_out = Some(utc("2025-01-24T17:00:00Z"));

    assert_eq!(
        calculate_late_night_minutes(&tokyo(), clock_in, clock_out, None, None),
        240
    );
    assert_eq!(
        calculate_late_night_minutes(&Utc, clock_in, clock_out, None, None),
        0
    );
}

#[test]
fn late_night_zero_without_clock_out() {
    let mins =
        calculate_late_night_minutes(&Utc, utc("2025-01-24T22:00:00Z"), None, None, None);
    assert_eq!(mins, 0);
}

#[test]
fn record_from_full_day() {
    let s = stamp(
        "2025-01-24",
        "2025-01-24T09:00:00Z",
        Some("2025-01-24T21:00:00Z"),
        Some(("2025-01-24T12:00:00Z", Some("2025-01-24T13:00:00Z"))),
    );

    let r = calculate_attendance_from_stamp(&Utc, &s);

    assert_eq!(r.id, s.id);
    assert_eq!(r.date, s.date);
    assert_eq!(r.clock_in_at, s.clock_in_at);
    assert_eq!(r.break_minutes, 60);
    assert_eq!(r.work_minutes, 660);
    assert_eq!(r.overtime_minutes, 180);
    assert_eq!(r.late_night_minutes, 0);
    assert_eq!(r.statutory_overtime_minutes, r.overtime_minutes);
}

#[test]
fn record_from_open_shift() {
    let s = stamp(
        "2025-01-24",
        "2025-01-24T09:00:00Z",
        None,
        Some(("2025-01-24T12:00:00Z", None)),
    );

    let r = calculate_attendance_from_stamp(&Utc, &s);

    assert_eq!(r.break_minutes, 0);
    assert_eq!(r.work_minutes, 0);
    assert_eq!(r.overtime_minutes, 0);
    assert_eq!(r.late_night_minutes, 0);
}

fn ten_hour_days(n: u32) -> Vec<AttendanceRecord> {
    (1..=n)
        .map(|d| {
            let day = format!("2025-01-{d:02}");
            let clock_in = format!("{day}T08:00:00Z");
            let clock_out = format!("{day}T18:00:00Z");
            let s = stamp(&day, &clock_in, Some(clock_out.as_str()), None);
            calculate_attendance_from_stamp(&Utc, &s)
        })
        .collect()
}

#[test]
fn summary_sums_records() {
    let records = ten_hour_days(2);
    let summary = calculate_attendance_summary(&records);

    assert_eq!(summary.work_days, 2);
    assert_eq!(summary.total_work_minutes, 1200);
    assert_eq!(summary.total_break_minutes, 0);
    assert_eq!(summary.total_overtime_minutes, 240);
    assert_eq!(summary.total_late_night_minutes, 0);
}

#[test]
fn summary_statutory_is_range_total_beyond_forty_hours() {
    // per-record statutory values are 120 each, the summary ignores them
    let two = calculate_attendance_summary(&ten_hour_days(2));
    assert_eq!(two.total_statutory_overtime_minutes, 0);

    let five = calculate_attendance_summary(&ten_hour_days(5));
    assert_eq!(five.total_work_minutes, 3000);
    assert_eq!(five.total_statutory_overtime_minutes, 600);
}

#[test]
fn summary_of_nothing_is_zero() {
    let summary = calculate_attendance_summary(&[]);
    assert_eq!(summary, AttendanceSummary::default());
}

#[test]
fn summary_is_additive_over_splits() {
    let records = ten_hour_days(4);
    let (a, b) = records.split_at(1);

    let whole = calculate_attendance_summary(&records);
    let left = calculate_attendance_summary(a);
    let right = calculate_attendance_summary(b);

    assert_eq!(whole.work_days, left.work_days + right.work_days);
    assert_eq!(
        whole.total_work_minutes,
        left.total_work_minutes + right.total_work_minutes
    );
    assert_eq!(
        whole.total_overtime_minutes,
        left.total_overtime_minutes + right.total_overtime_minutes
    );
}
