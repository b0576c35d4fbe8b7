use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// Calendar date of `now` in the display timezone: the daily boundary is a
/// business concept, stored instants stay in UTC.
pub fn business_date<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    now.with_timezone(tz).date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Exactly `YYYY-MM-DD` (surrounding blanks allowed) and a real calendar day.
pub fn parse_strict_date(s: &str) -> Option<NaiveDate> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static regex"));

    let s = s.trim();
    if !re.is_match(s) {
        return None;
    }
    parse_date(s)
}

/// Parse a period expression into inclusive bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let p = p.trim();

    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());
        if start.len() != end.len() {
            return Err(format!("Invalid period '{p}': start and end must have same format"));
        }
        let (d1, _) = single_period(start)?;
        let (_, d2) = single_period(end)?;
        return Ok((d1, d2));
    }

    single_period(p)
}

fn single_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let invalid = || format!("Invalid period: {p}");

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            Ok((d1, last_day_of_month(d1)))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_strict_date(p).ok_or_else(invalid)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

pub fn first_day_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

pub fn last_day_of_month(d: NaiveDate) -> NaiveDate {
    let first = first_day_of_month(d);
    first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(d)
}

/// Monday..Sunday week containing `d`.
pub fn week_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let back = u64::from(d.weekday().num_days_from_monday());
    let monday = d.checked_sub_days(Days::new(back)).unwrap_or(d);
    let sunday = monday.checked_add_days(Days::new(6)).unwrap_or(d);
    (monday, sunday)
}

pub fn month_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    (first_day_of_month(d), last_day_of_month(d))
}
