//! Time utilities: instants, UTC offsets, minute formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// RFC 3339 instant, normalised to UTC.
pub fn parse_instant(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// `UTC`, `Z`, `+09:00`, `-0530`, `+9`...
pub fn parse_utc_offset(s: &str) -> Option<FixedOffset> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"^([+-])(\d{1,2})(?::?(\d{2}))?$").expect("static regex")
    });

    let s = s.trim();
    if s.eq_ignore_ascii_case("utc") || s.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }

    let caps = re.captures(s)?;
    let hours: i32 = caps[2].parse().ok()?;
    let minutes: i32 = caps.get(3).map_or(Some(0), |m| m.as_str().parse().ok())?;
    if hours > 14 || minutes > 59 {
        return None;
    }

    let secs = hours * 3600 + minutes * 60;
    if &caps[1] == "-" {
        FixedOffset::west_opt(secs)
    } else {
        FixedOffset::east_opt(secs)
    }
}

/// `HH:MM` of an instant in `tz`.
pub fn format_local_time<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format("%H:%M").to_string()
}

pub fn format_optional_time<Tz: TimeZone>(at: Option<&DateTime<Utc>>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.map(|t| format_local_time(t, tz))
        .unwrap_or_else(|| "--:--".to_string())
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
