/// ANSI color helper utilities for terminal output.
use crate::models::work_status::WorkStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn color_for_status(status: WorkStatus) -> &'static str {
    match status {
        WorkStatus::NotWorking => GREY,
        WorkStatus::Working => GREEN,
        WorkStatus::OnBreak => YELLOW,
        WorkStatus::ClockedOut => BLUE,
    }
}

/// Overtime / late-night figures: highlighted when non-zero.
pub fn color_for_extra(minutes: i64) -> &'static str {
    if minutes > 0 { MAGENTA } else { RESET }
}

/// Grey out empty placeholders ("--:--", "00:00").
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "00:00" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
