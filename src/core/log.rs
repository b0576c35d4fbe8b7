use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));
    re.replace_all(s, "").into_owned()
}

/// ANSI colour of a log operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "clock_in" => Colour::Green,
        "clock_out" => Colour::Red,
        "break_start" | "break_end" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|e| display_date(e).len())
            .max()
            .unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for e in &entries {
            let colored = paint_op_target(e);
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                display_date(e),
                colored,
                padding,
                e.message,
            );
        }

        Ok(())
    }
}

fn display_date(e: &LogEntry) -> String {
    chrono::DateTime::parse_from_rfc3339(&e.date)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| e.date.clone())
}

fn op_target(e: &LogEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

/// Operation painted, target plain, truncated to `MAX_OP_WIDTH` visible chars.
fn paint_op_target(e: &LogEntry) -> String {
    let visible = op_target(e);
    let truncated = if visible.chars().count() > MAX_OP_WIDTH {
        let mut s: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    let color = color_for_operation(&e.operation);
    match truncated.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(operation: &str, target: &str) -> LogEntry {
        LogEntry {
            id: 1,
            date: "2025-01-24T09:00:00+09:00".into(),
            operation: operation.into(),
            target: target.into(),
            message: "msg".into(),
        }
    }

    #[test]
    fn painted_text_keeps_visible_content() {
        let e = entry("clock_in", "2025-01-24");
        assert_eq!(strip_ansi(&paint_op_target(&e)), "clock_in (2025-01-24)");
    }

    #[test]
    fn long_targets_are_truncated() {
        let e = entry("backup", &"x".repeat(100));
        let visible = strip_ansi(&paint_op_target(&e));
        assert_eq!(visible.chars().count(), MAX_OP_WIDTH);
        assert!(visible.ends_with("..."));
    }
}
