use crate::cli::context::Context;
use crate::core::attendance::AttendanceLogic;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceRecord, AttendanceSummary};
use crate::ui::messages::{header, warning};
use crate::utils::colors::{RESET, color_for_extra, colorize_optional};
use crate::utils::date::{month_bounds, parse_period, week_bounds};
use crate::utils::formatting::{bold, rule};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_local_time, format_minutes, format_optional_time};
use chrono::{FixedOffset, NaiveDate};

pub struct ReportArgs<'a> {
    pub period: &'a Option<String>,
    pub from: &'a Option<String>,
    pub to: &'a Option<String>,
    pub week: bool,
    pub json: bool,
}

pub fn handle(ctx: &Context, args: ReportArgs<'_>) -> AppResult<()> {
    let pool = ctx.open_db()?;
    let store = pool.store();

    let report = match (args.from, args.to) {
        (Some(from), Some(to)) => AttendanceLogic::get_by_date_range(&store, &ctx.tz, from, to)?,
        _ => {
            let (from, to) = resolve_bounds(ctx, args.period, args.week)?;
            AttendanceLogic::report(&store, &ctx.tz, from, to)?
        }
    };

    if args.json {
        let out =
            serde_json::to_string_pretty(&report).map_err(|e| AppError::Export(e.to_string()))?;
        println!("{out}");
        return Ok(());
    }

    if report.records.is_empty() {
        warning("No attendance records for the selected period.");
        return Ok(());
    }

    let mut table = records_table();
    for r in &report.records {
        table.add_row(record_row(r, &ctx.tz));
    }

    print!("{}", table.render());
    println!("{}", rule(&ctx.cfg.separator_char, 72));
    print_summary(&report.summary);

    Ok(())
}

fn resolve_bounds(
    ctx: &Context,
    period: &Option<String>,
    week: bool,
) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some(p) = period {
        return parse_period(p).map_err(AppError::InvalidDate);
    }
    if week {
        return Ok(week_bounds(ctx.today()));
    }
    Ok(month_bounds(ctx.today()))
}

pub(crate) fn records_table() -> Table {
    Table::new(
        ["DATE", "IN", "BREAK", "OUT", "BRK", "WORK", "OVER", "NIGHT"]
            .iter()
            .map(|h| Column::new(h))
            .collect(),
    )
}

pub(crate) fn record_row(r: &AttendanceRecord, tz: &FixedOffset) -> Vec<String> {
    let brk = match (&r.break_start_at, &r.break_end_at) {
        (Some(s), e) => format!(
            "{}-{}",
            format_local_time(s, tz),
            format_optional_time(e.as_ref(), tz)
        ),
        (None, _) => "--:--".to_string(),
    };

    vec![
        r.date.format("%Y-%m-%d").to_string(),
        format_local_time(&r.clock_in_at, tz),
        colorize_optional(&brk),
        colorize_optional(&format_optional_time(r.clock_out_at.as_ref(), tz)),
        colorize_optional(&format_minutes(r.break_minutes)),
        format_minutes(r.work_minutes),
        extra(r.overtime_minutes),
        extra(r.late_night_minutes),
    ]
}

fn extra(minutes: i64) -> String {
    format!("{}{}{}", color_for_extra(minutes), format_minutes(minutes), RESET)
}

pub(crate) fn print_summary(s: &AttendanceSummary) {
    header("Summary");
    println!("{:<22}{}", "Work days:", bold(&s.work_days.to_string()));
    let lines = [
        ("Worked:", s.total_work_minutes),
        ("Breaks:", s.total_break_minutes),
        ("Overtime (daily):", s.total_overtime_minutes),
        ("Late night:", s.total_late_night_minutes),
        ("Statutory overtime:", s.total_statutory_overtime_minutes),
    ];
    for (label, minutes) in lines {
        println!("{:<22}{}", label, mins2readable(minutes, false, false));
    }
}
