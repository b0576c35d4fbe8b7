// src/export/logic.rs

use crate::core::attendance::AttendanceLogic;
use crate::db::store::StampStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::AttendanceExport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::{info, warning};
use crate::utils::date::parse_period;
use crate::utils::path::expand_tilde;
use chrono::{FixedOffset, NaiveDate};
use std::io;

/// Bounds used when no range is given: every date the `date` column can hold.
const ALL_FROM: (i32, u32, u32) = (1, 1, 1);
const ALL_TO: (i32, u32, u32) = (9999, 12, 31);

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export attendance records.
    ///
    /// - `file`: output path, absolute once `~` is expanded
    /// - `range`: `None`, `"all"` or any `report --period` expression
    pub fn export<S: StampStore + ?Sized>(
        store: &S,
        tz: &FixedOffset,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        let (from, to) = resolve_range(range)?;
        let report = AttendanceLogic::report(store, tz, from, to)?;

        if report.records.is_empty() {
            warning("No attendance records found for selected range.");
            return Ok(());
        }

        ensure_writable(&path, force)?;
        info(format!(
            "{} record(s) selected for {} export",
            report.records.len(),
            format.as_str()
        ));

        let rows: Vec<AttendanceExport> = report
            .records
            .iter()
            .map(|r| AttendanceExport::from_record(r, tz))
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path),
            ExportFormat::Json => export_json(&rows, &report.summary, &path),
            ExportFormat::Xlsx => export_xlsx(&rows, &report.summary, &path),
        }
    }
}

fn resolve_range(range: Option<&str>) -> AppResult<(NaiveDate, NaiveDate)> {
    match range {
        Some(r) if !r.eq_ignore_ascii_case("all") => {
            parse_period(r).map_err(AppError::InvalidDate)
        }
        _ => {
            let ymd = |(y, m, d): (i32, u32, u32)| {
                NaiveDate::from_ymd_opt(y, m, d)
                    .ok_or_else(|| AppError::InvalidDate(format!("{y:04}-{m:02}-{d:02}")))
            };
            Ok((ymd(ALL_FROM)?, ymd(ALL_TO)?))
        }
    }
}
