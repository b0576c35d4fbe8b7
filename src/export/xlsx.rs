// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{export_to_row, get_headers};
use crate::export::{AttendanceExport, notify_export_success};
use crate::models::attendance::AttendanceSummary;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with banded rows, auto column widths and a totals row.
pub(crate) fn export_xlsx(
    rows: &[AttendanceExport],
    summary: &AttendanceSummary,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, ev) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in export_to_row(ev).iter().enumerate() {
            write_cell(worksheet, row, col as u16, value, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    // ---------------------------
    // Totals
    // ---------------------------
    let total_row = (rows.len() + 1) as u32;
    let total_format = Format::new().set_bold().set_border(FormatBorder::Thin);
    let totals = [
        (0u16, format!("total ({} days)", summary.work_days)),
        (5, summary.total_break_minutes.to_string()),
        (6, summary.total_work_minutes.to_string()),
        (7, summary.total_overtime_minutes.to_string()),
        (8, summary.total_late_night_minutes.to_string()),
        (9, summary.total_statutory_overtime_minutes.to_string()),
    ];
    for (col, value) in totals {
        match value.parse::<f64>() {
            Ok(n) => worksheet.write_with_format(total_row, col, n, &total_format),
            Err(_) => worksheet.write_with_format(total_row, col, value.as_str(), &total_format),
        }
        .map_err(to_export_error)?;
        col_widths[col as usize] = col_widths[col as usize].max(UnicodeWidthStr::width(value.as_str()));
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Minute columns are written as numbers, everything else as text.
fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Ok(num) = s.parse::<f64>() {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &base)
        .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
