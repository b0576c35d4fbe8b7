use crate::cli::context::Context;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};

pub fn handle(
    ctx: &Context,
    format: ExportFormat,
    file: &str,
    range: Option<&str>,
    force: bool,
) -> AppResult<()> {
    let pool = ctx.open_db()?;
    ExportLogic::export(&pool.store(), &ctx.tz, format, file, range, force)
}
