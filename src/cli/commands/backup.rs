use crate::cli::context::Context;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

pub fn handle(ctx: &Context, file: &str, compress: bool, force: bool) -> AppResult<()> {
    BackupLogic::backup(&ctx.cfg.database, file, compress, force)?;
    Ok(())
}
