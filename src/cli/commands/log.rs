use crate::cli::context::Context;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(ctx: &Context, print: bool) -> AppResult<()> {
    if !print {
        info("Use `log --print` to show the internal log.");
        return Ok(());
    }

    let pool = ctx.open_db()?;
    LogLogic::print_log(&pool)
}
