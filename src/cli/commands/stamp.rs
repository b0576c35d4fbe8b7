use crate::cli::context::Context;
use crate::core::stamp::StampLogic;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::stamp_action::StampAction;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::time::{format_local_time, format_optional_time};

/// `status`: today's work status and stamp.
pub fn handle_status(ctx: &Context, json: bool) -> AppResult<()> {
    let pool = ctx.open_db()?;
    let today = ctx.today();

    let current = StampLogic::get_status(&pool.store(), today)?;

    if json {
        let out =
            serde_json::to_string_pretty(&current).map_err(|e| AppError::Export(e.to_string()))?;
        println!("{out}");
        return Ok(());
    }

    let color = color_for_status(current.status);
    println!("📅 {}  {}{}{}", today, color, current.status.as_str(), RESET);

    if let Some(stamp) = &current.stamp {
        println!("   in     : {}", format_local_time(&stamp.clock_in_at, &ctx.tz));
        println!(
            "   break  : {} → {}",
            format_optional_time(stamp.break_start_at.as_ref(), &ctx.tz),
            format_optional_time(stamp.break_end_at.as_ref(), &ctx.tz),
        );
        println!(
            "   out    : {}",
            format_optional_time(stamp.clock_out_at.as_ref(), &ctx.tz)
        );
    }

    Ok(())
}

/// `clock-in`, `clock-out`, `break-start`, `break-end`.
pub fn handle_action(ctx: &Context, action: StampAction) -> AppResult<()> {
    let pool = ctx.open_db()?;
    let today = ctx.today();

    let stamp = StampLogic::apply(&pool.store(), action, today, ctx.now)?;

    let msg = format!(
        "{} at {} ({})",
        action.label(),
        format_local_time(&ctx.now, &ctx.tz),
        stamp.date_str()
    );

    // audit trail is best effort
    if let Err(e) = ttlog(&pool.conn, action.as_str(), &stamp.date_str(), &msg) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success(msg);
    Ok(())
}
