use crate::cli::context::Context;
use crate::db::migrate::{applied_versions, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

pub fn handle(ctx: &Context, migrate: bool, check: bool, vacuum: bool) -> AppResult<()> {
    let pool = DbPool::new(&ctx.cfg.database)?;

    if migrate {
        info("Running migrations…");
        run_pending_migrations(&pool.conn)?;
        for v in applied_versions(&pool.conn)? {
            println!("   {v}");
        }
        success("Migration completed.");
    }

    if check {
        info("Running integrity check…");

        let integrity: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        if integrity == "ok" {
            success("Integrity check passed.");
        } else {
            error(format!("Integrity check failed: {integrity}"));
        }
    }

    if vacuum {
        info("Running VACUUM…");
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    Ok(())
}
