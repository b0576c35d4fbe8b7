use crate::cli::context::Context;
use crate::cli::commands::report::{print_summary, record_row, records_table};
use crate::core::attendance::AttendanceLogic;
use crate::core::logic::Core;
use crate::core::stamp::StampLogic;
use crate::errors::{AppError, AppResult};

pub fn handle(ctx: &Context, date: &str, json: bool, raw: bool) -> AppResult<()> {
    let pool = ctx.open_db()?;
    let store = pool.store();

    if raw {
        let stamp = StampLogic::find(&store, date)?;
        let out =
            serde_json::to_string_pretty(&stamp).map_err(|e| AppError::Export(e.to_string()))?;
        println!("{out}");
        return Ok(());
    }

    let record = AttendanceLogic::get_by_date(&store, &ctx.tz, date)?;

    if json {
        let out =
            serde_json::to_string_pretty(&record).map_err(|e| AppError::Export(e.to_string()))?;
        println!("{out}");
        return Ok(());
    }

    let mut table = records_table();
    table.add_row(record_row(&record, &ctx.tz));
    print!("{}", table.render());
    print_summary(&Core::summarize(std::slice::from_ref(&record)));

    Ok(())
}
