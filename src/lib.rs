//! rTimesheet library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::report::ReportArgs;
use cli::context::Context;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::stamp_action::StampAction;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    use crate::cli::commands as cmd;

    match &cli.command {
        Commands::Init => cmd::init::handle(cli),
        Commands::Config {
            print_config,
            edit_config,
            editor,
        } => cmd::config::handle(ctx, *print_config, *edit_config, editor.as_deref()),
        Commands::Status { json } => cmd::stamp::handle_status(ctx, *json),
        Commands::ClockIn => cmd::stamp::handle_action(ctx, StampAction::ClockIn),
        Commands::ClockOut => cmd::stamp::handle_action(ctx, StampAction::ClockOut),
        Commands::BreakStart => cmd::stamp::handle_action(ctx, StampAction::BreakStart),
        Commands::BreakEnd => cmd::stamp::handle_action(ctx, StampAction::BreakEnd),
        Commands::Day { date, json, raw } => cmd::day::handle(ctx, date, *json, *raw),
        Commands::Report {
            period,
            from,
            to,
            week,
            json,
        } => cmd::report::handle(
            ctx,
            ReportArgs {
                period,
                from,
                to,
                week: *week,
                json: *json,
            },
        ),
        Commands::Export {
            format,
            file,
            range,
            force,
        } => cmd::export::handle(ctx, *format, file, range.as_deref(), *force),
        Commands::Log { print } => cmd::log::handle(ctx, *print),
        Commands::Backup {
            file,
            compress,
            force,
        } => cmd::backup::handle(ctx, file, *compress, *force),
        Commands::Db {
            migrate,
            check,
            vacuum,
        } => cmd::db::handle(ctx, *migrate, *check, *vacuum),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` must work even when the existing config file is broken
    if matches!(cli.command, Commands::Init) {
        return crate::cli::commands::init::handle(&cli);
    }

    let cfg = Config::load()?;
    let ctx = Context::from_cli(&cli, cfg)?;

    dispatch(&cli, &ctx)
}
