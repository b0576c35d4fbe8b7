use crate::cli::context::Context;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(
    ctx: &Context,
    print_config: bool,
    edit_config: bool,
    editor: Option<&str>,
) -> AppResult<()> {
    if print_config {
        ConfigLogic::print(&ctx.cfg)?;
    }

    if edit_config {
        ConfigLogic::edit(&Config::config_file(), editor)?;
    }

    if !print_config && !edit_config {
        info(format!("Config file: {}", Config::config_file().display()));
    }

    Ok(())
}
