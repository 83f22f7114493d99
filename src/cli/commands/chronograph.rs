use super::service;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::outcome;

/// Handle the `chrono` subcommand
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Chrono {
        month,
        year_suffix,
        dry_run,
    } = &cli.command
    {
        let service = service(cli, cfg, *dry_run)?;

        let result = service.copy_chronograph(*month, year_suffix).await;
        service.store().close().await;

        let roll = result?;
        outcome(
            service.store().is_dry_run(),
            format!(
                "Moved {} elements from section {} to section {}",
                roll.moved_elements, roll.previous_section_id, roll.new_section_id
            ),
        );
    }
    Ok(())
}
