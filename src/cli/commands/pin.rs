use super::service;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::outcome;

/// Handle the `pin` subcommand
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Pin { url, dry_run } = &cli.command {
        let service = service(cli, cfg, *dry_run)?;

        let result = async {
            let event = service.get_event(url).await?;
            service.pin_event(&event).await.map(|pin_id| (event, pin_id))
        }
        .await;
        service.store().close().await;

        let (event, pin_id) = result?;
        outcome(
            service.store().is_dry_run(),
            format!("Pinned event {} '{}' as element {}", event.id, event.name, pin_id),
        );
    }
    Ok(())
}
