use super::service;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::EventCopy;
use crate::ui::messages::outcome;
use crate::utils::date::parse_date;
use crate::utils::time::parse_optional_event_time;

/// Handle the `copy` subcommand
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Copy {
        url,
        date,
        time,
        new_price,
        dry_run,
    } = &cli.command
    {
        let copy = EventCopy {
            new_date: parse_date(date)?,
            new_time: parse_optional_event_time(time.as_deref())?,
            new_price: new_price.clone(),
        };

        let service = service(cli, cfg, *dry_run)?;

        let result = async {
            let event = service.get_event(url).await?;
            service.copy_event(&event, &copy).await.map(|new_id| (event, new_id))
        }
        .await;
        service.store().close().await;

        let (event, new_id) = result?;
        outcome(
            service.store().is_dry_run(),
            format!(
                "Copied event {} '{}' to {} {} as element {}",
                event.id,
                event.name,
                copy.new_date,
                copy.active_to(&event).format("%H:%M"),
                new_id
            ),
        );
    }
    Ok(())
}
