//! One handler per subcommand. Handlers parse and validate their
//! arguments before touching the database.

pub mod chronograph;
pub mod config;
pub mod copy;
pub mod export;
pub mod pin;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::CmsService;
use crate::db::{DatabaseClient, DbPool};
use crate::errors::{AppError, AppResult};

/// `--database-uri` / `DATABASE_URI`, then the config file.
pub(crate) fn database_uri<'a>(cli: &'a Cli, cfg: &'a Config) -> AppResult<&'a str> {
    cli.database_uri
        .as_deref()
        .or(cfg.database_uri.as_deref())
        .filter(|uri| !uri.trim().is_empty())
        .ok_or_else(|| {
            AppError::Config(
                "no database URI: pass --database-uri, set DATABASE_URI or add database_uri to the config file"
                    .into(),
            )
        })
}

pub(crate) fn service(cli: &Cli, cfg: &Config, dry_run: bool) -> AppResult<CmsService<DatabaseClient>> {
    let pool = DbPool::new(database_uri(cli, cfg)?)?;
    let client = DatabaseClient::new(pool, cfg, dry_run);
    Ok(CmsService::new(client, cfg.schema.chronograph.years_shift))
}
