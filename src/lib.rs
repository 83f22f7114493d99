//! gogol library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (database client, service layer, exporters).

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
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "gogol_cli=info,sqlx=warn";
const VERBOSE_LOG_FILTER: &str = "gogol_cli=debug,sqlx=info";

/// Install the stderr subscriber. `RUST_LOG` wins over the defaults.
fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Pin { .. } => cli::commands::pin::handle(cli, cfg).await,
        Commands::Copy { .. } => cli::commands::copy::handle(cli, cfg).await,
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg).await,
        Commands::Chrono { .. } => cli::commands::chronograph::handle(cli, cfg).await,
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    // 1️⃣ .env in the working directory, if any
    let _ = dotenvy::dotenv();

    // 2️⃣ parse CLI
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 3️⃣ load config once; `config --init` replaces the file, so a broken
    // one must not stop it
    let cfg = match &cli.command {
        Commands::Config { init: true, .. } => Config::default(),
        _ => Config::load(&cli.config_path())?,
    };

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg).await
}
