use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = &cli.command
    {
        let path = cli.config_path();

        // ---- INIT CONFIG ----
        if *init {
            Config::default().save(&path, *force)?;
            success(format!("Configuration written to {}", path.display()));
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        if !*init && !*print_config {
            info(format!("Configuration file: {}", path.display()));
        }
    }

    Ok(())
}
