use super::service;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{EmailConfig, Exporter, MailExporter, MailTransportConfig, PlainExporter};
use crate::ui::messages::success;
use crate::utils::date::{check_month, first_day_of, month_label, year_from_suffix};

/// Handle the `export` subcommand
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        month,
        year_suffix,
        smtp_host,
        smtp_port,
        smtp_username,
        smtp_password,
        from_addr,
        to_addr,
        dry_run,
    } = &cli.command
    {
        let month = check_month(*month)?;
        let period = month_label(first_day_of(year_from_suffix(year_suffix)?, month)?);

        // Mail settings are checked before any query is issued.
        let exporter = if *dry_run {
            Exporter::Plain(PlainExporter)
        } else {
            let mail = &cfg.mail;
            let transport = MailTransportConfig {
                host: smtp_host.clone().or_else(|| mail.host.clone()),
                port: smtp_port.or(mail.port),
                username: smtp_username.clone().or_else(|| mail.username.clone()),
                password: smtp_password.clone().or_else(|| mail.password.clone()),
            };
            let email = EmailConfig {
                from_addr: from_addr.clone().or_else(|| mail.from_addr.clone()),
                to_addr: to_addr.clone().or_else(|| mail.to_addr.clone()),
                subject: Some(EmailConfig::report_subject(&period)),
            };
            Exporter::Mail(MailExporter::new(transport, email)?)
        };

        // Statistics are read-only, nothing to roll back.
        let service = service(cli, cfg, false)?;
        let result = service.export(month, year_suffix).await;
        service.store().close().await;
        let statistics = result?;

        exporter.export(&statistics).await?;

        if let Exporter::Mail(_) = exporter {
            success(format!("Statistics for {} sent by {}", period, exporter.label()));
        }
    }
    Ok(())
}
