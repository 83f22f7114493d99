//! Monthly statistics exporters.

pub mod mail;
pub mod plain;
pub mod report;

pub use mail::{EmailConfig, MailExporter, MailTransportConfig};
pub use plain::PlainExporter;
pub use report::MonthlyReport;

use crate::errors::AppResult;
use crate::models::StatisticsRow;

/// Where the monthly report goes.
#[derive(Debug)]
pub enum Exporter {
    Plain(PlainExporter),
    Mail(MailExporter),
}

impl Exporter {
    pub fn label(&self) -> &'static str {
        match self {
            Exporter::Plain(_) => "stdout",
            Exporter::Mail(_) => "mail",
        }
    }

    pub async fn export(&self, statistics: &[StatisticsRow]) -> AppResult<()> {
        match self {
            Exporter::Plain(plain) => {
                plain.export(statistics);
                Ok(())
            }
            Exporter::Mail(mail) => mail.export(statistics).await,
        }
    }
}
