//! SMTP delivery of the monthly report.
//!
//! Both configs are validated up front so an incomplete setup fails before
//! any statistics query or network call.

use super::report::MonthlyReport;
use crate::errors::{AppError, AppResult};
use crate::models::StatisticsRow;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailTransportConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailConfig {
    pub from_addr: Option<String>,
    pub to_addr: Option<String>,
    pub subject: Option<String>,
}

/// Names of the fields that are `None`, comma separated.
fn missing(fields: &[(&str, bool)]) -> Option<String> {
    let names: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();
    (!names.is_empty()).then(|| names.join(", "))
}

impl MailTransportConfig {
    pub fn validate(&self) -> AppResult<()> {
        match missing(&[
            ("host", self.host.is_some()),
            ("port", self.port.is_some()),
            ("username", self.username.is_some()),
            ("password", self.password.is_some()),
        ]) {
            Some(fields) => Err(AppError::MailTransportConfigInvalid(fields)),
            None => Ok(()),
        }
    }
}

impl EmailConfig {
    /// Subject line for the report of `period` ("MM.YYYY").
    pub fn report_subject(period: &str) -> String {
        format!("Отчёт об удалённой работе за {}", period)
    }

    pub fn validate(&self) -> AppResult<()> {
        match missing(&[
            ("from_addr", self.from_addr.is_some()),
            ("to_addr", self.to_addr.is_some()),
            ("subject", self.subject.is_some()),
        ]) {
            Some(fields) => Err(AppError::EmailConfigInvalid(fields)),
            None => Ok(()),
        }
    }
}

/// Validated SMTP settings, ready to send.
#[derive(Debug, Clone)]
pub struct MailExporter {
    host: String,
    port: u16,
    credentials: Credentials,
    from: Mailbox,
    to: Mailbox,
    subject: String,
}

impl MailExporter {
    pub fn new(transport: MailTransportConfig, email: EmailConfig) -> AppResult<Self> {
        transport.validate()?;
        email.validate()?;

        let (Some(host), Some(port), Some(username), Some(password)) =
            (transport.host, transport.port, transport.username, transport.password)
        else {
            return Err(AppError::MailTransportConfigInvalid("host".into()));
        };
        let (Some(from_addr), Some(to_addr), Some(subject)) =
            (email.from_addr, email.to_addr, email.subject)
        else {
            return Err(AppError::EmailConfigInvalid("from_addr".into()));
        };

        Ok(Self {
            host,
            port,
            credentials: Credentials::new(username, password),
            from: from_addr.parse()?,
            to: to_addr.parse()?,
            subject,
        })
    }

    pub fn build_message(&self, statistics: &[StatisticsRow]) -> AppResult<Message> {
        let body = MonthlyReport::from_rows(statistics).render();
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(self.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;
        Ok(message)
    }

    pub async fn export(&self, statistics: &[StatisticsRow]) -> AppResult<()> {
        info!("Sending statistics via SMTP ...");

        let message = self.build_message(statistics)?;
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)?
            .port(self.port)
            .credentials(self.credentials.clone())
            .build();
        mailer.send(message).await?;

        info!("Finished sending statistics via SMTP");
        Ok(())
    }
}
