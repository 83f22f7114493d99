//! Unified application error type.
//! Every module (db, core, export, cli, utils) returns AppError so the
//! CLI boundary has a single place to report failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("Cannot decode column '{column}': {reason}")]
    Decode { column: String, reason: String },

    // ---------------------------
    // Domain errors
    // ---------------------------
    #[error("Event ID {0} not found")]
    EventNotFound(i64),

    #[error("Invalid event URL: {0}")]
    InvalidEventUrl(String),

    #[error("Chronograph section '{0}' not found")]
    SectionNotFound(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH-MM)")]
    InvalidTime(String),

    #[error("Invalid month number: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Invalid year suffix: {0} (expected two digits, e.g. 24)")]
    InvalidYearSuffix(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Mail errors
    // ---------------------------
    #[error("Mail transport config is not valid, missing: {0}")]
    MailTransportConfigInvalid(String),

    #[error("Email config is not valid, missing: {0}")]
    EmailConfigInvalid(String),

    #[error("Invalid mail address: {0}")]
    MailAddress(#[from] lettre::address::AddressError),

    #[error("Cannot build mail message: {0}")]
    MailMessage(#[from] lettre::error::Error),

    #[error("Mail transport error: {0}")]
    MailTransport(#[from] lettre::transport::smtp::Error),
}

pub type AppResult<T> = Result<T, AppError>;
