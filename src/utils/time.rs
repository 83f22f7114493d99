//! Time utilities: parsing the "HH-MM" event time given on the command line
//! and rendering it back the way the CMS stores it.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

/// Parse "18-00" (the shell-friendly form) into a time of day.
/// "18:00" is accepted as well.
pub fn parse_event_time(t: &str) -> AppResult<NaiveTime> {
    let normalized = t.trim().replace('-', ":");
    NaiveTime::parse_from_str(&normalized, "%H:%M").map_err(|_| AppError::InvalidTime(t.to_string()))
}

pub fn parse_optional_event_time(input: Option<&str>) -> AppResult<Option<NaiveTime>> {
    input.map(parse_event_time).transpose()
}

/// Value written into the event's "time" property.
pub fn format_property_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}
