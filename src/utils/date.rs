use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Format used by the CMS for the "date" property of an event.
pub const PROPERTY_DATE_FORMAT: &str = "%d.%m.%Y";

const MONTH_NAMES: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn check_month(month: u32) -> AppResult<u32> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(AppError::InvalidMonth(month))
    }
}

/// "24" -> 2024. Only two-digit suffixes are accepted.
pub fn year_from_suffix(suffix: &str) -> AppResult<i32> {
    let s = suffix.trim();
    if s.len() != 2 || !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidYearSuffix(suffix.to_string()));
    }
    let n: i32 = s
        .parse()
        .map_err(|_| AppError::InvalidYearSuffix(suffix.to_string()))?;
    Ok(2000 + n)
}

pub fn first_day_of(year: i32, month: u32) -> AppResult<NaiveDate> {
    check_month(month)?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(AppError::InvalidMonth(month))
}

/// Half-open month window `[first day of month, first day of next month)`.
/// December rolls over into January of the following year.
pub fn month_bounds(year: i32, month: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    let start = first_day_of(year, month)?;
    let end = if month == 12 {
        first_day_of(year + 1, 1)?
    } else {
        first_day_of(year, month + 1)?
    };
    Ok((start, end))
}

/// Nominative Russian month name, capitalised ("Март").
pub fn month_name_ru(month: u32) -> AppResult<&'static str> {
    check_month(month)?;
    Ok(MONTH_NAMES[(month - 1) as usize])
}

pub fn format_property_date(date: NaiveDate) -> String {
    date.format(PROPERTY_DATE_FORMAT).to_string()
}

/// "MM.YYYY" as used in the report subject.
pub fn month_label(date: NaiveDate) -> String {
    format!("{:02}.{}", date.month(), date.year())
}
