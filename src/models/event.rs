use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

/// Snapshot of one CMS content element (`b_iblock_element`) describing an
/// event. Never mutated: pin and copy create new rows.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub active_from: NaiveDateTime,
    pub active_to: NaiveDateTime,
    pub preview_picture: Option<i64>,
    pub preview_text: Option<String>,
    pub preview_text_type: String,
    pub detail_picture: Option<i64>,
    pub detail_text: Option<String>,
    pub detail_text_type: String,
    pub tags: Option<String>,
}

impl Event {
    /// Public page of the event, e.g. `https://www.domgogolya.ru/recital/123/`.
    pub fn url(&self, site_url: &str) -> String {
        format!("{}/recital/{}/", site_url.trim_end_matches('/'), self.id)
    }

    pub fn active_to_hour(&self) -> u32 {
        self.active_to.hour()
    }

    pub fn active_to_minute(&self) -> u32 {
        self.active_to.minute()
    }

    /// Time of day the event ends; used when a copy keeps the original time.
    pub fn active_to_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.active_to_hour(), self.active_to_minute(), 0)
            .unwrap_or(NaiveTime::MIN)
    }

    /// Value for the CMS `searchable_content` column.
    pub fn searchable_name(&self) -> String {
        self.name.to_uppercase()
    }
}

/// What changes when an event is copied to another day.
#[derive(Debug, Clone, PartialEq)]
pub struct EventCopy {
    pub new_date: NaiveDate,
    /// Time of day for the copy; the original's end time when absent.
    pub new_time: Option<NaiveTime>,
    pub new_price: Option<String>,
}

impl EventCopy {
    /// `new_date` at the requested time, or at the original's hour:minute.
    pub fn active_to(&self, original: &Event) -> NaiveDateTime {
        let time = self.new_time.unwrap_or_else(|| original.active_to_time());
        self.new_date.and_time(time)
    }
}
