use crate::errors::AppResult;
use crate::models::{ChronographRoll, Event, EventCopy, StatisticsRow};
use chrono::NaiveDate;

/// The CMS operations the service layer needs. `DatabaseClient` is the
/// production implementation.
#[allow(async_fn_in_trait)]
pub trait CmsStore {
    async fn get_event_by_id(&self, id: i64) -> AppResult<Event>;

    /// Returns the id of the created pin element.
    async fn pin_event(&self, event: &Event) -> AppResult<i64>;

    /// Returns the id of the created event element.
    async fn copy_event(&self, event: &Event, copy: &EventCopy) -> AppResult<i64>;

    async fn export_statistics(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<StatisticsRow>>;

    /// Create section `new_name`, then move everything from section
    /// `previous_name` into it.
    async fn roll_chronograph(&self, new_name: &str, previous_name: &str) -> AppResult<ChronographRoll>;
}
