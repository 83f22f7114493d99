use super::store::CmsStore;
use crate::errors::{AppError, AppResult};
use crate::models::{ChronographPeriod, ChronographRoll, Event, EventCopy, StatisticsRow};
use crate::utils::date::{month_bounds, year_from_suffix};
use regex::Regex;
use std::sync::OnceLock;
use tracing::info;

fn event_id_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/(\d+)/?$").expect("valid event id pattern"))
}

/// Trailing numeric path segment of an event URL.
pub fn event_id_from_url(url: &str) -> AppResult<i64> {
    event_id_pattern()
        .captures(url.trim())
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::InvalidEventUrl(url.to_string()))
}

pub struct CmsService<S: CmsStore> {
    store: S,
    years_shift: i32,
}

impl<S: CmsStore> CmsService<S> {
    pub fn new(store: S, years_shift: i32) -> Self {
        Self { store, years_shift }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn get_event(&self, url: &str) -> AppResult<Event> {
        info!("Getting event from {} ...", url);

        let id = event_id_from_url(url)?;
        let event = self.store.get_event_by_id(id).await?;

        info!("Finished getting event from {}", url);
        Ok(event)
    }

    pub async fn pin_event(&self, event: &Event) -> AppResult<i64> {
        info!("Pinning event {} ...", event.id);

        let pin_id = self.store.pin_event(event).await?;

        info!("Finished pinning event {}", event.id);
        Ok(pin_id)
    }

    pub async fn copy_event(&self, event: &Event, copy: &EventCopy) -> AppResult<i64> {
        info!("Copying event {} to {} ...", event.id, copy.new_date);

        let new_id = self.store.copy_event(event, copy).await?;

        info!("Finished copying event {} to {}", event.id, copy.new_date);
        Ok(new_id)
    }

    /// Statistics for one calendar month, `year_suffix` being "24" for 2024.
    pub async fn export(&self, month: u32, year_suffix: &str) -> AppResult<Vec<StatisticsRow>> {
        let year = year_from_suffix(year_suffix)?;
        let (start, end) = month_bounds(year, month)?;

        info!("Exporting statistics for {:02}.{} ...", month, year);
        self.store.export_statistics(start, end).await
    }

    /// Roll the chronograph: the section of the same month `years_shift`
    /// years earlier is moved into a new section for the target month.
    pub async fn copy_chronograph(&self, month: u32, year_suffix: &str) -> AppResult<ChronographRoll> {
        let target = ChronographPeriod::new(month, year_from_suffix(year_suffix)?);
        let new_name = target.section_name()?;
        let previous_name = target.years_back(self.years_shift).section_name()?;

        info!("Rolling chronograph {} -> {} ...", previous_name, new_name);

        let roll = self.store.roll_chronograph(&new_name, &previous_name).await?;

        info!(
            "Finished rolling chronograph {} -> {} ({} elements)",
            previous_name, new_name, roll.moved_elements
        );
        Ok(roll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::fixtures::sample_event;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    /// In-memory store recording what the service asked for.
    #[derive(Default)]
    struct FakeStore {
        calls: Mutex<Vec<String>>,
        stats: Vec<StatisticsRow>,
    }

    impl FakeStore {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CmsStore for FakeStore {
        async fn get_event_by_id(&self, id: i64) -> AppResult<Event> {
            self.record(format!("get {id}"));
            if id == 404 {
                return Err(AppError::EventNotFound(id));
            }
            Ok(Event {
                id,
                ..sample_event()
            })
        }

        async fn pin_event(&self, event: &Event) -> AppResult<i64> {
            self.record(format!("pin {}", event.id));
            Ok(1000)
        }

        async fn copy_event(&self, event: &Event, copy: &EventCopy) -> AppResult<i64> {
            self.record(format!("copy {} {}", event.id, copy.new_date));
            Ok(1001)
        }

        async fn export_statistics(
            &self,
            start: NaiveDate,
            end: NaiveDate,
        ) -> AppResult<Vec<StatisticsRow>> {
            self.record(format!("stats {start} {end}"));
            Ok(self.stats.clone())
        }

        async fn roll_chronograph(
            &self,
            new_name: &str,
            previous_name: &str,
        ) -> AppResult<ChronographRoll> {
            self.record(format!("roll {new_name} <- {previous_name}"));
            Ok(ChronographRoll {
                new_section_id: 2,
                previous_section_id: 1,
                moved_elements: 3,
            })
        }
    }

    #[test]
    fn event_id_is_the_trailing_number() {
        assert_eq!(event_id_from_url("https://host/recital/123/").unwrap(), 123);
        assert_eq!(event_id_from_url("https://host/recital/77").unwrap(), 77);
    }

    #[test]
    fn url_without_trailing_id_is_rejected() {
        for url in ["https://host/recital/", "https://host/recital/12a/", "", "/0/"] {
            assert!(
                matches!(event_id_from_url(url), Err(AppError::InvalidEventUrl(_))),
                "{url} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn get_event_resolves_url_to_id() {
        let service = CmsService::new(FakeStore::default(), 5);
        let event = service.get_event("https://host/recital/123/").await.unwrap();
        assert_eq!(event.id, 123);
        assert_eq!(service.store().calls(), vec!["get 123"]);
    }

    #[tokio::test]
    async fn invalid_url_never_reaches_the_store() {
        let service = CmsService::new(FakeStore::default(), 5);
        let err = service.get_event("https://host/recital/").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidEventUrl(_)));
        assert!(service.store().calls().is_empty());
    }

    #[tokio::test]
    async fn missing_event_propagates() {
        let service = CmsService::new(FakeStore::default(), 5);
        let err = service.get_event("https://host/recital/404/").await.unwrap_err();
        assert!(matches!(err, AppError::EventNotFound(404)));
    }

    #[tokio::test]
    async fn pin_and_copy_pass_through() {
        let service = CmsService::new(FakeStore::default(), 5);
        let event = sample_event();
        assert_eq!(service.pin_event(&event).await.unwrap(), 1000);

        let copy = EventCopy {
            new_date: NaiveDate::from_ymd_opt(2024, 11, 2).unwrap(),
            new_time: None,
            new_price: None,
        };
        assert_eq!(service.copy_event(&event, &copy).await.unwrap(), 1001);
        assert_eq!(service.store().calls(), vec!["pin 123", "copy 123 2024-11-02"]);
    }

    #[tokio::test]
    async fn export_queries_half_open_month() {
        let store = FakeStore {
            stats: vec![StatisticsRow::new("01 added", 3)],
            ..FakeStore::default()
        };
        let service = CmsService::new(store, 5);

        let rows = service.export(12, "24").await.unwrap();
        assert_eq!(rows, vec![StatisticsRow::new("01 added", 3)]);
        assert_eq!(service.store().calls(), vec!["stats 2024-12-01 2025-01-01"]);
    }

    #[tokio::test]
    async fn export_rejects_bad_input_before_querying() {
        let service = CmsService::new(FakeStore::default(), 5);
        assert!(matches!(
            service.export(13, "24").await,
            Err(AppError::InvalidMonth(13))
        ));
        assert!(matches!(
            service.export(5, "twenty").await,
            Err(AppError::InvalidYearSuffix(_))
        ));
        assert!(service.store().calls().is_empty());
    }

    #[tokio::test]
    async fn chronograph_names_are_years_shift_apart() {
        let service = CmsService::new(FakeStore::default(), 5);
        let roll = service.copy_chronograph(3, "29").await.unwrap();
        assert_eq!(roll.moved_elements, 3);
        assert_eq!(service.store().calls(), vec!["roll Март 2029 <- Март 2024"]);
    }
}
