pub mod chronograph;
pub mod event;
pub mod statistics;

pub use chronograph::{ChronographPeriod, ChronographRoll};
pub use event::{Event, EventCopy};
pub use statistics::{Category, StatisticsRow};
