pub mod service;
pub mod store;

pub use service::{CmsService, event_id_from_url};
pub use store::CmsStore;
