//! MySQL access to the CMS schema.
//!
//! - `pool` / `scope` - lazy connection pool and commit-or-discard transactions
//! - `rows` - dynamic row decoding with duplicate-column renaming
//! - `events`, `stats`, `chronograph` - the SQL steps of each workflow
//! - `client` - the operations built from those steps

mod chronograph;
mod events;
pub mod client;
pub mod pool;
pub mod rows;
pub mod scope;
mod stats;

pub use client::DatabaseClient;
pub use pool::DbPool;
pub use rows::{DecodedRow, SqlValue};
pub use scope::{Completion, TxScope};
