//! MySQL connection pool wrapper (lightweight for CLI usage).

use super::scope::{Completion, TxScope};
use crate::errors::AppResult;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;
use tracing::debug;

pub struct DbPool {
    pool: MySqlPool,
}

impl DbPool {
    /// Parse the URI and prepare a single-connection pool. Nothing is
    /// opened until the first statement runs.
    pub fn new(uri: &str) -> AppResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(15))
            .connect_lazy(uri)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    pub async fn begin(&self, completion: Completion) -> AppResult<TxScope> {
        debug!("Opening transaction ({:?})", completion);
        let tx = self.pool.begin().await?;
        Ok(TxScope::new(tx, completion))
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
