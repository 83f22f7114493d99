//! Transaction scope whose closing action is fixed when it is opened.

use crate::errors::AppResult;
use sqlx::mysql::{MySql, MySqlConnection};
use sqlx::Transaction;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Commit,
    /// Dry run: every statement runs, nothing is kept.
    Discard,
}

impl Completion {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run {
            Completion::Discard
        } else {
            Completion::Commit
        }
    }
}

/// An open transaction. `close` commits or rolls back according to the
/// completion chosen at acquisition; dropping the scope without closing it
/// (an error path) rolls back.
pub struct TxScope {
    tx: Transaction<'static, MySql>,
    completion: Completion,
}

impl TxScope {
    pub(crate) fn new(tx: Transaction<'static, MySql>, completion: Completion) -> Self {
        Self { tx, completion }
    }

    pub fn conn(&mut self) -> &mut MySqlConnection {
        &mut self.tx
    }

    pub async fn close(self) -> AppResult<()> {
        match self.completion {
            Completion::Commit => {
                self.tx.commit().await?;
                debug!("Transaction committed");
            }
            Completion::Discard => {
                self.tx.rollback().await?;
                warn!("Dry run: transaction rolled back");
            }
        }
        Ok(())
    }
}
