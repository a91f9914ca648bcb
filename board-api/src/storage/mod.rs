pub mod migrations;
pub mod schema;
pub mod sqlite;

use shared_types::{CreateMessageRequest, MessageItem};
use std::sync::Arc;
use thiserror::Error;

pub use sqlite::SqliteMessageStore;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] refinery::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Lock error: {0}")]
    Lock(String),
}

/// A message that has passed request validation but has no id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub name: String,
    pub message: String,
}

impl From<CreateMessageRequest> for NewMessage {
    fn from(req: CreateMessageRequest) -> Self {
        Self {
            name: req.name,
            message: req.message,
        }
    }
}

/// Append-only message log.
///
/// Every call is its own unit of work: implementations must not hold a
/// transaction open between calls.
pub trait MessageStore: Send + Sync {
    /// Persists `new` and returns the stored row with its assigned id.
    fn insert(&self, new: &NewMessage) -> Result<MessageItem, StorageError>;

    /// Returns up to `limit` of the newest messages, oldest first.
    fn list_recent(&self, limit: usize) -> Result<Vec<MessageItem>, StorageError>;

    fn count(&self) -> Result<i64, StorageError>;
}

pub type SharedMessageStore = Arc<dyn MessageStore>;
