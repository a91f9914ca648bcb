use super::migrations::run_migrations;
use super::schema::{COL_ID, COL_MESSAGE, COL_NAME, MESSAGES_TABLE};
use super::{MessageStore, NewMessage, StorageError};
use crate::DbConnection;
use rusqlite::{params, Connection, Row};
use shared_types::MessageItem;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

pub struct SqliteMessageStore {
    connection: DbConnection,
}

impl SqliteMessageStore {
    pub fn open(db_path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(db_path)?;
        info!(path = %db_path.display(), "Opened message database");
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Self, StorageError> {
        run_migrations(&mut conn)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    #[cfg(test)]
    fn connection(&self) -> DbConnection {
        Arc::clone(&self.connection)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.connection
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))
    }
}

fn select_columns() -> String {
    format!("{COL_ID}, {COL_NAME}, {COL_MESSAGE}")
}

fn row_to_message(row: &Row<'_>) -> rusqlite::Result<MessageItem> {
    Ok(MessageItem {
        id: row.get(0)?,
        name: row.get(1)?,
        message: row.get(2)?,
    })
}

impl MessageStore for SqliteMessageStore {
    fn insert(&self, new: &NewMessage) -> Result<MessageItem, StorageError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        tx.execute(
            &format!("INSERT INTO {MESSAGES_TABLE} ({COL_NAME}, {COL_MESSAGE}) VALUES (?1, ?2)"),
            params![new.name, new.message],
        )?;
        let id = tx.last_insert_rowid();

        // Re-read so the caller sees exactly what was stored.
        let stored = tx.query_row(
            &format!(
                "SELECT {} FROM {MESSAGES_TABLE} WHERE {COL_ID} = ?1",
                select_columns()
            ),
            params![id],
            row_to_message,
        )?;

        tx.commit()?;
        debug!(id = stored.id, "Inserted message");

        Ok(stored)
    }

    fn list_recent(&self, limit: usize) -> Result<Vec<MessageItem>, StorageError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut messages = {
            let mut stmt = tx.prepare(&format!(
                "SELECT {} FROM {MESSAGES_TABLE} ORDER BY {COL_ID} DESC LIMIT ?1",
                select_columns()
            ))?;
            let rows = stmt
                .query_map(params![limit], row_to_message)?
                .collect::<Result<Vec<_>, _>>()?;
            rows
        };
        tx.commit()?;

        messages.reverse();
        Ok(messages)
    }

    fn count(&self) -> Result<i64, StorageError> {
        let conn = self.lock()?;
        let count = conn.query_row(
            &format!("SELECT COUNT(*) FROM {MESSAGES_TABLE}"),
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn new_message(name: &str, message: &str) -> NewMessage {
        NewMessage {
            name: name.to_string(),
            message: message.to_string(),
        }
    }

    fn store() -> SqliteMessageStore {
        SqliteMessageStore::open_in_memory().unwrap()
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let store = store();
        assert!(store.list_recent(20).unwrap().is_empty());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let store = store();

        let first = store.insert(&new_message("alice", "hi")).unwrap();
        let second = store.insert(&new_message("bob", "yo")).unwrap();

        assert_eq!(first.id, 1);
        assert!(second.id > first.id);
        assert_eq!(second.name, "bob");
        assert_eq!(second.message, "yo");
    }

    #[test]
    fn test_list_recent_is_oldest_first() {
        let store = store();
        for i in 0..5 {
            store
                .insert(&new_message(&format!("user{i}"), &format!("msg {i}")))
                .unwrap();
        }

        let listed = store.list_recent(20).unwrap();
        let names: Vec<_> = listed.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["user0", "user1", "user2", "user3", "user4"]);
    }

    #[test]
    fn test_list_recent_keeps_newest_within_limit() {
        let store = store();
        for i in 1..=25 {
            store.insert(&new_message("n", &format!("m{i}"))).unwrap();
        }

        let listed = store.list_recent(20).unwrap();
        assert_eq!(listed.len(), 20);
        assert_eq!(listed.first().unwrap().message, "m6");
        assert_eq!(listed.last().unwrap().message, "m25");
        assert!(listed.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_uncommitted_insert_leaves_no_row() {
        let store = store();
        let first = store.insert(&new_message("a", "1")).unwrap();

        {
            let conn = store.connection();
            let mut conn = conn.lock().unwrap();
            let tx = conn.transaction().unwrap();
            tx.execute(
                "INSERT INTO messages (name, message) VALUES ('x', 'y')",
                [],
            )
            .unwrap();
            // dropped without commit
        }

        let second = store.insert(&new_message("b", "2")).unwrap();
        assert!(second.id > first.id);
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_messages_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("board.db");

        let created = {
            let store = SqliteMessageStore::open(&path).unwrap();
            store.insert(&new_message("alice", "persisted")).unwrap()
        };

        let reopened = SqliteMessageStore::open(&path).unwrap();
        assert_eq!(reopened.list_recent(20).unwrap(), vec![created]);
    }
}
