#![allow(dead_code)]

use actix_web::{test, App};
use board_api::storage::{
    MessageStore, NewMessage, SharedMessageStore, SqliteMessageStore, StorageError,
};
use shared_types::MessageItem;
use std::sync::Arc;

pub struct TestApp<S> {
    pub store: SharedMessageStore,
    pub app: S,
}

/// Store double whose every operation fails, as an unreachable database would.
pub struct FailingStore;

impl FailingStore {
    fn error() -> StorageError {
        StorageError::Database(rusqlite::Error::InvalidQuery)
    }
}

impl MessageStore for FailingStore {
    fn insert(&self, _new: &NewMessage) -> Result<MessageItem, StorageError> {
        Err(Self::error())
    }

    fn list_recent(&self, _limit: usize) -> Result<Vec<MessageItem>, StorageError> {
        Err(Self::error())
    }

    fn count(&self) -> Result<i64, StorageError> {
        Err(Self::error())
    }
}

pub fn setup_test_store() -> anyhow::Result<SharedMessageStore> {
    Ok(Arc::new(SqliteMessageStore::open_in_memory()?))
}

pub async fn init_app(
    store: SharedMessageStore,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(App::new().configure(board_api::configure(store))).await
}

pub async fn setup_test_app() -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    let store = setup_test_store()?;
    let app = init_app(store.clone()).await;

    Ok(TestApp { store, app })
}

pub async fn setup_failing_app() -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    init_app(Arc::new(FailingStore)).await
}
