use actix_cors::Cors;
use actix_web::error::JsonPayloadError;
use actix_web::web;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use tracing::warn;

pub mod config;
pub mod error;
pub mod handlers;
pub mod storage;

use crate::config::CorsConfig;
use crate::error::AppError;
use crate::storage::SharedMessageStore;

pub type DbConnection = Arc<Mutex<Connection>>;

/// Registers the store and every API route on `cfg`.
pub fn configure(store: SharedMessageStore) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(store))
            .app_data(json_config())
            .service(handlers::messages::list_messages)
            .service(handlers::messages::create_message)
            .service(handlers::health::health_check);
    }
}

/// Upper bound on a JSON request body, in bytes
pub const MAX_JSON_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Malformed bodies become `400 invalid_request` naming the offending field;
/// bodies over [`MAX_JSON_BODY_BYTES`] become `413 payload_too_large`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(|err, _req| match err {
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                warn!(error = %err, "Rejected oversized request body");
                AppError::PayloadTooLarge(err.to_string()).into()
            }
            JsonPayloadError::Deserialize(e) => {
                warn!(error = %e, "Rejected malformed request body");
                AppError::InvalidRequest(e.to_string()).into()
            }
            other => {
                warn!(error = %other, "Rejected malformed request body");
                AppError::InvalidRequest(other.to_string()).into()
            }
        })
}

pub fn build_cors(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
}
