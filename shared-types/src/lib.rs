use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod message;
pub mod typescript_gen;

pub use message::{CreateMessageRequest, HealthResponse, MessageItem};
pub use typescript_gen::generate_typescript_definitions;

// Shared models for board-api and the web frontend

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
