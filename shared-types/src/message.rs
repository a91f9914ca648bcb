use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A persisted board message as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MessageItem {
    #[ts(type = "number")]
    pub id: i64,
    pub name: String,
    pub message: String,
}

/// Body of `POST /api/messages`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateMessageRequest {
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    #[ts(type = "number")]
    pub messages: i64,
}
