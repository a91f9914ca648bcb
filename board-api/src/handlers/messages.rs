use crate::error::{AppError, AppResult};
use crate::storage::schema::NAME_MAX_CHARS;
use crate::storage::{NewMessage, SharedMessageStore};
use actix_web::{get, post, web, HttpResponse};
use shared_types::CreateMessageRequest;
use tracing::{error, info, warn};

/// Number of messages returned by `GET /api/messages`
pub const RECENT_MESSAGES_LIMIT: usize = 20;

#[get("/api/messages")]
pub async fn list_messages(store: web::Data<SharedMessageStore>) -> AppResult<HttpResponse> {
    let store = store.get_ref().clone();

    let messages = web::block(move || store.list_recent(RECENT_MESSAGES_LIMIT))
        .await?
        .map_err(|e| {
            error!(error = %e, "Failed to list messages");
            AppError::from(e)
        })?;

    info!(count = messages.len(), "Listed recent messages");
    Ok(HttpResponse::Ok().json(messages))
}

#[post("/api/messages")]
pub async fn create_message(
    req: web::Json<CreateMessageRequest>,
    store: web::Data<SharedMessageStore>,
) -> AppResult<HttpResponse> {
    let new_message = validate_new_message(req.into_inner())?;
    let store = store.get_ref().clone();

    let created = web::block(move || store.insert(&new_message))
        .await?
        .map_err(|e| {
            error!(error = %e, "Failed to create message");
            AppError::from(e)
        })?;

    info!(id = created.id, name = %created.name, "Created message");
    Ok(HttpResponse::Ok().json(created))
}

/// Over-long names are rejected, never truncated.
fn validate_new_message(req: CreateMessageRequest) -> AppResult<NewMessage> {
    let name_len = req.name.chars().count();
    if name_len > NAME_MAX_CHARS {
        warn!(name_len, "Rejected message with over-long name");
        return Err(AppError::InvalidRequest(format!(
            "field `name` must be at most {NAME_MAX_CHARS} characters, got {name_len}"
        )));
    }

    Ok(req.into())
}
