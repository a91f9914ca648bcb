use crate::error::{AppError, AppResult};
use crate::storage::SharedMessageStore;
use actix_web::{get, web, HttpResponse};
use shared_types::HealthResponse;
use tracing::error;

#[get("/api/health")]
pub async fn health_check(store: web::Data<SharedMessageStore>) -> AppResult<HttpResponse> {
    let store = store.get_ref().clone();

    let messages = web::block(move || store.count()).await?.map_err(|e| {
        error!(error = %e, "Health check could not reach storage");
        AppError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        messages,
    }))
}
