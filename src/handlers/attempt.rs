use actix_web::{HttpResponse, ResponseError, Result, web};

use crate::models::*;
use crate::services::AttemptService;

#[utoipa::path(
    get,
    path = "/attempts",
    tag = "attempt",
    responses(
        (status = 200, description = "Recorded attempts", body = [Attempt])
    )
)]
pub async fn list_attempts(attempt_service: web::Data<AttemptService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(attempt_service.list().await))
}

#[utoipa::path(
    post,
    path = "/attempts",
    tag = "attempt",
    request_body = RecordAttemptRequest,
    responses(
        (status = 201, description = "Attempt recorded", body = Attempt),
        (status = 400, description = "Invalid attempt", body = ErrorResponse)
    )
)]
/// A failed attempt grows the prize; a completed one only bumps the counters.
pub async fn record_attempt(
    attempt_service: web::Data<AttemptService>,
    request: web::Json<RecordAttemptRequest>,
) -> Result<HttpResponse> {
    match attempt_service.record(request.into_inner()).await {
        Ok(attempt) => Ok(HttpResponse::Created().json(attempt)),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn attempt_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/attempts")
            .route("", web::get().to(list_attempts))
            .route("", web::post().to(record_attempt)),
    );
}
