use actix_web::{HttpResponse, ResponseError, Result, web};

use crate::models::*;
use crate::services::ConvincerService;

#[utoipa::path(
    post,
    path = "/convincers",
    tag = "convincer",
    request_body = CreateConvincerRequest,
    responses(
        (status = 201, description = "Convincer created", body = Convincer),
        (status = 400, description = "Missing name or email", body = ErrorResponse)
    )
)]
pub async fn create_convincer(
    convincer_service: web::Data<ConvincerService>,
    request: web::Json<CreateConvincerRequest>,
) -> Result<HttpResponse> {
    match convincer_service.create(request.into_inner()).await {
        Ok(convincer) => Ok(HttpResponse::Created().json(convincer)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/convincers/{id}",
    tag = "convincer",
    params(
        ("id" = String, Path, description = "Convincer id")
    ),
    responses(
        (status = 200, description = "Convincer found", body = Convincer),
        (status = 404, description = "Unknown convincer", body = ErrorResponse)
    )
)]
pub async fn get_convincer(
    convincer_service: web::Data<ConvincerService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match convincer_service.get(&path.into_inner()).await {
        Ok(convincer) => Ok(HttpResponse::Ok().json(convincer)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/convincers/{id}/time-balance",
    tag = "convincer",
    params(
        ("id" = String, Path, description = "Convincer id used when paying")
    ),
    responses(
        (status = 200, description = "Purchased chat time", body = TimeBalanceSummary)
    )
)]
pub async fn get_time_balance(
    convincer_service: web::Data<ConvincerService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let summary = convincer_service.time_balance(&path.into_inner()).await;
    Ok(HttpResponse::Ok().json(summary))
}

pub fn convincer_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/convincers")
            .route("", web::post().to(create_convincer))
            .route("/{id}", web::get().to(get_convincer))
            .route("/{id}/time-balance", web::get().to(get_time_balance)),
    );
}
