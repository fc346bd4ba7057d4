use actix_web::{HttpResponse, Result, web};

use crate::models::*;
use crate::services::PrizeService;

#[utoipa::path(
    get,
    path = "/prizes/current",
    tag = "prize",
    responses(
        (status = 200, description = "Current prize snapshot", body = Prize)
    )
)]
pub async fn get_current_prize(prize_service: web::Data<PrizeService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(prize_service.current_prize().await))
}

#[utoipa::path(
    get,
    path = "/prizes/statistics",
    tag = "prize",
    responses(
        (status = 200, description = "Attempt counters and current prize amount", body = PrizeStatistics)
    )
)]
pub async fn get_statistics(prize_service: web::Data<PrizeService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(prize_service.statistics().await))
}

pub fn prize_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/prizes")
            .route("/current", web::get().to(get_current_prize))
            .route("/statistics", web::get().to(get_statistics)),
    );
}
