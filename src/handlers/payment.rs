use actix_web::{HttpResponse, ResponseError, Result, web};

use crate::models::*;
use crate::services::PaymentService;

#[utoipa::path(
    post,
    path = "/payments",
    tag = "payment",
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment settled and time balance granted", body = CreatePaymentResponse),
        (status = 400, description = "Missing payment fields", body = ErrorResponse)
    )
)]
pub async fn create_payment(
    payment_service: web::Data<PaymentService>,
    request: web::Json<CreatePaymentRequest>,
) -> Result<HttpResponse> {
    match payment_service.process(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Created().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn payment_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/payments").route("", web::post().to(create_payment)));
}
