use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::prize::get_current_prize,
        handlers::prize::get_statistics,
        handlers::convincer::create_convincer,
        handlers::convincer::get_convincer,
        handlers::convincer::get_time_balance,
        handlers::attempt::list_attempts,
        handlers::attempt::record_attempt,
        handlers::payment::create_payment,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            Prize,
            PrizeStatus,
            PrizeStatistics,
            Convincer,
            ConvincerStatus,
            CreateConvincerRequest,
            Attempt,
            AttemptStatus,
            RecordAttemptRequest,
            Payment,
            PaymentStatus,
            TimeBalance,
            TimeBalanceStatus,
            TimeBalanceSummary,
            CreatePaymentRequest,
            CreatePaymentResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "prize", description = "Prize pool and statistics API"),
        (name = "convincer", description = "Convincer registration API"),
        (name = "attempt", description = "Persuasion attempt API"),
        (name = "payment", description = "Chat time purchase API"),
    ),
    info(
        title = "Convince the AI API",
        version = "0.1.0",
        description = "Mock backend for the Convince the AI demo"
    ),
    servers(
        (url = "/api", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
