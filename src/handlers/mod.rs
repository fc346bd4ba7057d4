pub mod attempt;
pub mod convincer;
pub mod health;
pub mod payment;
pub mod prize;

pub use attempt::attempt_config;
pub use convincer::convincer_config;
pub use health::health_config;
pub use payment::payment_config;
pub use prize::prize_config;

use actix_web::{error::JsonPayloadError, web};

use crate::error::AppError;

/// Unreadable JSON bodies get the same 400 shape as a missing field.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req| {
        AppError::ValidationError(format!("Invalid JSON body: {err}")).into()
    })
}

/// Every `/api` route, with its JSON extractor settings.
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .configure(health_config)
            .configure(prize_config)
            .configure(convincer_config)
            .configure(attempt_config)
            .configure(payment_config),
    );
}
