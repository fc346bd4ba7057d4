use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local;
use env_logger::{Env, Target};
use std::io::Write;
use std::sync::Arc;

use convince_backend::{
    config::Config,
    external::StripeService,
    handlers,
    middlewares::create_cors,
    services::*,
    store::MockStore,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml().expect("Failed to load configuration");

    let store = Arc::new(MockStore::new(&config.store));
    let stripe_service = StripeService::new(config.stripe.clone());

    let prize_service = PrizeService::new(store.clone());
    let convincer_service = ConvincerService::new(store.clone());
    let attempt_service = AttemptService::new(store.clone());
    let payment_service = PaymentService::new(store.clone(), stripe_service);

    log::info!(
        "Prize starts at {:.2} (+{:.2} per failed attempt), attempts listed {:?}",
        prize_service.current_prize().await.amount,
        config.store.prize_increment,
        config.store.attempt_order
    );
    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(prize_service.clone()))
            .app_data(web::Data::new(convincer_service.clone()))
            .app_data(web::Data::new(attempt_service.clone()))
            .app_data(web::Data::new(payment_service.clone()))
            .configure(swagger_config)
            .configure(handlers::api_config)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
