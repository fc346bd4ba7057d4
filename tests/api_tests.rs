use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use convince_backend::config::{AttemptOrder, StoreConfig, StripeConfig};
use convince_backend::external::StripeService;
use convince_backend::handlers;
use convince_backend::services::*;
use convince_backend::store::MockStore;

struct TestState {
    prize: web::Data<PrizeService>,
    convincer: web::Data<ConvincerService>,
    attempt: web::Data<AttemptService>,
    payment: web::Data<PaymentService>,
}

impl TestState {
    fn new(seed_mock_data: bool) -> Self {
        let store = Arc::new(MockStore::new(&StoreConfig {
            initial_prize_amount: 500.0,
            prize_increment: 1.0,
            attempt_order: AttemptOrder::NewestFirst,
            seed_mock_data,
        }));
        let stripe = StripeService::new(StripeConfig::default());
        Self {
            prize: web::Data::new(PrizeService::new(store.clone())),
            convincer: web::Data::new(ConvincerService::new(store.clone())),
            attempt: web::Data::new(AttemptService::new(store.clone())),
            payment: web::Data::new(PaymentService::new(store, stripe)),
        }
    }

    fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.prize.clone())
            .app_data(self.convincer.clone())
            .app_data(self.attempt.clone())
            .app_data(self.payment.clone())
            .configure(handlers::api_config);
    }
}

#[actix_web::test]
async fn health_reports_ok_with_version() {
    let state = TestState::new(true);
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let resp = test::call_service(&app, TestRequest::get().uri("/api/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "OK");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn current_prize_has_expected_shape() {
    let state = TestState::new(false);
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/prizes/current").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["id"].is_string());
    assert_eq!(body["amount"], 500.0);
    assert_eq!(body["status"], "open");
    assert!(body["created_at"].is_string());
}

#[actix_web::test]
async fn statistics_are_idempotent() {
    let state = TestState::new(true);
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let first: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri("/api/prizes/statistics").to_request(),
    )
    .await;
    let second: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri("/api/prizes/statistics").to_request(),
    )
    .await;

    assert_eq!(first, second);
    for key in [
        "totalAttempts",
        "successfulAttempts",
        "failedAttempts",
        "currentPrizeAmount",
        "successRate",
    ] {
        assert!(first.get(key).is_some(), "missing {key}");
    }
}

#[actix_web::test]
async fn create_convincer_returns_active_convincer() {
    let state = TestState::new(true);
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/convincers")
            .set_json(json!({ "name": "Ana", "email": "ana@example.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["status"], "active");
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["email"], "ana@example.com");

    let id = body["id"].as_str().unwrap();
    let fetched: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get()
            .uri(&format!("/api/convincers/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(fetched, body);
}

#[actix_web::test]
async fn create_convincer_without_fields_is_rejected() {
    let state = TestState::new(true);
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    for payload in [
        json!({}),
        json!({ "name": "Ana" }),
        json!({ "email": "ana@example.com" }),
        json!({ "name": "", "email": "ana@example.com" }),
    ] {
        let resp = test::call_service(
            &app,
            TestRequest::post()
                .uri("/api/convincers")
                .set_json(payload)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Nome e email são obrigatórios");
    }
}

#[actix_web::test]
async fn unknown_convincer_is_not_found() {
    let state = TestState::new(true);
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let resp = test::call_service(
        &app,
        TestRequest::get()
            .uri("/api/convincers/00000000-0000-0000-0000-000000000000")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_json_is_a_validation_error() {
    let state = TestState::new(true);
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/payments")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn payment_creates_linked_time_balance() {
    let state = TestState::new(true);
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/payments")
            .set_json(json!({
                "convincer_id": "c1",
                "amount_paid": 1,
                "time_purchased_seconds": 60
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["payment"]["id"], body["timeBalance"]["payment_id"]);
    assert_eq!(body["payment"]["convincer_id"], "c1");
    assert_eq!(body["payment"]["status"], "completed");
    assert_eq!(body["timeBalance"]["convincer_id"], "c1");
    assert_eq!(body["timeBalance"]["amount_time_seconds"], 60);
    assert_eq!(body["timeBalance"]["status"], "active");

    let summary: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get()
            .uri("/api/convincers/c1/time-balance")
            .to_request(),
    )
    .await;
    assert_eq!(summary["total_seconds"], 60);
    assert_eq!(summary["balances"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn payment_missing_fields_is_rejected() {
    let state = TestState::new(true);
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    for payload in [
        json!({}),
        json!({ "amount_paid": 1, "time_purchased_seconds": 60 }),
        json!({ "convincer_id": "c1", "time_purchased_seconds": 60 }),
        json!({ "convincer_id": "c1", "amount_paid": 1 }),
    ] {
        let resp = test::call_service(
            &app,
            TestRequest::post()
                .uri("/api/payments")
                .set_json(payload)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("convincer_id"));
    }
}

#[actix_web::test]
async fn failed_attempt_grows_prize_and_lists_first() {
    let state = TestState::new(true);
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let before: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri("/api/prizes/statistics").to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/attempts")
            .set_json(json!({
                "convincer_name": "Bruno",
                "status": "failed",
                "convincing_score": 55
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let after: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri("/api/prizes/statistics").to_request(),
    )
    .await;
    assert_eq!(
        after["failedAttempts"].as_u64().unwrap(),
        before["failedAttempts"].as_u64().unwrap() + 1
    );
    assert_eq!(
        after["totalAttempts"].as_u64().unwrap(),
        before["totalAttempts"].as_u64().unwrap() + 1
    );
    assert_eq!(
        after["currentPrizeAmount"].as_f64().unwrap(),
        before["currentPrizeAmount"].as_f64().unwrap() + 1.0
    );

    let attempts: Value =
        test::call_and_read_body_json(&app, TestRequest::get().uri("/api/attempts").to_request())
            .await;
    let first = &attempts.as_array().unwrap()[0];
    assert_eq!(first["convincer_name"], "Bruno");
    assert_eq!(first["status"], "failed");
    assert_eq!(first["convincing_score"], 55);
}

#[actix_web::test]
async fn attempt_with_unknown_status_is_rejected() {
    let state = TestState::new(false);
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/attempts")
            .set_json(json!({ "convincer_name": "Bruno", "status": "won" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let attempts: Value =
        test::call_and_read_body_json(&app, TestRequest::get().uri("/api/attempts").to_request())
            .await;
    assert!(attempts.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn time_balance_survives_huge_purchases() {
    let state = TestState::new(false);
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    for _ in 0..3 {
        let resp = test::call_service(
            &app,
            TestRequest::post()
                .uri("/api/payments")
                .set_json(json!({
                    "convincer_id": "c1",
                    "amount_paid": 1,
                    "time_purchased_seconds": i64::MAX
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = test::call_service(
        &app,
        TestRequest::get()
            .uri("/api/convincers/c1/time-balance")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let summary: Value = test::read_body_json(resp).await;
    assert_eq!(summary["total_seconds"], u64::MAX);
    assert_eq!(summary["balances"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn sub_cent_payment_uses_missing_fields_message() {
    let state = TestState::new(false);
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/payments")
            .set_json(json!({
                "convincer_id": "c1",
                "amount_paid": 0.001,
                "time_purchased_seconds": 60
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "convincer_id, amount_paid e time_purchased_seconds são obrigatórios"
    );
}
