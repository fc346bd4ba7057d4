use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::external::StripeService;
use crate::models::{CreatePaymentRequest, CreatePaymentResponse};
use crate::store::{MockStore, amount_to_cents};

use super::convincer_service::non_blank;

pub const MISSING_PAYMENT_FIELDS: &str =
    "convincer_id, amount_paid e time_purchased_seconds são obrigatórios";

#[derive(Clone)]
pub struct PaymentService {
    store: Arc<MockStore>,
    stripe_service: StripeService,
}

impl PaymentService {
    pub fn new(store: Arc<MockStore>, stripe_service: StripeService) -> Self {
        Self {
            store,
            stripe_service,
        }
    }

    /// Charges through the simulated gateway, then records the payment and
    /// the chat time it buys.
    pub async fn process(&self, request: CreatePaymentRequest) -> AppResult<CreatePaymentResponse> {
        let missing = || AppError::ValidationError(MISSING_PAYMENT_FIELDS.to_string());

        let convincer_id = non_blank(request.convincer_id).ok_or_else(missing)?;
        let amount_paid = request
            .amount_paid
            .filter(|a| a.is_finite() && amount_to_cents(*a) > 0)
            .ok_or_else(missing)?;
        let seconds = request
            .time_purchased_seconds
            .filter(|s| *s > 0)
            .ok_or_else(missing)? as u64;

        let intent = self
            .stripe_service
            .create_payment_intent(amount_to_cents(amount_paid), &convincer_id)
            .await?;
        if intent.status != "succeeded" {
            return Err(AppError::InternalError(format!(
                "payment intent {} ended as {}",
                intent.id, intent.status
            )));
        }

        let (payment, time_balance) = self
            .store
            .create_payment(convincer_id, amount_paid, seconds, intent.id)
            .await;
        log::info!(
            "Payment {} completed: {} seconds for convincer {}",
            payment.id,
            seconds,
            payment.convincer_id
        );

        Ok(CreatePaymentResponse {
            payment,
            time_balance,
            success: true,
        })
    }
}
