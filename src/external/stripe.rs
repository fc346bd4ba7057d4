use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::StripeConfig;
use crate::error::{AppError, AppResult};

/// Shape of the Stripe PaymentIntent fields the payment flow relies on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    pub metadata: serde_json::Value,
}

/// Simulated gateway: every intent is created already `succeeded` and no
/// request ever leaves the process.
#[derive(Clone)]
pub struct StripeService {
    config: StripeConfig,
}

impl StripeService {
    pub fn new(config: StripeConfig) -> Self {
        Self { config }
    }

    pub async fn create_payment_intent(
        &self,
        amount: i64,
        convincer_id: &str,
    ) -> AppResult<PaymentIntent> {
        if amount <= 0 {
            return Err(AppError::ValidationError(
                "Payment amount must be greater than zero".to_string(),
            ));
        }

        let id = format!("pi_sim_{}", Uuid::new_v4().simple());
        let secret: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(24)
            .map(char::from)
            .collect();

        let intent = PaymentIntent {
            client_secret: format!("{id}_secret_{secret}"),
            id,
            amount,
            currency: self.config.currency.clone(),
            status: "succeeded".to_string(),
            metadata: serde_json::json!({ "convincer_id": convincer_id }),
        };

        log::info!(
            "Simulated payment intent {} for convincer {}: {} {}",
            intent.id,
            convincer_id,
            intent.amount,
            intent.currency
        );
        Ok(intent)
    }
}
