use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TimeBalanceStatus {
    Active,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Payment {
    pub id: Uuid,
    pub convincer_id: String,
    pub amount_paid: f64,
    pub time_purchased_seconds: u64,
    pub status: PaymentStatus,
    /// Id of the (simulated) Stripe PaymentIntent that settled this payment
    pub payment_intent_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct TimeBalance {
    pub id: Uuid,
    pub convincer_id: String,
    pub payment_id: Uuid,
    pub amount_time_seconds: u64,
    pub status: TimeBalanceStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentRequest {
    #[schema(example = "c1")]
    pub convincer_id: Option<String>,
    #[schema(example = 1.0)]
    pub amount_paid: Option<f64>,
    #[schema(example = 60)]
    pub time_purchased_seconds: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentResponse {
    pub payment: Payment,
    #[serde(rename = "timeBalance")]
    pub time_balance: TimeBalance,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimeBalanceSummary {
    pub convincer_id: String,
    pub total_seconds: u64,
    pub balances: Vec<TimeBalance>,
}
