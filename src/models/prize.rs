use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PrizeStatus {
    /// No attempt has been recorded yet
    Open,
    Active,
}

impl std::fmt::Display for PrizeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrizeStatus::Open => write!(f, "open"),
            PrizeStatus::Active => write!(f, "active"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Prize {
    pub id: Uuid,
    #[schema(example = 1042.0)]
    pub amount: f64,
    pub status: PrizeStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrizeStatistics {
    pub total_attempts: u64,
    pub successful_attempts: u64,
    pub failed_attempts: u64,
    pub current_prize_amount: f64,
    /// Percentage of successful attempts, two decimals
    pub success_rate: f64,
}
