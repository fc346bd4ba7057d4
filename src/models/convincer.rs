use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConvincerStatus {
    Active,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Convincer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: ConvincerStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Both fields are optional on the wire so that a missing field is reported
/// as a validation error instead of a deserialization failure.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateConvincerRequest {
    #[schema(example = "Ana")]
    pub name: Option<String>,
    #[schema(example = "ana@example.com")]
    pub email: Option<String>,
}
