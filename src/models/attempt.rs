use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttemptStatus {
    Failed,
    Completed,
}

impl std::fmt::Display for AttemptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttemptStatus::Failed => write!(f, "failed"),
            AttemptStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Attempt {
    pub id: Uuid,
    pub status: AttemptStatus,
    /// 0 to 100
    pub convincing_score: u32,
    pub created_at: DateTime<Utc>,
    pub convincer_name: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct RecordAttemptRequest {
    #[schema(example = "Ana")]
    pub convincer_name: Option<String>,
    pub status: Option<AttemptStatus>,
    #[schema(example = 42)]
    pub convincing_score: Option<i64>,
}
