use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{Attempt, AttemptStatus, RecordAttemptRequest};
use crate::store::MockStore;

use super::convincer_service::non_blank;

pub const MAX_CONVINCING_SCORE: i64 = 100;

#[derive(Clone)]
pub struct AttemptService {
    store: Arc<MockStore>,
}

impl AttemptService {
    pub fn new(store: Arc<MockStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Attempt> {
        self.store.list_attempts().await
    }

    pub async fn record(&self, request: RecordAttemptRequest) -> AppResult<Attempt> {
        let name = non_blank(request.convincer_name).ok_or_else(|| {
            AppError::ValidationError("convincer_name é obrigatório".to_string())
        })?;
        let status = request
            .status
            .ok_or_else(|| AppError::ValidationError("status é obrigatório".to_string()))?;
        let score = request.convincing_score.unwrap_or(0);
        if !(0..=MAX_CONVINCING_SCORE).contains(&score) {
            return Err(AppError::ValidationError(format!(
                "convincing_score deve estar entre 0 e {MAX_CONVINCING_SCORE}"
            )));
        }
        let score = score as u32;

        let attempt = match status {
            AttemptStatus::Failed => self.store.record_failed_attempt(name, score).await,
            AttemptStatus::Completed => self.store.record_successful_attempt(name, score).await,
        };
        log::info!(
            "Attempt {} recorded as {} with score {}",
            attempt.id,
            attempt.status,
            attempt.convincing_score
        );
        Ok(attempt)
    }
}
