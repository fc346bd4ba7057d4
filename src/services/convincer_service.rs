use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Convincer, CreateConvincerRequest, TimeBalanceSummary};
use crate::store::MockStore;

pub const MISSING_NAME_OR_EMAIL: &str = "Nome e email são obrigatórios";

#[derive(Clone)]
pub struct ConvincerService {
    store: Arc<MockStore>,
}

impl ConvincerService {
    pub fn new(store: Arc<MockStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: CreateConvincerRequest) -> AppResult<Convincer> {
        let name = non_blank(request.name);
        let email = non_blank(request.email);
        let (Some(name), Some(email)) = (name, email) else {
            return Err(AppError::ValidationError(MISSING_NAME_OR_EMAIL.to_string()));
        };

        let convincer = self.store.create_convincer(name, email).await;
        log::info!("Convincer created: {}", convincer.id);
        Ok(convincer)
    }

    pub async fn get(&self, id: &str) -> AppResult<Convincer> {
        let not_found = || AppError::NotFound("Convincer not found".to_string());
        let id = Uuid::parse_str(id).map_err(|_| not_found())?;
        self.store.find_convincer(id).await.ok_or_else(not_found)
    }

    /// Sums every active time balance bought for `convincer_id`. Unknown ids
    /// yield an empty summary, since payments accept any convincer id.
    pub async fn time_balance(&self, convincer_id: &str) -> TimeBalanceSummary {
        let balances = self.store.time_balances_for(convincer_id).await;
        TimeBalanceSummary {
            convincer_id: convincer_id.to_string(),
            total_seconds: balances
                .iter()
                .fold(0u64, |acc, b| acc.saturating_add(b.amount_time_seconds)),
            balances,
        }
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
