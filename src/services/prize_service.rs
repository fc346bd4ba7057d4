use std::sync::Arc;

use crate::models::{Prize, PrizeStatistics};
use crate::store::MockStore;

#[derive(Clone)]
pub struct PrizeService {
    store: Arc<MockStore>,
}

impl PrizeService {
    pub fn new(store: Arc<MockStore>) -> Self {
        Self { store }
    }

    pub async fn current_prize(&self) -> Prize {
        self.store.get_current_prize().await
    }

    pub async fn statistics(&self) -> PrizeStatistics {
        self.store.get_statistics().await
    }
}
