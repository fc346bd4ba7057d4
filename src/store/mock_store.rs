use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::{AttemptOrder, StoreConfig};
use crate::models::{
    Attempt, AttemptStatus, Convincer, ConvincerStatus, Payment, PaymentStatus, Prize,
    PrizeStatistics, PrizeStatus, TimeBalance, TimeBalanceStatus,
};

use super::seed::mock_attempts;

/// Converts a decimal amount to whole cents. Prize arithmetic is done in
/// cents so repeated increments never drift.
pub fn amount_to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

pub fn cents_to_amount(cents: i64) -> f64 {
    cents as f64 / 100.0
}

#[derive(Debug, Default)]
struct StoreState {
    total_attempts: u64,
    successful_attempts: u64,
    failed_attempts: u64,
    prize_cents: i64,
    attempts: Vec<Attempt>,
    convincers: HashMap<Uuid, Convincer>,
    payments: Vec<Payment>,
    time_balances: Vec<TimeBalance>,
}

impl StoreState {
    fn push_attempt(&mut self, convincer_name: String, status: AttemptStatus, score: u32) -> Attempt {
        let attempt = Attempt {
            id: Uuid::new_v4(),
            status,
            convincing_score: score,
            created_at: Utc::now(),
            convincer_name,
        };
        self.attempts.push(attempt.clone());
        attempt
    }
}

/// Process-wide mock data. Every mutation holds the write lock for its whole
/// duration, so counters, prize and lists always move together.
#[derive(Debug)]
pub struct MockStore {
    state: RwLock<StoreState>,
    prize_id: Uuid,
    prize_created_at: DateTime<Utc>,
    prize_increment_cents: i64,
    attempt_order: AttemptOrder,
}

impl MockStore {
    pub fn new(config: &StoreConfig) -> Self {
        let increment = amount_to_cents(config.prize_increment);
        let mut state = StoreState {
            prize_cents: amount_to_cents(config.initial_prize_amount),
            ..Default::default()
        };

        if config.seed_mock_data {
            let seeded = mock_attempts();
            let failed = seeded.len() as u64;
            state.failed_attempts = failed;
            state.total_attempts = failed;
            state.prize_cents = state
                .prize_cents
                .saturating_add(increment.saturating_mul(failed as i64));
            state.attempts = seeded;
        }

        Self {
            state: RwLock::new(state),
            prize_id: Uuid::new_v4(),
            prize_created_at: Utc::now(),
            prize_increment_cents: increment,
            attempt_order: config.attempt_order,
        }
    }

    pub async fn get_statistics(&self) -> PrizeStatistics {
        let state = self.state.read().await;
        let success_rate = if state.total_attempts == 0 {
            0.0
        } else {
            let rate = state.successful_attempts as f64 / state.total_attempts as f64 * 100.0;
            (rate * 100.0).round() / 100.0
        };

        PrizeStatistics {
            total_attempts: state.total_attempts,
            successful_attempts: state.successful_attempts,
            failed_attempts: state.failed_attempts,
            current_prize_amount: cents_to_amount(state.prize_cents),
            success_rate,
        }
    }

    pub async fn get_current_prize(&self) -> Prize {
        let state = self.state.read().await;
        Prize {
            id: self.prize_id,
            amount: cents_to_amount(state.prize_cents),
            status: if state.total_attempts == 0 {
                PrizeStatus::Open
            } else {
                PrizeStatus::Active
            },
            created_at: self.prize_created_at,
        }
    }

    pub async fn list_attempts(&self) -> Vec<Attempt> {
        let state = self.state.read().await;
        match self.attempt_order {
            AttemptOrder::AsInserted => state.attempts.clone(),
            AttemptOrder::NewestFirst => state.attempts.iter().rev().cloned().collect(),
        }
    }

    pub async fn record_failed_attempt(&self, convincer_name: String, score: u32) -> Attempt {
        let mut state = self.state.write().await;
        state.failed_attempts += 1;
        state.total_attempts += 1;
        state.prize_cents = state.prize_cents.saturating_add(self.prize_increment_cents);
        state.push_attempt(convincer_name, AttemptStatus::Failed, score)
    }

    pub async fn record_successful_attempt(&self, convincer_name: String, score: u32) -> Attempt {
        let mut state = self.state.write().await;
        state.successful_attempts += 1;
        state.total_attempts += 1;
        state.push_attempt(convincer_name, AttemptStatus::Completed, score)
    }

    pub async fn create_convincer(&self, name: String, email: String) -> Convincer {
        let now = Utc::now();
        let convincer = Convincer {
            id: Uuid::new_v4(),
            name,
            email,
            status: ConvincerStatus::Active,
            created_at: now,
            updated_at: now,
        };
        let mut state = self.state.write().await;
        state.convincers.insert(convincer.id, convincer.clone());
        convincer
    }

    pub async fn find_convincer(&self, id: Uuid) -> Option<Convincer> {
        self.state.read().await.convincers.get(&id).cloned()
    }

    /// Stores a completed payment together with the time balance it buys.
    pub async fn create_payment(
        &self,
        convincer_id: String,
        amount_paid: f64,
        time_purchased_seconds: u64,
        payment_intent_id: String,
    ) -> (Payment, TimeBalance) {
        let now = Utc::now();
        let payment = Payment {
            id: Uuid::new_v4(),
            convincer_id: convincer_id.clone(),
            amount_paid,
            time_purchased_seconds,
            status: PaymentStatus::Completed,
            payment_intent_id,
            created_at: now,
        };
        let time_balance = TimeBalance {
            id: Uuid::new_v4(),
            convincer_id,
            payment_id: payment.id,
            amount_time_seconds: time_purchased_seconds,
            status: TimeBalanceStatus::Active,
            created_at: now,
        };

        let mut state = self.state.write().await;
        state.payments.push(payment.clone());
        state.time_balances.push(time_balance.clone());
        (payment, time_balance)
    }

    pub async fn time_balances_for(&self, convincer_id: &str) -> Vec<TimeBalance> {
        self.state
            .read()
            .await
            .time_balances
            .iter()
            .filter(|b| b.convincer_id == convincer_id && b.status == TimeBalanceStatus::Active)
            .cloned()
            .collect()
    }
}
