use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::{Attempt, AttemptStatus};

/// (convincer name, convincing score, minutes ago)
const MOCK_ATTEMPTS: &[(&str, u32, i64)] = &[
    ("Lucas", 12, 340),
    ("Mariana", 35, 275),
    ("Pedro", 8, 190),
    ("Juliana", 47, 122),
    ("Rafael", 23, 64),
    ("Camila", 61, 18),
];

/// Failed attempts shown before anyone has played, oldest first.
pub(crate) fn mock_attempts() -> Vec<Attempt> {
    let now = Utc::now();
    MOCK_ATTEMPTS
        .iter()
        .map(|(name, score, minutes_ago)| Attempt {
            id: Uuid::new_v4(),
            status: AttemptStatus::Failed,
            convincing_score: *score,
            created_at: now - Duration::minutes(*minutes_ago),
            convincer_name: (*name).to_string(),
        })
        .collect()
}
