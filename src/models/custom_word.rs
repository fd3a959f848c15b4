use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A word submitted by a player so friends can guess it
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CustomWord {
    pub id: Uuid,
    /// Uppercase letters only, 4 to 10 long
    pub word: String,
    pub created_at: DateTime<Utc>,
}

impl CustomWord {
    pub fn new(word: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            word,
            created_at: Utc::now(),
        }
    }
}
