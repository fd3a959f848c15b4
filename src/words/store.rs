//! Persistence seams for word history and custom words.
//!
//! Postgres implementations are used in production. The in-memory versions
//! back the test suite and `WORD_STORE=memory` local runs.

use anyhow::{Context, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db,
    models::{CustomWord, UsedWordsRecord},
};

/// Per-length history of recently served words.
#[async_trait]
pub trait RecentWordStore: Send + Sync {
    /// Words recently served for `length`, oldest first.
    async fn recent_words(&self, length: usize) -> Result<Vec<String>>;

    /// Record `word` as served, keeping at most `limit` words for `length`.
    async fn mark_used(&self, length: usize, word: &str, limit: usize) -> Result<()>;
}

/// Storage for player-submitted words.
#[async_trait]
pub trait CustomWordStore: Send + Sync {
    async fn insert(&self, word: &str) -> Result<CustomWord>;

    async fn find(&self, id: Uuid) -> Result<Option<CustomWord>>;
}

pub struct PgRecentWordStore {
    pool: PgPool,
}

impl PgRecentWordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Convert a count to the INTEGER the `used_words` table binds
fn sql_int(value: usize, what: &str) -> Result<i32> {
    i32::try_from(value).with_context(|| format!("{} {} does not fit in INTEGER", what, value))
}

#[async_trait]
impl RecentWordStore for PgRecentWordStore {
    async fn recent_words(&self, length: usize) -> Result<Vec<String>> {
        let length = sql_int(length, "length")?;
        let record = db::queries::get_used_words(&self.pool, length).await?;
        Ok(record.map(|r| r.words).unwrap_or_default())
    }

    async fn mark_used(&self, length: usize, word: &str, limit: usize) -> Result<()> {
        let length = sql_int(length, "length")?;
        let limit = sql_int(limit, "limit")?;
        db::queries::push_used_word(&self.pool, length, word, limit).await?;
        Ok(())
    }
}

pub struct PgCustomWordStore {
    pool: PgPool,
}

impl PgCustomWordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomWordStore for PgCustomWordStore {
    async fn insert(&self, word: &str) -> Result<CustomWord> {
        Ok(db::queries::create_custom_word(&self.pool, word).await?)
    }

    async fn find(&self, id: Uuid) -> Result<Option<CustomWord>> {
        Ok(db::queries::get_custom_word(&self.pool, id).await?)
    }
}

#[derive(Default)]
pub struct MemoryRecentWordStore {
    records: DashMap<usize, UsedWordsRecord>,
}

impl MemoryRecentWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the record for a length, if one exists
    #[cfg(test)]
    pub fn record(&self, length: usize) -> Option<UsedWordsRecord> {
        self.records.get(&length).map(|r| r.clone())
    }
}

#[async_trait]
impl RecentWordStore for MemoryRecentWordStore {
    async fn recent_words(&self, length: usize) -> Result<Vec<String>> {
        Ok(self
            .records
            .get(&length)
            .map(|r| r.words.clone())
            .unwrap_or_default())
    }

    async fn mark_used(&self, length: usize, word: &str, limit: usize) -> Result<()> {
        // The entry guard holds the shard lock for the whole append
        self.records
            .entry(length)
            .or_insert_with(|| UsedWordsRecord::new(length))
            .push(word, limit);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryCustomWordStore {
    words: DashMap<Uuid, CustomWord>,
}

impl MemoryCustomWordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomWordStore for MemoryCustomWordStore {
    async fn insert(&self, word: &str) -> Result<CustomWord> {
        let custom = CustomWord::new(word.to_string());
        self.words.insert(custom.id, custom.clone());
        Ok(custom)
    }

    async fn find(&self, id: Uuid) -> Result<Option<CustomWord>> {
        Ok(self.words.get(&id).map(|w| w.clone()))
    }
}
