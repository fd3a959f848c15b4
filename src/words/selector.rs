//! Word selection with recent-word avoidance.
//!
//! The generative source is tried a bounded number of times. When it keeps
//! failing, or keeps suggesting words that were served recently, a word is
//! drawn from the curated fallback table instead. A valid length always
//! yields a word.

use std::{str::FromStr, sync::Arc, time::Duration};

use rand::seq::IndexedRandom;

use crate::{
    dictionary,
    error::WordError,
    utils::letters::{clean_word, playable_length},
    words::{
        source::{SourceError, WordSource},
        store::RecentWordStore,
    },
};

/// Candidates requested from the source before falling back
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Words remembered per length
pub const DEFAULT_RECENT_LIMIT: usize = 50;
/// Upper bound on a single source call
pub const DEFAULT_SOURCE_TIMEOUT: Duration = Duration::from_secs(10);

/// What selection does when the recent-word store cannot be reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreOutage {
    /// Serve words without recency filtering and skip recording them
    #[default]
    FailOpen,
    /// Surface the store error to the caller
    FailClosed,
}

impl FromStr for StoreOutage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail-open" | "open" => Ok(StoreOutage::FailOpen),
            "fail-closed" | "closed" => Ok(StoreOutage::FailClosed),
            other => Err(format!("unknown store outage policy '{}'", other)),
        }
    }
}

/// What the fallback path does when every fallback word was served recently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExhaustedFallback {
    /// Ignore recency and pick uniformly from the whole table
    #[default]
    ReuseAll,
    /// Pick the fallback word that was served longest ago
    LeastRecent,
}

impl FromStr for ExhaustedFallback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reuse-all" => Ok(ExhaustedFallback::ReuseAll),
            "least-recent" => Ok(ExhaustedFallback::LeastRecent),
            other => Err(format!("unknown exhausted fallback policy '{}'", other)),
        }
    }
}

/// Tunables for [`WordSelector`]
#[derive(Debug, Clone)]
pub struct SelectionPolicy {
    pub max_attempts: u32,
    pub recent_limit: usize,
    pub source_timeout: Duration,
    pub store_outage: StoreOutage,
    pub exhausted_fallback: ExhaustedFallback,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            recent_limit: DEFAULT_RECENT_LIMIT,
            source_timeout: DEFAULT_SOURCE_TIMEOUT,
            store_outage: StoreOutage::default(),
            exhausted_fallback: ExhaustedFallback::default(),
        }
    }
}

/// A word chosen for a game round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedWord {
    pub word: String,
    /// True when the word came from the static fallback table
    pub used_fallback: bool,
}

pub struct WordSelector {
    source: Arc<dyn WordSource>,
    store: Arc<dyn RecentWordStore>,
    policy: SelectionPolicy,
}

impl WordSelector {
    pub fn new(
        source: Arc<dyn WordSource>,
        store: Arc<dyn RecentWordStore>,
        policy: SelectionPolicy,
    ) -> Self {
        Self {
            source,
            store,
            policy,
        }
    }

    pub fn policy(&self) -> &SelectionPolicy {
        &self.policy
    }

    /// Pick a word of `requested` letters that was not served recently
    pub async fn select_word(&self, requested: i64) -> Result<SelectedWord, WordError> {
        let length = playable_length(requested).ok_or(WordError::InvalidLength(requested))?;
        let recent = self.load_recent(length).await?;

        for attempt in 1..=self.policy.max_attempts {
            match self.fetch_candidate(length).await {
                Ok(word) if word.len() != length => {
                    tracing::debug!(
                        "Attempt {}: rejected '{}' (wanted {} letters)",
                        attempt,
                        word,
                        length
                    );
                }
                Ok(word) if recent.contains(&word) => {
                    tracing::debug!("Attempt {}: '{}' was served recently", attempt, word);
                }
                Ok(word) => {
                    self.record(length, &word).await?;
                    return Ok(SelectedWord {
                        word,
                        used_fallback: false,
                    });
                }
                Err(e) => {
                    tracing::warn!("Attempt {}: word source failed: {}", attempt, e);
                }
            }
        }

        let word = self
            .choose_fallback(length, &recent)
            .ok_or(WordError::InvalidLength(requested))?;
        tracing::info!("Serving fallback word for length {}", length);

        self.record(length, &word).await?;
        Ok(SelectedWord {
            word,
            used_fallback: true,
        })
    }

    /// Ask the source for a candidate and normalize it
    async fn fetch_candidate(&self, length: usize) -> Result<String, SourceError> {
        let raw = tokio::time::timeout(self.policy.source_timeout, self.source.generate(length))
            .await
            .map_err(|_| SourceError::Timeout)??;
        Ok(clean_word(&raw))
    }

    async fn load_recent(&self, length: usize) -> Result<Vec<String>, WordError> {
        match self.store.recent_words(length).await {
            Ok(words) => Ok(words),
            Err(e) => match self.policy.store_outage {
                StoreOutage::FailOpen => {
                    tracing::error!(
                        "Recent words unavailable for length {}, selecting without them: {:#}",
                        length,
                        e
                    );
                    Ok(Vec::new())
                }
                StoreOutage::FailClosed => Err(WordError::Store(e)),
            },
        }
    }

    async fn record(&self, length: usize, word: &str) -> Result<(), WordError> {
        match self
            .store
            .mark_used(length, word, self.policy.recent_limit)
            .await
        {
            Ok(()) => Ok(()),
            Err(e) => match self.policy.store_outage {
                StoreOutage::FailOpen => {
                    tracing::error!("Failed to record '{}' as used: {:#}", word, e);
                    Ok(())
                }
                StoreOutage::FailClosed => Err(WordError::Store(e)),
            },
        }
    }

    fn choose_fallback(&self, length: usize, recent: &[String]) -> Option<String> {
        let table = dictionary::fallback_words(length);
        let fresh: Vec<&str> = table
            .iter()
            .copied()
            .filter(|w| !recent.iter().any(|r| r == w))
            .collect();

        let mut rng = rand::rng();
        let word = if !fresh.is_empty() {
            fresh.choose(&mut rng).copied()
        } else {
            tracing::info!(
                "Every fallback word for length {} was served recently, reusing",
                length
            );
            match self.policy.exhausted_fallback {
                ExhaustedFallback::ReuseAll => table.choose(&mut rng).copied(),
                ExhaustedFallback::LeastRecent => table
                    .iter()
                    .copied()
                    .min_by_key(|w| recent.iter().position(|r| r == w).unwrap_or(0)),
            }
        };

        word.map(String::from)
    }
}
