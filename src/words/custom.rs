use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::WordError,
    models::CustomWord,
    utils::letters::{clean_word, is_valid_length},
    words::store::CustomWordStore,
};

/// Saves and looks up words players create for each other
pub struct CustomWords {
    store: Arc<dyn CustomWordStore>,
}

impl CustomWords {
    pub fn new(store: Arc<dyn CustomWordStore>) -> Self {
        Self { store }
    }

    /// Clean and persist a submitted word
    pub async fn save(&self, raw: &str) -> Result<CustomWord, WordError> {
        if raw.trim().is_empty() {
            return Err(WordError::MissingWord);
        }

        let word = clean_word(raw);
        if !is_valid_length(word.len()) {
            return Err(WordError::InvalidWord);
        }

        let saved = self.store.insert(&word).await.map_err(WordError::Store)?;
        tracing::info!("Created custom word {} with ID {}", saved.word, saved.id);
        Ok(saved)
    }

    /// Look up a word by the id handed out when it was saved
    pub async fn get(&self, id: &str) -> Result<CustomWord, WordError> {
        let id = Uuid::parse_str(id.trim()).map_err(|_| WordError::InvalidId(id.to_string()))?;

        self.store
            .find(id)
            .await
            .map_err(WordError::Store)?
            .ok_or(WordError::NotFound)
    }
}
