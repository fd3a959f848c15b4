use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Recently served words for a single word length, oldest first
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UsedWordsRecord {
    pub length: i32,
    pub words: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl UsedWordsRecord {
    pub fn new(length: usize) -> Self {
        Self {
            length: length as i32,
            words: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Append a word, dropping the oldest entries so at most `limit` remain
    pub fn push(&mut self, word: &str, limit: usize) {
        self.words.push(word.to_string());
        if self.words.len() > limit {
            let excess = self.words.len() - limit;
            self.words.drain(..excess);
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut record = UsedWordsRecord::new(5);
        record.push("HEART", 50);
        record.push("DREAM", 50);

        assert_eq!(record.words, vec!["HEART", "DREAM"]);
    }

    #[test]
    fn test_push_evicts_oldest_first() {
        let mut record = UsedWordsRecord::new(4);
        for word in ["LOVE", "GLOW", "KISS", "BOLD"] {
            record.push(word, 3);
        }

        assert_eq!(record.words, vec!["GLOW", "KISS", "BOLD"]);
    }

    #[test]
    fn test_push_touches_updated_at() {
        let mut record = UsedWordsRecord::new(6);
        let before = record.updated_at;
        record.push("GOLDEN", 50);
        assert!(record.updated_at >= before);
    }
}
