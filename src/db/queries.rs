use sqlx::{PgPool, Result};
use uuid::Uuid;

use crate::models::{CustomWord, UsedWordsRecord};

// Used word queries
pub async fn get_used_words(pool: &PgPool, length: i32) -> Result<Option<UsedWordsRecord>> {
    sqlx::query_as::<_, UsedWordsRecord>("SELECT * FROM used_words WHERE length = $1")
        .bind(length)
        .fetch_optional(pool)
        .await
}

/// Append a word to the history for its length, keeping only the last `limit`
///
/// The append and the truncation happen in one statement so concurrent
/// selections never leave the list longer than `limit`.
pub async fn push_used_word(pool: &PgPool, length: i32, word: &str, limit: i32) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO used_words (length, words, updated_at)
        VALUES ($1, ARRAY[$2::TEXT], NOW())
        ON CONFLICT (length)
        DO UPDATE SET
            words = (array_append(used_words.words, $2::TEXT))[
                GREATEST(COALESCE(array_length(used_words.words, 1), 0) + 2 - $3, 1):
            ],
            updated_at = NOW()
        "#,
    )
    .bind(length)
    .bind(word)
    .bind(limit)
    .execute(pool)
    .await?;

    tracing::debug!("Recorded used word {} for length {}", word, length);
    Ok(())
}

// Custom word queries
pub async fn create_custom_word(pool: &PgPool, word: &str) -> Result<CustomWord> {
    sqlx::query_as::<_, CustomWord>(
        r#"
        INSERT INTO custom_words (id, word)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(word)
    .fetch_one(pool)
    .await
}

pub async fn get_custom_word(pool: &PgPool, id: Uuid) -> Result<Option<CustomWord>> {
    sqlx::query_as::<_, CustomWord>("SELECT * FROM custom_words WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
