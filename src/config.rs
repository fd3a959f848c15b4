use anyhow::{anyhow, Context, Result};
use std::{env, str::FromStr, time::Duration};

use crate::words::{ExhaustedFallback, SelectionPolicy, StoreOutage};

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub gemini: GeminiConfig,
    pub server: ServerConfig,
    pub words: WordsConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Only required when words are stored in Postgres
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Without a key every word comes from the fallback table
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown word store '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WordsConfig {
    pub store: StoreBackend,
    pub max_attempts: u32,
    pub recent_limit: usize,
    pub store_outage: StoreOutage,
    pub exhausted_fallback: ExhaustedFallback,
}

impl WordsConfig {
    /// Reject settings the stores cannot represent
    pub fn validate(&self) -> Result<()> {
        if self.recent_limit == 0 || i32::try_from(self.recent_limit).is_err() {
            anyhow::bail!(
                "WORD_RECENT_LIMIT must be between 1 and {} (got {})",
                i32::MAX,
                self.recent_limit
            );
        }
        Ok(())
    }
}

/// Read an optional variable, treating blank values as unset
fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse a variable with `FromStr`, using `default` when it is unset
fn parse_var<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = optional_var(key).unwrap_or_else(|| default.to_string());
    raw.parse::<T>()
        .map_err(|e| anyhow!("{} has an invalid value '{}': {}", key, raw, e))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database = DatabaseConfig {
            url: optional_var("DATABASE_URL"),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a number")?,
        };

        let gemini = GeminiConfig {
            api_key: optional_var("GEMINI_API_KEY"),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            base_url: env::var("GEMINI_BASE_URL").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta".to_string()
            }),
            timeout_secs: env::var("GEMINI_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("GEMINI_TIMEOUT_SECS must be a number")?,
        };

        let server = ServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("PORT must be a number")?,
        };

        let words = WordsConfig {
            store: parse_var("WORD_STORE", "postgres")?,
            max_attempts: parse_var("WORD_MAX_ATTEMPTS", "3")?,
            recent_limit: parse_var("WORD_RECENT_LIMIT", "50")?,
            store_outage: parse_var("WORD_STORE_OUTAGE", "fail-open")?,
            exhausted_fallback: parse_var("WORD_EXHAUSTED_FALLBACK", "reuse-all")?,
        };

        words.validate()?;

        Ok(Config {
            database,
            gemini,
            server,
            words,
        })
    }

    pub fn database_url(&self) -> Result<&str> {
        self.database
            .url
            .as_deref()
            .context("DATABASE_URL must be set when WORD_STORE=postgres")
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Selection tunables derived from the word settings
    pub fn selection_policy(&self) -> SelectionPolicy {
        SelectionPolicy {
            max_attempts: self.words.max_attempts,
            recent_limit: self.words.recent_limit,
            source_timeout: Duration::from_secs(self.gemini.timeout_secs),
            store_outage: self.words.store_outage,
            exhausted_fallback: self.words.exhausted_fallback,
        }
    }
}
