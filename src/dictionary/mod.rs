use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Number of curated fallback words per length
pub const FALLBACK_WORDS_PER_LENGTH: usize = 10;

/// Curated words served when the generative source cannot produce one.
/// Keyed by word length, every entry has exactly that many letters.
static FALLBACK_WORDS: Lazy<HashMap<usize, [&'static str; FALLBACK_WORDS_PER_LENGTH]>> =
    Lazy::new(|| {
        let mut map = HashMap::new();

        map.insert(
            4,
            ["LOVE", "GLOW", "KISS", "BOLD", "FIRE", "HOPE", "STAR", "MOON", "ROSE", "WISH"],
        );
        map.insert(
            5,
            ["HEART", "BLUSH", "CHARM", "SMILE", "DREAM", "GRACE", "PEACE", "LIGHT", "MAGIC", "SWEET"],
        );
        map.insert(
            6,
            [
                "BEAUTY", "SPARKS", "WARMTH", "GOLDEN", "TENDER", "LOVELY", "BRIGHT", "GENTLE",
                "SERENE", "DIVINE",
            ],
        );
        map.insert(
            7,
            [
                "BELOVED", "RADIANT", "GLOWING", "DARLING", "FANTASY", "AMAZING", "PERFECT",
                "ELEGANT", "HARMONY", "DELIGHT",
            ],
        );
        map.insert(
            8,
            [
                "ADORABLE", "GORGEOUS", "ROMANTIC", "PRECIOUS", "SPLENDID", "CHARMING", "DAZZLING",
                "GRACEFUL", "LUMINOUS", "STUNNING",
            ],
        );
        map.insert(
            9,
            [
                "WONDERFUL", "BEAUTIFUL", "ENCHANTED", "EXQUISITE", "GLAMOROUS", "MARVELOUS",
                "SPARKLING", "BRILLIANT", "FANTASTIC", "DELICIOUS",
            ],
        );
        map.insert(
            10,
            [
                "BREATHLESS", "SPELLBOUND", "REMARKABLE", "PASSIONATE", "CAPTIVATED",
                "INCREDIBLE", "DELIGHTFUL", "BLOSSOMING", "PHENOMENAL", "ATTRACTIVE",
            ],
        );

        map
    });

/// Get the fallback words for a length (empty for unsupported lengths)
pub fn fallback_words(length: usize) -> &'static [&'static str] {
    FALLBACK_WORDS
        .get(&length)
        .map(|words| words.as_slice())
        .unwrap_or(&[])
}
