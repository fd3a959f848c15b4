/// Shortest word length the game supports
pub const MIN_WORD_LENGTH: usize = 4;
/// Longest word length the game supports
pub const MAX_WORD_LENGTH: usize = 10;
/// Length served when a client does not ask for one
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Strip everything that is not an alphabetic character and uppercase the rest.
///
/// Used both for generated candidates ("  dream.\n" -> "DREAM") and for
/// client-submitted custom words ("p*y1thon" -> "PYTHON").
pub fn clean_word(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Check if a word length is within the playable range
pub fn is_valid_length(length: usize) -> bool {
    (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length)
}

/// Convert a requested length into a playable one, if it is in range
pub fn playable_length(requested: i64) -> Option<usize> {
    usize::try_from(requested).ok().filter(|len| is_valid_length(*len))
}
