pub mod custom_word;
pub mod used_words;

pub use custom_word::CustomWord;
pub use used_words::UsedWordsRecord;
