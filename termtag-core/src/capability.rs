//! Injected capabilities: word tokenization and stemming

use crate::error::Result;
use crate::language::Language;
use std::ops::Range;

/// Splits text into word spans
///
/// Implementations return byte ranges into `text`, left to right and
/// non-overlapping. Spans need not cover whitespace.
pub trait Tokenizer: Send + Sync {
    /// Tokenize `text` into byte spans
    fn tokenize(&self, text: &str) -> Result<Vec<Range<usize>>>;
}

/// Reduces a single word to its stem for a given language
pub trait Stemmer: Send + Sync {
    /// Stem `word` using the rules of `language`
    fn stem(&self, language: Language, word: &str) -> Result<String>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Result<Vec<Range<usize>>> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Result<Vec<Range<usize>>> {
        self(text)
    }
}

impl<F> Stemmer for F
where
    F: Fn(Language, &str) -> Result<String> + Send + Sync,
{
    fn stem(&self, language: Language, word: &str) -> Result<String> {
        self(language, word)
    }
}
