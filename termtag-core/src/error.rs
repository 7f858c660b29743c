//! Core error types (deterministic only)

use thiserror::Error;

/// Core algorithm errors
///
/// Failures of injected capabilities are carried as strings so the core
/// stays independent of any particular tokenizer or stemmer implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A dictionary entry cannot be indexed
    #[error("invalid dictionary entry #{index} ({label:?}): {reason}")]
    InvalidDictionaryEntry {
        /// Position of the entry in the load sequence
        index: usize,
        /// Raw label text of the entry
        label: String,
        /// Why the entry was rejected
        reason: String,
    },

    /// The tokenizer capability failed or returned unusable spans
    #[error("tokenization failed: {0}")]
    TokenizationFailed(String),

    /// The stemmer capability failed for a word
    #[error("stemming failed for {word:?}: {reason}")]
    StemmingFailed {
        /// The word being stemmed
        word: String,
        /// The failure reported by the stemmer
        reason: String,
    },
}

impl CoreError {
    /// Shorthand for a rejected dictionary entry
    pub fn invalid_entry(index: usize, label: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidDictionaryEntry {
            index,
            label: label.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
