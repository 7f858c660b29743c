//! Engine error types
//!
//! Core failures are flattened into named variants so callers can match on
//! the failure kind without reaching into `termtag-core`.

use termtag_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// A dictionary entry was rejected at load time
    #[error("invalid dictionary entry #{index} ({label:?}): {reason}")]
    InvalidDictionaryEntry {
        /// Position of the entry in the load sequence
        index: usize,
        /// Raw label text
        label: String,
        /// Why the entry was rejected
        reason: String,
    },

    /// The tokenizer failed or produced unusable spans
    #[error("tokenization failed: {0}")]
    TokenizationFailed(String),

    /// The stemmer failed for a word
    #[error("stemming failed for {word:?}: {reason}")]
    StemmingFailed {
        /// The word being stemmed
        word: String,
        /// The failure reported by the stemmer
        reason: String,
    },

    /// A dictionary file could not be parsed
    #[error("malformed dictionary{}: {reason}", at_line(.line))]
    DictionaryFormat {
        /// 1-based line number, when known
        line: Option<usize>,
        /// What is wrong with the input
        reason: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding error (UTF-8, etc.)
    #[error("encoding error: {0}")]
    EncodingError(String),
}

impl From<CoreError> for EngineError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidDictionaryEntry {
                index,
                label,
                reason,
            } => EngineError::InvalidDictionaryEntry {
                index,
                label,
                reason,
            },
            CoreError::TokenizationFailed(reason) => EngineError::TokenizationFailed(reason),
            CoreError::StemmingFailed { word, reason } => {
                EngineError::StemmingFailed { word, reason }
            }
        }
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for EngineError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        EngineError::EncodingError(err.to_string())
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::DictionaryFormat {
            line: Some(err.line()),
            reason: err.to_string(),
        }
    }
}

fn at_line(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
