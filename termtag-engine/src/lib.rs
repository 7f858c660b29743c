//! Dictionary term annotation
//!
//! This crate wires the `termtag-core` algorithms to concrete capabilities
//! (a Unicode word tokenizer and Snowball stemmers) behind one entry point,
//! [`Annotator`].
//!
//! # Example
//!
//! ```rust
//! use termtag_engine::{Annotator, AnnotatorConfig, DictionaryEntry, LabelKind};
//!
//! let annotator = Annotator::new(
//!     vec![DictionaryEntry::new("New York", LabelKind::Label, "urn:ny")],
//!     AnnotatorConfig::default(),
//! )
//! .unwrap();
//!
//! let found = annotator.annotate("I live in New York City.").unwrap();
//! assert_eq!(found.len(), 1);
//! assert_eq!((found[0].begin, found[0].end), (10, 18));
//! assert_eq!(found[0].score, 1.0);
//! ```

#![warn(missing_docs)]

pub mod annotator;
pub mod config;
pub mod error;
pub mod input;
pub mod language;
pub mod source;
pub mod stemmer;
pub mod tokenizer;

pub use annotator::{Annotator, AnnotatorBuilder, DictionaryStats};
pub use config::{parse_stemming_language, AnnotatorConfig, AnnotatorConfigBuilder};
pub use error::{EngineError, Result};
pub use input::Input;
pub use source::DictionaryFormat;
pub use stemmer::SnowballStemmer;
pub use tokenizer::UnicodeWordTokenizer;

// Re-export from core for convenience
pub use termtag_core::{
    Annotation, CasePolicy, Concept, DictionaryEntry, LabelKind, Language, Stemmer, Token,
    Tokenizer, OUTSIDE,
};
