//! Dictionary term matching over normalized token streams
//!
//! This crate holds the deterministic part of termtag: it turns dictionary
//! entries into a normalized index plus an Aho-Corasick automaton, scans
//! normalized text for every dictionary term, and resolves the candidate
//! matches into a stable, non-nested set of annotations.
//!
//! Two coordinate systems are tracked side by side:
//! - **normalized** offsets, counted in chars over the space-delimited,
//!   case-folded (and optionally stemmed) reconstruction of a text;
//! - **original** offsets, counted in chars (and bytes) over the input.
//!
//! Tokenization and stemming are injected through the [`Tokenizer`] and
//! [`Stemmer`] traits; concrete implementations live in `termtag-engine`.
//!
//! # Example
//!
//! ```rust
//! use termtag_core::{
//!     dictionary, overlap, CasePolicy, DictionaryEntry, LabelKind, Normalizer, Scanner,
//! };
//!
//! let tokenizer = |text: &str| -> termtag_core::Result<Vec<std::ops::Range<usize>>> {
//!     let mut spans = Vec::new();
//!     let mut start = None;
//!     for (i, ch) in text.char_indices() {
//!         match (ch.is_whitespace(), start) {
//!             (false, None) => start = Some(i),
//!             (true, Some(s)) => {
//!                 spans.push(s..i);
//!                 start = None;
//!             }
//!             _ => {}
//!         }
//!     }
//!     if let Some(s) = start {
//!         spans.push(s..text.len());
//!     }
//!     Ok(spans)
//! };
//!
//! let normalizer = Normalizer::new(&tokenizer, CasePolicy::insensitive());
//! let entries = vec![DictionaryEntry::new("New York", LabelKind::Label, "urn:ny")];
//! let (index, automaton) = dictionary::load(entries, &normalizer).unwrap();
//!
//! let text = normalizer.process("I live in new york").unwrap();
//! let scanner = Scanner::new(&automaton, &index, false);
//! let mut candidates = scanner.scan(&text);
//! overlap::resolve(&mut candidates, false);
//! let found = overlap::survivors(candidates);
//!
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].found_text, "new york");
//! assert_eq!((found[0].begin, found[0].end), (10, 18));
//! ```

#![warn(missing_docs)]

pub mod annotation;
pub mod automaton;
pub mod capability;
pub mod concept;
pub mod dictionary;
pub mod error;
pub mod language;
pub mod normalizer;
pub mod overlap;
pub mod scanner;
pub mod scorer;
pub mod stemming;
pub mod token;

pub use annotation::Annotation;
pub use automaton::{Automaton, AutomatonBuilder};
pub use capability::{Stemmer, Tokenizer};
pub use concept::{Concept, DictionaryEntry, LabelKind};
pub use dictionary::{DictionaryIndex, TermIndex};
pub use error::{CoreError, Result};
pub use language::Language;
pub use normalizer::{CasePolicy, Normalizer, ProcessedText};
pub use scanner::Scanner;
pub use token::{Token, OUTSIDE};
