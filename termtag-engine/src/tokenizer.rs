//! Default word tokenizer

use std::ops::Range;
use termtag_core::{Result, Tokenizer};
use unicode_segmentation::UnicodeSegmentation;

/// Splits text on Unicode word boundaries (UAX #29)
///
/// Whitespace runs are dropped; punctuation marks become their own tokens,
/// so `"York."` yields `York` and `.`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordTokenizer;

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Range<usize>>> {
        Ok(text
            .split_word_bound_indices()
            .filter(|(_, segment)| !segment.chars().all(char::is_whitespace))
            .map(|(start, segment)| start..start + segment.len())
            .collect())
    }
}
