//! Match results

use crate::token::Token;

/// One dictionary term found in a text
///
/// `begin..end` is a half-open range of char offsets into the original text;
/// `byte_begin..byte_end` addresses the same range in bytes, so
/// `found_text == &text[byte_begin..byte_end]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    /// The matched original-text substring
    pub found_text: String,
    /// Canonical label of the matched concept
    pub label: String,
    /// The synonym text, when the match hit a synonym
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub synonym: Option<String>,
    /// Concept URI
    pub uri: String,
    /// Entity type
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", default, skip_serializing_if = "Option::is_none")
    )]
    pub entity_type: Option<String>,
    /// Start in the original text (chars)
    pub begin: usize,
    /// End in the original text (chars, exclusive)
    pub end: usize,
    /// Start in the original text (bytes)
    pub byte_begin: usize,
    /// End in the original text (bytes, exclusive)
    pub byte_end: usize,
    /// Start in the normalized string (chars)
    pub norm_begin: usize,
    /// End in the normalized string (chars, exclusive)
    pub norm_end: usize,
    /// Normalized dictionary key that matched
    pub matched_key: String,
    /// Confidence in `[0, 1]`
    pub score: f64,
    /// Set when another annotation supersedes this one
    #[cfg_attr(feature = "serde", serde(default))]
    pub overlap: bool,
    /// Covered tokens, left to right
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub tokens: Vec<Token>,
}

impl Annotation {
    /// Found text on a single line
    pub fn display_text(&self) -> String {
        self.found_text.replace("\r\n", " ").replace(['\n', '\r'], " ")
    }

    /// Whether the label, found text and URI are all present
    pub fn is_complete(&self) -> bool {
        !self.label.is_empty() && !self.found_text.is_empty() && !self.uri.is_empty()
    }

    /// Length in chars of the original-text span
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Whether the span is empty
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Whether the match hit a synonym rather than a label
    pub fn is_synonym(&self) -> bool {
        self.synonym.is_some()
    }

    /// Whether the two original-text spans share at least one char
    pub fn intersects(&self, other: &Annotation) -> bool {
        self.begin < other.end && other.begin < self.end
    }

    /// Whether this span lies within `other`
    pub fn is_within(&self, other: &Annotation) -> bool {
        self.begin >= other.begin && self.end <= other.end
    }
}
