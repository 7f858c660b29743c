//! Tokens with coordinates in both the normalized and the original text

/// Token type marker for tokens outside any annotation
pub const OUTSIDE: &str = "O";

/// A single lexical unit
///
/// `norm_begin..norm_end` addresses the token inside the reconstructed
/// normalized string (in chars). `original_begin..original_end` addresses it
/// inside the original text in chars, `byte_begin..byte_end` in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Token text after case folding
    pub surface: String,
    /// Stemmed form, present only when stemming ran
    pub stem: Option<String>,
    /// Start in the normalized string (chars)
    pub norm_begin: usize,
    /// End in the normalized string (chars, exclusive)
    pub norm_end: usize,
    /// Start in the original text (chars)
    pub original_begin: usize,
    /// End in the original text (chars, exclusive)
    pub original_end: usize,
    /// Start in the original text (bytes)
    pub byte_begin: usize,
    /// End in the original text (bytes, exclusive)
    pub byte_end: usize,
    /// Token type label, [`OUTSIDE`] unless tagged
    pub kind: String,
}

impl Token {
    /// Create an untagged, unstemmed token
    pub fn new(surface: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            stem: None,
            norm_begin: 0,
            norm_end: 0,
            original_begin: 0,
            original_end: 0,
            byte_begin: 0,
            byte_end: 0,
            kind: OUTSIDE.to_string(),
        }
    }

    /// The text that takes part in matching: the stem if any, else the surface
    pub fn text(&self) -> &str {
        self.stem.as_deref().unwrap_or(&self.surface)
    }

    /// Length of the matching text in chars
    pub fn norm_len(&self) -> usize {
        self.norm_end - self.norm_begin
    }

    /// Whether the token carries a type other than [`OUTSIDE`]
    pub fn is_tagged(&self) -> bool {
        self.kind != OUTSIDE
    }
}
