//! Case folding and normalized-string reconstruction
//!
//! Every text, dictionary term or document alike, is rebuilt as a single
//! string that starts with one sentinel space and has exactly one space after
//! each token: `" new york city . "`. Dictionary patterns carry the same
//! sentinels, so a pattern can only ever match a whole run of tokens.

use crate::capability::{Stemmer, Tokenizer};
use crate::error::{CoreError, Result};
use crate::language::Language;
use crate::stemming;
use crate::token::Token;
use std::borrow::Cow;
use std::ops::Range;

/// Case folding policy shared by dictionary terms and documents
///
/// - `case_sensitive == false`: every token is lowercased.
/// - `case_sensitive == true`, `case_sensitive_length == 0`: tokens keep
///   their case.
/// - `case_sensitive == true`, `case_sensitive_length == L > 0`: only
///   tokens longer than `L` chars are lowercased, so short acronyms stay
///   case-distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CasePolicy {
    /// Whether case is significant at all
    pub case_sensitive: bool,
    /// Tokens up to this many chars keep their case (0 = all tokens)
    pub case_sensitive_length: usize,
}

impl CasePolicy {
    /// Create a policy
    pub fn new(case_sensitive: bool, case_sensitive_length: usize) -> Self {
        Self {
            case_sensitive,
            case_sensitive_length,
        }
    }

    /// Lowercase everything
    pub fn insensitive() -> Self {
        Self::new(false, 0)
    }

    /// Never change case
    pub fn exact() -> Self {
        Self::new(true, 0)
    }

    /// Whether a token of this text is lowercased under the policy
    pub fn lowercases(&self, word: &str) -> bool {
        if !self.case_sensitive {
            return true;
        }
        self.case_sensitive_length > 0 && word.chars().count() > self.case_sensitive_length
    }

    /// Fold a single token
    pub fn fold_token<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if self.lowercases(word) {
            Cow::Owned(word.to_lowercase())
        } else {
            Cow::Borrowed(word)
        }
    }

    /// Fold free text word by word, keeping the whitespace as is
    pub fn fold_text(&self, text: &str) -> String {
        let mut folded = String::with_capacity(text.len());
        for piece in text.split_inclusive(char::is_whitespace) {
            let word_len = piece.trim_end_matches(char::is_whitespace).len();
            folded.push_str(&self.fold_token(&piece[..word_len]));
            folded.push_str(&piece[word_len..]);
        }
        folded
    }
}

/// A text after tokenization and normalization
///
/// This is the per-call scratch state of the annotator: it is created for
/// one text, consumed by the scanner and dropped.
#[derive(Debug, Clone)]
pub struct ProcessedText<'t> {
    original: &'t str,
    tokens: Vec<Token>,
    normalized: String,
}

impl<'t> ProcessedText<'t> {
    /// Build tokens and the normalized string from tokenizer spans
    ///
    /// Spans are byte ranges into `original`; they must lie on char
    /// boundaries and be ordered and non-overlapping. Empty spans are
    /// ignored.
    pub fn from_spans(original: &'t str, spans: &[Range<usize>], policy: CasePolicy) -> Result<Self> {
        let mut tokens = Vec::with_capacity(spans.len());
        let mut normalized = String::with_capacity(original.len() + 2);
        normalized.push(' ');

        let mut position = 0;
        let mut byte_cursor = 0;
        let mut char_cursor = 0;

        for span in spans {
            check_span(original, span, byte_cursor)?;
            if span.is_empty() {
                continue;
            }

            let surface = &original[span.clone()];
            let original_begin = char_cursor + original[byte_cursor..span.start].chars().count();
            let original_end = original_begin + surface.chars().count();
            byte_cursor = span.end;
            char_cursor = original_end;

            let folded = policy.fold_token(surface);
            let norm_begin = position + 1;
            let norm_end = norm_begin + folded.chars().count();
            position = norm_end;

            normalized.push_str(&folded);
            normalized.push(' ');

            let mut token = Token::new(folded);
            token.norm_begin = norm_begin;
            token.norm_end = norm_end;
            token.original_begin = original_begin;
            token.original_end = original_end;
            token.byte_begin = span.start;
            token.byte_end = span.end;
            tokens.push(token);
        }

        Ok(Self {
            original,
            tokens,
            normalized,
        })
    }

    /// The text as it was handed in
    pub fn original(&self) -> &'t str {
        self.original
    }

    /// Tokens in left-to-right order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub(crate) fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    /// Take ownership of the tokens
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// The sentinel-delimited normalized string
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// The normalized string without sentinels, used as an index key
    pub fn key(&self) -> String {
        let mut key = String::with_capacity(self.normalized.len());
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                key.push(' ');
            }
            key.push_str(token.text());
        }
        key
    }

    /// Whether the text produced no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Indices of the tokens lying entirely inside `[begin, end)` of the
    /// normalized string
    pub fn token_range(&self, begin: usize, end: usize) -> Range<usize> {
        let first = self.tokens.partition_point(|t| t.norm_begin < begin);
        let last = self.tokens.partition_point(|t| t.norm_end <= end);
        first..last.max(first)
    }

    /// Rebuild the normalized string from the current token texts
    pub(crate) fn rebuild(&mut self) {
        let mut normalized = String::with_capacity(self.normalized.len());
        normalized.push(' ');
        for token in &self.tokens {
            normalized.push_str(token.text());
            normalized.push(' ');
        }
        self.normalized = normalized;
    }
}

fn check_span(text: &str, span: &Range<usize>, min_start: usize) -> Result<()> {
    if span.start > span.end || span.end > text.len() {
        return Err(CoreError::TokenizationFailed(format!(
            "span {}..{} is outside the text (length {})",
            span.start,
            span.end,
            text.len()
        )));
    }
    if span.start < min_start {
        return Err(CoreError::TokenizationFailed(format!(
            "span {}..{} overlaps or precedes the previous token ending at {}",
            span.start, span.end, min_start
        )));
    }
    if !text.is_char_boundary(span.start) || !text.is_char_boundary(span.end) {
        return Err(CoreError::TokenizationFailed(format!(
            "span {}..{} does not fall on char boundaries",
            span.start, span.end
        )));
    }
    Ok(())
}

/// Tokenizes, folds and optionally stems texts under one configuration
///
/// The same normalizer must be used for the dictionary and the documents
/// matched against it.
#[derive(Clone, Copy)]
pub struct Normalizer<'a> {
    tokenizer: &'a dyn Tokenizer,
    policy: CasePolicy,
    stemming: Option<(&'a dyn Stemmer, Language)>,
}

impl<'a> Normalizer<'a> {
    /// Create a normalizer without stemming
    pub fn new(tokenizer: &'a dyn Tokenizer, policy: CasePolicy) -> Self {
        Self {
            tokenizer,
            policy,
            stemming: None,
        }
    }

    /// Enable stemming
    pub fn with_stemming(mut self, stemmer: &'a dyn Stemmer, language: Language) -> Self {
        self.stemming = Some((stemmer, language));
        self
    }

    /// The active case policy
    pub fn policy(&self) -> CasePolicy {
        self.policy
    }

    /// The stemming language, if stemming is enabled
    pub fn stemming_language(&self) -> Option<Language> {
        self.stemming.map(|(_, language)| language)
    }

    /// Whether stemming is enabled
    pub fn is_stemming(&self) -> bool {
        self.stemming.is_some()
    }

    /// Tokenize and case-fold a text
    pub fn process<'t>(&self, text: &'t str) -> Result<ProcessedText<'t>> {
        let spans = self.tokenizer.tokenize(text)?;
        ProcessedText::from_spans(text, &spans, self.policy)
    }

    /// Stem a processed text in place; does nothing when stemming is off
    pub fn stem(&self, processed: &mut ProcessedText<'_>) -> Result<()> {
        match self.stemming {
            Some((stemmer, language)) => stemming::apply_stems(processed, stemmer, language),
            None => Ok(()),
        }
    }

    /// Tokenize, fold and stem a text
    pub fn normalize<'t>(&self, text: &'t str) -> Result<ProcessedText<'t>> {
        let mut processed = self.process(text)?;
        self.stem(&mut processed)?;
        Ok(processed)
    }
}

impl std::fmt::Debug for Normalizer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("policy", &self.policy)
            .field("stemming_language", &self.stemming_language())
            .finish()
    }
}
