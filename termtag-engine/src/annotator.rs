//! The annotator and its builder
//!
//! An [`Annotator`] owns the dictionary index and automaton built at
//! construction time and never mutates them afterwards. Each call works on
//! its own [`ProcessedText`], so one annotator can be shared between threads.

use crate::config::AnnotatorConfig;
use crate::error::Result;
use crate::input::Input;
use crate::stemmer::SnowballStemmer;
use crate::tokenizer::UnicodeWordTokenizer;
use std::sync::Arc;
use termtag_core::{
    dictionary, overlap, scorer, Annotation, Automaton, DictionaryEntry, DictionaryIndex,
    Normalizer, ProcessedText, Scanner, Stemmer, Token, Tokenizer,
};

/// Size figures of a loaded dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DictionaryStats {
    /// Distinct concepts (raw label texts)
    pub concepts: usize,
    /// Concepts of kind Label
    pub labels: usize,
    /// Concepts of kind Synonym
    pub synonyms: usize,
    /// Distinct normalized keys
    pub keys: usize,
    /// Distinct stemmed keys, when stemming
    pub stemmed_keys: Option<usize>,
    /// Automaton patterns
    pub patterns: usize,
    /// Automaton states
    pub states: usize,
}

/// Finds dictionary terms in text
pub struct Annotator {
    config: AnnotatorConfig,
    tokenizer: Arc<dyn Tokenizer>,
    stemmer: Arc<dyn Stemmer>,
    index: DictionaryIndex,
    automaton: Automaton,
}

impl std::fmt::Debug for Annotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Annotator")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}

impl Annotator {
    /// Build an annotator with the default tokenizer and stemmer
    pub fn new<I>(entries: I, config: AnnotatorConfig) -> Result<Self>
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        Self::builder().config(config).build(entries)
    }

    /// Start configuring an annotator
    pub fn builder() -> AnnotatorBuilder {
        AnnotatorBuilder::new()
    }

    /// Active configuration
    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    /// The loaded dictionary
    pub fn dictionary(&self) -> &DictionaryIndex {
        &self.index
    }

    /// Dictionary and automaton sizes
    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            concepts: self.index.len(),
            labels: self.index.label_count(),
            synonyms: self.index.synonym_count(),
            keys: self.index.normalized().len(),
            stemmed_keys: self.index.stemmed().map(|index| index.len()),
            patterns: self.automaton.pattern_count(),
            states: self.automaton.state_count(),
        }
    }

    fn normalizer(&self) -> Normalizer<'_> {
        normalizer_for(&self.config, self.tokenizer.as_ref(), self.stemmer.as_ref())
    }

    /// Find every dictionary term in `text`
    ///
    /// Results are ordered by `(begin, end)` and never nest. Blank text
    /// yields no annotations without touching the tokenizer.
    pub fn annotate(&self, text: &str) -> Result<Vec<Annotation>> {
        if text.trim().is_empty() {
            tracing::info!("blank text, nothing to annotate");
            return Ok(Vec::new());
        }
        let processed = self.normalizer().normalize(text)?;
        Ok(self.matches(&processed))
    }

    /// Read a document and annotate it
    pub fn annotate_input(&self, input: Input) -> Result<Vec<Annotation>> {
        let text = input.to_text()?;
        self.annotate(&text)
    }

    /// Annotate many documents in parallel, one result per document
    #[cfg(feature = "parallel")]
    pub fn annotate_batch<S>(&self, texts: &[S]) -> Vec<Result<Vec<Annotation>>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.annotate(text.as_ref()))
            .collect()
    }

    /// Tokenize `text` and tag every token covered by an annotation
    ///
    /// Tagged tokens carry the annotation's type, or its URI when untyped;
    /// the others keep the outside marker.
    pub fn tag_tokens(&self, text: &str) -> Result<Vec<Token>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let processed = self.normalizer().normalize(text)?;
        let annotations = self.matches(&processed);
        let mut tokens = processed.into_tokens();

        for annotation in &annotations {
            let tag = annotation
                .entity_type
                .as_deref()
                .unwrap_or(&annotation.uri);
            for token in tokens
                .iter_mut()
                .filter(|t| t.original_begin >= annotation.begin && t.original_end <= annotation.end)
            {
                token.kind = tag.to_string();
            }
        }

        Ok(tokens)
    }

    fn matches(&self, processed: &ProcessedText<'_>) -> Vec<Annotation> {
        let stemming = self.config.is_stemming();
        let scanner = Scanner::new(&self.automaton, &self.index, stemming)
            .with_default_type(self.config.default_type.as_deref());

        let mut candidates = scanner.scan(processed);
        let found = candidates.len();
        overlap::resolve(&mut candidates, self.config.eliminate_overlapping);
        let mut annotations = overlap::survivors(candidates);

        let policy = self.config.case_policy();
        for annotation in &mut annotations {
            scorer::score(annotation, policy, stemming);
        }

        tracing::trace!(
            "{} candidates, {} annotations over {} tokens",
            found,
            annotations.len(),
            processed.tokens().len()
        );
        annotations
    }
}

fn normalizer_for<'a>(
    config: &AnnotatorConfig,
    tokenizer: &'a dyn Tokenizer,
    stemmer: &'a dyn Stemmer,
) -> Normalizer<'a> {
    let normalizer = Normalizer::new(tokenizer, config.case_policy());
    match config.stemming_language {
        Some(language) => normalizer.with_stemming(stemmer, language),
        None => normalizer,
    }
}

/// Builder for [`Annotator`]
///
/// Defaults to [`UnicodeWordTokenizer`] and [`SnowballStemmer`].
#[derive(Default)]
pub struct AnnotatorBuilder {
    config: AnnotatorConfig,
    tokenizer: Option<Arc<dyn Tokenizer>>,
    stemmer: Option<Arc<dyn Stemmer>>,
}

impl AnnotatorBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration
    pub fn config(mut self, config: AnnotatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom tokenizer
    pub fn tokenizer<T: Tokenizer + 'static>(mut self, tokenizer: T) -> Self {
        self.tokenizer = Some(Arc::new(tokenizer));
        self
    }

    /// Use a custom stemmer
    pub fn stemmer<S: Stemmer + 'static>(mut self, stemmer: S) -> Self {
        self.stemmer = Some(Arc::new(stemmer));
        self
    }

    /// Load the dictionary and build the annotator
    pub fn build<I>(self, entries: I) -> Result<Annotator>
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        self.config.validate()?;

        let tokenizer: Arc<dyn Tokenizer> = match self.tokenizer {
            Some(tokenizer) => tokenizer,
            None => Arc::new(UnicodeWordTokenizer),
        };
        let stemmer: Arc<dyn Stemmer> = match self.stemmer {
            Some(stemmer) => stemmer,
            None => Arc::new(SnowballStemmer::new()),
        };

        let (index, automaton) = {
            let normalizer = normalizer_for(&self.config, tokenizer.as_ref(), stemmer.as_ref());
            dictionary::load(entries, &normalizer)?
        };

        tracing::debug!(
            "annotator ready: {} concepts, {} patterns, stemming {:?}",
            index.len(),
            automaton.pattern_count(),
            self.config.stemming_language
        );

        Ok(Annotator {
            config: self.config,
            tokenizer,
            stemmer,
            index,
            automaton,
        })
    }
}
