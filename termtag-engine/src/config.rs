//! Annotator configuration
//!
//! `AnnotatorConfig` is a plain value; `AnnotatorConfigBuilder` validates it
//! and accepts the loose string form of the stemming language used by
//! configuration files.

use crate::error::{EngineError, Result};
use termtag_core::{CasePolicy, Language};

/// Matching options for an [`crate::Annotator`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnnotatorConfig {
    /// Whether case is significant
    pub case_sensitive: bool,
    /// With `case_sensitive`, tokens up to this many chars keep their case
    /// and longer ones are lowercased (0 = all tokens keep their case)
    pub case_sensitive_length: usize,
    /// Drop partially overlapping matches, keeping the earlier-starting one
    pub eliminate_overlapping: bool,
    /// Snowball stemming language; `None` disables stemming
    pub stemming_language: Option<Language>,
    /// Type given to matches whose dictionary entry has none
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub default_type: Option<String>,
}

impl AnnotatorConfig {
    /// Start building a configuration
    pub fn builder() -> AnnotatorConfigBuilder {
        AnnotatorConfigBuilder::new()
    }

    /// Exact-case matching without partial overlaps
    pub fn strict() -> Self {
        Self {
            case_sensitive: true,
            eliminate_overlapping: true,
            ..Default::default()
        }
    }

    /// Case-insensitive matching on stems of the given language
    pub fn stemmed(language: Language) -> Self {
        Self {
            stemming_language: Some(language),
            ..Default::default()
        }
    }

    /// The case folding policy these options describe
    pub fn case_policy(&self) -> CasePolicy {
        CasePolicy::new(self.case_sensitive, self.case_sensitive_length)
    }

    /// Whether stemming is enabled
    pub fn is_stemming(&self) -> bool {
        self.stemming_language.is_some()
    }

    /// Check the options are consistent
    pub fn validate(&self) -> Result<()> {
        if let Some(default_type) = &self.default_type {
            if default_type.trim().is_empty() {
                return Err(EngineError::ConfigError(
                    "default type cannot be blank".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Parse a stemming language name leniently
///
/// `"None"` and the empty string disable stemming. An unknown name also
/// disables it, with a warning.
pub fn parse_stemming_language(value: &str) -> Option<Language> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return None;
    }
    match value.parse::<Language>() {
        Ok(language) => Some(language),
        Err(_) => {
            tracing::warn!("unknown stemming language {:?}, stemming disabled", value);
            None
        }
    }
}

/// Builder for [`AnnotatorConfig`]
#[derive(Debug, Default)]
pub struct AnnotatorConfigBuilder {
    config: AnnotatorConfig,
}

impl AnnotatorConfigBuilder {
    /// Create a builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set case sensitivity
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.config.case_sensitive = case_sensitive;
        self
    }

    /// Set the case-sensitive token length threshold
    pub fn case_sensitive_length(mut self, length: usize) -> Self {
        self.config.case_sensitive_length = length;
        self
    }

    /// Set whether partial overlaps are eliminated
    pub fn eliminate_overlapping(mut self, eliminate: bool) -> Self {
        self.config.eliminate_overlapping = eliminate;
        self
    }

    /// Set the stemming language
    pub fn stemming_language(mut self, language: Option<Language>) -> Self {
        self.config.stemming_language = language;
        self
    }

    /// Set the stemming language by name, see [`parse_stemming_language`]
    pub fn stemming(mut self, name: &str) -> Self {
        self.config.stemming_language = parse_stemming_language(name);
        self
    }

    /// Set the default entity type
    pub fn default_type<S: Into<String>>(mut self, default_type: S) -> Self {
        self.config.default_type = Some(default_type.into());
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<AnnotatorConfig> {
        self.config.validate()?;
        if !self.config.case_sensitive && self.config.case_sensitive_length > 0 {
            tracing::debug!("case_sensitive_length ignored: matching is case-insensitive");
        }
        Ok(self.config)
    }
}
