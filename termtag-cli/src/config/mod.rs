//! Configuration file support

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use termtag_engine::AnnotatorConfig;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Matching options
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Dictionary source
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Matching-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MatchingConfig {
    /// Whether case is significant
    pub case_sensitive: bool,

    /// Tokens up to this length keep their case when case sensitive
    pub case_sensitive_length: usize,

    /// Drop partially overlapping matches
    pub eliminate_overlapping: bool,

    /// Stemming language name, or "None"
    pub stemming_language: String,

    /// Type for entries without one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_type: Option<String>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            case_sensitive_length: 0,
            eliminate_overlapping: false,
            stemming_language: "None".to_string(),
            default_type: None,
        }
    }
}

/// Dictionary-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Dictionary file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Dictionary format ("json" or "tsv"); detected from the extension when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Read a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("{}: {}", path.display(), e.message())).into()
        })
    }

    /// Load the file if one is given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Annotator options described by the `[matching]` section
    pub fn annotator_config(&self) -> Result<AnnotatorConfig> {
        let matching = &self.matching;
        let mut builder = AnnotatorConfig::builder()
            .case_sensitive(matching.case_sensitive)
            .case_sensitive_length(matching.case_sensitive_length)
            .eliminate_overlapping(matching.eliminate_overlapping)
            .stemming(&matching.stemming_language);
        if let Some(default_type) = &matching.default_type {
            builder = builder.default_type(default_type.clone());
        }
        builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
