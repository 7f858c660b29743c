//! Dictionary files
//!
//! Two formats are understood:
//!
//! - JSON: an array of `{"label": .., "kind": "label"|"synonym", "uri": .., "type": ..}`
//!   objects (`kind` defaults to `label`, `type` is optional);
//! - TSV: one `label<TAB>kind<TAB>uri[<TAB>type]` entry per line, with blank
//!   lines and `#` comments ignored.

use crate::error::{EngineError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use termtag_core::{DictionaryEntry, LabelKind};

/// Dictionary file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryFormat {
    /// JSON array of entries
    Json,
    /// Tab-separated lines
    Tsv,
}

impl DictionaryFormat {
    /// Every supported format
    pub const ALL: [DictionaryFormat; 2] = [DictionaryFormat::Json, DictionaryFormat::Tsv];

    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(DictionaryFormat::Json),
            "tsv" | "tab" | "txt" => Some(DictionaryFormat::Tsv),
            _ => None,
        }
    }

    /// Short name
    pub fn name(&self) -> &'static str {
        match self {
            DictionaryFormat::Json => "json",
            DictionaryFormat::Tsv => "tsv",
        }
    }

    /// File extensions recognized for the format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            DictionaryFormat::Json => &["json"],
            DictionaryFormat::Tsv => &["tsv", "tab", "txt"],
        }
    }
}

impl fmt::Display for DictionaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DictionaryFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        DictionaryFormat::ALL
            .iter()
            .copied()
            .find(|format| {
                format.name() == wanted || format.extensions().contains(&wanted.as_str())
            })
            .ok_or_else(|| {
                EngineError::ConfigError(format!("unknown dictionary format: {wanted}"))
            })
    }
}

/// Read a dictionary file; `format` overrides detection by extension
pub fn load_path(path: &Path, format: Option<DictionaryFormat>) -> Result<Vec<DictionaryEntry>> {
    let format = match format.or_else(|| DictionaryFormat::from_path(path)) {
        Some(format) => format,
        None => {
            return Err(EngineError::DictionaryFormat {
                line: None,
                reason: format!("cannot tell the format of {}", path.display()),
            })
        }
    };

    let content = std::fs::read_to_string(path).map_err(|e| {
        EngineError::IoError(format!("failed to read dictionary {}: {e}", path.display()))
    })?;

    let entries = parse(&content, format)?;
    tracing::debug!(
        "read {} {} dictionary entries from {}",
        entries.len(),
        format,
        path.display()
    );
    Ok(entries)
}

/// Parse dictionary content in the given format
pub fn parse(content: &str, format: DictionaryFormat) -> Result<Vec<DictionaryEntry>> {
    match format {
        DictionaryFormat::Json => parse_json(content),
        DictionaryFormat::Tsv => parse_tsv(content),
    }
}

/// Parse a JSON dictionary
#[cfg(feature = "serde")]
pub fn parse_json(content: &str) -> Result<Vec<DictionaryEntry>> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a JSON dictionary
#[cfg(not(feature = "serde"))]
pub fn parse_json(_content: &str) -> Result<Vec<DictionaryEntry>> {
    Err(EngineError::ConfigError(
        "JSON dictionaries require the `serde` feature".to_string(),
    ))
}

/// Parse a TSV dictionary
pub fn parse_tsv(content: &str) -> Result<Vec<DictionaryEntry>> {
    let mut entries = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let malformed = |reason: String| EngineError::DictionaryFormat {
            line: Some(number + 1),
            reason,
        };

        let (label, kind, uri, entity_type) = match fields.as_slice() {
            [label, kind, uri] => (*label, *kind, *uri, None),
            [label, kind, uri, entity_type] => (*label, *kind, *uri, Some(*entity_type)),
            _ => {
                return Err(malformed(format!(
                    "expected 3 or 4 tab-separated fields, found {}",
                    fields.len()
                )))
            }
        };

        let kind: LabelKind = kind.parse().map_err(malformed)?;
        let mut entry = DictionaryEntry::new(label.trim(), kind, uri.trim());
        if let Some(entity_type) = entity_type.map(str::trim).filter(|t| !t.is_empty()) {
            entry = entry.with_type(entity_type);
        }
        entries.push(entry);
    }

    Ok(entries)
}
