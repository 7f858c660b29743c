//! Dictionary entries and the concepts they resolve to

use std::fmt;
use std::str::FromStr;

/// Whether a dictionary text is the canonical label of a URI or a synonym
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LabelKind {
    /// Canonical label
    #[default]
    Label,
    /// Alternative name
    Synonym,
}

impl LabelKind {
    /// Lowercase name used in dictionary files
    pub fn name(&self) -> &'static str {
        match self {
            LabelKind::Label => "label",
            LabelKind::Synonym => "synonym",
        }
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LabelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "label" | "preflabel" => Ok(LabelKind::Label),
            "synonym" | "altlabel" => Ok(LabelKind::Synonym),
            other => Err(format!("unknown label kind: {other}")),
        }
    }
}

/// Raw dictionary tuple as handed to the loader
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DictionaryEntry {
    /// Term text as written in the dictionary
    #[cfg_attr(feature = "serde", serde(rename = "label"))]
    pub label_text: String,
    /// Label or synonym
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: LabelKind,
    /// Identifier of the concept
    #[cfg_attr(feature = "serde", serde(default))]
    pub uri: String,
    /// Optional entity type
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", default, skip_serializing_if = "Option::is_none")
    )]
    pub entity_type: Option<String>,
}

impl DictionaryEntry {
    /// Create an untyped entry
    pub fn new(label_text: impl Into<String>, kind: LabelKind, uri: impl Into<String>) -> Self {
        Self {
            label_text: label_text.into(),
            kind,
            uri: uri.into(),
            entity_type: None,
        }
    }

    /// Attach an entity type
    pub fn with_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    /// Check the entry can be indexed, returning the rejection reason otherwise
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.label_text.trim().is_empty() {
            return Err("label text is empty");
        }
        if self.uri.trim().is_empty() {
            return Err("uri is missing");
        }
        Ok(())
    }
}

/// A dictionary entry after loading; immutable for the lifetime of the index
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Concept {
    /// Term text as written in the dictionary
    pub label_text: String,
    /// Label or synonym
    pub kind: LabelKind,
    /// Identifier of the concept
    pub uri: String,
    /// Optional entity type
    pub entity_type: Option<String>,
}

impl Concept {
    /// Whether this concept is a canonical label
    pub fn is_label(&self) -> bool {
        self.kind == LabelKind::Label
    }
}

impl From<DictionaryEntry> for Concept {
    fn from(entry: DictionaryEntry) -> Self {
        Self {
            label_text: entry.label_text,
            kind: entry.kind,
            uri: entry.uri,
            entity_type: entry.entity_type,
        }
    }
}
