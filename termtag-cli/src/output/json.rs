//! JSON output formatter

use super::{AnnotatedDocument, OutputFormatter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
    pretty: bool,
}

/// One document in the JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Where the text came from
    pub source: String,
    /// Annotations in document order
    pub annotations: Vec<AnnotationData>,
}

/// One annotation in the JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct AnnotationData {
    /// The matched text
    pub text: String,
    /// Canonical label
    pub label: String,
    /// Matched synonym, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonym: Option<String>,
    /// Concept URI
    pub uri: String,
    /// Entity type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Start offset in chars
    pub begin: usize,
    /// End offset in chars (exclusive)
    pub end: usize,
    /// Confidence in `[0, 1]`
    pub score: f64,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
            pretty: true,
        }
    }

    /// Choose between indented and compact output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &AnnotatedDocument) -> Result<()> {
        self.documents.push(DocumentData {
            source: document.source.clone(),
            annotations: document
                .annotations
                .iter()
                .map(|a| AnnotationData {
                    text: a.found_text.clone(),
                    label: a.label.clone(),
                    synonym: a.synonym.clone(),
                    uri: a.uri.clone(),
                    entity_type: a.entity_type.clone(),
                    begin: a.begin,
                    end: a.end,
                    score: a.score,
                })
                .collect(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
