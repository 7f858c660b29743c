//! Plain text output formatter

use super::{AnnotatedDocument, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one tab-separated line per annotation
///
/// Columns: source, begin, end, found text, label, URI, type, score.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &AnnotatedDocument) -> Result<()> {
        for annotation in &document.annotations {
            writeln!(
                self.writer,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:.3}",
                document.source,
                annotation.begin,
                annotation.end,
                annotation.display_text(),
                annotation.label,
                annotation.uri,
                annotation.entity_type.as_deref().unwrap_or("-"),
                annotation.score
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
