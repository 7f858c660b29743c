//! Markdown output formatter

use super::{AnnotatedDocument, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs a table per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    annotation_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            annotation_count: 0,
        }
    }
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, document: &AnnotatedDocument) -> Result<()> {
        writeln!(self.writer, "## {}", document.source)?;
        writeln!(self.writer)?;

        if document.annotations.is_empty() {
            writeln!(self.writer, "*No annotations*")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "| Text | Label | URI | Type | Span | Score |")?;
        writeln!(self.writer, "|------|-------|-----|------|------|-------|")?;
        for annotation in &document.annotations {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {}..{} | {:.3} |",
                escape(&annotation.display_text()),
                escape(&annotation.label),
                escape(&annotation.uri),
                escape(annotation.entity_type.as_deref().unwrap_or("")),
                annotation.begin,
                annotation.end,
                annotation.score
            )?;
        }
        writeln!(self.writer)?;

        self.annotation_count += document.annotations.len();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total annotations: {}*", self.annotation_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
