//! Token-per-line output formatter

use super::{AnnotatedDocument, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// CoNLL-style formatter - one `token<TAB>tag` line per token, a blank
/// line between documents
pub struct ConllFormatter<W: Write> {
    writer: W,
}

impl<W: Write> ConllFormatter<W> {
    /// Create a new token formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for ConllFormatter<W> {
    fn format_document(&mut self, document: &AnnotatedDocument) -> Result<()> {
        writeln!(self.writer, "# {}", document.source)?;
        for token in document.tokens.iter().flatten() {
            let text = document
                .text
                .get(token.byte_begin..token.byte_end)
                .unwrap_or(&token.surface);
            writeln!(self.writer, "{}\t{}", text, token.kind)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
