//! Output formatting module

use crate::commands::annotate::OutputFormat;
use anyhow::Result;
use std::io::Write;
use termtag_engine::{Annotation, Token};

pub mod conll;
pub mod json;
pub mod markdown;
pub mod text;

pub use conll::ConllFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// One input document with its results
#[derive(Debug, Clone)]
pub struct AnnotatedDocument {
    /// Where the text came from
    pub source: String,
    /// The original text
    pub text: String,
    /// Annotations ordered by position
    pub annotations: Vec<Annotation>,
    /// Tagged tokens, for token-level output
    pub tokens: Option<Vec<Token>>,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single document
    fn format_document(&mut self, document: &AnnotatedDocument) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        OutputFormat::Conll => Box::new(ConllFormatter::new(writer)),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use termtag_engine::{AnnotatorConfig, Annotator, DictionaryEntry, LabelKind};

    /// A document annotated against a small city dictionary
    pub(crate) fn sample_document(tokens: bool) -> AnnotatedDocument {
        let annotator = Annotator::new(
            vec![
                DictionaryEntry::new("New York", LabelKind::Label, "urn:ny").with_type("City"),
                DictionaryEntry::new("Big Apple", LabelKind::Synonym, "urn:ny"),
                DictionaryEntry::new("Paris", LabelKind::Label, "urn:paris"),
            ],
            AnnotatorConfig::default(),
        )
        .unwrap();
        let text = "The Big Apple is New York, not Paris.".to_string();

        AnnotatedDocument {
            source: "cities.txt".to_string(),
            annotations: annotator.annotate(&text).unwrap(),
            tokens: tokens.then(|| annotator.tag_tokens(&text).unwrap()),
            text,
        }
    }

    /// Shared buffer standing in for stdout
    #[derive(Clone, Default)]
    pub(crate) struct SharedBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_every_format_writes_something() {
        for format in OutputFormat::ALL {
            let buffer = SharedBuffer::default();
            let mut formatter = create_formatter(format, Box::new(buffer.clone()), true);
            formatter
                .format_document(&sample_document(format == OutputFormat::Conll))
                .unwrap();
            formatter.finish().unwrap();
            assert!(!buffer.contents().is_empty(), "{format:?}");
        }
    }
}
