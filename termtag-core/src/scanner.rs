//! Candidate extraction: automaton hits mapped back to original text

use crate::annotation::Annotation;
use crate::automaton::Automaton;
use crate::concept::LabelKind;
use crate::dictionary::DictionaryIndex;
use crate::normalizer::ProcessedText;

/// Streams normalized text through the automaton and emits raw candidates
///
/// Candidates come out in scan order (by end position). None of them is
/// marked as overlapping yet and every score is `1.0`.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    automaton: &'a Automaton,
    index: &'a DictionaryIndex,
    stemmed: bool,
    default_type: Option<&'a str>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner; `stemmed` selects the stemmed key index
    pub fn new(automaton: &'a Automaton, index: &'a DictionaryIndex, stemmed: bool) -> Self {
        Self {
            automaton,
            index,
            stemmed,
            default_type: None,
        }
    }

    /// Type given to matches whose concept carries none
    pub fn with_default_type(mut self, default_type: Option<&'a str>) -> Self {
        self.default_type = default_type;
        self
    }

    /// Find every longest match ending at each position of the text
    pub fn scan(&self, text: &ProcessedText<'_>) -> Vec<Annotation> {
        let mut candidates = Vec::new();

        for hit in self.automaton.find_iter(text.normalized()) {
            let Some(pattern) = hit.longest() else {
                continue;
            };
            // Patterns are " key ": drop both sentinels
            let key = &pattern.text[1..pattern.text.len() - 1];
            let norm_end = hit.end - 1;
            let norm_begin = norm_end - (pattern.len - 2);

            if let Some(annotation) = self.candidate(text, key, norm_begin, norm_end) {
                candidates.push(annotation);
            }
        }

        candidates
    }

    fn candidate(
        &self,
        text: &ProcessedText<'_>,
        key: &str,
        norm_begin: usize,
        norm_end: usize,
    ) -> Option<Annotation> {
        let range = text.token_range(norm_begin, norm_end);
        let tokens = &text.tokens()[range];
        let (first, last) = match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                tracing::trace!("no tokens under {}..{} for {:?}", norm_begin, norm_end, key);
                return None;
            }
        };

        let Some(concept) = self.index.lookup(key, self.stemmed) else {
            tracing::trace!("dropping {:?}: not in the dictionary index", key);
            return None;
        };

        let (label, synonym) = match concept.kind {
            LabelKind::Label => (concept.label_text.clone(), None),
            LabelKind::Synonym => {
                let label = self
                    .index
                    .canonical_label(&concept.uri)
                    .unwrap_or(&concept.label_text)
                    .to_string();
                (label, Some(concept.label_text.clone()))
            }
        };

        let entity_type = concept
            .entity_type
            .clone()
            .or_else(|| self.default_type.map(str::to_string));

        Some(Annotation {
            found_text: text.original()[first.byte_begin..last.byte_end].to_string(),
            label,
            synonym,
            uri: concept.uri.clone(),
            entity_type,
            begin: first.original_begin,
            end: last.original_end,
            byte_begin: first.byte_begin,
            byte_end: last.byte_end,
            norm_begin,
            norm_end,
            matched_key: key.to_string(),
            score: 1.0,
            overlap: false,
            tokens: tokens.to_vec(),
        })
    }
}
