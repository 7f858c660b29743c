//! Dictionary index and automaton construction
//!
//! Loading is all-or-nothing: the index and automaton are only returned
//! once every entry has been validated and normalized.

use crate::automaton::{Automaton, AutomatonBuilder};
use crate::concept::{Concept, DictionaryEntry, LabelKind};
use crate::error::{CoreError, Result};
use crate::normalizer::Normalizer;
use std::collections::HashMap;

/// Index of a concept inside a [`DictionaryIndex`]
pub type ConceptId = usize;

/// Normalized key -> concept lookup
#[derive(Debug, Clone, Default)]
pub struct TermIndex {
    keys: HashMap<String, ConceptId>,
}

impl TermIndex {
    /// Concept indexed under `key`
    pub fn get(&self, key: &str) -> Option<ConceptId> {
        self.keys.get(key).copied()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over the indexed keys in arbitrary order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }

    /// Insert a key unless it is already taken; returns whether it was new
    fn insert(&mut self, key: String, concept: ConceptId) -> bool {
        match self.keys.entry(key) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(concept);
                true
            }
        }
    }
}

/// Concepts plus the lookups used during matching
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    concepts: Vec<Concept>,
    by_label: HashMap<String, ConceptId>,
    canonical: HashMap<String, String>,
    normalized: TermIndex,
    stemmed: Option<TermIndex>,
}

impl DictionaryIndex {
    /// Concept by id
    pub fn concept(&self, id: ConceptId) -> Option<&Concept> {
        self.concepts.get(id)
    }

    /// All concepts in load order
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    /// Number of distinct concepts
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Whether the dictionary holds no concept
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Canonical label text recorded for a URI
    pub fn canonical_label(&self, uri: &str) -> Option<&str> {
        self.canonical.get(uri).map(String::as_str)
    }

    /// Concept for a raw label text as written in the dictionary
    pub fn by_label(&self, label_text: &str) -> Option<&Concept> {
        self.by_label
            .get(label_text)
            .and_then(|&id| self.concepts.get(id))
    }

    /// Look up a key in the normalized index, or in the stemmed one
    pub fn lookup(&self, key: &str, stemmed: bool) -> Option<&Concept> {
        let index = if stemmed {
            self.stemmed.as_ref()?
        } else {
            &self.normalized
        };
        index.get(key).and_then(|id| self.concepts.get(id))
    }

    /// Index over the unstemmed normalized keys
    pub fn normalized(&self) -> &TermIndex {
        &self.normalized
    }

    /// Index over the stemmed keys, if stemming was enabled at load time
    pub fn stemmed(&self) -> Option<&TermIndex> {
        self.stemmed.as_ref()
    }

    /// Number of Label concepts
    pub fn label_count(&self) -> usize {
        self.concepts.iter().filter(|c| c.is_label()).count()
    }

    /// Number of Synonym concepts
    pub fn synonym_count(&self) -> usize {
        self.concepts.len() - self.label_count()
    }

    fn intern(&mut self, entry: DictionaryEntry) -> (ConceptId, bool) {
        if let Some(&id) = self.by_label.get(&entry.label_text) {
            return (id, false);
        }
        let id = self.concepts.len();
        self.by_label.insert(entry.label_text.clone(), id);
        self.concepts.push(Concept::from(entry));
        (id, true)
    }
}

/// Build the dictionary index and the automaton for a sequence of entries
///
/// Every label is normalized with `normalizer`; when it stems, the automaton
/// holds the stemmed patterns and a stemmed key index is built alongside the
/// unstemmed one. The same normalizer must later be used for documents.
pub fn load<I>(entries: I, normalizer: &Normalizer<'_>) -> Result<(DictionaryIndex, Automaton)>
where
    I: IntoIterator<Item = DictionaryEntry>,
{
    let mut index = DictionaryIndex {
        stemmed: normalizer.is_stemming().then(TermIndex::default),
        ..DictionaryIndex::default()
    };
    let mut builder = AutomatonBuilder::new();
    let mut duplicates = 0usize;

    for (position, entry) in entries.into_iter().enumerate() {
        entry
            .validate()
            .map_err(|reason| CoreError::invalid_entry(position, &entry.label_text, reason))?;

        if entry.kind == LabelKind::Label {
            index
                .canonical
                .entry(entry.uri.clone())
                .or_insert_with(|| entry.label_text.clone());
        }

        let label_text = entry.label_text.clone();
        let (id, fresh) = index.intern(entry);
        if !fresh {
            duplicates += 1;
            continue;
        }

        let mut processed = normalizer.process(&label_text)?;
        if processed.is_empty() {
            return Err(CoreError::invalid_entry(
                position,
                label_text,
                "label has no tokens",
            ));
        }

        let key = processed.key();
        if !index.normalized.insert(key.clone(), id) {
            tracing::debug!("normalized key {:?} already indexed, keeping first", key);
        }

        if let Some(stemmed) = index.stemmed.as_mut() {
            normalizer.stem(&mut processed)?;
            let stemmed_key = processed.key();
            if !stemmed.insert(stemmed_key.clone(), id) {
                tracing::debug!("stemmed key {:?} already indexed, keeping first", stemmed_key);
            }
        }

        builder.add(processed.normalized());
    }

    let automaton = builder.build();

    tracing::debug!(
        "dictionary loaded: {} concepts ({} duplicate labels), {} keys, {} patterns, {} states",
        index.len(),
        duplicates,
        index.normalized.len(),
        automaton.pattern_count(),
        automaton.state_count()
    );

    Ok((index, automaton))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::normalizer::CasePolicy;
    use std::ops::Range;

    fn whitespace(text: &str) -> Result<Vec<Range<usize>>> {
        let mut spans = Vec::new();
        let mut offset = 0;
        for word in text.split(' ') {
            if !word.is_empty() {
                spans.push(offset..offset + word.len());
            }
            offset += word.len() + 1;
        }
        Ok(spans)
    }

    fn strip_s(_: Language, word: &str) -> Result<String> {
        Ok(word.strip_suffix('s').unwrap_or(word).to_string())
    }

    fn entry(label: &str, kind: LabelKind, uri: &str) -> DictionaryEntry {
        DictionaryEntry::new(label, kind, uri)
    }

    #[test]
    fn test_load_builds_keys_and_reverse_index() {
        let normalizer = Normalizer::new(&whitespace, CasePolicy::insensitive());
        let (index, automaton) = load(
            vec![
                entry("New York", LabelKind::Label, "urn:ny"),
                entry("Big Apple", LabelKind::Synonym, "urn:ny"),
            ],
            &normalizer,
        )
        .unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.label_count(), 1);
        assert_eq!(index.synonym_count(), 1);
        assert_eq!(index.canonical_label("urn:ny"), Some("New York"));
        assert_eq!(
            index.lookup("big apple", false).map(|c| c.uri.as_str()),
            Some("urn:ny")
        );
        assert!(index.stemmed().is_none());
        assert_eq!(automaton.pattern_count(), 2);
    }

    #[test]
    fn test_repeated_label_first_write_wins() {
        let normalizer = Normalizer::new(&whitespace, CasePolicy::insensitive());
        let (index, _) = load(
            vec![
                entry("Mercury", LabelKind::Label, "urn:planet").with_type("Planet"),
                entry("Mercury", LabelKind::Synonym, "urn:element").with_type("Element"),
            ],
            &normalizer,
        )
        .unwrap();

        assert_eq!(index.len(), 1);
        let concept = index.by_label("Mercury").unwrap();
        assert_eq!(concept.uri, "urn:planet");
        assert_eq!(concept.entity_type.as_deref(), Some("Planet"));
    }

    #[test]
    fn test_colliding_keys_keep_first() {
        let normalizer = Normalizer::new(&whitespace, CasePolicy::insensitive());
        let (index, automaton) = load(
            vec![
                entry("Apple", LabelKind::Label, "urn:fruit"),
                entry("APPLE", LabelKind::Label, "urn:company"),
            ],
            &normalizer,
        )
        .unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.normalized().len(), 1);
        assert_eq!(index.lookup("apple", false).unwrap().uri, "urn:fruit");
        assert_eq!(automaton.pattern_count(), 1);
    }

    #[test]
    fn test_stemmed_index_alongside_normalized() {
        let normalizer = Normalizer::new(&whitespace, CasePolicy::insensitive())
            .with_stemming(&strip_s, Language::English);
        let (index, automaton) = load(
            vec![entry("Red Cars", LabelKind::Label, "urn:cars")],
            &normalizer,
        )
        .unwrap();

        assert!(index.lookup("red cars", false).is_some());
        assert!(index.lookup("red car", true).is_some());
        assert!(index.lookup("red cars", true).is_none());
        assert_eq!(automaton.pattern(0).unwrap().text, " red car ");
    }

    #[test]
    fn test_invalid_entries_fail_atomically() {
        let normalizer = Normalizer::new(&whitespace, CasePolicy::insensitive());
        let err = load(
            vec![
                entry("Paris", LabelKind::Label, "urn:paris"),
                entry("Lyon", LabelKind::Label, ""),
            ],
            &normalizer,
        )
        .unwrap_err();

        assert_eq!(
            err,
            CoreError::invalid_entry(1, "Lyon", "uri is missing")
        );
    }

    #[test]
    fn test_empty_dictionary() {
        let normalizer = Normalizer::new(&whitespace, CasePolicy::insensitive());
        let (index, automaton) = load(Vec::new(), &normalizer).unwrap();
        assert!(index.is_empty());
        assert!(automaton.is_empty());
    }

    #[test]
    fn test_label_without_tokens_is_rejected() {
        let nothing = |_: &str| -> Result<Vec<Range<usize>>> { Ok(Vec::new()) };
        let normalizer = Normalizer::new(&nothing, CasePolicy::insensitive());
        let err = load(vec![entry("...", LabelKind::Label, "urn:dots")], &normalizer).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDictionaryEntry { index: 0, .. }));
    }
}
