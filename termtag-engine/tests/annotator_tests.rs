//! Annotator behaviour with the default tokenizer and stemmer

use std::ops::Range;
use termtag_engine::{
    Annotator, AnnotatorConfig, DictionaryEntry, EngineError, Input, LabelKind, Language,
};

fn label(text: &str, uri: &str) -> DictionaryEntry {
    DictionaryEntry::new(text, LabelKind::Label, uri)
}

fn synonym(text: &str, uri: &str) -> DictionaryEntry {
    DictionaryEntry::new(text, LabelKind::Synonym, uri)
}

#[test]
fn test_new_york_in_a_sentence() {
    let annotator = Annotator::new(vec![label("New York", "uri1")], AnnotatorConfig::default())
        .expect("Failed to build annotator");
    let found = annotator.annotate("I live in New York City.").unwrap();

    assert_eq!(found.len(), 1);
    let hit = &found[0];
    assert_eq!(hit.found_text, "New York");
    assert_eq!(hit.uri, "uri1");
    assert_eq!(hit.label, "New York");
    assert_eq!((hit.begin, hit.end), (10, 18));
    assert_eq!(hit.score, 1.0);
    assert!(!hit.overlap);
}

#[test]
fn test_english_stemming_scores_inflected_forms() {
    let annotator = Annotator::new(
        vec![label("running", "uri2")],
        AnnotatorConfig::stemmed(Language::English),
    )
    .unwrap();
    let found = annotator.annotate("He was running fast.").unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].found_text, "running");
    assert_eq!(found[0].uri, "uri2");
    assert!(found[0].score > 0.0, "score was {}", found[0].score);
    assert!(found[0].score < 1.0, "score was {}", found[0].score);
}

#[test]
fn test_uninflected_terms_score_exactly_one_when_stemming() {
    let annotator = Annotator::new(
        vec![
            label("Dr. Who", "urn:who"),
            label("running", "urn:run"),
            label("New York", "urn:ny"),
        ],
        AnnotatorConfig::stemmed(Language::English),
    )
    .unwrap();
    let found = annotator
        .annotate("Dr.  Who was running to New\n  York.")
        .unwrap();

    let scores: Vec<_> = found
        .iter()
        .map(|a| (a.uri.as_str(), a.score))
        .collect();
    assert_eq!(scores.len(), 3, "{scores:?}");
    assert_eq!(scores[0], ("urn:who", 1.0));
    assert_eq!(scores[1].0, "urn:run");
    assert!((scores[1].1 - 3.0 / 7.0).abs() < 1e-9, "{scores:?}");
    assert_eq!(scores[2], ("urn:ny", 1.0));
    assert_eq!(found[2].found_text, "New\n  York");
}

#[test]
fn test_stemming_matches_other_inflections() {
    let annotator = Annotator::new(
        vec![label("connection", "urn:connection")],
        AnnotatorConfig::stemmed(Language::English),
    )
    .unwrap();
    let found = annotator.annotate("Two connections were connected.").unwrap();

    let texts: Vec<_> = found.iter().map(|a| a.found_text.as_str()).collect();
    assert_eq!(texts, vec!["connections", "connected"]);
}

#[test]
fn test_longer_term_wins_over_nested_one() {
    let annotator = Annotator::new(
        vec![label("New York", "uriA"), label("New York City", "uriB")],
        AnnotatorConfig::default(),
    )
    .unwrap();
    let found = annotator.annotate("New York City").unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].uri, "uriB");
    assert_eq!((found[0].begin, found[0].end), (0, 13));
}

#[test]
fn test_short_tokens_keep_their_case() {
    let config = AnnotatorConfig::builder()
        .case_sensitive(true)
        .case_sensitive_length(3)
        .build()
        .unwrap();
    let annotator = Annotator::new(
        vec![label("CEO", "urn:ceo"), label("Company", "urn:company")],
        config,
    )
    .unwrap();

    let found = annotator.annotate("ceo of the company").unwrap();
    let uris: Vec<_> = found.iter().map(|a| a.uri.as_str()).collect();
    assert_eq!(uris, vec!["urn:company"]);

    let found = annotator.annotate("CEO of the Company").unwrap();
    let uris: Vec<_> = found.iter().map(|a| a.uri.as_str()).collect();
    assert_eq!(uris, vec!["urn:ceo", "urn:company"]);
}

#[test]
fn test_fully_case_sensitive() {
    let annotator = Annotator::new(vec![label("Apple", "urn:apple")], AnnotatorConfig::strict())
        .unwrap();
    assert!(annotator.annotate("an apple a day").unwrap().is_empty());
    assert_eq!(annotator.annotate("Apple shares").unwrap().len(), 1);
}

#[test]
fn test_synonym_reports_canonical_label() {
    let annotator = Annotator::new(
        vec![
            label("United States", "urn:us").with_type("Country"),
            synonym("USA", "urn:us"),
        ],
        AnnotatorConfig::builder()
            .default_type("Entity")
            .build()
            .unwrap(),
    )
    .unwrap();
    let found = annotator.annotate("Born in the USA and raised in the United States.").unwrap();

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].label, "United States");
    assert_eq!(found[0].synonym.as_deref(), Some("USA"));
    assert_eq!(found[0].entity_type.as_deref(), Some("Entity"));
    assert_eq!(found[1].synonym, None);
    assert_eq!(found[1].entity_type.as_deref(), Some("Country"));
}

#[test]
fn test_partial_overlaps() {
    let entries = vec![label("machine learning", "urn:ml"), label("learning rate", "urn:lr")];
    let text = "the machine learning rate schedule";

    let keep = Annotator::new(entries.clone(), AnnotatorConfig::default()).unwrap();
    assert_eq!(keep.annotate(text).unwrap().len(), 2);

    let eliminate = Annotator::new(
        entries,
        AnnotatorConfig::builder()
            .eliminate_overlapping(true)
            .build()
            .unwrap(),
    )
    .unwrap();
    let found = eliminate.annotate(text).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].uri, "urn:ml");
}

#[test]
fn test_empty_dictionary() {
    let annotator = Annotator::new(Vec::new(), AnnotatorConfig::default()).unwrap();
    assert!(annotator.annotate("Anything at all.").unwrap().is_empty());
    assert!(annotator.annotate("").unwrap().is_empty());
}

#[test]
fn test_unknown_stemming_language_disables_stemming() {
    let config = AnnotatorConfig::builder().stemming("Elvish").build().unwrap();
    assert_eq!(config.stemming_language, None);

    let annotator = Annotator::new(vec![label("running", "urn:run")], config).unwrap();
    let found = annotator.annotate("running").unwrap();
    assert_eq!(found[0].score, 1.0);
}

#[test]
fn test_malformed_entries_are_rejected() {
    let err = Annotator::new(
        vec![label("Paris", "urn:paris"), label("", "urn:empty")],
        AnnotatorConfig::default(),
    )
    .unwrap_err();

    match err {
        EngineError::InvalidDictionaryEntry { index, .. } => assert_eq!(index, 1),
        other => panic!("unexpected error: {other}"),
    }

    let err = Annotator::new(vec![label("Lyon", " ")], AnnotatorConfig::default()).unwrap_err();
    assert!(matches!(err, EngineError::InvalidDictionaryEntry { .. }));
}

#[test]
fn test_capability_failures_are_per_call() {
    let picky = |text: &str| -> termtag_core::Result<Vec<Range<usize>>> {
        if text.contains('!') {
            return Err(termtag_core::CoreError::TokenizationFailed(
                "refusing to tokenize".to_string(),
            ));
        }
        Ok(vec![0..text.len()])
    };
    let annotator = Annotator::builder()
        .tokenizer(picky)
        .build(vec![label("hello", "urn:hello")])
        .unwrap();

    let err = annotator.annotate("hello!").unwrap_err();
    assert!(matches!(err, EngineError::TokenizationFailed(_)));
    // the annotator is still usable
    assert_eq!(annotator.annotate("hello").unwrap().len(), 1);
}

#[test]
fn test_stemmer_failure() {
    let broken = |_: Language, word: &str| -> termtag_core::Result<String> {
        if word == "boom" {
            Err(termtag_core::CoreError::StemmingFailed {
                word: word.to_string(),
                reason: "unsupported".to_string(),
            })
        } else {
            Ok(word.to_string())
        }
    };
    let annotator = Annotator::builder()
        .config(AnnotatorConfig::stemmed(Language::English))
        .stemmer(broken)
        .build(vec![label("fine", "urn:fine")])
        .unwrap();

    let err = annotator.annotate("fine boom").unwrap_err();
    assert!(matches!(err, EngineError::StemmingFailed { ref word, .. } if word == "boom"));
    assert_eq!(annotator.annotate("fine").unwrap().len(), 1);
}

#[test]
fn test_annotate_input() {
    let annotator = Annotator::new(vec![label("Paris", "urn:paris")], AnnotatorConfig::default())
        .unwrap();
    let found = annotator
        .annotate_input(Input::from_bytes(b"Paris in spring".to_vec()))
        .unwrap();
    assert_eq!(found.len(), 1);
}

#[test]
fn test_shared_between_threads() {
    let annotator = Annotator::new(
        vec![label("New York", "urn:ny"), label("Paris", "urn:paris")],
        AnnotatorConfig::default(),
    )
    .unwrap();
    let texts = [
        "New York and Paris",
        "nothing to see",
        "Paris, then New York, then Paris",
    ];
    let expected: Vec<_> = texts.iter().map(|t| annotator.annotate(t).unwrap()).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let annotator = &annotator;
                let text = texts[i % texts.len()];
                scope.spawn(move || (i, annotator.annotate(text).unwrap()))
            })
            .collect();

        for handle in handles {
            let (i, found) = handle.join().unwrap();
            assert_eq!(found, expected[i % texts.len()]);
        }
    });
}
