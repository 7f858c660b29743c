//! Edit-distance confidence
//!
//! Without stemming every match is exact and scores `1.0`. With stemming the
//! matched stem key is compared with the unstemmed key of the covered tokens,
//! so the further an inflected form drifted from its stem, the lower its
//! score. Spacing and line breaks in the original text do not count.

use crate::annotation::Annotation;
use crate::normalizer::CasePolicy;

/// Normalized Levenshtein similarity in `[0, 1]`; two empty strings are
/// identical
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// Set the score of an annotation
pub fn score(annotation: &mut Annotation, policy: CasePolicy, stemming: bool) {
    annotation.score = if stemming {
        similarity(&annotation.matched_key, &surface_key(annotation, policy))
    } else {
        1.0
    };
}

/// Folded token surfaces joined by one space, the form the key had before
/// stemming
fn surface_key(annotation: &Annotation, policy: CasePolicy) -> String {
    if annotation.tokens.is_empty() {
        return policy.fold_text(&annotation.found_text);
    }
    annotation
        .tokens
        .iter()
        .map(|token| token.surface.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
