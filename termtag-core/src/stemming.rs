//! Stemming with normalized-offset drift correction
//!
//! Replacing a token by its stem changes its length, which shifts every
//! later token in the normalized string. The drift is accumulated left to
//! right; original-text offsets are left untouched.

use crate::capability::Stemmer;
use crate::error::Result;
use crate::language::Language;
use crate::normalizer::ProcessedText;

/// Stem every token of `processed` and rebuild its normalized string
///
/// Must run once per processed text, on tokens that are not stemmed yet.
/// An empty stem falls back to the surface form so no token collapses.
pub fn apply_stems(
    processed: &mut ProcessedText<'_>,
    stemmer: &dyn Stemmer,
    language: Language,
) -> Result<()> {
    let mut overall: isize = 0;

    for token in processed.tokens_mut() {
        debug_assert!(token.stem.is_none(), "token stemmed twice");

        let mut stem = stemmer.stem(language, &token.surface)?;
        if stem.is_empty() {
            stem = token.surface.clone();
        }

        let offset = token.surface.chars().count() as isize - stem.chars().count() as isize;
        token.norm_begin = shift(token.norm_begin, overall);
        overall += offset;
        token.norm_end = shift(token.norm_end, overall);
        token.stem = Some(stem);
    }

    processed.rebuild();
    Ok(())
}

fn shift(position: usize, drift: isize) -> usize {
    (position as isize - drift) as usize
}
