//! Snowball stemmer capability

use crate::language::algorithm;
use termtag_core::{Language, Result, Stemmer};

/// Stemmer backed by `rust-stemmers`, one Snowball stemmer per language
pub struct SnowballStemmer {
    stemmers: [rust_stemmers::Stemmer; Language::ALL.len()],
}

impl SnowballStemmer {
    /// Create stemmers for every supported language
    pub fn new() -> Self {
        Self {
            stemmers: Language::ALL
                .map(|language| rust_stemmers::Stemmer::create(algorithm(language))),
        }
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("languages", &self.stemmers.len())
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, language: Language, word: &str) -> Result<String> {
        Ok(self.stemmers[language.index()].stem(word).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stems() {
        let stemmer = SnowballStemmer::new();
        assert_eq!(stemmer.stem(Language::English, "running").unwrap(), "run");
        assert_eq!(stemmer.stem(Language::English, "cats").unwrap(), "cat");
        assert_eq!(stemmer.stem(Language::English, "fast").unwrap(), "fast");
    }

    #[test]
    fn test_languages_use_their_own_stemmer() {
        let stemmer = SnowballStemmer::new();
        for language in Language::ALL {
            assert_eq!(Language::ALL[language.index()], language);
        }
        assert_eq!(stemmer.stem(Language::English, "connections").unwrap(), "connect");
    }

    #[test]
    fn test_every_language_has_a_stemmer() {
        let stemmer = SnowballStemmer::new();
        for language in Language::ALL {
            assert!(stemmer.stem(language, "test").is_ok(), "{language}");
        }
    }
}
