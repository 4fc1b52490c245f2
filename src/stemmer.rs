//! Language registry: maps language codes onto stemming engines.

use crate::english::EnglishStemmer;
use crate::russian::RussianStemmer;

/// Languages with a built-in stemming engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Russian,
}

impl Language {
    /// Resolves an ISO 639-1 code. An unknown code is not an error — it is
    /// simply unsupported, and callers choose the fallback (identity
    /// stemming is typical).
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::English),
            "ru" => Some(Language::Russian),
            _ => None,
        }
    }

    /// The ISO 639-1 code of this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }
}

/// A stemming engine for one language.
///
/// Construction builds the engine's lookup tables once; afterwards the
/// instance is immutable and can be shared freely across threads.
pub struct Stemmer {
    engine: Engine,
}

enum Engine {
    English(EnglishStemmer),
    Russian(RussianStemmer),
}

impl Stemmer {
    pub fn new(language: Language) -> Stemmer {
        let engine = match language {
            Language::English => Engine::English(EnglishStemmer::new()),
            Language::Russian => Engine::Russian(RussianStemmer::new()),
        };
        Stemmer { engine }
    }

    /// Builds a stemmer from a language code, or `None` when the language
    /// has no engine.
    pub fn for_code(code: &str) -> Option<Stemmer> {
        Language::from_code(code).map(Stemmer::new)
    }

    pub fn language(&self) -> Language {
        match self.engine {
            Engine::English(_) => Language::English,
            Engine::Russian(_) => Language::Russian,
        }
    }

    /// Reduces one token to its stem. Total over any text input.
    pub fn stem(&self, word: &str) -> String {
        match &self.engine {
            Engine::English(engine) => engine.stem(word),
            Engine::Russian(engine) => engine.stem(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_codes() {
        assert_eq!(Language::from_code("en"), Some(Language::English));
        assert_eq!(Language::from_code("ru"), Some(Language::Russian));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code("EN"), None);
    }

    #[test]
    fn test_code_round_trip() {
        for language in [Language::English, Language::Russian] {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
    }

    #[test]
    fn test_for_code_dispatches() {
        let en = Stemmer::for_code("en").unwrap();
        assert_eq!(en.language(), Language::English);
        assert_eq!(en.stem("caresses"), "caress");

        let ru = Stemmer::for_code("ru").unwrap();
        assert_eq!(ru.language(), Language::Russian);
        assert_eq!(ru.stem("весна"), "весн");

        assert!(Stemmer::for_code("fi").is_none());
    }
}
