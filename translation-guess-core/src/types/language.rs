//! Target language catalog

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

/// A target language the game may pick for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Language {
    /// ISO 639-1 code sent to the translation service.
    pub code: &'static str,
    /// Display name the player has to guess.
    pub name: &'static str,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

const LANGUAGES: [Language; 12] = [
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "it", name: "Italian" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "ru", name: "Russian" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "tr", name: "Turkish" },
];

/// Static, immutable code → name table.
pub struct LanguageCatalog;

impl LanguageCatalog {
    /// All entries, in catalog order.
    pub fn all() -> &'static [Language] {
        &LANGUAGES
    }

    pub fn codes() -> impl Iterator<Item = &'static str> {
        LANGUAGES.iter().map(|lang| lang.code)
    }

    /// Display name for a code. Exact, case-sensitive match.
    pub fn name_of(code: &str) -> Option<&'static str> {
        Self::find(code).map(|lang| lang.name)
    }

    pub fn find(code: &str) -> Option<Language> {
        LANGUAGES.iter().copied().find(|lang| lang.code == code)
    }

    /// Draw one entry uniformly from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Language {
        // 目录为编译期常量且非空，choose 只会在空切片上返回 None
        LANGUAGES.choose(rng).copied().unwrap_or(LANGUAGES[0])
    }

    /// Draw one entry using the thread-local RNG.
    pub fn random_language() -> Language {
        Self::random(&mut rand::rng())
    }
}
