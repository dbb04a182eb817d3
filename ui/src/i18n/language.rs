use std::fmt;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Languages the page ships dictionaries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Exact (case-sensitive) match on a supported code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Best supported language for a raw tag, or `fallback`.
    ///
    /// The tag is trimmed and lower-cased, then matched exactly, then by
    /// locale prefix (`en-US`, `es_419`).
    pub fn normalize(raw: &str, fallback: Language) -> Language {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return fallback;
        }
        if let Some(lang) = Self::from_code(&normalized) {
            return lang;
        }
        if let Some(lang) = Self::ALL
            .into_iter()
            .find(|lang| normalized.starts_with(&format!("{}-", lang.code())))
        {
            return lang;
        }
        normalized
            .parse::<LanguageIdentifier>()
            .ok()
            .and_then(|id| Self::from_identifier(&id))
            .unwrap_or(fallback)
    }

    pub fn from_identifier(id: &LanguageIdentifier) -> Option<Self> {
        Self::from_code(&id.language.as_str().to_lowercase())
    }

    /// Initial language: stored preference, else the first supported
    /// requested locale, else `fallback`.
    pub fn detect(
        stored: Option<&str>,
        requested: &[LanguageIdentifier],
        fallback: Language,
    ) -> Language {
        if let Some(stored) = stored.filter(|s| !s.trim().is_empty()) {
            return Self::normalize(stored, fallback);
        }
        requested
            .iter()
            .find_map(Self::from_identifier)
            .unwrap_or(fallback)
    }

    /// The language a two-state toggle switches to.
    pub fn other(self) -> Language {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
