//! Internationalization for the landing page.
//!
//! Pieces:
//! - [`Language`]: supported languages plus locale normalization
//! - [`Dictionary`]: nested localized strings addressed by dotted paths
//! - [`source`]: where dictionaries come from (`rust-embed` copies under
//!   `i18n/`, or JSON fetched over HTTP on the web)
//! - [`annotate`]: rewriting `data-i18n*` annotated markup outside the component tree
//! - [`Translator`]: caching, fallback, persistence and change notification
//! - [`I18n`]: the reactive handle components read through [`t!`](crate::t)
//!
//! Layout (relative to this crate root):
//! ```text
//! i18n/
//!   en.json   (fallback/reference)
//!   es.json
//! ```
//!
//! Usage in a component (inside a tree set up by `use_site_provider`):
//! ```ignore
//! use crate::t;
//! let title = t!("hero.title");
//! ```
//!
//! To add a language: add a variant to [`Language`], copy `i18n/en.json` to
//! `i18n/<code>.json`, translate every value (keep the keys) and run the tests.

pub mod annotate;
mod context;
mod dictionary;
mod engine;
mod language;
pub mod source;

pub use context::{tr, try_tr, I18n};
pub use dictionary::{Dictionary, Entry};
pub use engine::{ApplyOptions, LanguageListener, Translator};
pub use language::Language;

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("no dictionary available for {0}")]
    MissingDictionary(Language),
    #[error("fetching dictionary for {language} failed: {reason}")]
    DictionaryFetchFailed { language: Language, reason: String },
    #[error("dictionary for {language} is malformed: {source}")]
    InvalidDictionary {
        language: Language,
        #[source]
        source: serde_json::Error,
    },
}

/// Translation lookup for the current component.
///
/// Examples:
///     t!("hero.title")
///
/// Expands to [`tr`], which reads the active dictionary from context and
/// subscribes the calling component to language changes.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::tr($key)
    };
}
