use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use dioxus::prelude::*;

use super::{Dictionary, Language, Translator};

thread_local! {
    static REPORTED_MISSING: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

/// Reactive view of the translator for components.
///
/// Copyable handle around signals; reading through it subscribes the calling
/// component, so a language switch re-renders every translated node.
#[derive(Clone, Copy)]
pub struct I18n {
    language: Signal<Language>,
    active: Signal<Option<Rc<Dictionary>>>,
    fallback: Signal<Option<Rc<Dictionary>>>,
}

impl I18n {
    /// Must be called while a component is rendering (signals are scoped).
    pub fn new(initial: Language) -> Self {
        Self {
            language: Signal::new(initial),
            active: Signal::new(None),
            fallback: Signal::new(None),
        }
    }

    /// Keep the signals in step with every applied language.
    pub fn bind(&self, translator: &Translator) {
        let (language, active) = (self.language, self.active);
        translator.subscribe(Rc::new(move |lang: Language, dict: &Rc<Dictionary>| {
            let (mut language, mut active) = (language, active);
            language.set(lang);
            active.set(Some(dict.clone()));
        }));
    }

    pub fn set_fallback(&self, dict: Rc<Dictionary>) {
        let mut fallback = self.fallback;
        fallback.set(Some(dict));
    }

    pub fn language(&self) -> Language {
        (self.language)()
    }

    pub fn is_ready(&self) -> bool {
        self.active.read().is_some()
    }

    /// Text at `key` in the active language, then the fallback language,
    /// without the missing-key handling of [`Self::text`].
    pub fn lookup(&self, key: &str) -> Option<String> {
        resolve_with_fallback(
            self.active.read().as_deref(),
            self.fallback.read().as_deref(),
            key,
        )
    }

    /// Text at `key` in the active language, then the fallback language.
    /// Before the first dictionary lands this is empty; an unknown key is
    /// reported once and rendered as the key itself.
    pub fn text(&self, key: &str) -> String {
        let active = self.active.read();
        let fallback = self.fallback.read();
        if active.is_none() {
            return String::new();
        }
        resolve_with_fallback(active.as_deref(), fallback.as_deref(), key).unwrap_or_else(|| {
            report_missing(key);
            key.to_string()
        })
    }
}

fn resolve_with_fallback(
    active: Option<&Dictionary>,
    fallback: Option<&Dictionary>,
    key: &str,
) -> Option<String> {
    active
        .and_then(|d| d.resolve(key))
        .or_else(|| fallback.and_then(|d| d.resolve(key)))
        .map(str::to_string)
}

fn report_missing(key: &str) {
    let first = REPORTED_MISSING.with(|seen| seen.borrow_mut().insert(key.to_string()));
    if first {
        tracing::warn!("[i18n] translation not found for key: {key}");
    }
}

/// Translate `key` through the [`I18n`] in context (see [`crate::t!`]).
pub fn tr(key: &str) -> String {
    match try_consume_context::<I18n>() {
        Some(i18n) => i18n.text(key),
        None => key.to_string(),
    }
}

/// Like [`tr`], but `None` when no dictionary has the key.
pub fn try_tr(key: &str) -> Option<String> {
    try_consume_context::<I18n>().and_then(|i18n| i18n.lookup(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_then_fallback_then_nothing() {
        let es = Dictionary::from_json_str(r#"{"hero":{"title":"Hola"}}"#).unwrap();
        let en =
            Dictionary::from_json_str(r#"{"hero":{"title":"Hello","cta":"Explore"}}"#).unwrap();

        assert_eq!(
            resolve_with_fallback(Some(&es), Some(&en), "hero.title").as_deref(),
            Some("Hola")
        );
        assert_eq!(
            resolve_with_fallback(Some(&es), Some(&en), "hero.cta").as_deref(),
            Some("Explore")
        );
        assert_eq!(resolve_with_fallback(Some(&es), None, "hero.cta"), None);
        assert_eq!(resolve_with_fallback(None, None, "hero.title"), None);
    }
}
