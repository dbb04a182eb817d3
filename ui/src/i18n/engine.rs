use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use unic_langid::LanguageIdentifier;

use crate::core::storage::Preferences;

use super::annotate::{apply_dictionary, AnnotatedDocument};
use super::source::DictionarySource;
use super::{Dictionary, I18nError, Language};

/// Called after every successful apply (unless suppressed).
pub type LanguageListener = Rc<dyn Fn(Language, &Rc<Dictionary>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Write the language to preference storage.
    pub persist: bool,
    /// Fire the change notification.
    pub notify: bool,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            persist: true,
            notify: true,
        }
    }
}

impl ApplyOptions {
    /// First load of the page: nothing has been chosen yet, so nothing is saved.
    pub const fn silent() -> Self {
        Self {
            persist: false,
            notify: false,
        }
    }
}

/// Language selection, dictionary caching and document rewriting.
///
/// Shared as `Rc<Translator>`; all state uses interior mutability and no
/// borrow is held across an `.await`, so overlapping calls are safe and the
/// last one to finish decides the current language.
pub struct Translator {
    default_language: Language,
    source: Box<dyn DictionarySource>,
    document: Box<dyn AnnotatedDocument>,
    prefs: Rc<Preferences>,
    storage_key: String,
    cache: RefCell<HashMap<Language, Rc<Dictionary>>>,
    current: Cell<Language>,
    listeners: RefCell<Vec<LanguageListener>>,
}

impl Translator {
    pub fn new(
        default_language: Language,
        source: Box<dyn DictionarySource>,
        document: Box<dyn AnnotatedDocument>,
        prefs: Rc<Preferences>,
        storage_key: impl Into<String>,
    ) -> Self {
        Self {
            default_language,
            source,
            document,
            prefs,
            storage_key: storage_key.into(),
            cache: RefCell::new(HashMap::new()),
            current: Cell::new(default_language),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn current(&self) -> Language {
        self.current.get()
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub fn subscribe(&self, listener: LanguageListener) {
        self.listeners.borrow_mut().push(listener);
    }

    pub fn cached(&self, language: Language) -> Option<Rc<Dictionary>> {
        self.cache.borrow().get(&language).cloned()
    }

    /// Dictionary for `language`, loading it on first use.
    pub async fn dictionary(&self, language: Language) -> Result<Rc<Dictionary>, I18nError> {
        if let Some(dict) = self.cached(language) {
            return Ok(dict);
        }
        let loaded = Rc::new(self.source.load(language).await?);
        // Another load may have finished while this one was suspended; keep
        // whichever landed first so every holder shares one instance.
        let dict = self
            .cache
            .borrow_mut()
            .entry(language)
            .or_insert(loaded)
            .clone();
        Ok(dict)
    }

    /// Switch to the best match for `requested` and rewrite the document.
    ///
    /// Never fails: a missing dictionary falls back to the default language,
    /// and if that fails too the document is left alone and the previous
    /// language is returned.
    pub async fn set_language(&self, requested: &str, options: ApplyOptions) -> Language {
        let language = Language::normalize(requested, self.default_language);

        match self.dictionary(language).await {
            Ok(dict) => return self.apply(language, &dict, options),
            Err(err) => tracing::warn!("[i18n] failed to set language {language}: {err}"),
        }

        if language != self.default_language {
            match self.dictionary(self.default_language).await {
                Ok(dict) => return self.apply(self.default_language, &dict, options),
                Err(err) => tracing::error!("[i18n] failed to load fallback language: {err}"),
            }
        }

        self.current.get()
    }

    /// Page start: pick the stored or requested language, apply it silently,
    /// then notify once so listeners see the initial state.
    pub async fn bootstrap(&self, requested: &[LanguageIdentifier]) -> Language {
        let stored = self.prefs.get(&self.storage_key);
        let initial = Language::detect(stored.as_deref(), requested, self.default_language);
        let loaded = self.set_language(initial.code(), ApplyOptions::silent()).await;
        if let Some(dict) = self.cached(loaded) {
            self.notify(loaded, &dict);
        }
        loaded
    }

    fn apply(&self, language: Language, dict: &Rc<Dictionary>, options: ApplyOptions) -> Language {
        let report = apply_dictionary(dict, &self.document.annotated_nodes());
        for key in &report.missing {
            tracing::warn!("[i18n] translation not found for key: {key}");
        }
        for pair in &report.malformed {
            tracing::debug!("[i18n] skipped malformed attribute mapping {pair:?}");
        }
        tracing::debug!(
            "[i18n] applied {language}: {} texts, {} attributes",
            report.texts,
            report.attributes
        );

        self.document.set_language_attribute(language.code());
        if options.persist {
            self.prefs.set(&self.storage_key, language.code());
        }
        self.current.set(language);
        if options.notify {
            self.notify(language, dict);
        }
        language
    }

    fn notify(&self, language: Language, dict: &Rc<Dictionary>) {
        // Clone out so a listener may subscribe or switch language re-entrantly.
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(language, dict);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use futures::executor::block_on;
    use futures::future::LocalBoxFuture;

    use super::*;
    use crate::i18n::annotate::testing::{FakeDocument, FakeElement};

    /// Fixed in-memory dictionaries that count loads.
    struct StaticSource {
        dictionaries: HashMap<Language, Dictionary>,
        loads: Rc<Cell<usize>>,
    }

    impl StaticSource {
        fn new(entries: &[(Language, &str)]) -> (Self, Rc<Cell<usize>>) {
            let loads = Rc::new(Cell::new(0));
            let source = Self {
                dictionaries: entries
                    .iter()
                    .map(|(lang, raw)| (*lang, Dictionary::from_json_str(raw).unwrap()))
                    .collect(),
                loads: loads.clone(),
            };
            (source, loads)
        }
    }

    impl DictionarySource for StaticSource {
        fn load(&self, language: Language) -> LocalBoxFuture<'_, Result<Dictionary, I18nError>> {
            self.loads.set(self.loads.get() + 1);
            let result = self
                .dictionaries
                .get(&language)
                .cloned()
                .ok_or(I18nError::MissingDictionary(language));
            Box::pin(async move { result })
        }
    }

    const EN: &str = r#"{"hero":{"title":"Hello"},"meta":{"title":"Home"}}"#;
    const ES: &str = r#"{"hero":{"title":"Hola"},"meta":{"title":"Inicio"}}"#;

    struct Fixture {
        translator: Translator,
        doc: Rc<FakeDocument>,
        heading: Rc<FakeElement>,
        prefs: Rc<Preferences>,
        loads: Rc<Cell<usize>>,
    }

    fn fixture(entries: &[(Language, &str)]) -> Fixture {
        let heading = FakeElement::new("h1", &[("data-i18n", "hero.title")], "static");
        let title = FakeElement::new("title", &[("data-i18n", "meta.title")], "static");
        let doc = Rc::new(FakeDocument::new(vec![heading.clone(), title]));
        let prefs = Rc::new(Preferences::in_memory());
        let (source, loads) = StaticSource::new(entries);
        let translator = Translator::new(
            Language::En,
            Box::new(source),
            Box::new(doc.clone()),
            prefs.clone(),
            "language",
        );
        Fixture {
            translator,
            doc,
            heading,
            prefs,
            loads,
        }
    }

    #[test]
    fn switching_rewrites_document_and_persists() {
        let f = fixture(&[(Language::En, EN), (Language::Es, ES)]);
        let applied = block_on(f.translator.set_language("es-MX", ApplyOptions::default()));
        assert_eq!(applied, Language::Es);
        assert_eq!(f.heading.rendered(), "Hola");
        assert_eq!(f.doc.lang.borrow().as_deref(), Some("es"));
        assert_eq!(f.prefs.get("language").as_deref(), Some("es"));
        assert_eq!(f.translator.current(), Language::Es);
    }

    #[test]
    fn same_language_twice_is_idempotent_and_cached() {
        let f = fixture(&[(Language::En, EN), (Language::Es, ES)]);
        for lang in Language::ALL {
            block_on(f.translator.set_language(lang.code(), ApplyOptions::default()));
            let first = f.doc.snapshot();
            block_on(f.translator.set_language(lang.code(), ApplyOptions::default()));
            assert_eq!(first, f.doc.snapshot(), "{lang}");
        }
        assert_eq!(f.loads.get(), 2, "one load per language");
    }

    #[test]
    fn missing_dictionary_falls_back_to_default() {
        let f = fixture(&[(Language::En, EN)]);
        let applied = block_on(f.translator.set_language("es", ApplyOptions::default()));
        assert_eq!(applied, Language::En);
        assert_eq!(f.heading.rendered(), "Hello");
        assert_eq!(f.prefs.get("language").as_deref(), Some("en"));
    }

    #[test]
    fn double_failure_leaves_document_unchanged() {
        let f = fixture(&[]);
        let applied = block_on(f.translator.set_language("es", ApplyOptions::default()));
        assert_eq!(applied, Language::En, "previous language is reported");
        assert_eq!(f.heading.rendered(), "static");
        assert!(f.doc.lang.borrow().is_none());
        assert_eq!(f.prefs.get("language"), None);
    }

    #[test]
    fn garbage_request_uses_default() {
        let f = fixture(&[(Language::En, EN), (Language::Es, ES)]);
        block_on(f.translator.set_language("es", ApplyOptions::default()));
        let applied = block_on(f.translator.set_language("klingon", ApplyOptions::default()));
        assert_eq!(applied, Language::En);
    }

    #[test]
    fn listeners_fire_unless_suppressed() {
        let f = fixture(&[(Language::En, EN), (Language::Es, ES)]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        f.translator.subscribe(Rc::new(move |lang: Language, dict: &Rc<Dictionary>| {
            sink.borrow_mut()
                .push((lang, dict.resolve("hero.title").unwrap_or_default().to_string()));
        }));

        block_on(f.translator.set_language("es", ApplyOptions::silent()));
        assert!(seen.borrow().is_empty());
        assert_eq!(f.prefs.get("language"), None, "silent apply does not persist");

        block_on(f.translator.set_language("en", ApplyOptions::default()));
        assert_eq!(*seen.borrow(), vec![(Language::En, "Hello".to_string())]);
    }

    #[test]
    fn bootstrap_uses_storage_then_browser_and_does_not_persist() {
        let f = fixture(&[(Language::En, EN), (Language::Es, ES)]);
        let notified = Rc::new(Cell::new(0));
        let counter = notified.clone();
        f.translator
            .subscribe(Rc::new(move |_: Language, _: &Rc<Dictionary>| {
                counter.set(counter.get() + 1)
            }));

        let browser: Vec<LanguageIdentifier> = vec!["es-AR".parse().unwrap()];
        assert_eq!(block_on(f.translator.bootstrap(&browser)), Language::Es);
        assert_eq!(notified.get(), 1);
        assert_eq!(f.prefs.get("language"), None);

        f.prefs.set("language", "en");
        assert_eq!(block_on(f.translator.bootstrap(&browser)), Language::En);
        assert_eq!(f.heading.rendered(), "Hello");
    }
}
