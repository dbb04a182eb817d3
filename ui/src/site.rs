//! Page-wide state created once at start-up and shared through the component
//! context: configuration, preferences, the translator and the lead
//! transport, plus the reactive handles widgets read (language, theme, toast,
//! mobile nav).

use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::config::SiteConfig;
use crate::core::platform;
use crate::core::storage::Preferences;
use crate::forms::{LeadTransport, SimulatedTransport};
use crate::i18n::annotate::AnnotatedDocument;
use crate::i18n::source::{DictionarySource, EmbeddedDictionaries};
use crate::i18n::{I18n, Translator};
use crate::theme::ThemeState;
use crate::widgets::{NavState, ToastState};

#[derive(Clone)]
pub struct Site {
    pub config: Rc<SiteConfig>,
    pub prefs: Rc<Preferences>,
    pub translator: Rc<Translator>,
    pub transport: Rc<dyn LeadTransport>,
}

impl Site {
    /// Dictionaries and the annotated document are picked per platform.
    pub fn new(config: SiteConfig, prefs: Preferences) -> Self {
        let prefs = Rc::new(prefs);
        let translator = Translator::new(
            config.default_language,
            dictionary_source(&config),
            annotated_document(),
            prefs.clone(),
            config.storage_keys.language.clone(),
        );
        let transport = Rc::new(SimulatedTransport::new(config.submit_delay_ms));
        Self {
            config: Rc::new(config),
            prefs,
            translator: Rc::new(translator),
            transport,
        }
    }
}

fn dictionary_source(config: &SiteConfig) -> Box<dyn DictionarySource> {
    #[cfg(target_arch = "wasm32")]
    if let Some(base) = &config.dictionary_base_url {
        return Box::new(crate::i18n::source::RemoteDictionaries::new(base.clone()));
    }

    #[cfg(not(target_arch = "wasm32"))]
    if config.dictionary_base_url.is_some() {
        tracing::debug!("[i18n] remote dictionaries are web-only; using embedded copies");
    }

    Box::new(EmbeddedDictionaries)
}

fn annotated_document() -> Box<dyn AnnotatedDocument> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(crate::i18n::annotate::WebDocument)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(crate::i18n::annotate::DetachedDocument)
    }
}

/// Install every shared context for the tree below the calling component and
/// start the translator. Call once, at the app root.
pub fn use_site_provider(init: impl FnOnce() -> Site) -> Site {
    let site = use_context_provider(init);

    let i18n = use_context_provider(|| {
        let i18n = I18n::new(site.translator.default_language());
        i18n.bind(&site.translator);
        i18n
    });

    let theme_key = site.config.storage_keys.theme.clone();
    let mut theme = use_context_provider(|| {
        Signal::new(ThemeState::load(
            &site.prefs,
            &theme_key,
            platform::prefers_dark_scheme(),
        ))
    });
    use_context_provider(|| Signal::new(ToastState::default()));
    let mut nav = use_context_provider(|| Signal::new(NavState::default()));

    use_effect(move || platform::apply_root_theme(theme().theme));

    let os_scheme = {
        let prefs = site.prefs.clone();
        use_coroutine(move |mut rx: UnboundedReceiver<bool>| {
            let prefs = prefs.clone();
            let key = theme_key.clone();
            async move {
                while let Some(dark) = rx.next().await {
                    if theme.with_mut(|state| state.follow_os(&prefs, &key, dark)) {
                        tracing::debug!("[theme] following OS color scheme (dark={dark})");
                    }
                }
            }
        })
    };

    let window_keys = use_coroutine(move |mut rx: UnboundedReceiver<String>| async move {
        while let Some(key) = rx.next().await {
            if nav.with_mut(|n| n.on_key(&key)) {
                tracing::debug!("[nav] closed by {key}");
            }
        }
    });

    use_hook(|| {
        let keys = window_keys.tx();
        platform::on_window_key(move |key| {
            let _ = keys.unbounded_send(key);
        });

        let tx = os_scheme.tx();
        platform::watch_color_scheme(move |dark| {
            let _ = tx.unbounded_send(dark);
        });

        let translator = site.translator.clone();
        spawn(async move {
            match translator.dictionary(translator.default_language()).await {
                Ok(fallback) => i18n.set_fallback(fallback),
                Err(err) => tracing::error!("[i18n] fallback dictionary unavailable: {err}"),
            }
            let requested = platform::requested_languages();
            let language = translator.bootstrap(&requested).await;
            tracing::info!("[i18n] started in {language}");
        });
    });

    site
}
