//! Where dictionaries come from. The embedded copies are always available;
//! web builds can point [`crate::config::SiteConfig::dictionary_base_url`] at a
//! directory of `{code}.json` files instead.

use futures::future::LocalBoxFuture;
use rust_embed::Embed;

use super::{Dictionary, I18nError, Language};

pub trait DictionarySource {
    fn load(&self, language: Language) -> LocalBoxFuture<'_, Result<Dictionary, I18nError>>;
}

/// Embed every `{code}.json` under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedDictionaries;

impl EmbeddedDictionaries {
    pub fn load_now(&self, language: Language) -> Result<Dictionary, I18nError> {
        let file = Localizations::get(&format!("{}.json", language.code()))
            .ok_or(I18nError::MissingDictionary(language))?;
        Dictionary::from_json_slice(&file.data)
            .map_err(|source| I18nError::InvalidDictionary { language, source })
    }
}

impl DictionarySource for EmbeddedDictionaries {
    fn load(&self, language: Language) -> LocalBoxFuture<'_, Result<Dictionary, I18nError>> {
        let result = self.load_now(language);
        Box::pin(async move { result })
    }
}

/// Dictionaries served over HTTP as `{base_url}/{code}.json`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct RemoteDictionaries {
    base_url: String,
}

#[cfg(target_arch = "wasm32")]
impl RemoteDictionaries {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, language: Language) -> String {
        format!("{}/{}.json", self.base_url, language.code())
    }

    async fn fetch(&self, language: Language) -> Result<Dictionary, I18nError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        let failed = |reason: String| I18nError::DictionaryFetchFailed { language, reason };
        let url = self.url_for(language);
        tracing::debug!("[i18n] loading translations from {url}");

        let window = web_sys::window().ok_or_else(|| failed("window unavailable".into()))?;
        let response = JsFuture::from(window.fetch_with_str(&url))
            .await
            .map_err(|err| failed(format!("{err:?}")))?
            .dyn_into::<web_sys::Response>()
            .map_err(|_| failed("unexpected fetch result".into()))?;

        if response.status() == 404 {
            return Err(I18nError::MissingDictionary(language));
        }
        if !response.ok() {
            return Err(failed(format!("HTTP {}", response.status())));
        }

        let body = JsFuture::from(response.text().map_err(|err| failed(format!("{err:?}")))?)
            .await
            .map_err(|err| failed(format!("{err:?}")))?
            .as_string()
            .ok_or_else(|| failed("response body is not text".into()))?;

        Dictionary::from_json_str(&body)
            .map_err(|source| I18nError::InvalidDictionary { language, source })
    }
}

#[cfg(target_arch = "wasm32")]
impl DictionarySource for RemoteDictionaries {
    fn load(&self, language: Language) -> LocalBoxFuture<'_, Result<Dictionary, I18nError>> {
        Box::pin(self.fetch(language))
    }
}
