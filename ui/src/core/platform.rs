//! Platform glue. Web builds talk to the browser through `web-sys`; native
//! builds return neutral answers so the shared logic stays the same.

use unic_langid::LanguageIdentifier;

use crate::theme::Theme;

/// Locales the user agent / OS asks for, most preferred first.
#[cfg(target_arch = "wasm32")]
pub fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

#[cfg(target_arch = "wasm32")]
fn media_matches(query: &str) -> Option<bool> {
    let window = web_sys::window()?;
    let list = window.match_media(query).ok()??;
    Some(list.matches())
}

pub fn prefers_dark_scheme() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        media_matches("(prefers-color-scheme: dark)").unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

pub fn prefers_reduced_motion() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        media_matches("(prefers-reduced-motion: reduce)").unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Call `on_change(dark)` whenever the OS color scheme flips. The listener
/// lives for the rest of the page.
pub fn watch_color_scheme(on_change: impl FnMut(bool) + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let Some(list) = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        else {
            tracing::debug!("[theme] matchMedia unavailable; OS changes ignored");
            return;
        };

        let mut on_change = on_change;
        let callback = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |event: web_sys::MediaQueryListEvent| on_change(event.matches()),
        );
        if list
            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("[theme] could not subscribe to color-scheme changes");
        }
        callback.forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = on_change;
    }
}

/// Mirror the theme onto `<html>` so page chrome outside the app root (body
/// background, scrollbars) follows it.
pub fn apply_root_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let _ = classes.remove_2("theme-dark", "theme-light");
        let _ = classes.add_1(theme.css_class());
        if let Ok(html) = wasm_bindgen::JsCast::dyn_into::<web_sys::HtmlElement>(root) {
            let _ = html.style().set_property("color-scheme", theme.as_str());
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

/// Register a window-level listener (`scroll`, `resize`) for the
/// rest of the page.
pub fn on_window_event(name: &str, handler: impl FnMut() + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let mut handler = handler;
        let callback = Closure::<dyn FnMut()>::new(move || handler());
        if window
            .add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("[platform] could not listen for window {name}");
        }
        callback.forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (name, handler);
    }
}

/// Window-level `keydown`, so shortcuts work even when nothing inside the
/// app has focus. The handler receives `KeyboardEvent.key`.
pub fn on_window_key(handler: impl FnMut(String) + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let mut handler = handler;
        let callback = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |event: web_sys::KeyboardEvent| handler(event.key()),
        );
        if window
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("[platform] could not listen for window keydown");
        }
        callback.forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = handler;
    }
}

/// Viewport height and the top edge of the element with `id`, both in CSS px.
pub fn viewport_and_element_top(id: &str) -> Option<(f64, f64)> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let height = window.inner_height().ok()?.as_f64()?;
        let element = window.document()?.get_element_by_id(id)?;
        Some((height, element.get_bounding_client_rect().top()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        None
    }
}
