use dioxus::prelude::*;

use crate::components::SiteHeader;
use crate::i18n::I18n;
use crate::t;
use crate::theme::ThemeState;
use crate::widgets::{NavState, Toast};

use super::footer::SiteFooter;

// Shared theme (linked on web; desktop inlines it at the app root)
const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

/// Page frame around routed content: header, footer, toast region and the
/// theme class. Renders a placeholder until the first dictionary is applied
/// so no untranslated text flashes.
#[component]
pub fn SiteShell(children: Element) -> Element {
    let i18n = use_context::<I18n>();
    let theme = use_context::<Signal<ThemeState>>();
    let mut nav = use_context::<Signal<NavState>>();
    let theme_class = theme().theme.css_class();

    if !i18n.is_ready() {
        return rsx! {
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            div { class: "site {theme_class} site--loading", aria_busy: "true" }
        };
    }

    let title = t!("meta.title");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if cfg!(not(target_arch = "wasm32")) {
            document::Title { "{title}" }
        }

        div {
            class: "site {theme_class}",
            lang: i18n.language().code(),
            // Web also gets every key from the window listener; a second Escape is a no-op.
            onkeydown: move |evt| {
                let key = evt.key().to_string();
                nav.with_mut(|n| n.on_key(&key));
            },
            SiteHeader {}
            main { id: "content", class: "site-main", {children} }
            SiteFooter {}
            Toast {}
        }
    }
}
