use dioxus::prelude::*;

use crate::i18n::{tr, ApplyOptions, I18n, Language};
use crate::site::Site;
use crate::t;
use crate::theme::ThemeToggle;
use crate::widgets::NavState;

// Header stylesheet (linked on web, inlined in release native builds)
const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

/// In-page sections reachable from the main navigation, as
/// (`header.nav.<key>`, anchor) pairs.
pub const NAV_SECTIONS: [(&str, &str); 6] = [
    ("home", "#home"),
    ("solution", "#solution"),
    ("stages", "#stages"),
    ("benefits", "#benefits"),
    ("segments", "#segments"),
    ("contact", "#contact"),
];

pub const NAV_ID: &str = "site-nav";

#[component]
pub fn SiteHeader() -> Element {
    let mut nav = use_context::<Signal<NavState>>();
    let nav_state = nav();

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header { id: "site-header", class: "site-header",
            div { class: "site-header__inner container",
                a {
                    class: "brand",
                    href: "#home",
                    aria_label: t!("header.brand.ariaLabel"),
                    span { class: "brand__mark", aria_hidden: "true" }
                    span { class: "brand__name", {t!("global.brand")} }
                }

                button {
                    r#type: "button",
                    class: "site-header__menu",
                    aria_controls: NAV_ID,
                    aria_expanded: "{nav_state.is_open()}",
                    aria_label: tr(nav_state.toggle_label_key()),
                    onclick: move |_| nav.with_mut(|n| n.toggle()),
                    span { class: "site-header__menu-bar", aria_hidden: "true" }
                }

                nav {
                    id: NAV_ID,
                    class: if nav_state.is_open() { "site-nav is-open" } else { "site-nav" },
                    aria_label: t!("header.nav.ariaLabel"),
                    ul { class: "site-nav__list",
                        for (key, anchor) in NAV_SECTIONS {
                            li { key: "{key}",
                                a {
                                    class: "site-nav__link",
                                    href: anchor,
                                    onclick: move |_| nav.with_mut(|n| n.close()),
                                    {tr(&format!("header.nav.{key}"))}
                                }
                            }
                        }
                    }
                    div { class: "site-nav__actions",
                        a { class: "btn btn--ghost", href: "#contact", {t!("header.cta.secondary")} }
                        a { class: "btn btn--primary", href: "#contact", {t!("header.cta.primary")} }
                    }
                }

                div { class: "site-header__tools",
                    LanguageSwitcher {}
                    ThemeToggle {}
                }
            }
        }
    }
}

#[component]
fn LanguageSwitcher() -> Element {
    let site = use_context::<Site>();
    let i18n = use_context::<I18n>();
    let current = i18n.language();

    rsx! {
        div { class: "lang-switch", role: "group", aria_label: t!("header.language.group"),
            for language in Language::ALL {
                button {
                    key: "{language}",
                    r#type: "button",
                    class: if language == current { "lang-switch__btn is-active" } else { "lang-switch__btn" },
                    lang: language.code(),
                    aria_pressed: "{language == current}",
                    aria_label: tr(&format!("header.language.{}Aria", language.code())),
                    onclick: {
                        let translator = site.translator.clone();
                        move |_| {
                            let translator = translator.clone();
                            spawn(async move {
                                translator
                                    .set_language(language.code(), ApplyOptions::default())
                                    .await;
                            });
                        }
                    },
                    {tr(&format!("header.language.{}", language.code()))}
                }
            }
        }
    }
}
