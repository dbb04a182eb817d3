use dioxus::prelude::*;

use crate::core::platform;
use crate::i18n::tr;
use crate::t;
use crate::widgets::fab::FOOTER_ID;
use crate::widgets::StickyFab;

const FOOTER_COLUMNS: [(&str, &[(&str, &str)]); 3] = [
    (
        "product",
        &[
            ("home", "#home"),
            ("solution", "#solution"),
            ("pricing", "#pricing"),
            ("demo", "#contact"),
            ("cases", "#use-case"),
        ],
    ),
    (
        "resources",
        &[("blog", "#"), ("docs", "#"), ("help", "#faq")],
    ),
    (
        "legal",
        &[("privacy", "#"), ("terms", "#"), ("cookies", "#")],
    ),
];

#[component]
pub fn SiteFooter() -> Element {
    let year = use_hook(platform::current_year);
    let whatsapp = t!("whatsapp.href");

    rsx! {
        footer { id: FOOTER_ID, class: "site-footer",
            div { class: "container site-footer__grid",
                div { class: "site-footer__brand",
                    a { class: "brand", href: "#home", aria_label: t!("footer.brand.ariaLabel"),
                        span { class: "brand__mark", aria_hidden: "true" }
                        span { class: "brand__name", {t!("global.brand")} }
                    }
                    p { {t!("footer.description")} }
                    div { class: "site-footer__social", aria_label: t!("footer.social"),
                        a { href: "#", rel: "noopener", {t!("footer.socialTwitter")} }
                        a { href: "#", rel: "noopener", {t!("footer.socialLinkedIn")} }
                    }
                }
                for (column, links) in FOOTER_COLUMNS {
                    nav { key: "{column}", class: "site-footer__column",
                        h3 { {tr(&format!("footer.{column}.heading"))} }
                        ul {
                            for (link, href) in links.iter().copied() {
                                li { key: "{link}",
                                    a { href: href, {tr(&format!("footer.{column}.{link}"))} }
                                }
                            }
                        }
                    }
                }
            }
            p { class: "site-footer__copy",
                "© "
                span { id: "footer-year", "{year}" }
                " "
                {t!("footer.copy")}
            }
        }

        StickyFab { href: whatsapp, aria_label: t!("whatsapp.ariaLabel"),
            svg {
                class: "fab__icon",
                view_box: "0 0 24 24",
                width: "28",
                height: "28",
                "aria-hidden": "true",
                path {
                    fill: "currentColor",
                    d: "M12 2a10 10 0 0 0-8.6 15.1L2 22l5-1.3A10 10 0 1 0 12 2zm0 18.2a8.2 8.2 0 0 1-4.2-1.2l-.3-.2-3 .8.8-2.9-.2-.3A8.2 8.2 0 1 1 12 20.2zm4.5-6.1c-.2-.1-1.5-.7-1.7-.8s-.4-.1-.6.1-.7.8-.8 1-.3.2-.5.1a6.7 6.7 0 0 1-3.3-2.9c-.3-.4.3-.4.7-1.4.1-.2 0-.3 0-.4l-.8-1.8c-.2-.5-.4-.4-.6-.4h-.5a1 1 0 0 0-.7.3 3 3 0 0 0-.9 2.2 5.2 5.2 0 0 0 1.1 2.7 11.9 11.9 0 0 0 4.6 4c1.7.7 2.4.8 3.2.7a2.8 2.8 0 0 0 1.8-1.3 2.3 2.3 0 0 0 .2-1.3c-.1-.1-.3-.2-.5-.3z",
                }
            }
        }
    }
}
