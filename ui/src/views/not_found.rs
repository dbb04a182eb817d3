use dioxus::prelude::*;

use crate::t;

#[component]
pub fn NotFoundView(path: String) -> Element {
    tracing::debug!("[router] no page for /{path}");

    rsx! {
        section { class: "section not-found",
            div { class: "container container--narrow",
                h1 { class: "section__title", {t!("notFound.title")} }
                p { {t!("notFound.body")} }
                a { class: "btn btn--primary", href: "/", {t!("notFound.cta")} }
            }
        }
    }
}
