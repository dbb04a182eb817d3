use dioxus::prelude::*;

use crate::forms::ContactFormView;
use crate::i18n::tr;
use crate::t;
use crate::widgets::{Accordion, AccordionItem, Reveal};

#[component]
pub fn ContactSection() -> Element {
    rsx! {
        section { id: "contact", class: "section contact",
            div { class: "container contact__grid",
                Reveal { class: "contact__intro",
                    h2 { class: "section__title", {t!("contact.title")} }
                    p { class: "section__subtitle", {t!("contact.description")} }
                }
                ContactFormView {}
            }
        }
    }
}

pub const FAQ_ITEMS: [&str; 3] = ["one", "two", "three"];

#[component]
pub fn FaqSection() -> Element {
    let items: Vec<AccordionItem> = FAQ_ITEMS
        .iter()
        .map(|item| AccordionItem {
            question: tr(&format!("faq.items.{item}.question")),
            answer: tr(&format!("faq.items.{item}.answer")),
        })
        .collect();

    rsx! {
        section { id: "faq", class: "section section--muted",
            Reveal { class: "container container--narrow",
                h2 { class: "section__title", {t!("faq.title")} }
                Accordion { id_prefix: "faq", items }
            }
        }
    }
}
