use dioxus::prelude::*;

use crate::i18n::tr;
use crate::t;
use crate::widgets::{Chip, ChipPicker, Reveal, TabList, TabsState, TiltCard};

const CARDS: [&str; 4] = ["card1", "card2", "card3", "card4"];

#[component]
pub fn BenefitsSection() -> Element {
    rsx! {
        section { id: "benefits", class: "section",
            div { class: "container",
                Reveal {
                    h2 { class: "section__title", {t!("benefits.title")} }
                }
                div { class: "card-grid",
                    for card in CARDS {
                        Reveal { key: "{card}", class: "card card--benefit",
                            h3 { class: "card__title", {tr(&format!("benefits.{card}.title"))} }
                            p { {tr(&format!("benefits.{card}.description"))} }
                        }
                    }
                }
            }
        }
    }
}

pub const SEGMENTS: [&str; 3] = ["producers", "enterprises", "consumers"];

#[component]
pub fn SegmentsSection() -> Element {
    let tabs = use_signal(|| TabsState::new(SEGMENTS.len()));
    let selected = tabs().selected();
    let labels: Vec<String> = SEGMENTS
        .iter()
        .map(|segment| tr(&format!("segments.tabs.{segment}")))
        .collect();

    rsx! {
        section { id: "segments", class: "section section--muted",
            Reveal { class: "container",
                h2 { class: "section__title", {t!("segments.title")} }
                div { class: "tabs",
                    TabList {
                        state: tabs,
                        id_prefix: "segments",
                        labels,
                        aria_label: t!("segments.ariaLabel"),
                    }
                    for (index, segment) in SEGMENTS.into_iter().enumerate() {
                        div {
                            key: "{segment}",
                            id: "segments-panel-{index}",
                            class: "tabs__panel",
                            role: "tabpanel",
                            aria_labelledby: "segments-tab-{index}",
                            hidden: index != selected,
                            ul { class: "tabs__bullets",
                                for bullet in ["bullet1", "bullet2", "bullet3"] {
                                    li { key: "{bullet}", {tr(&format!("segments.panels.{segment}.{bullet}"))} }
                                }
                            }
                            blockquote { class: "tabs__quote", {tr(&format!("segments.panels.{segment}.quote"))} }
                            a { class: "btn btn--primary", href: "#contact", {tr(&format!("segments.panels.{segment}.cta"))} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn UseCaseSection() -> Element {
    rsx! {
        section { id: "use-case", class: "section",
            Reveal { class: "container",
                h2 { class: "section__title", {t!("useCase.title")} }
                ol { class: "timeline",
                    for step in ["step1", "step2", "step3", "step4"] {
                        li {
                            key: "{step}",
                            class: "timeline__step",
                            aria_label: tr(&format!("useCase.{step}.aria")),
                            h3 { {tr(&format!("useCase.{step}.title"))} }
                            p { {tr(&format!("useCase.{step}.description"))} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn FeaturesSection() -> Element {
    rsx! {
        section { id: "features", class: "section section--muted",
            div { class: "container",
                Reveal {
                    h2 { class: "section__title", {t!("features.title")} }
                }
                div { class: "card-grid",
                    for card in CARDS {
                        TiltCard { key: "{card}", class: "card card--feature",
                            h3 { class: "card__title", {tr(&format!("features.{card}.title"))} }
                            p { {tr(&format!("features.{card}.description"))} }
                        }
                    }
                }
            }
        }
    }
}

pub const CAPABILITIES: [&str; 6] = [
    "traceability",
    "alerts",
    "integration",
    "reports",
    "api",
    "support",
];

#[component]
pub fn CapabilitiesSection() -> Element {
    let chips: Vec<Chip> = CAPABILITIES
        .iter()
        .map(|id| Chip {
            label: tr(&format!("capabilities.chips.{id}")),
            title: tr(&format!("capabilities.details.{id}.title")),
            description: tr(&format!("capabilities.details.{id}.description")),
        })
        .collect();

    rsx! {
        section { id: "capabilities", class: "section",
            Reveal { class: "container",
                h2 { class: "section__title", {t!("capabilities.title")} }
                ChipPicker { aria_label: t!("capabilities.ariaLabel"), chips }
            }
        }
    }
}

#[component]
pub fn PricingSection() -> Element {
    rsx! {
        section { id: "pricing", class: "section section--muted",
            Reveal { class: "container",
                h2 { class: "section__title", {t!("pricing.title")} }
                div { class: "pricing",
                    PricingPlan { plan: "basic", features: 3, featured: false }
                    PricingPlan { plan: "featured", features: 4, featured: true }
                    PricingPlan { plan: "enterprise", features: 4, featured: false }
                }
            }
        }
    }
}

#[component]
fn PricingPlan(plan: &'static str, features: usize, featured: bool) -> Element {
    let period = crate::i18n::try_tr(&format!("pricing.{plan}.period"));

    rsx! {
        article { class: if featured { "plan plan--featured" } else { "plan" },
            if featured {
                span { class: "plan__badge", aria_label: t!("pricing.featured.badgeAria"), {t!("pricing.featured.badge")} }
            }
            h3 { class: "plan__name", {tr(&format!("pricing.{plan}.name"))} }
            p { class: "plan__price",
                span { class: "plan__amount", {tr(&format!("pricing.{plan}.amount"))} }
                if let Some(period) = period {
                    span { class: "plan__period", "{period}" }
                }
            }
            ul { class: "plan__features",
                for n in 1..=features {
                    li { key: "{n}", {tr(&format!("pricing.{plan}.feature{n}"))} }
                }
            }
            a {
                class: if featured { "btn btn--primary" } else { "btn btn--ghost" },
                href: "#contact",
                {tr(&format!("pricing.{plan}.cta"))}
            }
        }
    }
}
