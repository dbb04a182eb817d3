use dioxus::prelude::*;

use crate::i18n::tr;
use crate::t;
use crate::widgets::{Reveal, TiltCard};

use super::contact::{ContactSection, FaqSection};
use super::offer::{
    BenefitsSection, CapabilitiesSection, FeaturesSection, PricingSection, SegmentsSection,
    UseCaseSection,
};

const HERO_IMAGE: Asset = asset!("/assets/images/hero-dashboard.svg");

/// The whole landing page, top to bottom.
#[component]
pub fn Landing() -> Element {
    rsx! {
        Hero {}
        ProblemSection {}
        SolutionSection {}
        KpiStrip {}
        StagesSection {}
        TrustSection {}
        BenefitsSection {}
        SegmentsSection {}
        UseCaseSection {}
        FeaturesSection {}
        CapabilitiesSection {}
        PricingSection {}
        ContactSection {}
        FaqSection {}
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        section { id: "home", class: "hero",
            div { class: "container hero__grid",
                div { class: "hero__copy",
                    h1 { class: "hero__title", {t!("hero.title")} }
                    p { class: "hero__lead", {t!("hero.description")} }
                    ul { class: "hero__bullets",
                        li { {t!("hero.bullet1")} }
                        li { {t!("hero.bullet2")} }
                        li { {t!("hero.bullet3")} }
                    }
                    div { class: "hero__actions",
                        a {
                            class: "btn btn--primary",
                            href: "#solution",
                            aria_label: t!("hero.ctaPrimaryAria"),
                            {t!("hero.ctaPrimary")}
                        }
                        a {
                            class: "btn btn--ghost",
                            href: "#use-case",
                            aria_label: t!("hero.ctaSecondaryAria"),
                            {t!("hero.ctaSecondary")}
                        }
                    }
                }
                TiltCard { class: "hero__media",
                    img { src: HERO_IMAGE, alt: t!("hero.imageAlt"), width: "560", height: "420" }
                }
            }
        }
    }
}

#[component]
fn ProblemSection() -> Element {
    rsx! {
        section { id: "problem", class: "section section--muted",
            Reveal { class: "container",
                h2 { class: "section__title", {t!("problem.title")} }
                p { class: "section__subtitle", {t!("problem.subtitle")} }
                ul { class: "problem__list",
                    li { {t!("problem.item1")} }
                    li { {t!("problem.item2")} }
                    li { {t!("problem.item3")} }
                    li { {t!("problem.item4")} }
                }
            }
        }
    }
}

const SOLUTION_CARDS: [(&str, &str); 4] = [
    ("card1", "blockchain"),
    ("card2", "qr"),
    ("card3", "verify"),
    ("card4", "audit"),
];

#[component]
fn SolutionSection() -> Element {
    rsx! {
        section { id: "solution", class: "section",
            div { class: "container",
                Reveal {
                    h2 { class: "section__title", {t!("solution.title")} }
                    p { class: "section__subtitle", {t!("solution.description")} }
                }
                div { class: "card-grid",
                    for (card, art) in SOLUTION_CARDS {
                        Reveal { key: "{card}", class: "card",
                            div {
                                class: "card__media card__media--{art}",
                                role: "img",
                                aria_label: tr(&format!("solution.{card}.alt")),
                            }
                            h3 { class: "card__title", {tr(&format!("solution.{card}.title"))} }
                        }
                    }
                }
            }
        }
    }
}

const KPIS: [(&str, &str); 3] = [("card1", "500+"), ("card2", "-45%"), ("card3", "99.9%")];

#[component]
fn KpiStrip() -> Element {
    rsx! {
        section { class: "kpis",
            div { class: "container kpis__grid",
                for (card, figure) in KPIS {
                    div { key: "{card}", class: "kpi",
                        span { class: "kpi__value", "{figure}" }
                        span { class: "kpi__label", {tr(&format!("kpis.{card}"))} }
                    }
                }
            }
        }
    }
}

#[component]
fn StagesSection() -> Element {
    rsx! {
        section { id: "stages", class: "section section--muted",
            div { class: "container",
                Reveal {
                    h2 { class: "section__title", {t!("stages.title")} }
                }
                ol { class: "stages",
                    for (index, card) in ["card1", "card2", "card3", "card4"].into_iter().enumerate() {
                        li { key: "{card}", class: "stage",
                            TiltCard { class: "stage__card",
                                div {
                                    class: "card__media card__media--stage-{card}",
                                    role: "img",
                                    aria_label: tr(&format!("stages.{card}.alt")),
                                }
                                span { class: "stage__step", {(index + 1).to_string()} }
                                h3 { {tr(&format!("stages.{card}.title"))} }
                                p { {tr(&format!("stages.{card}.description"))} }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TrustSection() -> Element {
    rsx! {
        section { id: "trust", class: "section",
            Reveal { class: "container",
                h2 { class: "section__title", {t!("trust.title")} }
                div { class: "testimonials",
                    for item in ["testimonial1", "testimonial2"] {
                        figure { key: "{item}", class: "testimonial",
                            div {
                                class: "testimonial__avatar",
                                role: "img",
                                aria_label: tr(&format!("trust.{item}.alt")),
                            }
                            blockquote { {tr(&format!("trust.{item}.quote"))} }
                            figcaption { {tr(&format!("trust.{item}.cite"))} }
                        }
                    }
                }
            }
        }
    }
}
