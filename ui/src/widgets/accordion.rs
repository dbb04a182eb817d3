use dioxus::prelude::*;

/// Single-open accordion: opening an item closes the others, toggling the
/// open item closes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccordionItem {
    pub question: String,
    pub answer: String,
}

#[component]
pub fn Accordion(id_prefix: String, items: Vec<AccordionItem>) -> Element {
    let mut state = use_signal(AccordionState::default);
    let snapshot = state();

    rsx! {
        div { class: "accordion",
            for (index, item) in items.iter().enumerate() {
                div {
                    key: "{index}",
                    class: if snapshot.is_open(index) { "accordion__item is-open" } else { "accordion__item" },
                    h3 { class: "accordion__heading",
                        button {
                            id: "{id_prefix}-trigger-{index}",
                            r#type: "button",
                            class: "accordion__trigger",
                            aria_expanded: "{snapshot.is_open(index)}",
                            aria_controls: "{id_prefix}-panel-{index}",
                            onclick: move |_| state.with_mut(|acc| acc.toggle(index)),
                            span { "{item.question}" }
                            span { class: "accordion__icon", aria_hidden: "true" }
                        }
                    }
                    div {
                        id: "{id_prefix}-panel-{index}",
                        class: "accordion__panel",
                        role: "region",
                        aria_labelledby: "{id_prefix}-trigger-{index}",
                        hidden: !snapshot.is_open(index),
                        p { "{item.answer}" }
                    }
                }
            }
        }
    }
}
