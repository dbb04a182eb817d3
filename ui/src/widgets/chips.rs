use dioxus::prelude::*;

/// Feature chips: one chip is active and its detail panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipsState {
    count: usize,
    active: usize,
}

impl ChipsState {
    pub fn new(count: usize) -> Self {
        Self {
            count: count.max(1),
            active: 0,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.count || index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    /// `Enter` and `Space` activate the focused chip.
    pub fn on_key(&mut self, index: usize, key: &str) -> bool {
        match key {
            "Enter" | " " | "Spacebar" => {
                self.activate(index);
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chip {
    pub label: String,
    pub title: String,
    pub description: String,
}

#[component]
pub fn ChipPicker(aria_label: String, chips: Vec<Chip>) -> Element {
    let count = chips.len();
    let mut state = use_signal(move || ChipsState::new(count));
    let snapshot = state();
    let detail = chips.get(snapshot.active()).cloned();

    rsx! {
        div { class: "chips",
            div { class: "chips__list", role: "group", aria_label: "{aria_label}",
                for (index, chip) in chips.iter().enumerate() {
                    button {
                        key: "{index}",
                        r#type: "button",
                        class: if snapshot.active() == index { "chip is-active" } else { "chip" },
                        aria_pressed: "{snapshot.active() == index}",
                        onclick: move |_| {
                            state.with_mut(|chips| chips.activate(index));
                        },
                        onkeydown: move |evt| {
                            let key = evt.key().to_string();
                            if state.with_mut(|chips| chips.on_key(index, &key)) {
                                evt.prevent_default();
                            }
                        },
                        "{chip.label}"
                    }
                }
            }
            if let Some(detail) = detail {
                div { class: "chips__detail", aria_live: "polite",
                    h3 { "{detail.title}" }
                    p { "{detail.description}" }
                }
            }
        }
    }
}
