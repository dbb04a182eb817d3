use std::rc::Rc;

use dioxus::prelude::*;

/// Exactly one selected tab out of `count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabsState {
    count: usize,
    selected: usize,
}

impl TabsState {
    pub fn new(count: usize) -> Self {
        Self {
            count: count.max(1),
            selected: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    /// Out-of-range indices are ignored. Returns whether the selection moved.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.count || index == self.selected {
            return false;
        }
        self.selected = index;
        true
    }

    /// Arrow keys wrap around; `Home`/`End` jump to the ends. Returns the
    /// newly selected index for keys the tab list handles.
    pub fn on_key(&mut self, key: &str) -> Option<usize> {
        let last = self.count - 1;
        let target = match key {
            "ArrowRight" => {
                if self.selected == last {
                    0
                } else {
                    self.selected + 1
                }
            }
            "ArrowLeft" => {
                if self.selected == 0 {
                    last
                } else {
                    self.selected - 1
                }
            }
            "Home" => 0,
            "End" => last,
            _ => return None,
        };
        self.select(target);
        Some(target)
    }

    /// Inline style for the sliding underline under the selected tab.
    pub fn indicator_style(&self) -> String {
        let width = 100.0 / self.count as f64;
        format!(
            "width: {width:.4}%; transform: translateX({}%);",
            self.selected * 100
        )
    }
}

#[component]
pub fn TabList(
    state: Signal<TabsState>,
    id_prefix: String,
    labels: Vec<String>,
    aria_label: String,
) -> Element {
    let mut state = state;
    let mut buttons = use_signal(Vec::<Option<Rc<MountedData>>>::new);
    let snapshot = state();

    rsx! {
        div { class: "tabs__list", role: "tablist", aria_label: "{aria_label}",
            for (index, label) in labels.iter().enumerate() {
                button {
                    key: "{index}",
                    id: "{id_prefix}-tab-{index}",
                    r#type: "button",
                    role: "tab",
                    class: if snapshot.is_selected(index) { "tabs__tab is-active" } else { "tabs__tab" },
                    aria_selected: "{snapshot.is_selected(index)}",
                    aria_controls: "{id_prefix}-panel-{index}",
                    tabindex: if snapshot.is_selected(index) { "0" } else { "-1" },
                    onmounted: move |evt| {
                        buttons.with_mut(|list| {
                            if list.len() <= index {
                                list.resize(index + 1, None);
                            }
                            list[index] = Some(evt.data());
                        });
                    },
                    onclick: move |_| {
                        state.with_mut(|tabs| tabs.select(index));
                    },
                    onkeydown: move |evt| {
                        let key = evt.key().to_string();
                        if let Some(target) = state.with_mut(|tabs| tabs.on_key(&key)) {
                            evt.prevent_default();
                            if let Some(button) = buttons.peek().get(target).cloned().flatten() {
                                spawn(async move {
                                    let _ = button.set_focus(true).await;
                                });
                            }
                        }
                    },
                    "{label}"
                }
            }
            span { class: "tabs__indicator", aria_hidden: "true", style: "{snapshot.indicator_style()}" }
        }
    }
}
