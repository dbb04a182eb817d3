use dioxus::prelude::*;

use crate::core::timing::{self, TimerSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn modifier(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }
}

/// One transient notification. Showing a new one replaces the current one
/// and restarts the auto-hide countdown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    current: Option<(ToastKind, String)>,
    timer: TimerSlot,
}

impl ToastState {
    /// Returns the ticket the auto-hide task must present to [`Self::expire`].
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.current = Some((kind, message.into()));
        self.timer.arm()
    }

    /// Hide if `ticket` is still the latest one.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if self.timer.fire(ticket) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) {
        self.timer.cancel();
        self.current = None;
    }

    pub fn current(&self) -> Option<(ToastKind, &str)> {
        self.current.as_ref().map(|(kind, text)| (*kind, text.as_str()))
    }
}

/// Show `message` and schedule its auto-hide. Must run inside the app runtime
/// (event handlers, coroutines).
pub fn show_toast(mut toast: Signal<ToastState>, kind: ToastKind, message: String, duration_ms: u64) {
    let ticket = toast.with_mut(|state| state.show(kind, message));
    spawn(async move {
        timing::sleep_ms(duration_ms).await;
        toast.with_mut(|state| state.expire(ticket));
    });
}

#[component]
pub fn Toast() -> Element {
    let mut toast = use_context::<Signal<ToastState>>();
    let state = toast();

    rsx! {
        div { class: "toast-region", role: "status", aria_live: "polite",
            if let Some((kind, text)) = state.current() {
                div {
                    class: "toast {kind.modifier()}",
                    onclick: move |_| toast.with_mut(|state| state.dismiss()),
                    "{text}"
                }
            }
        }
    }
}
