//! One-shot scroll reveal. Each wrapped block starts hidden and becomes
//! visible the first time enough of it enters the viewport; it is then
//! unobserved and never hides again.

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::platform;
use crate::site::Site;

// Browsers report the crossing ratio with rounding, e.g. 0.1599 for 0.16.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Whether an intersection report should reveal the element.
pub fn should_reveal(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio + RATIO_TOLERANCE >= threshold
}

#[component]
pub fn Reveal(#[props(default)] class: String, children: Element) -> Element {
    let site = use_context::<Site>();
    let threshold = site.config.reveal_threshold;
    let root_margin = site.config.reveal_root_margin.clone();
    let mut visible = use_signal(platform::prefers_reduced_motion);

    let seen = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        if rx.next().await.is_some() {
            visible.set(true);
        }
    });

    let classes = if visible() {
        format!("reveal is-visible {class}")
    } else {
        format!("reveal {class}")
    };

    rsx! {
        div {
            class: "{classes}",
            onmounted: move |evt| {
                if *visible.peek() {
                    return;
                }
                if !observe_once(&evt.data(), threshold, &root_margin, seen.tx()) {
                    visible.set(true);
                }
            },
            {children}
        }
    }
}

/// Start observing; `false` when the platform cannot observe intersections
/// and the caller should reveal right away.
#[cfg(target_arch = "wasm32")]
fn observe_once(
    mounted: &MountedData,
    threshold: f64,
    root_margin: &str,
    seen: futures_channel::mpsc::UnboundedSender<()>,
) -> bool {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let Some(element) = mounted.downcast::<web_sys::Element>().cloned() else {
        return false;
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if should_reveal(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                    observer.unobserve(&entry.target());
                    let _ = seen.unbounded_send(());
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);

    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        Ok(observer) => {
            observer.observe(&element);
            callback.forget();
            true
        }
        Err(err) => {
            tracing::debug!("[reveal] IntersectionObserver unavailable: {err:?}");
            false
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn observe_once(
    _mounted: &MountedData,
    _threshold: f64,
    _root_margin: &str,
    _seen: futures_channel::mpsc::UnboundedSender<()>,
) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_must_be_crossed_while_intersecting() {
        assert!(should_reveal(true, 0.16, 0.16));
        assert!(should_reveal(true, 0.1599, 0.16));
        assert!(should_reveal(true, 0.9, 0.16));
        assert!(!should_reveal(true, 0.1, 0.16));
        assert!(!should_reveal(false, 1.0, 0.16));
    }
}
