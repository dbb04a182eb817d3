use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::platform;
use crate::core::timing::{self, TimerSlot};
use crate::site::Site;

/// Element the button must stay above.
pub const FOOTER_ID: &str = "site-footer";

/// Bottom offset for the floating button: its resting offset, plus however
/// much of the footer is currently inside the viewport.
pub fn fab_offset(viewport_height: f64, footer_top: f64, base: f64) -> f64 {
    let overlap = viewport_height - footer_top;
    if overlap > 0.0 {
        base + overlap
    } else {
        base
    }
}

#[derive(Debug, Clone, Copy)]
enum FabEvent {
    Scroll,
    Resize,
}

#[component]
pub fn StickyFab(href: String, aria_label: String, children: Element) -> Element {
    let site = use_context::<Site>();
    let base = site.config.fab_base_offset_px;
    let debounce_ms = site.config.resize_debounce_ms;
    let mut offset = use_signal(move || base);
    let mut resize_timer = use_signal(TimerSlot::default);

    let mut recompute = move || {
        if let Some((viewport, footer_top)) = platform::viewport_and_element_top(FOOTER_ID) {
            offset.set(fab_offset(viewport, footer_top, base));
        }
    };

    let events = use_coroutine(move |mut rx: UnboundedReceiver<FabEvent>| async move {
        recompute();
        while let Some(event) = rx.next().await {
            match event {
                FabEvent::Scroll => recompute(),
                FabEvent::Resize => {
                    let ticket = resize_timer.with_mut(|slot| slot.arm());
                    spawn(async move {
                        timing::sleep_ms(debounce_ms).await;
                        if resize_timer.with_mut(|slot| slot.fire(ticket)) {
                            recompute();
                        }
                    });
                }
            }
        }
    });

    use_hook(move || {
        let scroll = events.tx();
        platform::on_window_event("scroll", move || {
            let _ = scroll.unbounded_send(FabEvent::Scroll);
        });
        let resize = events.tx();
        platform::on_window_event("resize", move || {
            let _ = resize.unbounded_send(FabEvent::Resize);
        });
    });

    let style = format!("bottom: {:.0}px;", offset());

    rsx! {
        a {
            class: "fab",
            href: "{href}",
            target: "_blank",
            rel: "noopener",
            aria_label: "{aria_label}",
            style: "{style}",
            {children}
        }
    }
}
