use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::platform;
use crate::site::Site;

/// 3D rotation for a pointer at (`x`, `y`) inside a `width` x `height` card.
/// The card leans toward the pointer, up to `max_degrees` at the edges.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64, max_degrees: f64) -> Option<String> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let px = (x / width).clamp(0.0, 1.0) - 0.5;
    let py = (y / height).clamp(0.0, 1.0) - 0.5;
    let rotate_y = px * 2.0 * max_degrees;
    let rotate_x = -py * 2.0 * max_degrees;
    Some(format!(
        "perspective(900px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg)"
    ))
}

#[component]
pub fn TiltCard(#[props(default)] class: String, children: Element) -> Element {
    let site = use_context::<Site>();
    let max_degrees = site.config.tilt_max_degrees;
    let enabled = use_hook(|| !platform::prefers_reduced_motion());
    let mut node = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut size = use_signal(|| Option::<(f64, f64)>::None);
    let mut transform = use_signal(String::new);

    let style = if transform().is_empty() {
        String::new()
    } else {
        format!("transform: {};", transform())
    };

    rsx! {
        div {
            class: "tilt {class}",
            style: "{style}",
            onmounted: move |evt| node.set(Some(evt.data())),
            onmouseenter: move |_| {
                if !enabled {
                    return;
                }
                if let Some(node) = node() {
                    spawn(async move {
                        if let Ok(rect) = node.get_client_rect().await {
                            size.set(Some((rect.width(), rect.height())));
                        }
                    });
                }
            },
            onmousemove: move |evt| {
                let Some((width, height)) = size() else {
                    return;
                };
                let point = evt.element_coordinates();
                if let Some(next) = tilt_transform(point.x, point.y, width, height, max_degrees) {
                    transform.set(next);
                }
            },
            onmouseleave: move |_| transform.set(String::new()),
            {children}
        }
    }
}
