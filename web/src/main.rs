use dioxus::prelude::*;

use ui::views::{Landing, NotFoundView, SiteShell};
use ui::{use_site_provider, Preferences, Site, SiteConfig};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

// Deploy-time overrides (dictionary URL, storage keys, timings).
const SITE_CONFIG: &str = include_str!("../site.json");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_site_provider(|| {
        Site::new(
            SiteConfig::from_json_or_default(SITE_CONFIG),
            Preferences::platform_default(),
        )
    });

    rsx! {
        document::Link { rel: "icon", href: FAVICON, r#type: "image/svg+xml" }
        Router::<Route> {}
    }
}

#[component]
fn WebLayout() -> Element {
    rsx! {
        SiteShell { Outlet::<Route> {} }
    }
}

#[component]
fn Home() -> Element {
    rsx! { Landing {} }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    rsx! { NotFoundView { path: segments.join("/") } }
}
