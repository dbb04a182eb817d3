#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::views::{Landing, NotFoundView, SiteShell};
use ui::{use_site_provider, Preferences, Site, SiteConfig};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopLayout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("FoodChain – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    use_site_provider(|| Site::new(load_site_config(), Preferences::platform_default()));

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }
        Router::<Route> {}
    }
}

/// `site.json` from the user's config directory, or defaults.
fn load_site_config() -> SiteConfig {
    let Some(dirs) = directories::ProjectDirs::from("com", "FoodChain", "FoodChain") else {
        return SiteConfig::default();
    };
    let path = dirs.config_dir().join("site.json");
    match std::fs::read_to_string(&path) {
        Ok(raw) => {
            tracing::info!("[config] loaded {}", path.display());
            SiteConfig::from_json_or_default(&raw)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => SiteConfig::default(),
        Err(err) => {
            tracing::warn!("[config] cannot read {}: {err}; using defaults", path.display());
            SiteConfig::default()
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[component]
fn DesktopLayout() -> Element {
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
