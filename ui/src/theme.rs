//! Light/dark theme with a persisted explicit choice.
//!
//! With nothing stored the page follows the OS color scheme, live. The first
//! manual toggle writes the choice and from then on OS changes are ignored
//! until the stored value is removed.

use std::fmt;

use dioxus::prelude::*;

use crate::core::storage::Preferences;
use crate::site::Site;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    /// Stored values are exactly `"light"` or `"dark"`; anything else counts
    /// as no choice.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub theme: Theme,
    /// The active theme came from storage or a manual toggle.
    pub explicit: bool,
}

impl ThemeState {
    pub fn resolve(stored: Option<&str>, os_dark: bool) -> Self {
        match stored.and_then(Theme::parse) {
            Some(theme) => Self {
                theme,
                explicit: true,
            },
            None => Self {
                theme: Theme::from_dark(os_dark),
                explicit: false,
            },
        }
    }

    pub fn load(prefs: &Preferences, key: &str, os_dark: bool) -> Self {
        Self::resolve(prefs.get(key).as_deref(), os_dark)
    }

    /// Flip the theme and persist it as the explicit choice.
    pub fn toggle(&mut self, prefs: &Preferences, key: &str) -> Theme {
        self.theme = self.theme.toggled();
        self.explicit = true;
        prefs.set(key, self.theme.as_str());
        tracing::debug!("[theme] switched to {}", self.theme);
        self.theme
    }

    /// React to an OS color-scheme change. Returns whether the theme changed.
    pub fn follow_os(&mut self, prefs: &Preferences, key: &str, os_dark: bool) -> bool {
        if prefs.get(key).as_deref().and_then(Theme::parse).is_some() {
            return false;
        }
        let next = Theme::from_dark(os_dark);
        self.explicit = false;
        if next == self.theme {
            return false;
        }
        self.theme = next;
        true
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let site = use_context::<Site>();
    let mut state = use_context::<Signal<ThemeState>>();
    let dark = state().theme == Theme::Dark;

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            aria_label: t!("header.themeToggle"),
            aria_pressed: "{dark}",
            onclick: move |_| {
                let key = &site.config.storage_keys.theme;
                state.with_mut(|s| s.toggle(&site.prefs, key));
            },
            span { class: "theme-toggle__icon", aria_hidden: "true" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "theme";

    #[test]
    fn stored_choice_beats_os() {
        assert_eq!(ThemeState::resolve(Some("light"), true).theme, Theme::Light);
        assert_eq!(ThemeState::resolve(Some("dark"), false).theme, Theme::Dark);
        let fallback = ThemeState::resolve(Some("sepia"), true);
        assert_eq!(fallback.theme, Theme::Dark);
        assert!(!fallback.explicit);
    }

    #[test]
    fn os_is_tracked_until_first_manual_toggle() {
        let prefs = Preferences::in_memory();
        let mut state = ThemeState::load(&prefs, KEY, false);
        assert_eq!(state.theme, Theme::Light);

        assert!(state.follow_os(&prefs, KEY, true));
        assert_eq!(state.theme, Theme::Dark);
        assert!(state.follow_os(&prefs, KEY, false));
        assert_eq!(state.theme, Theme::Light);

        assert_eq!(state.toggle(&prefs, KEY), Theme::Dark);
        assert_eq!(prefs.get(KEY).as_deref(), Some("dark"));
        assert!(!state.follow_os(&prefs, KEY, false));
        assert_eq!(state.theme, Theme::Dark);

        prefs.remove(KEY);
        assert!(state.follow_os(&prefs, KEY, false));
        assert_eq!(state.theme, Theme::Light);
        assert!(!state.explicit);
    }

    #[test]
    fn classes_and_parse_agree() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
            assert!(theme.css_class().ends_with(theme.as_str()));
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }
}
