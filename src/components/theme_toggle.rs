//! Theme toggle button, fixed top-left.
//!
//! Flips the effective theme and persists the explicit choice, so a System
//! preference becomes Light or Dark on first toggle.

use dioxus::prelude::*;
use keepsake_core::{Theme, ThemePreference, ThemeStore};

use crate::context::{get_config, use_theme_preference};

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme_preference();

    let effective = theme().effective(false);
    let icon = match effective {
        Theme::Dark => "\u{2600}",
        Theme::Light => "\u{1F319}",
    };

    let toggle = move |_| {
        let next = match theme().effective(false) {
            Theme::Dark => ThemePreference::Light,
            Theme::Light => ThemePreference::Dark,
        };
        theme.set(next);
        let store = ThemeStore::new(&get_config().data_dir);
        if let Err(e) = store.save(next) {
            tracing::warn!("failed to persist theme preference: {}", e);
        }
    };

    rsx! {
        button {
            class: "theme-toggle",
            aria_label: "Toggle dark mode",
            onclick: toggle,
            "{icon}"
        }
    }
}
