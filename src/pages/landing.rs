//! Landing page - the gift waiting to be opened.
//!
//! A typewritten greeting over twinkling stars and drifting balloons. The
//! "Open Your Gift" button plays a sparkle overlay, then navigates to the
//! birthday page.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{Balloons, SparkleOverlay, Stars};
use crate::context::get_config;

/// Delay between typed characters.
const TYPE_SPEED_MS: u64 = 55;
/// How long the sparkle overlay plays before navigating.
const SPARKLE_DELAY_MS: u64 = 1100;

#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let config = get_config();
    let heading = format!("Happy Birthday {}! \u{1F49C}", config.friend_name);
    let total_chars = heading.chars().count();

    let mut visible_chars = use_signal(|| 0usize);
    let mut sparkling = use_signal(|| false);

    // Typewriter tick; the task dies with the page.
    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_millis(TYPE_SPEED_MS)).await;
                if visible_chars() >= total_chars {
                    break;
                }
                visible_chars += 1;
            }
        });
    });

    let typed: String = heading.chars().take(visible_chars()).collect();

    let open_gift = move |_| {
        if sparkling() {
            return;
        }
        sparkling.set(true);
        // give the sparkles time to play before navigating
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(SPARKLE_DELAY_MS)).await;
            navigator.push(Route::Birthday {});
        });
    };

    rsx! {
        main { class: "landing",
            Stars { count: 70 }
            Balloons { count: 10 }

            h1 { class: "page-title",
                "{typed}"
                span { class: "typewriter-cursor" }
            }

            button {
                class: "btn-primary",
                onclick: open_gift,
                "Open Your Gift"
            }

            SparkleOverlay { show: sparkling() }
        }
    }
}
