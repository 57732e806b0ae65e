//! Personalized birthday message panel.

use dioxus::prelude::*;

#[component]
pub fn BirthdayMessage(
    /// Section heading
    title: String,
    /// The note itself
    message: String,
) -> Element {
    rsx! {
        section { class: "panel message-panel",
            h2 { class: "section-header", "{title}" }
            p { class: "message-text", "{message}" }
        }
    }
}
