//! Memories page - the photo timeline and lightbox.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::MemoryTimeline;
use crate::context::{use_memories, use_memories_ready};

#[component]
pub fn Memories() -> Element {
    let memories = use_memories();
    let memories_ready = use_memories_ready();

    rsx! {
        main { class: "memories-main",
            section { style: "text-align: center; margin-bottom: 2.5rem;",
                h1 { class: "page-title", "Our Memories" }
                p { class: "body-text",
                    "Scroll through the years and tap any photo to view it larger."
                }
            }

            if memories_ready() {
                MemoryTimeline { groups: memories() }
            } else {
                p { class: "status-text", "Gathering the photo albums..." }
            }

            div { style: "margin-top: 2.5rem; display: flex; justify-content: center;",
                Link { class: "btn-secondary", to: Route::Landing {}, "Back to landing" }
            }
        }
    }
}
