//! Full-screen photo viewer overlay.
//!
//! Keyboard handling lives on the overlay element itself (focused on mount),
//! so Escape/ArrowRight/ArrowLeft are only wired while the lightbox exists
//! and go away with it.

use dioxus::prelude::*;
use keepsake_core::Photo;

use crate::components::photo_image::PhotoImage;

#[component]
pub fn Lightbox(
    /// The photo to display; `None` shows an empty frame
    photo: Option<Photo>,
    on_close: EventHandler<()>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let on_keydown = move |evt: KeyboardEvent| match evt.key() {
        Key::Escape => on_close.call(()),
        Key::ArrowRight => on_next.call(()),
        Key::ArrowLeft => on_prev.call(()),
        _ => {}
    };

    rsx! {
        div {
            class: "lightbox-overlay",
            tabindex: "0",
            autofocus: true,
            onkeydown: on_keydown,
            onclick: move |_| on_close.call(()),

            div {
                class: "lightbox-frame",
                onclick: move |e| e.stop_propagation(),

                if let Some(photo) = photo {
                    PhotoImage {
                        source_path: photo.source_path.clone(),
                        alt: photo.caption.clone(),
                    }
                    div { class: "lightbox-caption", "{photo.caption}" }
                }

                button {
                    class: "lightbox-nav prev",
                    aria_label: "Previous",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_prev.call(());
                    },
                    "\u{2039}"
                }
                button {
                    class: "lightbox-nav next",
                    aria_label: "Next",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_next.call(());
                    },
                    "\u{203A}"
                }
                button {
                    class: "lightbox-close",
                    aria_label: "Close",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_close.call(());
                    },
                    "\u{2715}"
                }
            }
        }
    }
}
