//! Memory timeline: one card per year on a vertical line, each with a
//! preview strip, an expandable shuffled grid, and the shared lightbox.
//!
//! View state (open flags, display orders, lightbox) lives here and is
//! dropped on navigation away; the photo data itself is read-only context.

use dioxus::prelude::*;
use keepsake_core::{LightboxState, TimelineState, YearGroup};

use crate::components::photo_image::PhotoImage;
use crate::components::Lightbox;

#[component]
pub fn MemoryTimeline(groups: Vec<YearGroup>) -> Element {
    let total: usize = groups.iter().map(|g| g.photos.len()).sum();

    let initial_groups = groups.clone();
    let mut timeline: Signal<TimelineState> =
        use_signal(move || TimelineState::new(&initial_groups, &mut rand::rng()));
    let mut lightbox: Signal<Option<LightboxState>> = use_signal(|| None);

    let state = timeline();

    rsx! {
        div {
            div { class: "timeline-summary",
                h3 { class: "section-header", "Memory Timeline" }
                div { class: "count-chip",
                    "Our Favorite Moments: "
                    strong { "{total}" }
                }
            }

            div { class: "timeline",
                for (idx, group) in groups.iter().enumerate() {
                    {
                        let groups_for_open = groups.clone();
                        rsx! {
                            YearCard {
                                key: "{group.year}",
                                group: group.clone(),
                                is_open: state.is_open(idx),
                                preview: state.preview(idx).to_vec(),
                                grid: state.grid(idx).to_vec(),
                                on_toggle: move |_| {
                                    timeline.with_mut(|t| t.toggle(idx, &mut rand::rng()));
                                },
                                // photo_idx is the original index stored in the
                                // display order, so the lightbox shows exactly
                                // the photo that was clicked
                                on_open_lightbox: move |photo_idx| {
                                    lightbox.set(Some(LightboxState::open(
                                        &groups_for_open,
                                        idx,
                                        photo_idx,
                                    )));
                                },
                            }
                        }
                    }
                }
            }

            if let Some(lb) = lightbox() {
                {
                    let groups_next = groups.clone();
                    let groups_prev = groups.clone();
                    rsx! {
                        Lightbox {
                            photo: lb.photo(&groups).cloned(),
                            on_close: move |_| lightbox.set(None),
                            on_next: move |_| {
                                if let Some(mut lb) = lightbox() {
                                    lb.next(&groups_next);
                                    lightbox.set(Some(lb));
                                }
                            },
                            on_prev: move |_| {
                                if let Some(mut lb) = lightbox() {
                                    lb.prev(&groups_prev);
                                    lightbox.set(Some(lb));
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn YearCard(
    group: YearGroup,
    is_open: bool,
    /// Original indices for the preview strip (first 4 of the display order)
    preview: Vec<usize>,
    /// Original indices for the expanded grid (first 12 of the display order)
    grid: Vec<usize>,
    on_toggle: EventHandler<()>,
    on_open_lightbox: EventHandler<usize>,
) -> Element {
    rsx! {
        section { class: "year-card",
            div { class: "year-node", "{group.year}" }

            div { class: "year-header",
                h3 { class: "year-title", "{group.year}" }
                button {
                    class: "btn-secondary",
                    onclick: move |_| on_toggle.call(()),
                    if is_open { "Hide \u{25B2}" } else { "View \u{25BC}" }
                }
            }

            if group.photos.is_empty() {
                p { class: "empty-year", "No photos yet for this year." }
            } else {
                div { class: "preview-strip",
                    for &photo_idx in preview.iter() {
                        if let Some(photo) = group.photos.get(photo_idx) {
                            button {
                                key: "{photo_idx}",
                                class: "preview-thumb",
                                onclick: move |_| on_open_lightbox.call(photo_idx),
                                PhotoImage {
                                    source_path: photo.source_path.clone(),
                                    alt: photo.caption.clone(),
                                }
                            }
                        }
                    }
                }

                if is_open {
                    div { class: "photo-grid",
                        for &photo_idx in grid.iter() {
                            if let Some(photo) = group.photos.get(photo_idx) {
                                Polaroid {
                                    key: "{photo_idx}",
                                    source_path: photo.source_path.clone(),
                                    caption: photo.caption.clone(),
                                    on_open: move |_| on_open_lightbox.call(photo_idx),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Polaroid(source_path: String, caption: String, on_open: EventHandler<()>) -> Element {
    rsx! {
        div { class: "polaroid",
            div {
                class: "polaroid-inner",
                onclick: move |_| on_open.call(()),
                PhotoImage { source_path, alt: caption.clone() }
                div { class: "polaroid-caption handwritten", "{caption}" }
            }
        }
    }
}
