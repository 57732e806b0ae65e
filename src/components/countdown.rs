//! Countdown to the next birthday: progress ring plus day/hour/minute/second
//! cards, refreshed once per second.
//!
//! The 1 Hz task is spawned on mount and scoped to the component, so it is
//! cancelled when the view unmounts; accepting ~1s of timer jitter, each
//! tick recomputes the whole snapshot from the wall clock rather than
//! decrementing.

use std::f64::consts::PI;

use chrono::Local;
use dioxus::prelude::*;
use keepsake_core::{AnnualDate, CountdownSnapshot};

const RING_SIZE: f64 = 180.0;
const RING_STROKE: f64 = 10.0;

#[component]
pub fn Countdown(
    /// The recurring annual target
    target: AnnualDate,
    /// Quote shown under the cards
    quote: String,
) -> Element {
    let mut snapshot =
        use_signal(|| CountdownSnapshot::at(target, Local::now().naive_local()));

    // 1 Hz tick, dies with the component
    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                snapshot.set(CountdownSnapshot::at(target, Local::now().naive_local()));
            }
        });
    });

    let snap = snapshot();
    let radius = (RING_SIZE - 2.0 * RING_STROKE + 2.0) / 2.0;
    let circumference = 2.0 * PI * radius;
    let dash_offset = circumference * (1.0 - snap.remaining_fraction);
    let center = RING_SIZE / 2.0;

    rsx! {
        div { class: "countdown-row",
            // Progress ring: the arc drains as the birthday approaches
            div { class: "countdown-ring",
                svg {
                    width: "{RING_SIZE}",
                    height: "{RING_SIZE}",
                    view_box: "0 0 {RING_SIZE} {RING_SIZE}",
                    defs {
                        linearGradient {
                            id: "countdown-grad",
                            x1: "0%", y1: "0%", x2: "100%", y2: "100%",
                            stop { offset: "0%", stop_color: "#E6E6FA" }
                            stop { offset: "50%", stop_color: "#FF6B9D" }
                            stop { offset: "100%", stop_color: "#FFD700" }
                        }
                    }
                    g { transform: "translate({center}, {center})",
                        circle {
                            r: "{radius}",
                            fill: "none",
                            stroke: "rgba(0,0,0,0.08)",
                            stroke_width: "{RING_STROKE}",
                        }
                        circle {
                            r: "{radius}",
                            fill: "none",
                            stroke: "url(#countdown-grad)",
                            stroke_width: "{RING_STROKE}",
                            stroke_linecap: "round",
                            stroke_dasharray: "{circumference}",
                            stroke_dashoffset: "{dash_offset}",
                            transform: "rotate(-90)",
                            style: "transition: stroke-dashoffset 600ms ease;",
                        }
                    }
                }
                div { class: "countdown-ring-label",
                    div {
                        div { class: "countdown-ring-caption", "Days Left" }
                        div { class: "countdown-ring-days", "{snap.to_next.days}" }
                    }
                }
            }

            div { class: "countdown-cards",
                FlipCard { label: "Days", value: snap.to_next.days }
                FlipCard { label: "Hours", value: snap.to_next.hours }
                FlipCard { label: "Minutes", value: snap.to_next.minutes }
                FlipCard { label: "Seconds", value: snap.to_next.seconds }
            }
        }

        blockquote { class: "countdown-quote",
            span { class: "handwritten", "\u{201C}{quote}\u{201D}" }
        }
    }
}

#[component]
fn FlipCard(label: &'static str, value: i64) -> Element {
    rsx! {
        div { class: "flip-card",
            div { class: "flip-card-value", {format!("{value:02}")} }
            div { class: "flip-card-label", "{label}" }
        }
    }
}
