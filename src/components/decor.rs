//! Ambient decorations: twinkling stars, drifting balloons, and the sparkle
//! overlay played before navigation.
//!
//! Positions are rolled once per mount; the motion itself is plain CSS
//! animation, no particle engine.

use dioxus::prelude::*;
use rand::Rng;

const BALLOON_COLORS: [&str; 4] = ["#E6E6FA", "#FFB3D9", "#FFDAB9", "#CCCCFF"];

#[derive(Clone, PartialEq)]
struct StarSpec {
    left: f64,
    top: f64,
    size: f64,
    delay: f64,
    duration: f64,
}

/// Background twinkling stars.
#[component]
pub fn Stars(count: usize) -> Element {
    let stars = use_hook(|| {
        let mut rng = rand::rng();
        (0..count)
            .map(|_| StarSpec {
                left: rng.random_range(0.0..100.0),
                top: rng.random_range(0.0..100.0),
                size: rng.random_range(1.0..3.0),
                delay: rng.random_range(0.0..4.0),
                duration: rng.random_range(2.0..5.0),
            })
            .collect::<Vec<_>>()
    });

    rsx! {
        div { style: "position: absolute; inset: 0; overflow: hidden; pointer-events: none;",
            for (i, s) in stars.iter().enumerate() {
                span {
                    key: "{i}",
                    class: "star",
                    style: "left: {s.left}%; top: {s.top}%; width: {s.size}px; height: {s.size}px; \
                            animation-duration: {s.duration}s; animation-delay: {s.delay}s;",
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct BalloonSpec {
    left: f64,
    size: f64,
    delay: f64,
    duration: f64,
    color: &'static str,
}

/// Balloons floating up from below the fold.
#[component]
pub fn Balloons(count: usize) -> Element {
    let balloons = use_hook(|| {
        let mut rng = rand::rng();
        (0..count)
            .map(|i| BalloonSpec {
                left: rng.random_range(2.0..95.0),
                size: rng.random_range(36.0..64.0),
                delay: rng.random_range(0.0..8.0),
                duration: rng.random_range(12.0..22.0),
                color: BALLOON_COLORS[i % BALLOON_COLORS.len()],
            })
            .collect::<Vec<_>>()
    });

    rsx! {
        div { style: "position: absolute; inset: 0; overflow: hidden; pointer-events: none;",
            for (i, b) in balloons.iter().enumerate() {
                span {
                    key: "{i}",
                    class: "balloon",
                    style: "left: {b.left}%; animation-duration: {b.duration}s; animation-delay: {b.delay}s;",
                    svg {
                        width: "{b.size}",
                        height: "{b.size * 1.4}",
                        view_box: "0 0 100 140",
                        ellipse { cx: "50", cy: "60", rx: "40", ry: "50", fill: "{b.color}" }
                        path { d: "M50 110 L46 118 L54 118 Z", fill: "{b.color}" }
                        path {
                            d: "M50 118 C 50 140, 45 140, 45 160",
                            stroke: "{b.color}",
                            stroke_width: "2",
                            fill: "none",
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct SparkleSpec {
    x: f64,
    y: f64,
    scale: f64,
    delay: f64,
}

/// Full-screen golden sparkle burst, shown while `show` is true.
#[component]
pub fn SparkleOverlay(show: bool) -> Element {
    let sparkles = use_hook(|| {
        let mut rng = rand::rng();
        (0..80)
            .map(|_| SparkleSpec {
                x: rng.random_range(0.0..100.0),
                y: rng.random_range(0.0..100.0),
                scale: rng.random_range(0.4..1.7),
                delay: rng.random_range(0.0..0.4),
            })
            .collect::<Vec<_>>()
    });

    if !show {
        return rsx! {};
    }

    rsx! {
        div { class: "sparkle-overlay",
            for (i, s) in sparkles.iter().enumerate() {
                span {
                    key: "{i}",
                    class: "sparkle",
                    style: "left: {s.x}%; top: {s.y}%; font-size: {s.scale}rem; animation-delay: {s.delay}s;",
                    "\u{2726}"
                }
            }
        }
    }
}
