//! Layered birthday cake SVG with flickering candles.

use dioxus::prelude::*;
use rand::Rng;

const CANDLE_COUNT: usize = 5;
const TOP_X: f64 = 120.0;
const TOP_Y: f64 = 90.0;
const TOP_W: f64 = 120.0;
const CANDLE_W: f64 = 8.0;
// candle base so the 28px stick lands on the top layer
const BASE_Y: f64 = 62.0;

#[derive(Clone, PartialEq)]
struct SprinkleSpec {
    x: f64,
    y: f64,
    rotation: f64,
    color: &'static str,
}

#[component]
pub fn CakeSvg() -> Element {
    let sprinkles = use_hook(|| {
        let mut rng = rand::rng();
        (0..22)
            .map(|i| SprinkleSpec {
                x: rng.random_range(70.0..290.0),
                y: rng.random_range(165.0..205.0),
                rotation: rng.random_range(-30.0..30.0),
                color: ["#E6E6FA", "#FF6B9D", "#FFD700"][i % 3],
            })
            .collect::<Vec<_>>()
    });

    // evenly space candle centers across the top layer
    let candle_centers: Vec<f64> = (0..CANDLE_COUNT)
        .map(|i| TOP_X + ((i + 1) as f64 * TOP_W) / (CANDLE_COUNT + 1) as f64)
        .collect();

    rsx! {
        svg {
            width: "360",
            height: "260",
            view_box: "0 0 360 260",
            role: "img",
            aria_label: "Animated birthday cake",

            // plate
            ellipse { cx: "180", cy: "230", rx: "130", ry: "18", fill: "#eaeafc" }

            // bottom layer
            rect { x: "60", y: "160", width: "240", height: "60", rx: "16", fill: "#ffd1dc" }
            rect { x: "60", y: "150", width: "240", height: "22", rx: "12", fill: "#ffb6c1" }

            // middle layer
            rect { x: "85", y: "120", width: "190", height: "50", rx: "14", fill: "#ffe6f0" }
            rect { x: "85", y: "112", width: "190", height: "18", rx: "10", fill: "#ffc0cb" }

            // top layer
            rect { x: "{TOP_X}", y: "{TOP_Y}", width: "{TOP_W}", height: "40", rx: "12", fill: "#fff0f5" }
            rect { x: "{TOP_X}", y: "{TOP_Y - 6.0}", width: "{TOP_W}", height: "14", rx: "8", fill: "#ffccda" }

            // icing drips
            path {
                d: "M120 98 C 135 120, 145 110, 160 98 C 170 120, 190 120, 200 98 C 210 120, 230 115, 240 98",
                fill: "#ffccda",
            }

            // candles
            for (i, cx) in candle_centers.iter().enumerate() {
                g {
                    key: "{i}",
                    transform: "translate({cx - CANDLE_W / 2.0}, {BASE_Y})",
                    rect { x: "0", y: "0", width: "{CANDLE_W}", height: "28", rx: "3", fill: "#8ecae6" }
                    rect { x: "2", y: "-3", width: "4", height: "6", rx: "2", fill: "#ff9f1c" }
                    path {
                        class: "candle-flame",
                        style: "animation-duration: {0.9 + (i % 3) as f64 * 0.2}s;",
                        d: "M4 -8 C 0 -4, 2 -1, 4 0 C 6 -1, 8 -4, 4 -8 Z",
                        fill: "#ffd700",
                    }
                }
            }

            // sprinkles
            for (i, s) in sprinkles.iter().enumerate() {
                rect {
                    key: "{i}",
                    x: "{s.x}",
                    y: "{s.y}",
                    width: "3",
                    height: "8",
                    rx: "1",
                    fill: "{s.color}",
                    opacity: "0.85",
                    transform: "rotate({s.rotation}, {s.x}, {s.y})",
                }
            }
        }
    }
}
