//! Color constants for the lavender birthday palette.

#![allow(dead_code)]

// === PASTELS (Backgrounds, Decor) ===
pub const LAVENDER: &str = "#E6E6FA";
pub const BLUSH: &str = "#FFB3D9";
pub const PEACH: &str = "#FFDAB9";
pub const PERIWINKLE: &str = "#CCCCFF";
pub const OFF_WHITE: &str = "#FAF9F6";

// === ACCENTS (Buttons, Highlights) ===
pub const CORAL: &str = "#FF6B9D";
pub const GOLD: &str = "#FFD700";
pub const DEEP_PURPLE: &str = "#663399";

// === TEXT ===
pub const CHARCOAL: &str = "#36454F";
pub const SLATE: &str = "#708090";

// === DARK MODE ===
pub const NIGHT: &str = "#141022";
pub const NIGHT_PANEL: &str = "#1f1833";
