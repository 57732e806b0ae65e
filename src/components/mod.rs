//! UI Components for Keepsake.
//!
//! Lavender birthday aesthetic components.

mod birthday_message;
mod cake;
mod countdown;
mod decor;
mod final_surprise;
mod lightbox;
mod memory_timeline;
mod photo_image;
mod theme_toggle;

pub use birthday_message::BirthdayMessage;
pub use cake::CakeSvg;
pub use countdown::Countdown;
pub use decor::{Balloons, SparkleOverlay, Stars};
pub use final_surprise::FinalSurprise;
pub use lightbox::Lightbox;
pub use memory_timeline::MemoryTimeline;
pub use theme_toggle::ThemeToggle;
