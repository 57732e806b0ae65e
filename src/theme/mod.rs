//! Theme for Keepsake: lavender-birthday palette and global styles.

mod colors;
mod styles;

#[allow(unused_imports)]
pub use colors::*;
pub use styles::GLOBAL_STYLES;
