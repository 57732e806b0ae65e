//! Page components for Keepsake.

mod birthday;
mod landing;
mod memories;

pub use birthday::Birthday;
pub use landing::Landing;
pub use memories::Memories;
