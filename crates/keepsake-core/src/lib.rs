//! Keepsake Core Library
//!
//! State and logic behind a single-occasion animated birthday site: the
//! countdown to a recurring annual date, the per-year photo memory timeline
//! with its shuffled display order and lightbox, and the small collaborators
//! around them (media scan, theme preference, certificate, share links).
//!
//! Everything here is pure or filesystem-local; the Dioxus desktop app in
//! the workspace root owns all rendering and event wiring.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use keepsake_core::{AnnualDate, CountdownSnapshot};
//!
//! let birthday = AnnualDate::new(11, 12).unwrap();
//! let now = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let snap = CountdownSnapshot::at(birthday, now);
//! assert!(snap.to_next.days < 366);
//! assert!((snap.remaining_fraction + snap.elapsed_fraction - 1.0).abs() < 1e-12);
//! ```

pub mod certificate;
pub mod countdown;
pub mod error;
pub mod lightbox;
pub mod media;
pub mod share;
pub mod theme;
pub mod timeline;

// Re-exports
pub use certificate::{compute_age, Certificate};
pub use countdown::{AnnualDate, Breakdown, CountdownSnapshot};
pub use error::KeepsakeError;
pub use lightbox::LightboxState;
pub use media::{caption_from_filename, scan_years};
pub use share::{share_message, webshare_available, ShareTarget};
pub use theme::{Theme, ThemePreference, ThemeStore};
pub use timeline::{
    shuffled_order, Photo, TimelineState, YearGroup, GRID_COUNT, MAX_PHOTOS_PER_YEAR,
    PREVIEW_COUNT,
};
