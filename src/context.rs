//! App context for Keepsake.
//!
//! Provides the startup configuration, the loaded photo groups, and the
//! theme preference to all components via use_context.

use std::path::PathBuf;

use chrono::NaiveDate;
use dioxus::prelude::*;
use keepsake_core::{ThemePreference, YearGroup};

/// The fixed set of timeline years.
pub const TIMELINE_YEARS: [i32; 7] = [2019, 2020, 2021, 2022, 2023, 2024, 2025];

/// Startup configuration resolved from the command line.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Root of the per-year photo folders
    pub media_dir: PathBuf,
    /// Directory for the persisted theme preference
    pub data_dir: PathBuf,
    pub friend_name: String,
    pub sender_name: String,
    pub birthdate: NaiveDate,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            media_dir: PathBuf::from("memories"),
            data_dir: PathBuf::from(".keepsake"),
            friend_name: "Meryem".to_string(),
            sender_name: "Your Friend".to_string(),
            birthdate: NaiveDate::from_ymd_opt(2003, 11, 12)
                .expect("valid default birthdate"),
        }
    }
}

/// Get the app configuration set from command line args.
pub fn get_config() -> AppConfig {
    crate::get_config()
}

/// Hook to access the loaded photo groups.
///
/// Empty until the startup media scan finishes; pair with
/// [`use_memories_ready`] to distinguish "still loading" from "no photos".
pub fn use_memories() -> Signal<Vec<YearGroup>> {
    use_context::<Signal<Vec<YearGroup>>>()
}

/// Hook to check whether the media scan has completed.
pub fn use_memories_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Hook to access the theme preference.
///
/// Mutating the signal re-renders the themed root; persisting the change is
/// the toggle control's job.
pub fn use_theme_preference() -> Signal<ThemePreference> {
    use_context::<Signal<ThemePreference>>()
}
