//! Persistent theme preference.
//!
//! One JSON file under the data directory, read once at startup and written
//! on toggle. An absent or unreadable file means "follow the system".

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::KeepsakeError;

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// What actually gets rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl ThemePreference {
    /// Resolve against the system preference.
    pub fn effective(self, system_dark: bool) -> Theme {
        match self {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::System => {
                if system_dark {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            }
        }
    }
}

#[derive(Serialize, Deserialize)]
struct StoredPreference {
    theme: ThemePreference,
}

/// File-backed preference store.
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("theme.json"),
        }
    }

    /// Read the stored preference. Absent or corrupt files fall back to
    /// [`ThemePreference::System`].
    pub fn load(&self) -> ThemePreference {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return ThemePreference::System;
        };
        match serde_json::from_str::<StoredPreference>(&raw) {
            Ok(stored) => stored.theme,
            Err(e) => {
                tracing::warn!("unreadable theme preference, using system: {}", e);
                ThemePreference::System
            }
        }
    }

    /// Persist the preference, creating the data directory if needed.
    pub fn save(&self, theme: ThemePreference) -> Result<(), KeepsakeError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&StoredPreference { theme })?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_follows_preference_then_system() {
        assert_eq!(ThemePreference::Light.effective(true), Theme::Light);
        assert_eq!(ThemePreference::Dark.effective(false), Theme::Dark);
        assert_eq!(ThemePreference::System.effective(true), Theme::Dark);
        assert_eq!(ThemePreference::System.effective(false), Theme::Light);
    }

    #[test]
    fn round_trips_through_the_store() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(tmp.path());
        assert_eq!(store.load(), ThemePreference::System);

        store.save(ThemePreference::Dark).unwrap();
        assert_eq!(store.load(), ThemePreference::Dark);

        store.save(ThemePreference::Light).unwrap();
        assert_eq!(store.load(), ThemePreference::Light);
    }

    #[test]
    fn corrupt_file_falls_back_to_system() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(tmp.path());
        std::fs::write(tmp.path().join("theme.json"), b"not json").unwrap();
        assert_eq!(store.load(), ThemePreference::System);
    }

    #[test]
    fn serializes_as_lowercase_strings() {
        let raw = serde_json::to_string(&StoredPreference {
            theme: ThemePreference::Dark,
        })
        .unwrap();
        assert_eq!(raw, r#"{"theme":"dark"}"#);
    }
}
