//! Theme preference with file-backed persistence.

use reelsmith_error::{TuiError, TuiErrorKind, TuiResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Color theme for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light terminal background
    Light,
    /// Dark terminal background
    #[default]
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Persisted user preferences.
///
/// The theme is explicit application state rather than an ambient global:
/// it is initialized once from the preference file (or the dark default)
/// and mutated only through [`App::toggle_theme`](crate::App::toggle_theme),
/// which persists in the same step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Selected color theme
    #[serde(default)]
    pub theme: Theme,
}

impl Preferences {
    /// Default path of the preference file under the user config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("reelsmith").join("preferences.toml"))
    }

    /// Load preferences from `path`, falling back to defaults if the file
    /// is absent or unreadable.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Write preferences to `path`, creating parent directories as needed.
    pub fn store(&self, path: &Path) -> TuiResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TuiError::new(TuiErrorKind::Preference(format!(
                    "Failed to create preference directory: {e}"
                )))
            })?;
        }
        let content = toml::to_string(self).map_err(|e| {
            TuiError::new(TuiErrorKind::Preference(format!(
                "Failed to serialize preferences: {e}"
            )))
        })?;
        std::fs::write(path, content).map_err(|e| {
            TuiError::new(TuiErrorKind::Preference(format!(
                "Failed to write preference file: {e}"
            )))
        })?;
        debug!(path = %path.display(), "Stored preferences");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggles_both_ways() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn missing_preference_file_falls_back_to_dark() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(&dir.path().join("nope.toml"));
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn preferences_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");

        let prefs = Preferences {
            theme: Theme::Light,
        };
        prefs.store(&path).unwrap();

        assert_eq!(Preferences::load(&path), prefs);
    }

    #[test]
    fn garbage_preference_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        assert_eq!(Preferences::load(&path), Preferences::default());
    }
}
