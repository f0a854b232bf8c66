//! TOML-based application settings.
//!
//! Settings are merged from three sources, later sources taking precedence:
//! 1. Bundled defaults (reelsmith.toml shipped with the workspace)
//! 2. User config in the home config directory
//!    (~/.config/reelsmith/reelsmith.toml)
//! 3. ./reelsmith.toml in the current directory

use config::{Config, File, FileFormat};
use reelsmith_error::{ConfigError, ReelsmithResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Model-name settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelSettings {
    /// Text model used for script and fact generation
    pub text: String,
    /// Image model used for scene visuals
    pub image: String,
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Model-name settings
    pub models: ModelSettings,
}

impl Settings {
    /// Load settings with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> ReelsmithResult<Self> {
        debug!("Loading settings with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_SETTINGS: &str = include_str!("../../../reelsmith.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let home_config = config_dir.join("reelsmith").join("reelsmith.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("reelsmith").required(false));

        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build settings: {e}")))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {e}")).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let settings = Settings::load().unwrap();
        assert!(settings.models.text.starts_with("gemini"));
        assert!(settings.models.image.starts_with("imagen"));
    }
}
