//! Engine settings, optionally loaded from a TOML file.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! [`EngineSettings::default`]. Example:
//!
//! ```toml
//! max_rejection_attempts = 80
//! vertical_threshold = 10
//! teaching_min_view_secs = 30
//! ```

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::curriculum_engine::error::EngineError;

/// Environment variable holding the path of the settings file.
pub const CONFIG_PATH_ENV: &str = "MATH_DRILL_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Cap on draws in any rejection-sampling loop.
    pub max_rejection_attempts: u32,
    /// Arithmetic problems with every operand below this render horizontally.
    pub vertical_threshold: i64,
    pub micro_hint_secs: u32,
    pub visual_hint_secs: u32,
    pub teaching_hint_secs: u32,
    /// Minimum time on the teaching hint before it can be skipped.
    pub teaching_min_view_secs: u32,
    /// Problems per assembled set when the request leaves `count` empty.
    pub default_set_size: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            max_rejection_attempts: 50,
            vertical_threshold: 20,
            micro_hint_secs: 5,
            visual_hint_secs: 15,
            teaching_hint_secs: 45,
            teaching_min_view_secs: 20,
            default_set_size: 10,
        }
    }
}

impl EngineSettings {
    pub fn from_toml_str(raw: &str) -> Result<Self, EngineError> {
        let settings: EngineSettings =
            toml::from_str(raw).map_err(|e| EngineError::Config(e.to_string()))?;
        if settings.teaching_min_view_secs > settings.teaching_hint_secs {
            return Err(EngineError::Config(format!(
                "teaching_min_view_secs ({}) exceeds teaching_hint_secs ({})",
                settings.teaching_min_view_secs, settings.teaching_hint_secs
            )));
        }
        Ok(settings)
    }
}

/// Load settings from the file named by `MATH_DRILL_CONFIG`.
///
/// Falls back to defaults when the variable is unset or the file cannot be
/// read or parsed; failures are logged, never returned.
pub fn load_settings_from_env() -> EngineSettings {
    let Ok(path) = std::env::var(CONFIG_PATH_ENV) else {
        return EngineSettings::default();
    };
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            error!(%path, error = %e, "could not read engine settings, using defaults");
            return EngineSettings::default();
        }
    };
    match EngineSettings::from_toml_str(&raw) {
        Ok(settings) => {
            info!(%path, "loaded engine settings");
            settings
        }
        Err(e) => {
            error!(%path, error = %e, "invalid engine settings, using defaults");
            EngineSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(EngineSettings::from_toml_str("").unwrap(), EngineSettings::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let s = EngineSettings::from_toml_str("max_rejection_attempts = 80\nvertical_threshold = 10").unwrap();
        assert_eq!(s.max_rejection_attempts, 80);
        assert_eq!(s.vertical_threshold, 10);
        assert_eq!(s.micro_hint_secs, 5);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(EngineSettings::from_toml_str("max_rejection_attempts = \"lots\"").is_err());
        assert!(EngineSettings::from_toml_str("teaching_min_view_secs = 90").is_err());
    }
}
