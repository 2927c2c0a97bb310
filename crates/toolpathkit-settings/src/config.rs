//! Machining settings for toolpath generation
//!
//! Settings are owned by the caller and read, never mutated, by the
//! toolpath strategies. They can be stored as JSON or TOML.

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

pub use toolpathkit_core::units::MeasurementSystem;

/// Spindle speeds on shapes are a percentage of the machine maximum.
const FULL_SPINDLE_PERCENT: f64 = 100.0;

/// Global machining settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Z clearance above the material used for all non-cutting transits
    pub safe_height: f64,
    /// Maximum Z distance a single cutting pass may descend (> 0)
    pub depth_per_pass: f64,
    /// Machine spindle speed ceiling (RPM)
    pub max_spindle_speed: f64,
    /// Measurement system the lengths above are expressed in
    pub units: MeasurementSystem,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            safe_height: 5.0,
            depth_per_pass: 1.0,
            max_spindle_speed: 10000.0,
            units: MeasurementSystem::Metric,
        }
    }
}

impl Settings {
    /// Create settings with the given heights and spindle ceiling
    pub fn new(safe_height: f64, depth_per_pass: f64, max_spindle_speed: f64) -> Self {
        Self {
            safe_height,
            depth_per_pass,
            max_spindle_speed,
            ..Default::default()
        }
    }

    /// Sets the measurement system.
    pub fn with_units(mut self, units: MeasurementSystem) -> Self {
        self.units = units;
        self
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        if !self.depth_per_pass.is_finite() || self.depth_per_pass <= 0.0 {
            return Err(SettingsError::invalid(
                "depth_per_pass",
                format!("must be > 0, got {}", self.depth_per_pass),
            ));
        }

        if !self.safe_height.is_finite() {
            return Err(SettingsError::invalid(
                "safe_height",
                format!("must be finite, got {}", self.safe_height),
            ));
        }

        if !self.max_spindle_speed.is_finite() || self.max_spindle_speed < 0.0 {
            return Err(SettingsError::invalid(
                "max_spindle_speed",
                format!("must be >= 0, got {}", self.max_spindle_speed),
            ));
        }

        Ok(())
    }

    /// Maps a shape spindle speed, given as a percentage of full speed, onto
    /// this machine's spindle range.
    ///
    /// The result is clamped to `0..=max_spindle_speed`.
    pub fn spindle_speed_for(&self, percent: f64) -> f64 {
        if percent > FULL_SPINDLE_PERCENT {
            warn!(
                "Spindle speed {}% exceeds full speed, clamping to {}",
                percent, self.max_spindle_speed
            );
        }
        let ratio = (percent / FULL_SPINDLE_PERCENT).clamp(0.0, 1.0);
        self.max_spindle_speed * ratio
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let settings: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        settings.validate()?;
        debug!("Loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
