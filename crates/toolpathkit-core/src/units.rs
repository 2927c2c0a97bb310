//! Unit conversion utilities
//!
//! Handles conversion between Metric (mm) and Imperial (inch) systems.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MM_PER_INCH: f64 = 25.4;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl MeasurementSystem {
    /// Unit suffix used when displaying lengths.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Metric => "mm",
            Self::Imperial => "in",
        }
    }

    /// Converts a length expressed in this system to millimeters.
    pub fn to_mm(&self, value: f64) -> f64 {
        match self {
            Self::Metric => value,
            Self::Imperial => value * MM_PER_INCH,
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Format length value for display
///
/// * `value` - Value expressed in `system` units
/// * `system` - Measurement system of the value
pub fn format_length(value: f64, system: MeasurementSystem) -> String {
    format!("{:.3} {}", value, system.suffix())
}

/// Format length value for display, adding the millimeter equivalent for
/// imperial values
pub fn format_length_with_metric(value: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format_length(value, system),
        MeasurementSystem::Imperial => format!(
            "{} ({})",
            format_length(value, system),
            format_length(system.to_mm(value), MeasurementSystem::Metric)
        ),
    }
}
