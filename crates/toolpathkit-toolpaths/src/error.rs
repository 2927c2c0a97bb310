//! Error types for the toolpaths crate.
//!
//! Every error here is raised before the first segment is emitted, so a
//! failed generation never yields a partial path.

use thiserror::Error;
use toolpathkit_core::SegmentError;
use toolpathkit_settings::SettingsError;

/// Errors that can occur while generating a toolpath.
#[derive(Error, Debug)]
pub enum ToolpathError {
    /// The request, shape or settings cannot produce a toolpath.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The machining settings failed validation.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// A segment broke the motion model rules. This is an engine defect.
    #[error("Segment invariant violated: {0}")]
    Segment(#[from] SegmentError),
}

impl ToolpathError {
    /// Returns true if fixing the inputs would make the request succeed.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Settings(_))
    }
}

/// Errors caused by the inputs of a generation request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// Target depth is zero, negative or not finite.
    #[error("Target depth must be > 0, got {0}")]
    InvalidTargetDepth(f64),

    /// Depth per pass is zero, negative or not finite.
    #[error("Depth per pass must be > 0, got {0}")]
    InvalidDepthPerPass(f64),

    /// Depth per pass is too small for the target depth.
    #[error("Target depth {target_depth} at {depth_per_pass} per pass needs more than {max} passes")]
    TooManyPasses {
        target_depth: f64,
        depth_per_pass: f64,
        max: u32,
    },

    /// The shape has no usable center point.
    #[error("Shape center cannot be resolved: {0}")]
    UnresolvableCenter(String),

    /// The shape spindle speed is negative or not finite.
    #[error("Invalid shape spindle speed: {0}")]
    InvalidSpindleSpeed(f64),
}

/// Result type alias for toolpath generation.
pub type ToolpathResult<T> = Result<T, ToolpathError>;
