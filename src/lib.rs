//! # ToolpathKit
//!
//! Turns a 2D shape plus machining settings into an ordered list of motion
//! segments ready for a G-code serializer.
//!
//! ## Architecture
//!
//! ToolpathKit is organized as a workspace with multiple crates:
//!
//! 1. **toolpathkit-core** - Partial points, segments and motion sequences
//! 2. **toolpathkit-settings** - Machining settings, validation, persistence
//! 3. **toolpathkit-toolpaths** - Shapes, depth stepping, spindle gating and
//!    the drill-center strategy
//! 4. **toolpathkit** - Job files, logging setup and the command line binary

pub mod job;

pub use job::Job;

pub use toolpathkit_core::units;
pub use toolpathkit_core::{
    GcodePath, MeasurementSystem, PartialPoint, Segment, SegmentError, SegmentType,
};
pub use toolpathkit_settings::{Settings, SettingsError};
pub use toolpathkit_toolpaths::{
    drill_center, ConfigurationError, Cuttable, DepthStepper, DrillCenter, DrillCenterToolpath,
    Ellipse, Point2D, Rectangle, Shape, Size, ToolpathError, ToolpathRequest, ToolpathStrategy,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr so stdout stays free for generated paths
/// - RUST_LOG environment variable support
/// - INFO as the default level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
