//! Spindle gating shared by every strategy.

use crate::error::{ConfigurationError, ToolpathResult};
use toolpathkit_core::{GcodePath, Segment, SegmentResult};
use toolpathkit_settings::Settings;

/// Resolves the spindle-on speed for a shape.
///
/// Returns `Ok(None)` when the shape does not control the spindle (speed
/// absent or zero). Otherwise the shape percentage is mapped onto the
/// machine range by [`Settings::spindle_speed_for`].
pub fn spindle_on_speed(
    shape_speed: Option<f64>,
    settings: &Settings,
) -> ToolpathResult<Option<f64>> {
    match shape_speed {
        None => Ok(None),
        Some(speed) if !speed.is_finite() || speed < 0.0 => {
            Err(ConfigurationError::InvalidSpindleSpeed(speed).into())
        }
        Some(speed) if speed == 0.0 => Ok(None),
        Some(speed) => Ok(Some(settings.spindle_speed_for(speed))),
    }
}

/// Emits a spindle-on seam when a speed was resolved.
pub fn append_spindle_on(path: &mut GcodePath, speed: Option<f64>) -> SegmentResult<()> {
    if let Some(speed) = speed {
        path.push(Segment::spindle_on(speed)?);
    }
    Ok(())
}
