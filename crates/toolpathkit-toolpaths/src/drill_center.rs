//! Drill-center strategy.
//!
//! Drills a single hole at the center of a shape's bounding box:
//!
//! 1. Rapid to safe height (Z only)
//! 2. Rapid to the center (XY only)
//! 3. Rapid to safe height again (Z only) so every new XY has an explicit Z
//! 4. Spindle on, when the shape sets a spindle speed
//! 5. Depth passes with chip-clearing retracts to the surface
//! 6. Rapid to safe height (Z only)

use crate::cuttable::Cuttable;
use crate::error::ToolpathResult;
use crate::multipass::{append_depth_passes, append_safe_height, DepthStepper};
use crate::request::{ToolpathRequest, ToolpathStrategy};
use crate::spindle::{append_spindle_on, spindle_on_speed};
use toolpathkit_core::{GcodePath, PartialPoint, Segment};
use toolpathkit_settings::Settings;
use tracing::debug;

/// The drill-center strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrillCenter;

impl ToolpathStrategy for DrillCenter {
    fn name(&self) -> &'static str {
        "Drill Center"
    }

    fn generate(&self, request: &ToolpathRequest<'_>) -> ToolpathResult<GcodePath> {
        drill_center(request)
    }
}

/// Generates a drill-center toolpath.
///
/// All inputs are validated before the first segment is emitted, so an
/// error never comes with a partial path.
pub fn drill_center(request: &ToolpathRequest<'_>) -> ToolpathResult<GcodePath> {
    let settings = request.settings();
    let shape = request.shape();

    let stepper = DepthStepper::new(request.target_depth(), settings.depth_per_pass)?;
    settings.validate()?;
    let center = shape.center()?;
    let spindle_speed = spindle_on_speed(shape.spindle_speed(), settings)?;
    let depths = stepper.pass_depths();

    debug!(
        "Generating drill center toolpath at ({:.3}, {:.3}), depth {} in {} passes",
        center.x,
        center.y,
        stepper.target_depth(),
        depths.len()
    );

    let mut path = GcodePath::new();
    append_safe_height(&mut path, settings)?;
    path.push(Segment::rapid(PartialPoint::xy(center.x, center.y))?);
    append_safe_height(&mut path, settings)?;
    append_spindle_on(&mut path, spindle_speed)?;
    append_depth_passes(&mut path, &depths)?;
    append_safe_height(&mut path, settings)?;

    debug!("Drill center toolpath has {} segments", path.len());
    Ok(path)
}

/// Drill-center generator bound to one settings/shape pair.
pub struct DrillCenterToolpath<'a> {
    settings: &'a Settings,
    shape: &'a dyn Cuttable,
}

impl<'a> DrillCenterToolpath<'a> {
    /// Creates a new generator.
    pub fn new(settings: &'a Settings, shape: &'a dyn Cuttable) -> Self {
        Self { settings, shape }
    }

    /// Generates the toolpath down to `target_depth`.
    pub fn generate_to(&self, target_depth: f64) -> ToolpathResult<GcodePath> {
        drill_center(&ToolpathRequest::new(self.shape, self.settings, target_depth))
    }
}
