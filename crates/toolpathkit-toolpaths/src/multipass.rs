//! Multiple pass depth control shared by every strategy.
//!
//! Splits a target depth into cutting passes no deeper than the configured
//! depth per pass, and emits those passes with chip-clearing retracts.

use crate::error::{ConfigurationError, ToolpathResult};
use toolpathkit_core::{GcodePath, PartialPoint, Segment, SegmentResult};
use toolpathkit_settings::Settings;

/// Z of the material surface. Touch-off passes and retracts target it.
pub const SURFACE_Z: f64 = 0.0;

/// A pass closer than this fraction of the depth per pass to the target
/// depth is snapped onto it.
const DEPTH_EPSILON: f64 = 1e-9;

/// Upper bound on cutting passes for a single cut.
pub const MAX_PASSES: u32 = 100_000;

/// Depth stepping for a cut from the surface down to a target depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthStepper {
    target_depth: f64,
    depth_per_pass: f64,
}

impl DepthStepper {
    /// Creates a stepper. Both values are positive magnitudes; the final
    /// pass ends at `-target_depth`.
    pub fn new(target_depth: f64, depth_per_pass: f64) -> ToolpathResult<Self> {
        if !depth_per_pass.is_finite() || depth_per_pass <= 0.0 {
            return Err(ConfigurationError::InvalidDepthPerPass(depth_per_pass).into());
        }
        if !target_depth.is_finite() || target_depth <= 0.0 {
            return Err(ConfigurationError::InvalidTargetDepth(target_depth).into());
        }
        let passes = (target_depth / depth_per_pass).ceil();
        if passes > f64::from(MAX_PASSES) {
            return Err(ConfigurationError::TooManyPasses {
                target_depth,
                depth_per_pass,
                max: MAX_PASSES,
            }
            .into());
        }
        Ok(Self {
            target_depth,
            depth_per_pass,
        })
    }

    pub fn target_depth(&self) -> f64 {
        self.target_depth
    }

    pub fn depth_per_pass(&self) -> f64 {
        self.depth_per_pass
    }

    /// Z values of every cutting pass, starting with the touch-off pass at
    /// the surface and ending exactly at `-target_depth`.
    ///
    /// Depths are `k * depth_per_pass` rather than a running sum so long
    /// sequences do not drift.
    pub fn pass_depths(&self) -> Vec<f64> {
        let mut depths = vec![SURFACE_Z];
        let mut pass = 1u32;
        loop {
            let depth = (f64::from(pass) * self.depth_per_pass).min(self.target_depth);
            if self.target_depth - depth <= DEPTH_EPSILON * self.depth_per_pass {
                depths.push(-self.target_depth);
                return depths;
            }
            depths.push(-depth);
            pass += 1;
        }
    }

    /// Number of cutting passes, touch-off included.
    pub fn calculate_passes(&self) -> usize {
        self.pass_depths().len()
    }

    /// Appends the cutting passes to `path`.
    ///
    /// The touch-off pass is followed directly by the first real pass.
    /// Every later pass is followed by a retract to the surface, so the
    /// last pass always ends with one.
    pub fn append_passes(&self, path: &mut GcodePath) -> SegmentResult<()> {
        append_depth_passes(path, &self.pass_depths())
    }
}

/// Emits `depths` as plunges, retracting to the surface after each pass
/// except the touch-off pass.
pub fn append_depth_passes(path: &mut GcodePath, depths: &[f64]) -> SegmentResult<()> {
    for (index, &z) in depths.iter().enumerate() {
        path.push(Segment::plunge(z)?);
        if index > 0 {
            path.push(Segment::rapid(PartialPoint::z_only(SURFACE_Z))?);
        }
    }
    Ok(())
}

/// Emits a Z-only transit to the safe height.
pub fn append_safe_height(path: &mut GcodePath, settings: &Settings) -> SegmentResult<()> {
    path.push(Segment::rapid(PartialPoint::z_only(settings.safe_height))?);
    Ok(())
}
