//! Generation requests and the strategy seam.

use crate::cuttable::Cuttable;
use crate::error::ToolpathResult;
use toolpathkit_core::GcodePath;
use toolpathkit_settings::Settings;

/// Everything a strategy needs for one generation, passed as a single value.
#[derive(Clone, Copy)]
pub struct ToolpathRequest<'a> {
    shape: &'a dyn Cuttable,
    settings: &'a Settings,
    target_depth: f64,
}

impl<'a> ToolpathRequest<'a> {
    /// Creates a request. `target_depth` is a positive magnitude below the
    /// material surface.
    pub fn new(shape: &'a dyn Cuttable, settings: &'a Settings, target_depth: f64) -> Self {
        Self {
            shape,
            settings,
            target_depth,
        }
    }

    pub fn shape(&self) -> &'a dyn Cuttable {
        self.shape
    }

    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    pub fn target_depth(&self) -> f64 {
        self.target_depth
    }
}

impl std::fmt::Debug for ToolpathRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolpathRequest")
            .field("position", &self.shape.position())
            .field("size", &self.shape.size())
            .field("spindle_speed", &self.shape.spindle_speed())
            .field("settings", self.settings)
            .field("target_depth", &self.target_depth)
            .finish()
    }
}

/// A toolpath strategy.
///
/// Strategies share behaviour by calling the `multipass` and `spindle`
/// helpers rather than by extending a common base.
pub trait ToolpathStrategy {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Generates the complete motion sequence for the request.
    fn generate(&self, request: &ToolpathRequest<'_>) -> ToolpathResult<GcodePath>;
}
