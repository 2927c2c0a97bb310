//! # ToolpathKit Toolpaths
//!
//! Toolpath strategies that turn a shape plus machining settings into an
//! ordered [`GcodePath`](toolpathkit_core::GcodePath).
//!
//! ## Shared Behaviour
//!
//! - **Multipass**: depth pass stepping and chip-clearing retracts
//! - **Spindle**: spindle-on gating from per-shape spindle speeds
//!
//! ## Strategies
//!
//! - **Drill Center**: drills one hole at the center of a shape's bounding box
//!
//! ## Usage
//!
//! ```rust
//! use toolpathkit_settings::Settings;
//! use toolpathkit_toolpaths::{drill_center, Rectangle, ToolpathRequest};
//!
//! let settings = Settings::new(11.0, 5.0, 1000.0);
//! let hole = Rectangle::new(10.0, 10.0, 15.0, 15.0);
//! let request = ToolpathRequest::new(&hole, &settings, 10.0);
//!
//! let path = drill_center(&request).unwrap();
//! assert_eq!(path.len(), 9);
//! ```

pub mod cuttable;
pub mod drill_center;
pub mod error;
pub mod multipass;
pub mod request;
pub mod spindle;

pub use cuttable::{Cuttable, Ellipse, Point2D, Rectangle, Shape, Size};
pub use drill_center::{drill_center, DrillCenter, DrillCenterToolpath};
pub use error::{ConfigurationError, ToolpathError, ToolpathResult};
pub use multipass::{DepthStepper, SURFACE_Z};
pub use request::{ToolpathRequest, ToolpathStrategy};
pub use spindle::spindle_on_speed;
