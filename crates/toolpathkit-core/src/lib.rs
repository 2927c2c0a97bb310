//! # ToolpathKit Core
//!
//! Core motion types shared by every ToolpathKit crate.
//!
//! - **Points**: [`PartialPoint`] with independently optional X/Y/Z axes
//! - **Segments**: [`Segment`] and the closed [`SegmentType`] set
//! - **Motion sequences**: [`GcodePath`], the append-only ordered output of a
//!   toolpath strategy
//! - **Units**: [`MeasurementSystem`] and length conversions

pub mod error;
pub mod path;
pub mod point;
pub mod segment;
pub mod units;

pub use error::{SegmentError, SegmentResult};
pub use path::GcodePath;
pub use point::PartialPoint;
pub use segment::{Segment, SegmentType};
pub use units::MeasurementSystem;
