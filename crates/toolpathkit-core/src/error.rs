//! Error types for the core crate.
//!
//! A [`SegmentError`] means a segment was built in violation of the motion
//! model's point/type rules. These are engine defects rather than user input
//! problems, so each variant names the rule that was broken.

use crate::segment::SegmentType;
use thiserror::Error;

/// Segment construction rule violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SegmentError {
    /// A seam segment was given a point.
    #[error("{0} segments must not carry a point")]
    PointOnSeam(SegmentType),

    /// A motion segment was built without a point.
    #[error("{0} segments require a point")]
    MissingPoint(SegmentType),

    /// A motion segment point had every axis absent.
    #[error("{0} segment point must have at least one axis present")]
    NoAxisPresent(SegmentType),

    /// A motion segment was given spindle state.
    #[error("{0} segments must not carry a spindle speed")]
    SpindleOnMotion(SegmentType),

    /// An axis value was NaN or infinite.
    #[error("Axis {axis} of {segment_type} segment is not finite: {value}")]
    NonFiniteAxis {
        segment_type: SegmentType,
        axis: char,
        value: f64,
    },

    /// A spindle speed was negative, NaN or infinite.
    #[error("Invalid spindle speed: {0}")]
    InvalidSpindleSpeed(f64),
}

/// Result type alias for segment construction.
pub type SegmentResult<T> = Result<T, SegmentError>;
