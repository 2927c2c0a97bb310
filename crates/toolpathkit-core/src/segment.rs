//! Toolpath segment types and data structures.

use crate::error::{SegmentError, SegmentResult};
use crate::point::PartialPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Types of toolpath segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SegmentType {
    /// Non-cutting rapid transit.
    Move,
    /// Cutting plunge at the current XY, conventionally Z only.
    Point,
    /// Cutting linear feed move.
    Line,
    /// State change marker such as spindle on. Never carries a point.
    Seam,
}

impl SegmentType {
    /// Returns the name of the segment type.
    pub fn name(&self) -> &'static str {
        match self {
            SegmentType::Move => "MOVE",
            SegmentType::Point => "POINT",
            SegmentType::Line => "LINE",
            SegmentType::Seam => "SEAM",
        }
    }

    /// Motion segments must carry a point.
    pub fn is_motion(&self) -> bool {
        !matches!(self, SegmentType::Seam)
    }

    /// Returns true for segments that remove material.
    pub fn is_cutting(&self) -> bool {
        matches!(self, SegmentType::Point | SegmentType::Line)
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single motion or state-change instruction.
///
/// Fields are private so every segment in a [`GcodePath`](crate::GcodePath)
/// has passed [`Segment::new`] validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSegment")]
pub struct Segment {
    #[serde(rename = "type")]
    segment_type: SegmentType,
    point: Option<PartialPoint>,
    spindle_speed: Option<f64>,
}

impl Segment {
    /// Creates a new segment, checking the point/type rules.
    pub fn new(
        segment_type: SegmentType,
        point: Option<PartialPoint>,
        spindle_speed: Option<f64>,
    ) -> SegmentResult<Self> {
        if segment_type.is_motion() {
            let point = point.ok_or(SegmentError::MissingPoint(segment_type))?;
            if !point.has_any_axis() {
                return Err(SegmentError::NoAxisPresent(segment_type));
            }
            if let Some((axis, value)) = point.axes().find(|(_, v)| !v.is_finite()) {
                return Err(SegmentError::NonFiniteAxis {
                    segment_type,
                    axis,
                    value,
                });
            }
            if spindle_speed.is_some() {
                return Err(SegmentError::SpindleOnMotion(segment_type));
            }
        } else {
            if point.is_some() {
                return Err(SegmentError::PointOnSeam(segment_type));
            }
            if let Some(speed) = spindle_speed {
                if !speed.is_finite() || speed < 0.0 {
                    return Err(SegmentError::InvalidSpindleSpeed(speed));
                }
            }
        }

        Ok(Self {
            segment_type,
            point,
            spindle_speed,
        })
    }

    /// Creates a rapid transit to the given point.
    pub fn rapid(point: PartialPoint) -> SegmentResult<Self> {
        Self::new(SegmentType::Move, Some(point), None)
    }

    /// Creates a plunge to the given Z at the current XY position.
    pub fn plunge(z: f64) -> SegmentResult<Self> {
        Self::new(SegmentType::Point, Some(PartialPoint::z_only(z)), None)
    }

    /// Creates a spindle-on marker.
    pub fn spindle_on(speed: f64) -> SegmentResult<Self> {
        Self::new(SegmentType::Seam, None, Some(speed))
    }

    pub fn segment_type(&self) -> SegmentType {
        self.segment_type
    }

    pub fn point(&self) -> Option<&PartialPoint> {
        self.point.as_ref()
    }

    pub fn spindle_speed(&self) -> Option<f64> {
        self.spindle_speed
    }

    /// Z target of this segment, if it has one.
    pub fn z(&self) -> Option<f64> {
        self.point.and_then(|p| p.z)
    }
}

/// Unchecked wire form, validated through [`Segment::new`] on deserialize.
#[derive(Deserialize)]
struct RawSegment {
    #[serde(rename = "type")]
    segment_type: SegmentType,
    #[serde(default)]
    point: Option<PartialPoint>,
    #[serde(default)]
    spindle_speed: Option<f64>,
}

impl TryFrom<RawSegment> for Segment {
    type Error = SegmentError;

    fn try_from(raw: RawSegment) -> SegmentResult<Self> {
        Segment::new(raw.segment_type, raw.point, raw.spindle_speed)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segment_type)?;
        if let Some(point) = &self.point {
            write!(f, " {}", point)?;
        }
        if let Some(speed) = self.spindle_speed {
            write!(f, " S{:.0}", speed)?;
        }
        Ok(())
    }
}
