//! Ordered motion sequences.

use crate::error::SegmentResult;
use crate::point::PartialPoint;
use crate::segment::{Segment, SegmentType};
use serde::{Deserialize, Serialize};

/// An append-only, ordered list of segments.
///
/// Insertion order is execution order. Segments are never reordered or
/// merged once added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GcodePath {
    segments: Vec<Segment>,
}

impl GcodePath {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a segment built from its parts.
    pub fn add_segment(
        &mut self,
        segment_type: SegmentType,
        point: Option<PartialPoint>,
        spindle_speed: Option<f64>,
    ) -> SegmentResult<()> {
        let segment = Segment::new(segment_type, point, spindle_speed)?;
        self.segments.push(segment);
        Ok(())
    }

    /// Appends an already validated segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn first(&self) -> Option<&Segment> {
        self.segments.first()
    }

    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Consumes the path, returning its segments in execution order.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Number of segments of the given type.
    pub fn count_of(&self, segment_type: SegmentType) -> usize {
        self.segments
            .iter()
            .filter(|s| s.segment_type() == segment_type)
            .count()
    }
}

impl IntoIterator for GcodePath {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a GcodePath {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
