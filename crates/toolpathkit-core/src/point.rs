//! Motion target points with independently optional axes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A motion target where each axis may be left unspecified.
///
/// An absent axis means "keep the current value for this axis". It is never
/// the same thing as zero: `PartialPoint::z_only(0.0)` moves Z to the
/// material surface, while `PartialPoint::xy(..)` leaves Z untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialPoint {
    /// X-axis target (if Some, update this axis)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Y-axis target (if Some, update this axis)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Z-axis target (if Some, update this axis)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl PartialPoint {
    /// Create a new empty partial point (all axes None)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a partial point with only X axis set
    pub fn x_only(x: f64) -> Self {
        Self {
            x: Some(x),
            ..Default::default()
        }
    }

    /// Create a partial point with only Y axis set
    pub fn y_only(y: f64) -> Self {
        Self {
            y: Some(y),
            ..Default::default()
        }
    }

    /// Create a partial point with only Z axis set
    pub fn z_only(z: f64) -> Self {
        Self {
            z: Some(z),
            ..Default::default()
        }
    }

    /// Create a partial point with XY axes set
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    /// Create a partial point with XYZ axes set
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    pub fn has_x(&self) -> bool {
        self.x.is_some()
    }

    pub fn has_y(&self) -> bool {
        self.y.is_some()
    }

    pub fn has_z(&self) -> bool {
        self.z.is_some()
    }

    /// Returns true if at least one axis is specified.
    pub fn has_any_axis(&self) -> bool {
        self.has_x() || self.has_y() || self.has_z()
    }

    /// Iterates over the present axes as `(label, value)` pairs in X, Y, Z order.
    pub fn axes(&self) -> impl Iterator<Item = (char, f64)> {
        [('X', self.x), ('Y', self.y), ('Z', self.z)]
            .into_iter()
            .filter_map(|(axis, value)| value.map(|v| (axis, v)))
    }
}

impl fmt::Display for PartialPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (axis, value) in self.axes() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}{:.3}", axis, value)?;
            first = false;
        }
        if first {
            write!(f, "(no axes)")?;
        }
        Ok(())
    }
}
