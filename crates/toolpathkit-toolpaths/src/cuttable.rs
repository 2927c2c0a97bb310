//! Shapes that toolpath strategies can cut.
//!
//! Strategies only see a shape through [`Cuttable`]: the origin and extent
//! of its bounding box plus an optional spindle speed.

use crate::error::{ConfigurationError, ToolpathResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Bounding box extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Read-only view of a shape used by toolpath strategies.
pub trait Cuttable {
    /// Origin (minimum corner) of the bounding box.
    fn position(&self) -> Point2D;

    /// Extent of the bounding box.
    fn size(&self) -> Size;

    /// Spindle speed as a percentage of the machine maximum.
    /// `None` or zero means the toolpath does not control the spindle.
    fn spindle_speed(&self) -> Option<f64>;

    /// Geometric midpoint of the bounding box.
    ///
    /// Zero extents are accepted and resolve to the position itself.
    fn center(&self) -> ToolpathResult<Point2D> {
        let position = self.position();
        let size = self.size();

        if !position.is_finite() {
            return Err(ConfigurationError::UnresolvableCenter(format!(
                "position ({}, {}) is not finite",
                position.x, position.y
            ))
            .into());
        }
        if !(size.width.is_finite() && size.height.is_finite())
            || size.width < 0.0
            || size.height < 0.0
        {
            return Err(ConfigurationError::UnresolvableCenter(format!(
                "size {} x {} must be finite and non-negative",
                size.width, size.height
            ))
            .into());
        }

        Ok(Point2D::new(
            position.x + size.width / 2.0,
            position.y + size.height / 2.0,
        ))
    }
}

/// An axis-aligned rectangle given by its minimum corner and size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub position: Point2D,
    pub size: Size,
    #[serde(default)]
    pub spindle_speed: Option<f64>,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: Point2D::new(x, y),
            size: Size::new(width, height),
            spindle_speed: None,
        }
    }

    /// Sets the spindle speed percentage.
    pub fn with_spindle_speed(mut self, speed: f64) -> Self {
        self.spindle_speed = Some(speed);
        self
    }
}

impl Cuttable for Rectangle {
    fn position(&self) -> Point2D {
        self.position
    }

    fn size(&self) -> Size {
        self.size
    }

    fn spindle_speed(&self) -> Option<f64> {
        self.spindle_speed
    }
}

/// An axis-aligned ellipse given by its center and radii.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point2D,
    pub radius_x: f64,
    pub radius_y: f64,
    #[serde(default)]
    pub spindle_speed: Option<f64>,
}

impl Ellipse {
    pub fn new(cx: f64, cy: f64, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center: Point2D::new(cx, cy),
            radius_x,
            radius_y,
            spindle_speed: None,
        }
    }

    /// Creates a circle.
    pub fn circle(cx: f64, cy: f64, radius: f64) -> Self {
        Self::new(cx, cy, radius, radius)
    }

    /// Sets the spindle speed percentage.
    pub fn with_spindle_speed(mut self, speed: f64) -> Self {
        self.spindle_speed = Some(speed);
        self
    }
}

impl Cuttable for Ellipse {
    fn position(&self) -> Point2D {
        Point2D::new(self.center.x - self.radius_x, self.center.y - self.radius_y)
    }

    fn size(&self) -> Size {
        Size::new(self.radius_x * 2.0, self.radius_y * 2.0)
    }

    fn spindle_speed(&self) -> Option<f64> {
        self.spindle_speed
    }
}

/// Any supported shape, as stored in job files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
}

impl Shape {
    /// Returns the name of the shape kind.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Rectangle(_) => "Rectangle",
            Shape::Ellipse(_) => "Ellipse",
        }
    }

    fn as_cuttable(&self) -> &dyn Cuttable {
        match self {
            Shape::Rectangle(rect) => rect,
            Shape::Ellipse(ellipse) => ellipse,
        }
    }
}

impl Cuttable for Shape {
    fn position(&self) -> Point2D {
        self.as_cuttable().position()
    }

    fn size(&self) -> Size {
        self.as_cuttable().size()
    }

    fn spindle_speed(&self) -> Option<f64> {
        self.as_cuttable().spindle_speed()
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Ellipse> for Shape {
    fn from(ellipse: Ellipse) -> Self {
        Shape::Ellipse(ellipse)
    }
}
