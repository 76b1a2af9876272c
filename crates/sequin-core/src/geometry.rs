//! Geometric primitives for diagram positioning.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`BoundingBox`] - An axis-aligned rectangle anchored at its top-left corner
//! - [`LineSegment`] - A straight segment between two points
//! - [`Insets`] - Padding values for four sides
//!
//! # Coordinate System
//!
//! Sequin uses the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! The origin is the top-left corner and Y grows downward, so "below" a
//! statement row means a larger `y`.

use serde::{Deserialize, Serialize};

/// A 2D point in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use sequin_core::geometry::Point;
/// let p = Point::new(10.0, 20.0).add_point(Point::new(5.0, 5.0));
/// assert_eq!(p.x(), 15.0);
/// assert_eq!(p.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Width and height of an element
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// An axis-aligned rectangle `(x, y, w, h)` with `(x, y)` at its top-left corner.
///
/// Bounding boxes are produced by the layout pass and read by the renderer.
/// They deserialize from `{ x = .., y = .., w = .., h = .. }`.
///
/// # Examples
///
/// ```
/// # use sequin_core::geometry::BoundingBox;
/// let statement = BoundingBox::new(0.0, 0.0, 100.0, 40.0);
/// let endpoint = BoundingBox::new(200.0, 0.0, 20.0, 40.0);
///
/// assert_eq!(endpoint.center_x(), 210.0);
///
/// let both = statement.merge(&endpoint);
/// assert_eq!(both.x(), 0.0);
/// assert_eq!(both.w(), 220.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

impl BoundingBox {
    /// Creates a bounding box from its top-left corner and dimensions
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Creates a bounding box from a top-left point and a size
    pub fn from_top_left(top_left: Point, size: Size) -> Self {
        Self::new(top_left.x(), top_left.y(), size.width(), size.height())
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    pub fn w(self) -> f32 {
        self.w
    }

    pub fn h(self) -> f32 {
        self.h
    }

    /// Returns the right edge
    pub fn max_x(self) -> f32 {
        self.x + self.w
    }

    /// Returns the bottom edge
    pub fn max_y(self) -> f32 {
        self.y + self.h
    }

    /// Returns the horizontal center
    pub fn center_x(self) -> f32 {
        self.x + self.w / 2.0
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the dimensions as a Size
    pub fn to_size(self) -> Size {
        Size::new(self.w, self.h)
    }

    /// Returns `true` when both dimensions are finite and non-negative.
    pub fn is_valid(self) -> bool {
        [self.x, self.y, self.w, self.h]
            .iter()
            .all(|value| value.is_finite())
            && self.w >= 0.0
            && self.h >= 0.0
    }

    /// Returns the smallest box containing both boxes.
    pub fn merge(&self, other: &Self) -> Self {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Grows the box by `margin` on every side.
    pub fn expand(&self, margin: f32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.w + margin * 2.0,
            self.h + margin * 2.0,
        )
    }
}

/// A straight line segment `{x1, y1, x2, y2}`.
///
/// Segments are derived values: they are computed for one render and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineSegment {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl LineSegment {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Creates a horizontal segment from `x1` to `x2` at height `y`.
    ///
    /// ```
    /// # use sequin_core::geometry::LineSegment;
    /// let line = LineSegment::horizontal(0.0, 207.0, 40.0);
    /// assert!(line.is_horizontal());
    /// assert_eq!(line.y2(), 40.0);
    /// ```
    pub fn horizontal(x1: f32, x2: f32, y: f32) -> Self {
        Self::new(x1, y, x2, y)
    }

    pub fn x1(self) -> f32 {
        self.x1
    }

    pub fn y1(self) -> f32 {
        self.y1
    }

    pub fn x2(self) -> f32 {
        self.x2
    }

    pub fn y2(self) -> f32 {
        self.y2
    }

    /// Returns the `(x1, y1)` end of the segment
    pub fn start(self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Returns the `(x2, y2)` end of the segment
    pub fn end(self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn is_horizontal(self) -> bool {
        self.y1 == self.y2
    }

    /// Returns the bounding box spanned by the two end points.
    pub fn bounds(self) -> BoundingBox {
        let min_x = self.x1.min(self.x2);
        let min_y = self.y1.min(self.y2);
        BoundingBox::new(
            min_x,
            min_y,
            self.x1.max(self.x2) - min_x,
            self.y1.max(self.y2) - min_y,
        )
    }
}

/// Padding values for the four sides of an element.
///
/// Every side defaults to zero when deserialized, so a configuration only
/// needs to mention the sides it cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns a new Insets with the specified left value
    pub fn with_left(self, left: f32) -> Self {
        Self { left, ..self }
    }
}
