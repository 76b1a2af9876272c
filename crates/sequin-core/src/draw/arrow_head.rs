//! Arrowheads drawn at the ends of invocation lines.
//!
//! An arrowhead is a filled triangle whose tip sits exactly on the point it
//! is rendered at. A right-pointing head has its base to the left of the tip,
//! a left-pointing head has its base to the right.
//!
//! ```text
//!   Right:  |\          Left:   /|
//!           | >  tip     tip  <  |
//!           |/                  \|
//! ```

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, SvgNode},
    geometry::{Point, Size},
};

/// The direction an arrowhead points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowHeadDirection {
    Left,
    Right,
}

impl ArrowHeadDirection {
    fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Styling for arrowheads.
///
/// `size` is both the distance from tip to base and the half-height of the
/// base, so the default head spans 5 units horizontally and 10 vertically.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowHeadDefinition {
    size: f32,
    fill_color: Color,
}

impl ArrowHeadDefinition {
    pub fn new(size: f32, fill_color: Color) -> Self {
        Self { size, fill_color }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }
}

impl Default for ArrowHeadDefinition {
    fn default() -> Self {
        Self::new(5.0, Color::default())
    }
}

/// A single arrowhead with a fixed direction.
#[derive(Debug, Clone)]
pub struct ArrowHead<'a> {
    definition: &'a ArrowHeadDefinition,
    direction: ArrowHeadDirection,
}

impl<'a> ArrowHead<'a> {
    pub fn new(definition: &'a ArrowHeadDefinition, direction: ArrowHeadDirection) -> Self {
        Self {
            definition,
            direction,
        }
    }

    /// Renders an arrowhead pointing in `direction` with its tip at `tip`.
    ///
    /// ```
    /// use sequin_core::draw::{ArrowHead, ArrowHeadDefinition, ArrowHeadDirection};
    /// use sequin_core::geometry::Point;
    ///
    /// let def = ArrowHeadDefinition::default();
    /// let node = ArrowHead::render(&def, ArrowHeadDirection::Right, Point::new(207.0, 40.0));
    /// assert!(node.to_string().contains(r#"points="202,35 207,40 202,45""#));
    /// ```
    pub fn render(
        definition: &ArrowHeadDefinition,
        direction: ArrowHeadDirection,
        tip: Point,
    ) -> SvgNode {
        ArrowHead::new(definition, direction).render_to_svg(tip)
    }

    /// Returns the polygon corners: upper base corner, tip, lower base corner.
    fn corners(&self, tip: Point) -> [Point; 3] {
        let size = self.definition.size();
        let base_x = match self.direction {
            ArrowHeadDirection::Right => tip.x() - size,
            ArrowHeadDirection::Left => tip.x() + size,
        };
        [
            Point::new(base_x, tip.y() - size),
            tip,
            Point::new(base_x, tip.y() + size),
        ]
    }
}

impl Drawable for ArrowHead<'_> {
    fn render_to_svg(&self, position: Point) -> SvgNode {
        let points = self
            .corners(position)
            .iter()
            .map(|p| format!("{},{}", p.x(), p.y()))
            .collect::<Vec<_>>()
            .join(" ");

        let fill = self.definition.fill_color();
        let polygon = svg_element::Polygon::new()
            .set("class", "action-arrow")
            .set("data-direction", self.direction.as_str())
            .set("points", points)
            .set("fill", fill.to_string())
            .set("fill-opacity", fill.alpha());

        Box::new(polygon)
    }

    fn size(&self) -> Size {
        let size = self.definition.size();
        Size::new(size, size * 2.0)
    }
}
