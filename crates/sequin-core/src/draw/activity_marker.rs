//! Activity Marker Drawable Implementation
//!
//! An activity marker is the thin rectangle drawn on an endpoint while it is
//! processing an invocation. Unlike lifeline activations it is not centered:
//! the rectangle hangs from its top-left corner, which the invocation places
//! at the tip of the send line.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, StrokeDefinition, SvgNode},
    geometry::{Point, Size},
};

/// Styling configuration for activity markers.
///
/// # Default Values
///
/// - `fill_color`: white
/// - `stroke`: black, 1.0 width, solid
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityMarkerDefinition {
    fill_color: Color,
    stroke: StrokeDefinition,
}

impl ActivityMarkerDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn set_stroke(&mut self, stroke: StrokeDefinition) {
        self.stroke = stroke;
    }
}

impl Default for ActivityMarkerDefinition {
    fn default() -> Self {
        Self {
            fill_color: Color::new("white").expect("'white' is a valid CSS color"),
            stroke: StrokeDefinition::default(),
        }
    }
}

/// A drawable activity marker of a given size.
#[derive(Debug, Clone)]
pub struct ActivityMarker<'a> {
    definition: &'a ActivityMarkerDefinition,
    size: Size,
}

impl<'a> ActivityMarker<'a> {
    pub fn new(definition: &'a ActivityMarkerDefinition, size: Size) -> Self {
        Self { definition, size }
    }
}

impl Drawable for ActivityMarker<'_> {
    /// Renders the marker with its top-left corner at `position`.
    fn render_to_svg(&self, position: Point) -> SvgNode {
        let def = self.definition;
        let fill = def.fill_color();

        let rect = svg_element::Rectangle::new()
            .set("class", "endpoint-activity")
            .set("x", position.x())
            .set("y", position.y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("fill", fill.to_string())
            .set("fill-opacity", fill.alpha());

        Box::new(crate::apply_stroke!(rect, def.stroke()))
    }

    fn size(&self) -> Size {
        self.size
    }
}
