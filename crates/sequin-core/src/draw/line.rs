//! Straight line drawable.

use svg::node::element as svg_element;

use crate::{
    draw::{Drawable, StrokeDefinition, SvgNode},
    geometry::{LineSegment, Point, Size},
};

/// A stroked straight line between the two ends of a [`LineSegment`].
///
/// The position passed to [`Drawable::render_to_svg`] translates the whole
/// segment, so a line computed in absolute coordinates is rendered at
/// [`Point::default`].
#[derive(Debug, Clone)]
pub struct Line<'a> {
    segment: LineSegment,
    stroke: &'a StrokeDefinition,
}

impl<'a> Line<'a> {
    pub fn new(segment: LineSegment, stroke: &'a StrokeDefinition) -> Self {
        Self { segment, stroke }
    }
}

impl Drawable for Line<'_> {
    fn render_to_svg(&self, position: Point) -> SvgNode {
        let start = self.segment.start().add_point(position);
        let end = self.segment.end().add_point(position);

        let line = svg_element::Line::new()
            .set("x1", start.x())
            .set("y1", start.y())
            .set("x2", end.x())
            .set("y2", end.y());

        Box::new(crate::apply_stroke!(line, self.stroke))
    }

    fn size(&self) -> Size {
        self.segment.bounds().to_size()
    }
}
