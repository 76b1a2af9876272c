//! Drawable Components for Invocation Rendering
//!
//! This module provides the SVG building blocks an action invocation is made
//! of. Every component implements the [`Drawable`] trait, which renders the
//! component at a position and reports its size.
//!
//! - [`Line`]: a stroked [`LineSegment`](crate::geometry::LineSegment)
//! - [`ArrowHead`]: the left/right pointing arrowhead collaborator
//! - [`ActivityMarker`]: the endpoint activity rectangle
//! - [`Text`]: a label anchored at its start point

mod activity_marker;
mod arrow_head;
mod line;
mod stroke;
mod text;

pub use activity_marker::{ActivityMarker, ActivityMarkerDefinition};
pub use arrow_head::{ArrowHead, ArrowHeadDefinition, ArrowHeadDirection};
pub use line::Line;
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{Text, TextDefinition};

use crate::geometry::{Point, Size};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Trait for diagram elements that can be rendered to SVG.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable with its anchor at `position`.
    ///
    /// What the anchor means is up to the drawable: the top-left corner for
    /// rectangles, the tip for arrowheads, the start of the baseline for text.
    fn render_to_svg(&self, position: Point) -> SvgNode;

    /// Returns the size of this drawable.
    fn size(&self) -> Size;
}
