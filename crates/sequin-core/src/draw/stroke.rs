//! Stroke and line-style definitions.
//!
//! Exported types:
//! - [`StrokeDefinition`]: color, width and dash style of a stroke
//! - [`StrokeStyle`]: solid or dashed
//! - [`apply_stroke!`](crate::apply_stroke!): applies a stroke to an SVG element
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"black"`, `0.5` |
//! | `width` | `stroke-width` | `1.0` |
//! | `style` | `stroke-dasharray` | `"5"` |

use crate::color::Color;

/// Defines the dash pattern of a stroke.
///
/// - `Solid`: no dasharray attribute
/// - `Dashed`: `"5"` (equal 5px dashes and gaps)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5"),
        }
    }
}

/// A stroke definition for lines and borders.
///
/// # Examples
///
/// ```
/// use sequin_core::draw::{StrokeDefinition, StrokeStyle};
/// use sequin_core::color::Color;
///
/// let solid = StrokeDefinition::new(Color::new("black").unwrap(), 1.0);
/// let dashed = solid.clone().with_style(StrokeStyle::Dashed);
/// assert_eq!(dashed.style(), StrokeStyle::Dashed);
/// assert_eq!(solid.style(), StrokeStyle::Solid);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Returns a copy of this stroke with another dash style.
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Apply stroke color, opacity, width and dash pattern to an SVG element.
///
/// ```
/// use sequin_core::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::default();
/// let line = svg_element::Line::new().set("x1", 0).set("x2", 10);
/// let line = sequin_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}
