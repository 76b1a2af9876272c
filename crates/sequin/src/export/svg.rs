//! SVG document assembly.

use log::debug;
use svg::{self, node::element as svg_element};

use sequin_core::{color::Color, geometry::BoundingBox};

use crate::action_invocation::ActionInvocation;

/// Space left around the content on every side of the document.
const DOCUMENT_MARGIN: f32 = 20.0;

/// Builder for [`Svg`].
#[derive(Debug, Default)]
pub struct SvgBuilder {
    background: Option<Color>,
    margin: Option<f32>,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the background color; without one the document is transparent.
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn build(self) -> Svg {
        Svg {
            background: self.background,
            margin: self.margin.unwrap_or(DOCUMENT_MARGIN),
        }
    }
}

/// SVG exporter for a batch of rendered invocations.
#[derive(Debug)]
pub struct Svg {
    background: Option<Color>,
    margin: f32,
}

impl Svg {
    /// Renders the invocations into a standalone SVG document.
    ///
    /// `content_bounds` covers everything positioned upstream (endpoints and
    /// statements). The document's `viewBox` is its union with every
    /// invocation's drawn bounds, expanded by the margin. Groups are added
    /// in the order given.
    pub fn render_document(
        &self,
        content_bounds: Option<BoundingBox>,
        invocations: &[ActionInvocation<'_>],
    ) -> svg::Document {
        let bounds = invocations
            .iter()
            .map(ActionInvocation::bounds)
            .fold(content_bounds, |acc, bounds| match acc {
                Some(acc) => Some(acc.merge(&bounds)),
                None => Some(bounds),
            })
            .unwrap_or_default()
            .expand(self.margin);

        debug!(
            x = bounds.x(), y = bounds.y(), width = bounds.w(), height = bounds.h();
            "Document bounds calculated"
        );

        let doc = svg::Document::new()
            .set(
                "viewBox",
                format!("{} {} {} {}", bounds.x(), bounds.y(), bounds.w(), bounds.h()),
            )
            .set("width", bounds.w())
            .set("height", bounds.h());

        let doc = self.add_background(doc, bounds);

        invocations
            .iter()
            .fold(doc, |doc, invocation| doc.add(invocation.render()))
    }

    fn add_background(&self, doc: svg::Document, bounds: BoundingBox) -> svg::Document {
        let Some(color) = &self.background else {
            return doc;
        };

        let background = svg_element::Rectangle::new()
            .set("class", "background")
            .set("x", bounds.x())
            .set("y", bounds.y())
            .set("width", bounds.w())
            .set("height", bounds.h())
            .set("fill", color)
            .set("fill-opacity", color.alpha());

        doc.add(background)
    }
}

#[cfg(test)]
mod tests {
    use sequin_core::geometry::BoundingBox;

    use super::*;
    use crate::{
        action_invocation::{InvocationGeometry, InvocationStyle},
        config::LayoutConfig,
        view_model::{EndpointViewState, StatementViewState},
    };

    #[test]
    fn test_empty_document() {
        let svg = SvgBuilder::new().build().render_document(None, &[]);
        let output = svg.to_string();

        assert!(output.starts_with("<svg"));
        assert!(output.contains(r#"viewBox="-20 -20 40 40""#));
        assert!(!output.contains("<rect"));
        assert!(!output.contains("action-invocation"));
    }

    #[test]
    fn test_background_is_first_child() {
        let svg = SvgBuilder::new()
            .with_background(Some(Color::new("white").unwrap()))
            .with_margin(0.0)
            .build()
            .render_document(Some(BoundingBox::new(0.0, 0.0, 100.0, 50.0)), &[]);
        let output = svg.to_string();

        assert!(output.contains(r#"viewBox="0 0 100 50""#));
        assert!(output.contains(r#"class="background""#));
        assert!(output.contains(r#"fill="white""#));
    }

    #[test]
    fn test_view_box_covers_invocations() {
        let endpoint = EndpointViewState::new("db", BoundingBox::new(200.0, 0.0, 20.0, 40.0));
        let statement = StatementViewState::new(BoundingBox::new(0.0, 0.0, 100.0, 40.0), &endpoint);
        let style = InvocationStyle::default();
        let geometry = InvocationGeometry::compute(&statement, &LayoutConfig::default());
        let invocation = ActionInvocation::new(geometry, "call()", &style);

        let output = SvgBuilder::new()
            .with_margin(0.0)
            .build()
            .render_document(Some(statement.bbox()), std::slice::from_ref(&invocation))
            .to_string();

        // The left arrowhead hangs 5 below the receive line at y = 60
        assert!(output.contains(r#"height="65""#));
        assert_eq!(output.matches(r#"class="action-invocation""#).count(), 1);
    }
}
