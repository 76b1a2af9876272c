//! Action invocation rendering.
//!
//! An action invocation is the call/return pair drawn between a statement
//! and the endpoint its action targets:
//!
//! ```text
//!   statement                      endpoint
//!   ┌──────────────┐                  │
//!   │ label        │                  │
//!   ├──────────────┼─────────────────►┌┐   send line + activity marker
//!   │◄ ─ ─ ─ ─ ─ ─ ┼ ─ ─ ─ ─ ─ ─ ─ ─ ─└┘   receive line
//! ```
//!
//! Rendering happens in two phases. [`InvocationGeometry::compute`] derives
//! every coordinate from the view model and the [`LayoutConfig`];
//! [`ActionInvocation`] turns that geometry into an SVG group.

use svg::node::element as svg_element;

use sequin_core::{
    draw::{
        ActivityMarker, ActivityMarkerDefinition, ArrowHead, ArrowHeadDefinition,
        ArrowHeadDirection, Drawable, Line, StrokeDefinition, StrokeStyle, SvgNode, Text,
        TextDefinition,
    },
    geometry::{BoundingBox, LineSegment, Point},
};

use crate::{config::LayoutConfig, view_model::StatementViewState};

/// Horizontal distance between the endpoint's center and the send line tip.
///
/// Keeps the arrowhead tip just left of the endpoint's center line.
pub const ARROW_TIP_OFFSET: f32 = 3.0;

/// Width of the activity marker drawn at the send line tip.
pub const ACTIVITY_MARKER_WIDTH: f32 = 6.0;

/// Coordinates of every part of one action invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvocationGeometry {
    send_line: LineSegment,
    receive_line: LineSegment,
    activity_marker: BoundingBox,
    label_anchor: Point,
}

impl InvocationGeometry {
    /// Computes the invocation geometry for a statement.
    ///
    /// - send line: horizontal at `statement.y + height`, from `statement.x`
    ///   to `endpoint.x + endpoint.w / 2 - ARROW_TIP_OFFSET`
    /// - receive line: same span, `height / 2` below the send line
    /// - activity marker: `ACTIVITY_MARKER_WIDTH` wide, `height / 2` tall,
    ///   top-left corner at the send line tip
    /// - label anchor: `(statement.x + padding.left, statement.y + height / 2)`
    ///
    /// # Examples
    ///
    /// ```
    /// use sequin::{InvocationGeometry, config::LayoutConfig};
    /// use sequin::view_model::{EndpointViewState, StatementViewState};
    /// use sequin_core::geometry::BoundingBox;
    ///
    /// let endpoint = EndpointViewState::new("db", BoundingBox::new(200.0, 0.0, 20.0, 40.0));
    /// let statement = StatementViewState::new(BoundingBox::new(0.0, 0.0, 100.0, 40.0), &endpoint);
    ///
    /// let geometry = InvocationGeometry::compute(&statement, &LayoutConfig::default());
    /// assert_eq!(geometry.send_line().x2(), 207.0);
    /// assert_eq!(geometry.receive_line().y1(), 60.0);
    /// ```
    pub fn compute(model: &StatementViewState<'_>, layout: &LayoutConfig) -> Self {
        let statement = layout.statement();
        let height = statement.height();
        let half_height = height / 2.0;

        let bbox = model.bbox();
        let endpoint = model.endpoint().bbox();

        let send_line = LineSegment::horizontal(
            bbox.x(),
            endpoint.center_x() - ARROW_TIP_OFFSET,
            bbox.y() + height,
        );
        let receive_line =
            LineSegment::horizontal(send_line.x1(), send_line.x2(), send_line.y1() + half_height);
        let activity_marker = BoundingBox::new(
            send_line.x2(),
            send_line.y2(),
            ACTIVITY_MARKER_WIDTH,
            half_height,
        );
        let label_anchor = Point::new(bbox.x() + statement.padding().left(), bbox.y() + half_height);

        Self {
            send_line,
            receive_line,
            activity_marker,
            label_anchor,
        }
    }

    pub fn send_line(&self) -> LineSegment {
        self.send_line
    }

    pub fn receive_line(&self) -> LineSegment {
        self.receive_line
    }

    pub fn activity_marker(&self) -> BoundingBox {
        self.activity_marker
    }

    pub fn label_anchor(&self) -> Point {
        self.label_anchor
    }

    /// Returns the box covering both lines and the activity marker.
    pub fn bounds(&self) -> BoundingBox {
        self.send_line
            .bounds()
            .merge(&self.receive_line.bounds())
            .merge(&self.activity_marker)
    }
}

/// Drawing definitions for every part of an invocation.
///
/// The receive line reuses the send line's stroke with a dashed pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationStyle {
    stroke: StrokeDefinition,
    return_stroke: StrokeDefinition,
    arrow_head: ArrowHeadDefinition,
    activity: ActivityMarkerDefinition,
    text: TextDefinition,
}

impl InvocationStyle {
    pub fn new(
        stroke: StrokeDefinition,
        arrow_head: ArrowHeadDefinition,
        activity: ActivityMarkerDefinition,
        text: TextDefinition,
    ) -> Self {
        let return_stroke = stroke.clone().with_style(StrokeStyle::Dashed);
        Self {
            stroke,
            return_stroke,
            arrow_head,
            activity,
            text,
        }
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn return_stroke(&self) -> &StrokeDefinition {
        &self.return_stroke
    }

    pub fn arrow_head(&self) -> &ArrowHeadDefinition {
        &self.arrow_head
    }

    pub fn activity(&self) -> &ActivityMarkerDefinition {
        &self.activity
    }

    pub fn text(&self) -> &TextDefinition {
        &self.text
    }
}

impl Default for InvocationStyle {
    fn default() -> Self {
        Self::new(
            StrokeDefinition::default(),
            ArrowHeadDefinition::default(),
            ActivityMarkerDefinition::default(),
            TextDefinition::default(),
        )
    }
}

/// A renderable action invocation: computed geometry plus its label.
#[derive(Debug, Clone)]
pub struct ActionInvocation<'a> {
    geometry: InvocationGeometry,
    action: &'a str,
    style: &'a InvocationStyle,
}

impl<'a> ActionInvocation<'a> {
    pub fn new(geometry: InvocationGeometry, action: &'a str, style: &'a InvocationStyle) -> Self {
        Self {
            geometry,
            action,
            style,
        }
    }

    pub fn geometry(&self) -> &InvocationGeometry {
        &self.geometry
    }

    pub fn action(&self) -> &str {
        self.action
    }

    /// Renders the invocation as `<g class="action-invocation">`.
    ///
    /// Children are emitted in a fixed order: send line, right arrowhead,
    /// dashed receive line, left arrowhead, activity marker, label.
    pub fn render(&self) -> SvgNode {
        let geometry = &self.geometry;
        let style = self.style;
        let send = geometry.send_line();
        let receive = geometry.receive_line();
        let marker = geometry.activity_marker();

        let group = svg_element::Group::new()
            .set("class", "action-invocation")
            .add(Line::new(send, style.stroke()).render_to_svg(Point::default()))
            .add(ArrowHead::render(
                style.arrow_head(),
                ArrowHeadDirection::Right,
                send.end(),
            ))
            .add(Line::new(receive, style.return_stroke()).render_to_svg(Point::default()))
            .add(ArrowHead::render(
                style.arrow_head(),
                ArrowHeadDirection::Left,
                receive.start(),
            ))
            .add(
                ActivityMarker::new(style.activity(), marker.to_size())
                    .render_to_svg(marker.min_point()),
            )
            .add(Text::new(style.text(), self.action).render_to_svg(geometry.label_anchor()));

        Box::new(group)
    }

    /// Returns the box covering everything [`ActionInvocation::render`] draws,
    /// including arrowheads and the measured label.
    pub fn bounds(&self) -> BoundingBox {
        let geometry = &self.geometry;
        let head = self.style.arrow_head().size();
        let send_tip = geometry.send_line().end();
        let receive_start = geometry.receive_line().start();

        let right_head = BoundingBox::new(
            send_tip.x() - head,
            send_tip.y() - head,
            head,
            head * 2.0,
        );
        let left_head = BoundingBox::new(
            receive_start.x(),
            receive_start.y() - head,
            head,
            head * 2.0,
        );

        let label_size = Text::new(self.style.text(), self.action).calculate_size();
        let anchor = geometry.label_anchor();
        let label = BoundingBox::from_top_left(
            anchor.with_y(anchor.y() - label_size.height() / 2.0),
            label_size,
        );

        geometry
            .bounds()
            .merge(&right_head)
            .merge(&left_head)
            .merge(&label)
    }
}

/// Computes and renders one action invocation.
///
/// This is the single-call form of [`InvocationGeometry::compute`] followed by
/// [`ActionInvocation::render`].
pub fn render(
    model: &StatementViewState<'_>,
    action: &str,
    layout: &LayoutConfig,
    style: &InvocationStyle,
) -> SvgNode {
    let geometry = InvocationGeometry::compute(model, layout);
    ActionInvocation::new(geometry, action, style).render()
}
