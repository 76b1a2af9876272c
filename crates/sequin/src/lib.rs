//! Sequin - Action-invocation rendering for sequence diagrams.
//!
//! An action invocation is the call/return pair drawn between a statement and
//! the endpoint its action targets. This crate computes the invocation
//! geometry from positioned view states, renders it to SVG, and assembles
//! batches of invocations from a [`scene::Scene`] into standalone documents.

pub mod config;
pub mod scene;
pub mod view_model;

mod action_invocation;
mod error;
mod export;

pub use sequin_core::{color, draw, geometry};

pub use action_invocation::{
    ACTIVITY_MARKER_WIDTH, ARROW_TIP_OFFSET, ActionInvocation, InvocationGeometry,
    InvocationStyle, render,
};
pub use error::SequinError;

use log::{debug, info, trace};

use sequin_core::draw::SvgNode;

use config::{AppConfig, LayoutConfig};
use scene::Scene;
use view_model::StatementViewState;

/// Builder for parsing scenes and rendering action invocations.
///
/// # Examples
///
/// ```rust
/// use sequin::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"
/// [[endpoints]]
/// name = "db"
/// bbox = { x = 200.0, y = 0.0, w = 20.0, h = 200.0 }
///
/// [[invocations]]
/// action = "query()"
/// endpoint = "db"
/// bbox = { x = 0.0, y = 0.0, w = 100.0, h = 40.0 }
/// "#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// let scene = builder.parse(source)
///     .expect("Failed to parse");
///
/// let svg = builder.render_svg(&scene)
///     .expect("Failed to render");
/// assert!(svg.contains("action-invocation"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse scene TOML into a [`Scene`].
    ///
    /// # Errors
    ///
    /// Returns [`SequinError::Parse`] with the source attached when the TOML
    /// is malformed, has missing fields or repeats an endpoint name.
    pub fn parse(&self, source: &str) -> Result<Scene, SequinError> {
        info!("Parsing scene");

        let scene: Scene =
            toml::from_str(source).map_err(|err| SequinError::new_parse_error(err, source))?;

        debug!(
            endpoints = scene.endpoints().len(),
            invocations = scene.invocations().len();
            "Scene parsed successfully"
        );
        trace!(scene:?; "Parsed scene");

        Ok(scene)
    }

    /// Render a single invocation to its `<g class="action-invocation">`
    /// fragment.
    ///
    /// # Errors
    ///
    /// Returns [`SequinError::Config`] if the configured layout metrics or
    /// colors are invalid.
    pub fn render_invocation(
        &self,
        statement: &StatementViewState<'_>,
        action: &str,
    ) -> Result<SvgNode, SequinError> {
        let layout = self.layout()?;
        let style = self.invocation_style()?;
        Ok(render(statement, action, layout, &style))
    }

    /// Render every invocation of a scene into a standalone SVG document.
    ///
    /// Invocations are emitted in scene order. An empty scene produces an
    /// empty document.
    ///
    /// # Errors
    ///
    /// Returns [`SequinError::Config`] for invalid configuration, and the
    /// errors of [`Scene::statements`] for dangling endpoint names or invalid
    /// bounding boxes.
    pub fn render_svg(&self, scene: &Scene) -> Result<String, SequinError> {
        info!(invocations = scene.invocations().len(); "Rendering scene");

        let layout = self.layout()?;
        let style = self.invocation_style()?;
        let background = self
            .config
            .style()
            .background_color()
            .map_err(SequinError::Config)?;

        let statements = scene.statements()?;

        let invocations: Vec<ActionInvocation<'_>> = statements
            .iter()
            .map(|(statement, action)| {
                ActionInvocation::new(
                    InvocationGeometry::compute(statement, layout),
                    action,
                    &style,
                )
            })
            .collect();
        debug!(count = invocations.len(); "Invocation geometry computed");

        let content_bounds = scene
            .endpoints()
            .iter()
            .map(|endpoint| endpoint.bbox())
            .chain(statements.iter().map(|(statement, _)| statement.bbox()))
            .reduce(|acc, bbox| acc.merge(&bbox));

        let document = export::svg::SvgBuilder::new()
            .with_background(background)
            .build()
            .render_document(content_bounds, &invocations);

        info!("SVG rendered successfully");
        Ok(document.to_string())
    }

    fn layout(&self) -> Result<&LayoutConfig, SequinError> {
        let layout = self.config.layout();
        layout.validate().map_err(SequinError::Config)?;
        Ok(layout)
    }

    fn invocation_style(&self) -> Result<InvocationStyle, SequinError> {
        self.config
            .style()
            .to_invocation_style()
            .map_err(SequinError::Config)
    }
}
