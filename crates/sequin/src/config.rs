//! Configuration types for invocation rendering.
//!
//! All types implement [`serde::Deserialize`] with every field defaulted, so a
//! configuration file only has to mention the values it overrides.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Statement metrics shared by every rendered invocation.
//! - [`StyleConfig`] - Colors and fonts used when drawing.
//!
//! # Example
//!
//! ```
//! # use sequin::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().statement().height(), 40.0);
//! assert_eq!(config.layout().statement().padding().left(), 10.0);
//! ```

use serde::Deserialize;

use sequin_core::{
    color::Color,
    draw::{ActivityMarkerDefinition, ArrowHeadDefinition, StrokeDefinition, TextDefinition},
    geometry::Insets,
};

use crate::action_invocation::InvocationStyle;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Layout metrics shared by all diagram components.
///
/// Built once and passed by reference into every render call; nothing in
/// the renderer mutates it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    statement: StatementConfig,
}

impl LayoutConfig {
    pub fn new(statement: StatementConfig) -> Self {
        Self { statement }
    }

    pub fn statement(&self) -> &StatementConfig {
        &self.statement
    }

    /// Checks that the statement metrics describe a drawable row.
    ///
    /// # Errors
    ///
    /// Returns a message when the statement height or left padding is
    /// negative or not finite.
    pub fn validate(&self) -> Result<(), String> {
        let statement = &self.statement;
        if !statement.height.is_finite() || statement.height < 0.0 {
            return Err(format!(
                "statement height must be a non-negative number, got {}",
                statement.height
            ));
        }

        let left = statement.padding.left();
        if !left.is_finite() || left < 0.0 {
            return Err(format!(
                "statement left padding must be a non-negative number, got {left}"
            ));
        }

        Ok(())
    }
}

/// Height and padding of a statement row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatementConfig {
    height: f32,
    padding: Insets,
}

impl StatementConfig {
    pub fn new(height: f32, padding: Insets) -> Self {
        Self { height, padding }
    }

    /// Height of one statement row; the send line sits this far below the
    /// statement's top edge.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }
}

impl Default for StatementConfig {
    fn default() -> Self {
        Self {
            height: 40.0,
            padding: Insets::default().with_left(10.0),
        }
    }
}

/// Visual styling for rendered invocations.
///
/// Colors are kept as strings until [`StyleConfig::to_invocation_style`] so
/// that an invalid value is reported with its field name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<String>,
    stroke_color: String,
    stroke_width: f32,
    activity_fill: String,
    font_family: String,
    font_size: u16,
    arrow_head_size: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            stroke_color: "black".to_string(),
            stroke_width: 1.0,
            activity_fill: "white".to_string(),
            font_family: "Arial".to_string(),
            font_size: 12,
            arrow_head_size: 5.0,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Builds the drawing definitions used by the invocation renderer.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending field when a color is invalid or
    /// when the stroke width or arrow head size is negative or not finite.
    pub fn to_invocation_style(&self) -> Result<InvocationStyle, String> {
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(format!(
                "stroke width must be a non-negative number, got {}",
                self.stroke_width
            ));
        }
        if !self.arrow_head_size.is_finite() || self.arrow_head_size < 0.0 {
            return Err(format!(
                "arrow head size must be a non-negative number, got {}",
                self.arrow_head_size
            ));
        }

        let stroke_color = Color::new(&self.stroke_color)
            .map_err(|err| format!("Invalid stroke color in config: {err}"))?;
        let activity_fill = Color::new(&self.activity_fill)
            .map_err(|err| format!("Invalid activity fill in config: {err}"))?;

        let stroke = StrokeDefinition::new(stroke_color, self.stroke_width);

        let mut activity = ActivityMarkerDefinition::new();
        activity.set_fill_color(activity_fill);
        activity.set_stroke(stroke.clone());

        let mut text = TextDefinition::new();
        text.set_font_family(&self.font_family);
        text.set_font_size(self.font_size);

        Ok(InvocationStyle::new(
            stroke,
            ArrowHeadDefinition::new(self.arrow_head_size, stroke_color),
            activity,
            text,
        ))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_statement_metrics() {
        let config = AppConfig::default();
        let statement = config.layout().statement();
        assert_approx_eq!(f32, statement.height(), 40.0);
        assert_approx_eq!(f32, statement.padding().left(), 10.0);
        assert_approx_eq!(f32, statement.padding().top(), 0.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout.statement]
            height = 30.0
            "#,
        )
        .unwrap();

        assert_approx_eq!(f32, config.layout().statement().height(), 30.0);
        assert_approx_eq!(f32, config.layout().statement().padding().left(), 10.0);
        assert_eq!(config.style(), &StyleConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config: AppConfig = toml::from_str(
            r##"
            [layout.statement]
            height = 50.0

            [layout.statement.padding]
            left = 4.0
            top = 2.0

            [style]
            background_color = "#fafafa"
            stroke_color = "navy"
            font_size = 14
            "##,
        )
        .unwrap();

        let statement = config.layout().statement();
        assert_approx_eq!(f32, statement.height(), 50.0);
        assert_approx_eq!(f32, statement.padding().left(), 4.0);
        assert_approx_eq!(f32, statement.padding().top(), 2.0);
        assert!(config.style().background_color().unwrap().is_some());

        let style = config.style().to_invocation_style().unwrap();
        assert_eq!(style.stroke().color().to_string(), "navy");
        assert_eq!(style.text().font_size(), 14);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_colors_are_reported() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            background_color = "nope"
            stroke_color = "also-nope"
            "#,
        )
        .unwrap();

        let err = config.style().background_color().unwrap_err();
        assert!(err.contains("background color"));

        let err = config.style().to_invocation_style().unwrap_err();
        assert!(err.contains("stroke color"));
    }

    #[test]
    fn test_negative_style_metrics_are_rejected() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            stroke_width = -1.0
            "#,
        )
        .unwrap();
        let err = config.style().to_invocation_style().unwrap_err();
        assert!(err.contains("stroke width"));

        let config: AppConfig = toml::from_str(
            r#"
            [style]
            arrow_head_size = -2.0
            "#,
        )
        .unwrap();
        let err = config.style().to_invocation_style().unwrap_err();
        assert!(err.contains("arrow head size"));

        let config: AppConfig = toml::from_str(
            r#"
            [style]
            stroke_width = nan
            "#,
        )
        .unwrap();
        assert!(config.style().to_invocation_style().is_err());

        let config: AppConfig = toml::from_str(
            r#"
            [style]
            stroke_width = 0.0
            arrow_head_size = 0.0
            "#,
        )
        .unwrap();
        assert!(config.style().to_invocation_style().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_metrics() {
        assert!(LayoutConfig::default().validate().is_ok());

        let negative_height = LayoutConfig::new(StatementConfig::new(-1.0, Insets::default()));
        assert!(negative_height.validate().unwrap_err().contains("height"));

        let negative_padding = LayoutConfig::new(StatementConfig::new(
            40.0,
            Insets::default().with_left(-3.0),
        ));
        assert!(negative_padding.validate().unwrap_err().contains("padding"));

        let nan_height = LayoutConfig::new(StatementConfig::new(f32::NAN, Insets::default()));
        assert!(nan_height.validate().is_err());
    }
}
