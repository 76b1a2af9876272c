//! Integration tests for the DiagramBuilder API
//!
//! These tests verify that the public API works end to end on scene sources.

use sequin::{
    DiagramBuilder, SequinError,
    config::AppConfig,
    geometry::BoundingBox,
    view_model::{EndpointViewState, StatementViewState},
};

const TWO_CALLS: &str = r#"
    [[endpoints]]
    name = "db"
    bbox = { x = 200.0, y = 0.0, w = 20.0, h = 200.0 }

    [[endpoints]]
    name = "cache"
    bbox = { x = 320.0, y = 0.0, w = 40.0, h = 200.0 }

    [[invocations]]
    action = "query()"
    endpoint = "db"
    bbox = { x = 0.0, y = 0.0, w = 100.0, h = 40.0 }

    [[invocations]]
    action = "lookup(key)"
    endpoint = "cache"
    bbox = { x = 0.0, y = 80.0, w = 100.0, h = 40.0 }
"#;

#[test]
fn test_render_scene() {
    let builder = DiagramBuilder::default();
    let scene = builder.parse(TWO_CALLS).expect("Failed to parse scene");
    let svg = builder.render_svg(&scene).expect("Failed to render scene");

    assert!(svg.starts_with("<svg"), "Output should start with SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert_eq!(svg.matches(r#"class="action-invocation""#).count(), 2);
    assert_eq!(svg.matches(r#"class="endpoint-activity""#).count(), 2);

    // Groups follow scene order
    let first = svg.find("query()").expect("first label");
    let second = svg.find("lookup(key)").expect("second label");
    assert!(first < second);
}

#[test]
fn test_render_empty_scene() {
    let builder = DiagramBuilder::default();
    let scene = builder.parse("").expect("Empty source is an empty scene");
    let svg = builder.render_svg(&scene).expect("Failed to render");

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("viewBox"));
    assert!(!svg.contains("action-invocation"));
}

#[test]
fn test_builder_with_config() {
    let config: AppConfig = toml::from_str(
        r#"
        [layout.statement]
        height = 30.0

        [style]
        background_color = "white"
        stroke_color = "navy"
        "#,
    )
    .expect("Failed to parse config");

    let builder = DiagramBuilder::new(config);
    let scene = builder.parse(TWO_CALLS).expect("Failed to parse scene");
    let svg = builder.render_svg(&scene).expect("Failed to render scene");

    assert!(svg.contains(r#"class="background""#));
    assert!(svg.contains(r#"stroke="navy""#));
    // First send line sits one statement height below the statement top
    assert!(svg.contains(r#"y1="30""#));
}

#[test]
fn test_invalid_style_is_reported() {
    let config: AppConfig = toml::from_str(
        r#"
        [style]
        activity_fill = "not-a-color"
        "#,
    )
    .expect("Failed to parse config");

    let builder = DiagramBuilder::new(config);
    let scene = builder.parse(TWO_CALLS).expect("Failed to parse scene");

    match builder.render_svg(&scene) {
        Err(SequinError::Config(msg)) => assert!(msg.contains("activity fill")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn test_negative_stroke_width_is_reported() {
    let config: AppConfig = toml::from_str(
        r#"
        [style]
        stroke_width = -1.5
        "#,
    )
    .expect("Failed to parse config");

    let builder = DiagramBuilder::new(config);
    let scene = builder.parse(TWO_CALLS).expect("Failed to parse scene");

    match builder.render_svg(&scene) {
        Err(SequinError::Config(msg)) => assert!(msg.contains("stroke width")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn test_unknown_endpoint_returns_error() {
    let source = r#"
        [[invocations]]
        action = "call()"
        endpoint = "nowhere"
        bbox = { x = 0.0, y = 0.0, w = 100.0, h = 40.0 }
    "#;

    let builder = DiagramBuilder::default();
    let scene = builder.parse(source).expect("Scene is well-formed");
    let err = builder.render_svg(&scene).unwrap_err();

    assert!(matches!(err, SequinError::UnknownEndpoint { index: 0, .. }));
    assert!(err.to_string().contains("nowhere"));
}

#[test]
fn test_parse_invalid_toml_returns_error() {
    let builder = DiagramBuilder::default();
    let result = builder.parse("this is not [ toml");
    assert!(matches!(result, Err(SequinError::Parse { .. })));
}

#[test]
fn test_render_single_invocation() {
    let endpoint = EndpointViewState::new("db", BoundingBox::new(200.0, 0.0, 20.0, 40.0));
    let statement = StatementViewState::new(BoundingBox::new(0.0, 0.0, 100.0, 40.0), &endpoint);

    let builder = DiagramBuilder::default();
    let svg = builder
        .render_invocation(&statement, "call()")
        .expect("Failed to render invocation")
        .to_string();

    assert!(svg.contains(r#"x1="0""#));
    assert!(svg.contains(r#"y1="40""#));
    assert!(svg.contains(r#"x2="207""#));
    assert!(svg.contains(r#"y1="60""#));
    assert!(svg.contains(r#"stroke-dasharray="5""#));
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();

    let scene = builder.parse(TWO_CALLS).expect("Failed to parse scene");
    let svg1 = builder.render_svg(&scene).expect("Failed to render first");
    let svg2 = builder.render_svg(&scene).expect("Failed to render second");

    assert_eq!(svg1, svg2);
}
