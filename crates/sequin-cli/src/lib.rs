//! CLI logic for the Sequin invocation renderer.
//!
//! This module reads a positioned scene, renders every action invocation in
//! it and writes the resulting SVG document.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use sequin::{DiagramBuilder, SequinError};

/// Run the Sequin CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `SequinError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Scene parsing errors
/// - Unresolvable endpoints or invalid bounding boxes
pub fn run(args: &Args) -> Result<(), SequinError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing scene"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let scene = builder.parse(&source)?;
    let svg = builder.render_svg(&scene)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
