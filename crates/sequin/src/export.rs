//! Export functionality for rendered invocations.
//!
//! # Pipeline Position
//!
//! ```text
//! Scene TOML
//!     ↓ parse
//! Scene (endpoints + invocations)
//!     ↓ resolve
//! StatementViewState per invocation
//!     ↓ compute + render
//! action-invocation groups
//!     ↓ export (this module)
//! SVG document
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]

/// SVG export backend.
pub mod svg;
