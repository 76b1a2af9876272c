//! Sequin Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Sequin renderer.
//! It includes:
//!
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Geometry**: Points, bounding boxes and line segments ([`geometry`] module)
//! - **Draw**: SVG drawables for lines, arrowheads, activity markers and labels
//!   ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
