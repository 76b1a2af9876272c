//! View-model state consumed by the renderer.
//!
//! Positions are produced by an upstream layout pass; the types here only
//! carry them. A statement borrows the endpoint it targets, so a statement
//! without a reachable endpoint cannot be constructed.

use sequin_core::geometry::BoundingBox;

/// A positioned diagram participant (a process, actor or service).
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointViewState {
    name: String,
    bbox: BoundingBox,
}

impl EndpointViewState {
    pub fn new(name: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            name: name.into(),
            bbox,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }
}

/// A positioned statement and the endpoint its action targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatementViewState<'a> {
    bbox: BoundingBox,
    endpoint: &'a EndpointViewState,
}

impl<'a> StatementViewState<'a> {
    pub fn new(bbox: BoundingBox, endpoint: &'a EndpointViewState) -> Self {
        Self { bbox, endpoint }
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    pub fn endpoint(&self) -> &'a EndpointViewState {
        self.endpoint
    }
}
