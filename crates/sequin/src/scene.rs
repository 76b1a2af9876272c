//! Positioned scene documents.
//!
//! A [`Scene`] is the serialized output of an upstream layout pass: a list of
//! endpoints with their bounding boxes and a list of invocations, each with
//! its statement bounding box, the name of the endpoint it targets and its
//! action label.
//!
//! ```toml
//! [[endpoints]]
//! name = "db"
//! bbox = { x = 200.0, y = 0.0, w = 20.0, h = 200.0 }
//!
//! [[invocations]]
//! action = "call()"
//! endpoint = "db"
//! bbox = { x = 0.0, y = 0.0, w = 100.0, h = 40.0 }
//! ```
//!
//! The renderer trusts its inputs, so this is where they get checked:
//! [`Scene::statements`] rejects dangling endpoint names and negative sizes.

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Deserializer, de};

use sequin_core::geometry::BoundingBox;

use crate::{
    error::SequinError,
    view_model::{EndpointViewState, StatementViewState},
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct EndpointEntry {
    name: String,
    bbox: BoundingBox,
}

/// One invocation entry of a scene.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InvocationEntry {
    #[serde(default)]
    action: String,
    endpoint: String,
    bbox: BoundingBox,
}

impl InvocationEntry {
    pub fn new(action: impl Into<String>, endpoint: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            action: action.into(),
            endpoint: endpoint.into(),
            bbox,
        }
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
struct RawScene {
    #[serde(default)]
    endpoints: Vec<EndpointEntry>,
    #[serde(default)]
    invocations: Vec<InvocationEntry>,
}

/// A set of positioned endpoints and the invocations between them.
///
/// Endpoint names are unique within a scene.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Scene {
    endpoints: Vec<EndpointViewState>,
    invocations: Vec<InvocationEntry>,
}

impl<'de> Deserialize<'de> for Scene {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawScene::deserialize(deserializer)?;
        let endpoints = raw
            .endpoints
            .into_iter()
            .map(|entry| EndpointViewState::new(entry.name, entry.bbox))
            .collect();
        Self::new(endpoints, raw.invocations).map_err(de::Error::custom)
    }
}

impl Scene {
    /// Creates a scene.
    ///
    /// # Errors
    ///
    /// Returns [`SequinError::Scene`] when two endpoints share a name.
    pub fn new(
        endpoints: Vec<EndpointViewState>,
        invocations: Vec<InvocationEntry>,
    ) -> Result<Self, SequinError> {
        {
            let mut seen = HashSet::new();
            if let Some(duplicate) = endpoints.iter().find(|ep| !seen.insert(ep.name())) {
                return Err(SequinError::Scene(format!(
                    "duplicate endpoint name `{}`",
                    duplicate.name()
                )));
            }
        }

        Ok(Self {
            endpoints,
            invocations,
        })
    }

    pub fn endpoints(&self) -> &[EndpointViewState] {
        &self.endpoints
    }

    pub fn invocations(&self) -> &[InvocationEntry] {
        &self.invocations
    }

    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }

    /// Looks up an endpoint by name.
    pub fn endpoint(&self, name: &str) -> Option<&EndpointViewState> {
        self.endpoints.iter().find(|ep| ep.name() == name)
    }

    /// Resolves every invocation into a statement view state, in scene order.
    ///
    /// # Errors
    ///
    /// - [`SequinError::InvalidBounds`] if an endpoint or statement box has a
    ///   negative or non-finite dimension.
    /// - [`SequinError::UnknownEndpoint`] if an invocation names an endpoint
    ///   that is not part of the scene.
    pub fn statements(&self) -> Result<Vec<(StatementViewState<'_>, &str)>, SequinError> {
        for endpoint in &self.endpoints {
            if !endpoint.bbox().is_valid() {
                return Err(SequinError::InvalidBounds {
                    what: format!("endpoint `{}`", endpoint.name()),
                });
            }
        }

        let statements = self
            .invocations
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                if !entry.bbox.is_valid() {
                    return Err(SequinError::InvalidBounds {
                        what: format!("invocation #{index}"),
                    });
                }
                let endpoint =
                    self.endpoint(&entry.endpoint)
                        .ok_or_else(|| SequinError::UnknownEndpoint {
                            index,
                            endpoint: entry.endpoint.clone(),
                        })?;
                Ok((
                    StatementViewState::new(entry.bbox, endpoint),
                    entry.action.as_str(),
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(statements = statements.len(); "Scene resolved");
        Ok(statements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"
        [[endpoints]]
        name = "db"
        bbox = { x = 200.0, y = 0.0, w = 20.0, h = 200.0 }

        [[endpoints]]
        name = "cache"
        bbox = { x = 300.0, y = 0.0, w = 40.0, h = 200.0 }

        [[invocations]]
        action = "query()"
        endpoint = "db"
        bbox = { x = 0.0, y = 0.0, w = 100.0, h = 40.0 }

        [[invocations]]
        endpoint = "cache"
        bbox = { x = 0.0, y = 80.0, w = 100.0, h = 40.0 }
    "#;

    #[test]
    fn test_parse_scene() {
        let scene: Scene = toml::from_str(SCENE).unwrap();

        assert_eq!(scene.endpoints().len(), 2);
        assert_eq!(scene.invocations().len(), 2);
        assert!(!scene.is_empty());
        assert_eq!(scene.invocations()[0].action(), "query()");
        assert_eq!(scene.invocations()[1].action(), "");
        assert_eq!(
            scene.endpoint("cache").map(|ep| ep.bbox()),
            Some(BoundingBox::new(300.0, 0.0, 40.0, 200.0))
        );
        assert!(scene.endpoint("missing").is_none());
    }

    #[test]
    fn test_statements_resolve_endpoints_in_order() {
        let scene: Scene = toml::from_str(SCENE).unwrap();
        let statements = scene.statements().unwrap();

        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].0.endpoint().name(), "db");
        assert_eq!(statements[0].1, "query()");
        assert_eq!(statements[1].0.endpoint().name(), "cache");
        assert_eq!(statements[1].0.bbox().y(), 80.0);
    }

    #[test]
    fn test_unknown_endpoint_is_reported() {
        let scene = Scene::new(
            vec![EndpointViewState::new("db", BoundingBox::new(200.0, 0.0, 20.0, 40.0))],
            vec![InvocationEntry::new(
                "call()",
                "queue",
                BoundingBox::new(0.0, 0.0, 100.0, 40.0),
            )],
        )
        .unwrap();

        match scene.statements() {
            Err(SequinError::UnknownEndpoint { index, endpoint }) => {
                assert_eq!(index, 0);
                assert_eq!(endpoint, "queue");
            }
            other => panic!("expected unknown endpoint error, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_sizes_are_rejected() {
        let scene = Scene::new(
            vec![EndpointViewState::new("db", BoundingBox::new(200.0, 0.0, -20.0, 40.0))],
            vec![],
        )
        .unwrap();
        assert!(matches!(
            scene.statements(),
            Err(SequinError::InvalidBounds { .. })
        ));

        let scene = Scene::new(
            vec![EndpointViewState::new("db", BoundingBox::new(200.0, 0.0, 20.0, 40.0))],
            vec![InvocationEntry::new(
                "call()",
                "db",
                BoundingBox::new(0.0, 0.0, 100.0, -1.0),
            )],
        )
        .unwrap();
        let err = scene.statements().unwrap_err();
        assert!(err.to_string().contains("invocation #0"));
    }

    #[test]
    fn test_duplicate_endpoints_are_rejected() {
        let result = toml::from_str::<Scene>(
            r#"
            [[endpoints]]
            name = "db"
            bbox = { x = 0.0, y = 0.0, w = 1.0, h = 1.0 }

            [[endpoints]]
            name = "db"
            bbox = { x = 5.0, y = 0.0, w = 1.0, h = 1.0 }
            "#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("duplicate endpoint name `db`"));
    }

    #[test]
    fn test_empty_scene() {
        let scene: Scene = toml::from_str("").unwrap();
        assert!(scene.is_empty());
        assert!(scene.statements().unwrap().is_empty());
    }
}
