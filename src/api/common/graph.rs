//
//  instaapi
//  api/common/graph.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! GraphQL Response Helpers
//!
//! The insights and business endpoints answer with GraphQL-shaped payloads.
//! This module holds the pieces those payloads share: relay-style `edges`
//! connections, chart graphs made of labelled data points, image references,
//! and the `errors` array returned instead of `data` on failure.
//!
//! # Shapes
//!
//! ```json
//! {"edges": [{"node": {...}}, {"node": {...}}]}
//! {"data_points": [{"label": "M", "value": 42}]}
//! {"uri": "https://..."}
//! {"errors": [{"message": "..."}]}
//! ```

use serde::{Deserialize, Serialize};

use super::{ApiError, ApiResult};

/// A labelled value on an insights chart.
///
/// Used for follower demographics (gender, age, cities, countries), daily
/// activity, profile actions and impression sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Label of the bucket (e.g. `"M"`, `"London"`, `"BIO_LINK_CLICKED"`).
    pub label: String,

    /// Value of the bucket. Counts and percentages share this field.
    pub value: f64,
}

/// Relay-style connection: `{"edges": [{"node": T}]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Edges<T> {
    #[serde(default = "Vec::new")]
    edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
struct Edge<T> {
    node: T,
}

impl<T> Edges<T> {
    pub(crate) fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

impl<T> Default for Edges<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

/// Chart payload: `{"data_points": [{"label": .., "value": ..}]}`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct GraphResponse {
    #[serde(default)]
    data_points: Vec<DataPoint>,
}

impl GraphResponse {
    pub(crate) fn into_points(graph: Option<Self>) -> Vec<DataPoint> {
        graph.map(|g| g.data_points).unwrap_or_default()
    }
}

/// Named value list: `{"nodes": [{"name": .., "value": ..}]}`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct NamedValuesResponse {
    #[serde(default)]
    nodes: Vec<NamedValueResponse>,
}

#[derive(Debug, Deserialize)]
struct NamedValueResponse {
    name: String,
    #[serde(default)]
    value: f64,
}

impl NamedValuesResponse {
    pub(crate) fn into_points(values: Option<Self>) -> Vec<DataPoint> {
        values
            .map(|v| v.nodes)
            .unwrap_or_default()
            .into_iter()
            .map(|n| DataPoint {
                label: n.name,
                value: n.value,
            })
            .collect()
    }
}

/// Image reference: `{"uri": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ImageUri {
    pub(crate) uri: String,
}

/// `{"message": "..."}` entry of a GraphQL `errors` array.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Turns a GraphQL `data` field into a value, or into a failure describing
/// why it is missing.
///
/// The first `errors[].message` becomes [`ApiError::Failed`]; with no message
/// available the response is [`ApiError::Malformed`].
pub(crate) fn require_data<T>(
    data: Option<T>,
    errors: &[GraphErrorResponse],
    what: &str,
) -> ApiResult<T> {
    match data {
        Some(data) => Ok(data),
        None => match errors.iter().find_map(|e| e.message.clone()) {
            Some(message) => Err(ApiError::Failed(message)),
            None => Err(ApiError::Malformed(format!("missing {what}"))),
        },
    }
}
