//! Input data model: schematic traces as produced by an upstream
//! circuit-json style data source.
//!
//! Only the fields the renderer reads are required. Everything else that an
//! upstream producer attaches to a trace is ignored on deserialization.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A directed wire segment in schematic space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: Point,
    pub to: Point,

    /// Set when this segment visually crosses another wire without an
    /// electrical connection. Crossing segments are drawn as hops.
    #[serde(default)]
    pub is_crossing: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_schematic_port_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_schematic_port_id: Option<String>,
}

impl Edge {
    pub fn new(from: impl Into<Point>, to: impl Into<Point>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            is_crossing: false,
            from_schematic_port_id: None,
            to_schematic_port_id: None,
        }
    }

    pub fn crossing(from: impl Into<Point>, to: impl Into<Point>) -> Self {
        Self {
            is_crossing: true,
            ..Self::new(from, to)
        }
    }
}

/// A schematic wire: ordered edges plus the junction points on it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchematicTrace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schematic_trace_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_trace_id: Option<String>,

    #[serde(default)]
    pub edges: Vec<Edge>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub junctions: Option<Vec<Point>>,
}

impl SchematicTrace {
    pub fn new(edges: Vec<Edge>) -> Self {
        Self {
            edges,
            ..Default::default()
        }
    }

    pub fn with_junctions(mut self, junctions: Vec<Point>) -> Self {
        self.junctions = Some(junctions);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn crossing_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.is_crossing)
    }

    pub fn straight_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| !e.is_crossing)
    }

    /// Junction points, empty when the trace carries none.
    pub fn junction_points(&self) -> &[Point] {
        self.junctions.as_deref().unwrap_or(&[])
    }

    /// Label used in log events.
    pub(crate) fn log_id(&self) -> &str {
        self.schematic_trace_id.as_deref().unwrap_or("<unnamed>")
    }
}
