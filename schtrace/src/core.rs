//! Options, errors and the rendering facade shared by the CLI and library
//! callers.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colors::SchematicColors;
use crate::geometry::Matrix;
use crate::primitive::Primitive;
use crate::render::render_trace_with;
use crate::schema::SchematicTrace;
use crate::stroke::{stroke_size_with, SCH_STROKE_PER_UNIT};

#[derive(Debug, thiserror::Error)]
pub enum SchTraceError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown text category: {0}")]
    UnknownTextCategory(String),
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for SchTraceError {
    fn from(e: serde_json::Error) -> Self {
        SchTraceError::Parse(e.to_string())
    }
}

/// Rendering options: theme colors and the schematic stroke width.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub colors: SchematicColors,
    /// Stroke width in schematic units, scaled by `|a|` of the transform.
    pub stroke_per_unit: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            colors: SchematicColors::default(),
            stroke_per_unit: SCH_STROKE_PER_UNIT,
        }
    }
}

impl RenderOptions {
    pub fn from_json_str(json: &str) -> Result<Self, SchTraceError> {
        let options: RenderOptions = serde_json::from_str(json)?;
        if !(options.stroke_per_unit.is_finite() && options.stroke_per_unit > 0.0) {
            return Err(SchTraceError::Other(format!(
                "stroke_per_unit must be a positive number, got {}",
                options.stroke_per_unit
            )));
        }
        Ok(options)
    }

    pub fn from_file(path: &Path) -> Result<Self, SchTraceError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Screen-space stroke width for crossing wires and the first segment.
    pub fn base_stroke_width(&self, transform: &Matrix) -> f64 {
        stroke_size_with(transform, self.stroke_per_unit)
    }
}

/// Primitive counts for one rendered trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RenderStats {
    pub segments: usize,
    pub crossings: usize,
    pub junctions: usize,
    pub primitives: usize,
}

impl RenderStats {
    /// Derive counts from a rendered trace and its output.
    pub fn from_primitives(trace: &SchematicTrace, primitives: &[Primitive]) -> Self {
        if primitives.is_empty() {
            return Self::default();
        }
        Self {
            segments: trace.straight_edges().count(),
            crossings: trace.crossing_edges().count(),
            junctions: primitives.iter().filter(|p| p.is_circle()).count(),
            primitives: primitives.len(),
        }
    }
}

/// Primitives of one trace along with their counts.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOutput {
    pub primitives: Vec<Primitive>,
    pub stats: RenderStats,
}

/// Rendering API used by the CLI, examples and benches.
pub struct TraceRenderer;

impl TraceRenderer {
    pub fn render(
        trace: &SchematicTrace,
        transform: &Matrix,
        options: &RenderOptions,
    ) -> RenderOutput {
        let primitives = render_trace_with(trace, transform, options);
        let stats = RenderStats::from_primitives(trace, &primitives);
        RenderOutput { primitives, stats }
    }

    /// Load a trace from a JSON file and render it.
    pub fn render_file(
        path: &Path,
        transform: &Matrix,
        options: &RenderOptions,
    ) -> Result<RenderOutput, SchTraceError> {
        let trace = parse_trace_file(path)?;
        Ok(Self::render(&trace, transform, options))
    }
}

/// Parse a trace from its JSON form.
pub fn parse_trace_str(json: &str) -> Result<SchematicTrace, SchTraceError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a trace JSON file.
pub fn parse_trace_file(path: &Path) -> Result<SchematicTrace, SchTraceError> {
    let text = std::fs::read_to_string(path)?;
    parse_trace_str(&text)
}
