//! schtrace - schematic trace rendering
//!
//! Turns a schematic trace (directed edges, some flagged as crossing another
//! wire, plus junction points) into vector drawing primitives: colored
//! stroke paths for straight segments, arced "hops" with a background halo
//! for crossings, and filled dots for junctions. A companion helper sizes
//! label text for a given transform.
//!
//! # Quick Start
//!
//! ```
//! use schtrace::{render_trace, Edge, Matrix, SchematicTrace};
//!
//! let trace = SchematicTrace::new(vec![
//!     Edge::new((0.0, 0.0), (2.0, 0.0)),
//!     Edge::crossing((2.0, 0.0), (3.0, 0.0)),
//!     Edge::new((3.0, 0.0), (5.0, 0.0)),
//! ]);
//!
//! let transform = Matrix::scale(100.0, -100.0);
//! for primitive in render_trace(&trace, &transform) {
//!     println!("{} {:?}", primitive.element_name(), primitive.attributes());
//! }
//! ```
//!
//! The returned vector is in paint order and must be drawn as-is.

pub mod colors;
pub mod core;
pub mod geometry;
pub mod hop;
pub mod primitive;
pub mod render;
pub mod schema;
pub mod stroke;
pub mod text;

// Re-export main types
pub use colors::{segment_color, SchematicColors, SEGMENT_PALETTE};
pub use crate::core::{
    parse_trace_file, parse_trace_str, RenderOptions, RenderOutput, RenderStats, SchTraceError,
    TraceRenderer,
};
pub use geometry::{Matrix, Point};
pub use hop::CrossingHop;
pub use primitive::{CirclePrimitive, LineCap, PathPrimitive, Primitive};
pub use render::{render_trace, render_trace_with};
pub use schema::{Edge, SchematicTrace};
pub use stroke::sch_stroke_size;
pub use text::{base_font_size, screen_font_size, TextCategory};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        render_trace, render_trace_with, screen_font_size, Edge, Matrix, Point, Primitive,
        RenderOptions, SchTraceError, SchematicTrace, TextCategory, TraceRenderer,
    };
}
