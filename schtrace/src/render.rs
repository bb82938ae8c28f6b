//! Trace → primitives.
//!
//! Output paint order is fixed: crossing hops (shadow, then wire) come first,
//! then junction dots, then the straight segments, so straight wires are
//! painted over any hop shadow that shares their coordinates.

use crate::colors::segment_color;
use crate::core::RenderOptions;
use crate::geometry::Matrix;
use crate::hop::CrossingHop;
use crate::primitive::{
    line_command, quad_command, CirclePrimitive, LineCap, PathPrimitive, Primitive,
};
use crate::schema::SchematicTrace;

/// Extra width of a hop's background halo over the wire stroke.
pub const HOP_SHADOW_EXTRA_WIDTH: f64 = 1.5;
/// Junction dot radius per unit of horizontal scale.
pub const JUNCTION_RADIUS_PER_UNIT: f64 = 0.03;
/// Opacity of straight trace segments.
pub const SEGMENT_OPACITY: f64 = 0.5;

/// Render a trace with the default theme.
pub fn render_trace(trace: &SchematicTrace, transform: &Matrix) -> Vec<Primitive> {
    render_trace_with(trace, transform, &RenderOptions::default())
}

/// Render a trace into primitives in paint order.
pub fn render_trace_with(
    trace: &SchematicTrace,
    transform: &Matrix,
    options: &RenderOptions,
) -> Vec<Primitive> {
    if trace.is_empty() {
        return Vec::new();
    }

    let base = options.base_stroke_width(transform);

    let mut primitives = crossing_hops(trace, transform, options, base);
    primitives.extend(junction_dots(trace, transform, options));
    primitives.extend(straight_segments(trace, transform, base));

    tracing::debug!(
        trace = trace.log_id(),
        edges = trace.edges.len(),
        primitives = primitives.len(),
        "rendered schematic trace"
    );

    primitives
}

/// Stroke width of the `index`-th straight segment.
pub fn segment_stroke_width(base: f64, index: usize) -> f64 {
    base * (1.0 + index as f64 / 2.0)
}

fn straight_segments(trace: &SchematicTrace, transform: &Matrix, base: f64) -> Vec<Primitive> {
    trace
        .straight_edges()
        .enumerate()
        .map(|(index, edge)| {
            let from = transform.apply_to_point(edge.from);
            let to = transform.apply_to_point(edge.to);
            Primitive::Path(PathPrimitive {
                d: line_command(from, to),
                stroke: segment_color(index).to_string(),
                fill: "none".to_string(),
                stroke_width: segment_stroke_width(base, index),
                stroke_linecap: LineCap::Round,
                opacity: Some(SEGMENT_OPACITY),
                class: Some("trace".to_string()),
            })
        })
        .collect()
}

fn crossing_hops(
    trace: &SchematicTrace,
    transform: &Matrix,
    options: &RenderOptions,
    base: f64,
) -> Vec<Primitive> {
    let mut out = Vec::new();
    for edge in trace.crossing_edges() {
        let hop = CrossingHop::between(
            transform.apply_to_point(edge.from),
            transform.apply_to_point(edge.to),
        );
        if hop.degenerate {
            tracing::debug!(
                trace = trace.log_id(),
                x = hop.start.x,
                y = hop.start.y,
                "crossing edge has no usable length, drawing without a hop"
            );
        }
        let d = quad_command(hop.start, hop.control, hop.end);

        out.push(Primitive::Path(PathPrimitive {
            d: d.clone(),
            stroke: options.colors.background.clone(),
            fill: "none".to_string(),
            stroke_width: base + HOP_SHADOW_EXTRA_WIDTH,
            stroke_linecap: LineCap::Round,
            opacity: None,
            class: None,
        }));
        out.push(Primitive::Path(PathPrimitive {
            d,
            stroke: options.colors.wire.clone(),
            fill: "none".to_string(),
            stroke_width: base,
            stroke_linecap: LineCap::Round,
            opacity: None,
            class: None,
        }));
    }
    out
}

fn junction_dots(
    trace: &SchematicTrace,
    transform: &Matrix,
    options: &RenderOptions,
) -> Vec<Primitive> {
    let radius = transform.horizontal_scale() * JUNCTION_RADIUS_PER_UNIT;
    trace
        .junction_points()
        .iter()
        .map(|&junction| {
            Primitive::Circle(CirclePrimitive {
                center: transform.apply_to_point(junction),
                radius,
                fill: options.colors.junction.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::schema::Edge;

    fn straight(n: usize) -> SchematicTrace {
        SchematicTrace::new(
            (0..n)
                .map(|i| Edge::new((i as f64, 0.0), (i as f64 + 1.0, 0.0)))
                .collect(),
        )
    }

    #[test]
    fn empty_trace_renders_nothing() {
        let trace = SchematicTrace::default().with_junctions(vec![Point::new(1.0, 1.0)]);
        assert!(render_trace(&trace, &Matrix::identity()).is_empty());
    }

    #[test]
    fn straight_segment_uses_transformed_endpoints() {
        let trace = SchematicTrace::new(vec![Edge::new((1.0, 2.0), (3.0, 2.0))]);
        let transform = Matrix::translate(10.0, 20.0).compose(&Matrix::scale(10.0, -10.0));
        let prims = render_trace(&trace, &transform);
        assert_eq!(prims.len(), 1);
        let path = prims[0].as_path().unwrap();
        assert_eq!(path.d, "M 20 0 L 40 0");
        assert_eq!(path.opacity, Some(0.5));
        assert_eq!(path.stroke_linecap, LineCap::Round);
        assert_eq!(path.fill, "none");
        assert_eq!(path.class.as_deref(), Some("trace"));
    }

    #[test]
    fn segment_widths_grow_with_index() {
        let prims = render_trace(&straight(4), &Matrix::identity());
        let widths: Vec<f64> = prims.iter().map(|p| p.as_path().unwrap().stroke_width).collect();
        assert_eq!(widths, vec![0.02, 0.03, 0.04, 0.05]);
    }

    #[test]
    fn seventh_segment_reuses_first_color() {
        let prims = render_trace(&straight(7), &Matrix::identity());
        let first = &prims[0].as_path().unwrap().stroke;
        let seventh = &prims[6].as_path().unwrap().stroke;
        assert_eq!(first, seventh);
        assert_ne!(first, &prims[1].as_path().unwrap().stroke);
    }

    #[test]
    fn crossing_emits_shadow_then_wire() {
        let trace = SchematicTrace::new(vec![Edge::crossing((0.0, 0.0), (10.0, 0.0))]);
        let options = RenderOptions::default();
        let prims = render_trace_with(&trace, &Matrix::identity(), &options);
        assert_eq!(prims.len(), 2);

        let shadow = prims[0].as_path().unwrap();
        let wire = prims[1].as_path().unwrap();
        assert_eq!(shadow.stroke, options.colors.background);
        assert_eq!(wire.stroke, options.colors.wire);
        assert_eq!(shadow.stroke_width, 0.02 + 1.5);
        assert_eq!(wire.stroke_width, 0.02);
        assert_eq!(shadow.opacity, None);
        assert_eq!(shadow.d, wire.d);
        assert!(shadow.d.contains(" Q "));
    }

    #[test]
    fn zero_length_crossing_degrades_to_straight_hop() {
        let trace = SchematicTrace::new(vec![Edge::crossing((2.0, 2.0), (2.0, 2.0))]);
        let prims = render_trace(&trace, &Matrix::identity());
        assert_eq!(prims.len(), 2);
        assert_eq!(prims[1].as_path().unwrap().d, "M 2 2 Q 2 2 2 2");
    }

    #[test]
    fn junction_radius_tracks_horizontal_scale() {
        let trace = SchematicTrace::new(vec![Edge::new((0.0, 0.0), (1.0, 0.0))])
            .with_junctions(vec![Point::new(0.5, 0.0)]);
        let r1 = render_trace(&trace, &Matrix::scale(1.0, 1.0))[0]
            .as_circle()
            .unwrap()
            .radius;
        let r2 = render_trace(&trace, &Matrix::scale(-2.0, 2.0))[0]
            .as_circle()
            .unwrap()
            .radius;
        assert_eq!(r1, 0.03);
        assert_eq!(r2, 2.0 * r1);
    }
}
