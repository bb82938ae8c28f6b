//! Fixture-driven tests: JSON trace in, primitives out

use schtrace::prelude::*;
use schtrace::{parse_trace_file, RenderStats};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Sheet transform: flip Y, 100 px per unit, origin moved to (50, 200).
fn sheet_transform() -> Matrix {
    Matrix::translate(50.0, 200.0).compose(&Matrix::scale(100.0, -100.0))
}

#[test]
fn test_parse_mixed_fixture() {
    let trace = parse_trace_file(&fixture_path("mixed_trace.json")).expect("Should parse trace");

    assert_eq!(trace.schematic_trace_id.as_deref(), Some("schematic_trace_0"));
    assert_eq!(trace.edges.len(), 3);
    assert_eq!(trace.crossing_edges().count(), 1);
    assert_eq!(trace.junction_points().len(), 1);
    assert_eq!(
        trace.edges[0].from_schematic_port_id.as_deref(),
        Some("schematic_port_0")
    );
}

#[test]
fn test_render_mixed_fixture() {
    let output = TraceRenderer::render_file(
        &fixture_path("mixed_trace.json"),
        &sheet_transform(),
        &RenderOptions::default(),
    )
    .expect("Should render");

    assert_eq!(
        output.stats,
        RenderStats {
            segments: 2,
            crossings: 1,
            junctions: 1,
            primitives: 5,
        }
    );

    let p = &output.primitives;
    // crossing from (1,0) to (1.5,0) maps to (150,200) -> (200,200)
    assert_eq!(p[0].as_path().unwrap().d, "M 150 200 Q 175 165 200 200");
    assert_eq!(p[1].as_path().unwrap().d, "M 150 200 Q 175 165 200 200");
    assert_eq!(p[0].as_path().unwrap().stroke_width, 2.0 + 1.5);
    assert_eq!(p[1].as_path().unwrap().stroke_width, 2.0);

    let junction = p[2].as_circle().unwrap();
    assert_eq!(junction.center, Point::new(350.0, 200.0));
    assert_eq!(junction.radius, 3.0);

    assert_eq!(p[3].as_path().unwrap().d, "M 50 200 L 150 200");
    assert_eq!(p[4].as_path().unwrap().d, "M 200 200 L 350 200");
    assert_eq!(p[3].as_path().unwrap().stroke_width, 2.0);
    assert_eq!(p[4].as_path().unwrap().stroke_width, 3.0);
}

#[test]
fn test_empty_fixture_ignores_junctions() {
    let output = TraceRenderer::render_file(
        &fixture_path("empty_trace.json"),
        &sheet_transform(),
        &RenderOptions::default(),
    )
    .expect("Should render");

    assert!(output.primitives.is_empty());
    assert_eq!(output.stats, RenderStats::default());
}

#[test]
fn test_theme_fixture() {
    let options =
        RenderOptions::from_file(&fixture_path("theme_dark.json")).expect("Should load theme");
    assert_eq!(options.colors.junction, "rgb(255, 200, 0)");

    let output = TraceRenderer::render_file(
        &fixture_path("mixed_trace.json"),
        &Matrix::scale(100.0, 100.0),
        &options,
    )
    .expect("Should render");

    let wire = output.primitives[1].as_path().unwrap();
    assert_eq!(wire.stroke, "rgb(120, 220, 120)");
    assert!((wire.stroke_width - 3.0).abs() < 1e-12);
    assert_eq!(output.primitives[2].as_circle().unwrap().fill, "rgb(255, 200, 0)");
}

#[test]
fn test_primitives_serialize_to_json() {
    let output = TraceRenderer::render_file(
        &fixture_path("mixed_trace.json"),
        &Matrix::identity(),
        &RenderOptions::default(),
    )
    .expect("Should render");

    let json = serde_json::to_value(&output).expect("Should serialize");
    let kinds: Vec<_> = json["primitives"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["kind"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, vec!["path", "path", "circle", "path", "path"]);
    assert_eq!(json["stats"]["crossings"], 1);
}

#[test]
fn test_attribute_export_matches_svg_names() {
    let trace = parse_trace_file(&fixture_path("mixed_trace.json")).expect("Should parse trace");
    let prims = render_trace(&trace, &Matrix::identity());

    let hop_attrs = prims[0].attributes();
    assert_eq!(hop_attrs[0].0, "d");
    assert_eq!(hop_attrs.len(), 5);

    let dot_attrs = prims[2].attributes();
    assert_eq!(dot_attrs[2], ("r", "0.03".to_string()));

    let seg_attrs = prims[3].attributes();
    assert_eq!(seg_attrs[0], ("class", "trace".to_string()));
    assert_eq!(seg_attrs[4], ("stroke-width", "0.02px".to_string()));
    assert_eq!(seg_attrs[6], ("opacity", "0.5".to_string()));
}

#[test]
fn test_parse_invalid_file() {
    let result = parse_trace_file(&PathBuf::from("not_a_real_trace.json"));
    assert!(result.is_err(), "Should fail on nonexistent file");
}
