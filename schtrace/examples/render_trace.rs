//! Render a trace JSON file and print the primitives as SVG elements.
//! Run with: cargo run --example render_trace [path/to/trace.json] [scale]

use schtrace::prelude::*;
use std::path::Path;

fn main() -> Result<(), SchTraceError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/mixed_trace.json".to_string());
    let scale: f64 = match std::env::args().nth(2) {
        Some(s) => s
            .parse()
            .map_err(|_| SchTraceError::Other(format!("invalid scale: {}", s)))?,
        None => 100.0,
    };
    let path = Path::new(&path);

    if !path.exists() {
        eprintln!("File not found: {}", path.display());
        eprintln!("Usage: cargo run --example render_trace [path/to/trace.json] [scale]");
        std::process::exit(1);
    }

    let transform = Matrix::scale(scale, -scale);
    let output = TraceRenderer::render_file(path, &transform, &RenderOptions::default())?;

    println!("<!-- {} primitives -->", output.stats.primitives);
    for primitive in &output.primitives {
        println!("{}", primitive.to_svg_element());
    }
    Ok(())
}
