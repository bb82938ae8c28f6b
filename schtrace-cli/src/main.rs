//! schtrace CLI - render schematic traces into drawing primitives from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use schtrace::{
    base_font_size, parse_trace_str, screen_font_size, Matrix, Primitive, RenderOptions,
    RenderOutput, SchTraceError, TextCategory, TraceRenderer,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "schtrace")]
#[command(about = "Schematic trace renderer: wires, crossing hops and junctions")]
#[command(long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a schematic trace JSON file
    Render {
        /// Path to trace JSON file ("-" reads stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        transform: TransformArgs,

        /// Theme JSON file (colors, stroke_per_unit)
        #[arg(long, value_name = "FILE")]
        theme: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Print the screen font size for a label category
    FontSize {
        /// Label category (pin_number, reference_designator, manufacturer_number, net_label)
        #[arg(value_name = "CATEGORY")]
        category: String,

        /// Horizontal scale of the transform
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        scale: f64,
    },

    /// List label categories and their base font sizes
    Categories,
}

#[derive(clap::Args)]
struct TransformArgs {
    /// Uniform scale from schematic units to screen units
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    scale: f64,

    /// Flip the Y axis (schematic Y-up to screen Y-down)
    #[arg(long)]
    flip_y: bool,

    /// Horizontal offset applied after scaling
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    translate_x: f64,

    /// Vertical offset applied after scaling
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    translate_y: f64,
}

impl TransformArgs {
    fn to_matrix(&self) -> Matrix {
        let sy = if self.flip_y { -self.scale } else { self.scale };
        Matrix::translate(self.translate_x, self.translate_y)
            .compose(&Matrix::scale(self.scale, sy))
    }
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable summary
    Human,
    /// JSON primitives and stats
    Json,
    /// One SVG element per line
    Attrs,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render {
            file,
            transform,
            theme,
            format,
        } => handle_render(&file, &transform, theme.as_deref(), &format),
        Commands::FontSize { category, scale } => handle_font_size(&category, scale),
        Commands::Categories => {
            handle_categories();
            Ok(())
        }
    };

    let exit_code = match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}

fn read_trace_text(file: &Path) -> Result<String, SchTraceError> {
    if file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(file)?)
    }
}

fn handle_render(
    file: &Path,
    transform: &TransformArgs,
    theme: Option<&Path>,
    format: &OutputFormat,
) -> Result<(), SchTraceError> {
    let options = match theme {
        Some(path) => RenderOptions::from_file(path)?,
        None => RenderOptions::default(),
    };
    let trace = parse_trace_str(&read_trace_text(file)?)?;
    let output = TraceRenderer::render(&trace, &transform.to_matrix(), &options);

    match format {
        OutputFormat::Human => output_human(file, &output),
        OutputFormat::Json => output_json(&output)?,
        OutputFormat::Attrs => output_attrs(&output.primitives),
    }
    Ok(())
}

fn output_human(file: &Path, output: &RenderOutput) {
    println!("\nTrace: {}", file.display());
    println!("{}", "─".repeat(60));

    if output.primitives.is_empty() {
        println!("  Nothing to draw (trace has no edges)");
        return;
    }

    for (i, primitive) in output.primitives.iter().enumerate() {
        match primitive {
            Primitive::Path(p) => println!(
                "  {:>3}. path   {}  stroke={} width={}",
                i, p.d, p.stroke, p.stroke_width
            ),
            Primitive::Circle(c) => println!(
                "  {:>3}. circle ({}, {}) r={} fill={}",
                i, c.center.x, c.center.y, c.radius, c.fill
            ),
        }
    }

    println!("\n  Summary:");
    println!("    Segments:   {}", output.stats.segments);
    println!("    Crossings:  {}", output.stats.crossings);
    println!("    Junctions:  {}", output.stats.junctions);
    println!("    Primitives: {}", output.stats.primitives);
}

fn output_json(output: &RenderOutput) -> Result<(), SchTraceError> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}

fn output_attrs(primitives: &[Primitive]) {
    for primitive in primitives {
        println!("{}", primitive.to_svg_element());
    }
}

fn handle_font_size(category: &str, scale: f64) -> Result<(), SchTraceError> {
    let category: TextCategory = category.parse()?;
    println!("{}", screen_font_size(&Matrix::scale(scale, scale), category));
    Ok(())
}

fn handle_categories() {
    println!("Label categories:\n");
    for category in TextCategory::ALL {
        println!("  {:<22} {}", category.as_str(), base_font_size(category));
    }
}
