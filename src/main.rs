// Fractal Sketch host
//
// Picks a fractal, sizes a raster canvas from its constants, runs the
// generation driver on a single-threaded runtime and reports completion:
// a coarse text preview of the canvas followed by a one-line JSON summary.

use clap::{Parser, ValueEnum};
use log::info;
use sketch_engine::driver::LogProgress;
use sketch_engine::{
    BranchingTree, Fractal, GenerationDriver, GenerationSummary, KochSnowflake, RasterSurface,
    SierpinskiCarpet, SierpinskiTriangle,
};

/// Width of the completion preview in characters
const PREVIEW_COLUMNS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FractalKind {
    Tree,
    Snowflake,
    Triangle,
    Carpet,
}

#[derive(Debug, Parser)]
#[clap(name = "fractal-sketch", about = "Sketch a fractal one animated line at a time")]
struct CliArgs {
    /// Which fractal to draw
    #[clap(value_enum, default_value = "tree")]
    fractal: FractalKind,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = CliArgs::parse();

    let summary = match args.fractal {
        FractalKind::Tree => sketch(BranchingTree::new()).await?,
        FractalKind::Snowflake => sketch(KochSnowflake::new()).await?,
        FractalKind::Triangle => sketch(SierpinskiTriangle::new()).await?,
        FractalKind::Carpet => sketch(SierpinskiCarpet::new()).await?,
    };

    println!("{}", summary_line(&summary)?);
    Ok(())
}

async fn sketch<F: Fractal>(fractal: F) -> anyhow::Result<GenerationSummary> {
    let (width, height) = fractal.settings().canvas;
    info!(
        "Fractal Sketch: {} on a {}x{} canvas",
        fractal.name(),
        width,
        height
    );

    let progress = LogProgress::new(fractal.name());
    let mut driver = GenerationDriver::new(fractal, RasterSurface::new(width, height), progress);
    let summary = driver.run().await?;

    let surface = driver.context().surface();
    println!("{}", surface.preview(PREVIEW_COLUMNS, preview_rows(width, height)));

    Ok(summary)
}

/// Terminal cells are roughly twice as tall as they are wide.
fn preview_rows(width: usize, height: usize) -> usize {
    (PREVIEW_COLUMNS * height / width.max(1) / 2).max(1)
}

fn summary_line(summary: &GenerationSummary) -> serde_json::Result<String> {
    serde_json::to_string(summary)
}
