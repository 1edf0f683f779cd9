use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use serde_json::{json, Value};
use shattered::mosaic::validate_dimensions;
use shattered::{Generator, MosaicCfg, Piece};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod figure;

use figure::FigureStyle;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Render shattered mosaics")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate one mosaic and draw it as SVG (piece fill, white outline)
    Figure {
        #[arg(long)]
        height: f64,
        #[arg(long)]
        width: f64,
        /// RNG seed; drawn from entropy and logged when omitted
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 50)]
        iterations: usize,
        #[arg(long, default_value_t = 1.0)]
        stroke_width: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Generate one mosaic and print its piece count and areas as JSON
    Report {
        #[arg(long)]
        height: f64,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 50)]
        iterations: usize,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Figure {
            height,
            width,
            seed,
            iterations,
            stroke_width,
            out,
        } => draw(height, width, seed, iterations, stroke_width, &out),
        Action::Report {
            height,
            width,
            seed,
            iterations,
        } => {
            let (seed, pieces) = generate(height, width, seed, iterations)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&report(height, width, seed, &pieces))?
            );
            Ok(())
        }
    }
}

/// One `Generator::run` on a validated, seeded generator.
fn generate(
    height: f64,
    width: f64,
    seed: Option<u64>,
    iterations: usize,
) -> Result<(u64, Vec<Piece>)> {
    validate_dimensions(height, width)?;
    let seed = seed.unwrap_or_else(rand::random);
    let cfg = MosaicCfg {
        iterations,
        ..MosaicCfg::default()
    };
    tracing::info!(height, width, seed, iterations, "generate");
    let mut gen = Generator::with_rng(height, width, cfg, StdRng::seed_from_u64(seed));
    Ok((seed, gen.run()))
}

fn draw(
    height: f64,
    width: f64,
    seed: Option<u64>,
    iterations: usize,
    stroke_width: f64,
    out: &Path,
) -> Result<()> {
    let (seed, pieces) = generate(height, width, seed, iterations)?;
    let style = FigureStyle {
        stroke_width,
        ..FigureStyle::default()
    };
    let svg = figure::render_svg(&pieces, &style).context("rendering svg")?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, svg).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(seed, pieces = pieces.len(), out = %out.display(), "figure");
    Ok(())
}

fn report(height: f64, width: f64, seed: u64, pieces: &[Piece]) -> Value {
    let true_area: f64 = pieces.iter().map(Piece::true_area).sum();
    json!({
        "shattered_version": shattered::VERSION,
        "height": height,
        "width": width,
        "seed": seed,
        "pieces": pieces.len(),
        "true_area": true_area,
        "stored_area": pieces.first().map(|p| p.area),
    })
}
