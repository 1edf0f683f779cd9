//! Print a few seeded mosaics as quick sanity output.
//!
//! Usage:
//!   cargo run -p shattered --example print_mosaic -- [height] [width]
//!
//! For each sample: piece count, recomputed area sum vs. the rectangle, and the
//! smallest and largest piece.

use shattered::{Generator, Piece};

fn main() {
    let mut args = std::env::args().skip(1);
    let height: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(600.0);
    let width: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(800.0);
    let mut gen = Generator::seeded(height, width, 2021);
    for i in 0..5 {
        let pieces = gen.run();
        let areas: Vec<f64> = pieces.iter().map(Piece::true_area).collect();
        let total: f64 = areas.iter().sum();
        let min = areas.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = areas.iter().cloned().fold(0.0, f64::max);
        println!(
            "mosaic {i}: pieces={}, area={total:.3} (rect {:.3}), min={min:.3}, max={max:.3}",
            pieces.len(),
            height * width
        );
    }
}
