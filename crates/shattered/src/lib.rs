//! Shattered: procedural mosaics by repeated quadrilateral splitting.
//!
//! Entry points: [`Generator`] for whole mosaics, [`mosaic::sample`] for the
//! cut-point and color draws, [`polygon_area`] for area checks.
//!
//! API Policy
//! - The library exposes the generator and its sampling helpers; the `cli` crate
//!   is the only in-tree consumer. Breaking changes are fine when they improve
//!   clarity.
//! - The core performs no I/O. Rendering and timing belong to callers.

pub mod mosaic;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use mosaic::{Generator, GeneratorError, Hsba, MosaicCfg, Piece};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::mosaic::sample::{biased_sample, divide_line, random_color};
    pub use crate::mosaic::{Generator, GeneratorError, Hsba, MosaicCfg, Piece};
    pub use crate::{polygon_area, Vec2};
}

/// Signed area of a closed polygon (shoelace formula).
/// Positive for counterclockwise vertex order in a y-up frame, negative otherwise.
#[inline]
pub fn polygon_area(points: &[Vec2<f64>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        twice += p.x * q.y - q.x * p.y;
    }
    0.5 * twice
}
