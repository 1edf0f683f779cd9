//! Mosaic generation by random quadrilateral subdivision.
//!
//! Purpose
//! - Start from the full display rectangle and split a uniformly chosen piece in
//!   two, a fixed number of times. Every split cuts across two opposite edges, so
//!   both children stay closed 4-point shapes and together cover the parent.
//!
//! Model
//! - `Piece`: `[Vec2; 4]` boundary in the order given (never re-sorted), an HSB
//!   color and an `area` recorded at creation. Children copy the parent's `area`,
//!   so the field goes stale after the first split; `Piece::true_area` recomputes.
//! - Cut points are drawn by `sample::divide_line`, which blends a bounded bell
//!   sample with a uniform one (`sample::biased_sample`).
//! - The generator owns its pieces and its RNG; `run` hands out an owned copy.
//!
//! References
//! - Generation loop and split rule: [`Generator::run`], [`Generator::slice_across`]
//! - Cut points and colors: [`sample::divide_line`], [`sample::random_color`]
//! - Area bookkeeping: [`Piece::true_area`], [`crate::polygon_area`]

mod generator;
pub mod sample;
mod types;

pub use generator::{validate_dimensions, Generator, GeneratorError};
pub use types::{Hsba, MosaicCfg, Piece};

#[cfg(test)]
mod tests;
