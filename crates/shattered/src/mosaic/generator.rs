use super::sample::{divide_line, random_color};
use super::types::{MosaicCfg, Piece};
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Upper bound on the piece buffer reserved up front; larger runs grow on demand.
const MAX_PREALLOC: usize = 4096;

/// Error returned by the validating constructor. The plain constructors never fail.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    InvalidDimensions { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { reason } => write!(f, "invalid dimensions: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Rejects negative or non-finite dimensions. Zero is allowed (collapsed mosaic).
pub fn validate_dimensions(height: f64, width: f64) -> Result<(), GeneratorError> {
    for (name, v) in [("height", height), ("width", width)] {
        if !v.is_finite() {
            return Err(GeneratorError::invalid(format!("{name} must be finite")));
        }
        if v < 0.0 {
            return Err(GeneratorError::invalid(format!("{name} must be >= 0")));
        }
    }
    Ok(())
}

/// Subdivides a `width × height` rectangle into a mosaic of quadrilaterals.
///
/// Invariants:
/// - `height`/`width` are fixed at construction; zero or negative values are
///   accepted and produce collapsed or mirrored geometry.
/// - After `reset` there is one piece; each split adds one, so `run` returns
///   `cfg.iterations + 1` pieces.
#[derive(Debug)]
pub struct Generator {
    height: f64,
    width: f64,
    cfg: MosaicCfg,
    pieces: Vec<Piece>,
    rng: StdRng,
}

impl Generator {
    /// Generator with default configuration and an entropy-seeded RNG.
    pub fn new(height: f64, width: f64) -> Self {
        Self::with_rng(height, width, MosaicCfg::default(), StdRng::from_entropy())
    }

    /// Like `new`, but rejects negative or non-finite dimensions.
    pub fn checked(height: f64, width: f64) -> Result<Self, GeneratorError> {
        validate_dimensions(height, width)?;
        Ok(Self::new(height, width))
    }

    /// Reproducible generator: same seed, same sequence of mosaics.
    pub fn seeded(height: f64, width: f64, seed: u64) -> Self {
        Self::with_rng(
            height,
            width,
            MosaicCfg::default(),
            StdRng::seed_from_u64(seed),
        )
    }

    pub fn with_rng(height: f64, width: f64, cfg: MosaicCfg, rng: StdRng) -> Self {
        let capacity = cfg.iterations.saturating_add(1).min(MAX_PREALLOC);
        Self {
            height,
            width,
            cfg,
            pieces: Vec::with_capacity(capacity),
            rng,
        }
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn cfg(&self) -> &MosaicCfg {
        &self.cfg
    }

    /// Current pieces (the last `run` result, or the single piece after `reset`).
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Drop all pieces and start over from the full rectangle with a fresh color.
    pub fn reset(&mut self) {
        self.pieces.clear();
        let color = random_color(&mut self.rng, &self.cfg);
        self.pieces
            .push(Piece::rectangle(self.width, self.height, color));
    }

    /// Build a new mosaic from scratch and return an owned copy of it.
    pub fn run(&mut self) -> Vec<Piece> {
        self.reset();
        for _ in 0..self.cfg.iterations {
            let idx = self.rng.gen_range(0..self.pieces.len());
            let piece = self.pieces.swap_remove(idx);
            let halves = self.slice(&piece);
            self.pieces.extend(halves);
        }
        tracing::debug!(
            width = self.width,
            height = self.height,
            pieces = self.pieces.len(),
            "mosaic generated"
        );
        self.pieces.clone()
    }

    /// Split `piece` across a random pair of opposite edges.
    pub fn slice(&mut self, piece: &Piece) -> [Piece; 2] {
        let edge = self.rng.gen_range(0..4);
        self.slice_across(piece, edge)
    }

    /// Split `piece` across edge `edge` and the edge opposite to it.
    ///
    /// The first half keeps the parent's color; the second gets a new one. Both
    /// inherit the parent's `area` unchanged.
    pub fn slice_across(&mut self, piece: &Piece, edge: usize) -> [Piece; 2] {
        let sel1 = edge % 4;
        let sel2 = (sel1 + 2) % 4;
        let (a1, b1) = piece.edge(sel1);
        let (a2, b2) = piece.edge(sel2);
        let cut1 = self.divide_line(a1, b1);
        let cut2 = self.divide_line(a2, b2);
        tracing::trace!(edge = sel1, ?cut1, ?cut2, "slice");

        let mut kept = *piece;
        kept.points[(sel1 + 1) % 4] = cut1;
        kept.points[sel2] = cut2;

        let mut fresh = *piece;
        fresh.points[sel1] = cut1;
        fresh.points[(sel2 + 1) % 4] = cut2;
        fresh.color = random_color(&mut self.rng, &self.cfg);

        [kept, fresh]
    }

    /// Random cut point on `p1`–`p2` using this generator's RNG and strengths.
    #[inline]
    pub fn divide_line(&mut self, p1: Vector2<f64>, p2: Vector2<f64>) -> Vector2<f64> {
        divide_line(&mut self.rng, p1, p2, &self.cfg)
    }
}
