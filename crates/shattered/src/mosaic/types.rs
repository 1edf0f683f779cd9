//! Basic mosaic types: pieces, colors and the sampling configuration.
//!
//! - `MosaicCfg`: iteration count, cut-point bias strengths and color ranges.
//! - `Piece`: closed quadrilateral with a fill color and a creation-time area.
//! - `Hsba`: hue/saturation/brightness color with alpha, plus RGB conversion.

use nalgebra::Vector2;

/// Generator configuration.
///
/// Defaults reproduce the classic look: 50 splits, mild center bias on sloped
/// edges (0.1), stronger bias on vertical edges (0.5), vivid colors only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MosaicCfg {
    /// Number of split iterations per `run`; the result has `iterations + 1` pieces.
    pub iterations: usize,
    /// Bell-vs-uniform blend weight for cuts on edges with a defined slope.
    pub slope_strength: f64,
    /// Blend weight for cuts on vertical edges (zero x-extent).
    pub vertical_strength: f64,
    /// Inclusive saturation range for `random_color`.
    pub saturation: (f64, f64),
    /// Inclusive brightness range for `random_color`.
    pub brightness: (f64, f64),
}

impl Default for MosaicCfg {
    fn default() -> Self {
        Self {
            iterations: 50,
            slope_strength: 0.1,
            vertical_strength: 0.5,
            saturation: (0.5, 1.0),
            brightness: (0.5, 1.0),
        }
    }
}

/// Color in HSB space with alpha; every component lives in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsba {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub alpha: f64,
}

impl Hsba {
    #[inline]
    pub fn new(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            alpha,
        }
    }

    #[inline]
    pub fn opaque(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self::new(hue, saturation, brightness, 1.0)
    }

    /// Straight-alpha RGBA components in [0, 1]. Hue 1.0 wraps to red like hue 0.0.
    pub fn to_rgba(&self) -> [f64; 4] {
        let s = self.saturation.clamp(0.0, 1.0);
        let v = self.brightness.clamp(0.0, 1.0);
        let h6 = self.hue.rem_euclid(1.0) * 6.0;
        let sector = h6.floor();
        let f = h6 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        let (r, g, b) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        [r, g, b, self.alpha.clamp(0.0, 1.0)]
    }

    /// RGBA bytes, rounded.
    pub fn to_rgba_u8(&self) -> [u8; 4] {
        self.to_rgba().map(|c| (c * 255.0).round() as u8)
    }
}

/// A quadrilateral region of the display area.
///
/// Invariants:
/// - Exactly four points (enforced by the array type), walked in a consistent
///   winding order; edge `i` joins `points[i]` and `points[(i + 1) % 4]`.
/// - `area` is set when the root piece is created and copied into children on
///   every split; it is not the current area of a sliced piece.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Piece {
    pub points: [Vector2<f64>; 4],
    pub color: Hsba,
    pub area: f64,
}

impl Piece {
    /// Full rectangle with corners (0,0), (w,0), (w,h), (0,h) and area `w * h`.
    pub fn rectangle(width: f64, height: f64, color: Hsba) -> Self {
        Self {
            points: [
                Vector2::new(0.0, 0.0),
                Vector2::new(width, 0.0),
                Vector2::new(width, height),
                Vector2::new(0.0, height),
            ],
            color,
            area: width * height,
        }
    }

    /// Endpoints of edge `i` (taken mod 4).
    #[inline]
    pub fn edge(&self, i: usize) -> (Vector2<f64>, Vector2<f64>) {
        (self.points[i % 4], self.points[(i + 1) % 4])
    }

    /// Shoelace area recomputed from the current points (unsigned).
    #[inline]
    pub fn true_area(&self) -> f64 {
        crate::polygon_area(&self.points).abs()
    }
}
