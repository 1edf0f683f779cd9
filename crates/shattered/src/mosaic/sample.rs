//! Random sampling for cut points and piece colors.
//!
//! All functions are pure in the sense that the only state they touch is the
//! random source passed in, so tests can drive them with a seeded `StdRng`.

use super::types::{Hsba, MosaicCfg};
use nalgebra::Vector2;
use rand::distributions::Open01;
use rand::Rng;
use rand_distr::StandardNormal;

/// Standard deviation of the bell sample on the unit interval. A bounded gaussian
/// over `[0, 1]` with mean 0.5 puts three deviations on either side.
const BELL_SIGMA: f64 = 1.0 / 6.0;

/// Draws of the blend before giving up on landing strictly inside the range.
const MAX_REDRAWS: usize = 16;

/// Sample in `(lo, hi)` pulled toward the middle by `strength`.
///
/// `strength = 0` is uniform on `(lo, hi)`, `strength = 1` is a bell curve
/// centered on `(lo + hi) / 2` and clamped to the range. Intermediate values
/// blend the two samples linearly. Returns `lo` when the range is empty.
///
/// A blend that rounds onto an endpoint is redrawn. When `hi - lo` is only a
/// few ulps of the endpoints, redraws may keep failing; after `MAX_REDRAWS`
/// the midpoint is returned, which can itself round to an endpoint if no double
/// lies strictly between `lo` and `hi`.
pub fn biased_sample<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64, strength: f64) -> f64 {
    if !(hi > lo) {
        return lo;
    }
    let strength = strength.clamp(0.0, 1.0);
    for _ in 0..MAX_REDRAWS {
        let z: f64 = rng.sample(StandardNormal);
        let roll = (0.5 + z * BELL_SIGMA).clamp(0.0, 1.0);
        let bell = lo + roll * (hi - lo);
        let u: f64 = rng.sample(Open01);
        let uniform = lo + u * (hi - lo);
        let v = bell * strength + uniform * (1.0 - strength);
        if v > lo && v < hi {
            return v;
        }
    }
    lo + 0.5 * (hi - lo)
}

/// Random point on the segment `p1`–`p2`, used as a cut location.
///
/// - Nonzero x-extent: x is sampled between the endpoint x values with
///   `cfg.slope_strength`, y follows the line through both points.
/// - Vertical segment: x is kept, y is sampled with `cfg.vertical_strength`.
///
/// The two branches keep the slope division away from a zero run. A segment
/// collapsed to a single point returns that point.
pub fn divide_line<R: Rng + ?Sized>(
    rng: &mut R,
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    cfg: &MosaicCfg,
) -> Vector2<f64> {
    let (a, b) = if p1.x < p2.x { (p1, p2) } else { (p2, p1) };
    let run = b.x - a.x;
    if run != 0.0 {
        let rise = b.y - a.y;
        let x = biased_sample(rng, a.x, b.x, cfg.slope_strength);
        let y = (rise / run) * (x - a.x) + a.y;
        Vector2::new(x, y)
    } else {
        let (lo, hi) = if a.y < b.y { (a.y, b.y) } else { (b.y, a.y) };
        Vector2::new(a.x, biased_sample(rng, lo, hi, cfg.vertical_strength))
    }
}

/// Random opaque color: any hue, saturation and brightness from the configured
/// ranges (defaults keep out washed-out and dark colors).
pub fn random_color<R: Rng + ?Sized>(rng: &mut R, cfg: &MosaicCfg) -> Hsba {
    let hue = rng.gen_range(0.0..=1.0);
    let saturation = sample_closed(rng, cfg.saturation);
    let brightness = sample_closed(rng, cfg.brightness);
    Hsba::opaque(hue, saturation, brightness)
}

#[inline]
fn sample_closed<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}
