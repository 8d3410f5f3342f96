//! Axis easing: non-uniform vertex spacing along one axis.

use crate::error::CuboidError;

/// Symmetric ease-in-out on `t ∈ [0, 1]` with exponent `p`.
///
/// `p = 1` is the identity. `p > 1` packs samples toward both ends,
/// `p < 1` packs them toward the middle.
#[inline]
pub fn ease_in_out(t: f64, p: f64) -> f64 {
    if t < 0.5 {
        (2.0 * t).powf(p) / 2.0
    } else {
        1.0 - (2.0 * (1.0 - t)).powf(p) / 2.0
    }
}

/// Cumulative offsets for `count` samples spread over `[0, length]`.
///
/// The first entry is exactly `0` and the last is exactly `length`; the
/// sequence is non-decreasing for any positive exponent.
pub fn ease_offsets(exponent: f64, length: f64, count: usize) -> Result<Vec<f64>, CuboidError> {
    if count < 2 {
        return Err(CuboidError::PointCount(count));
    }
    let last = count - 1;
    let step = 1.0 / last as f64;
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        // Pin t to 1 at the far end; i * step can land a ulp short.
        let t = if i == last { 1.0 } else { i as f64 * step };
        out.push(ease_in_out(t, exponent) * length);
    }
    Ok(out)
}
