//! Scalar helpers for presenting angles and other values.

use num_traits::Float;

/// Checks whether `x` lies within `min..=max`.
#[inline]
pub fn between<T: PartialOrd>(x: T, min: T, max: T) -> bool {
    x >= min && x <= max
}

/// Rounds `num` to two decimal places.
///
/// The value is nudged by [`f64::EPSILON`] before scaling
/// so that inputs like `1.005`, which are stored slightly
/// below their decimal value, still round up. Ties round
/// towards positive infinity, so `-1000.125` becomes
/// `-1000.12`.
#[inline]
pub fn round_up(num: f64) -> f64 {
    round_half_up((num + f64::EPSILON) * 100.0) / 100.0
}

fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Normalizes an angle in degrees into `0.0..360.0`.
///
/// Like [`f64::rem_euclid`], which this builds on, inputs
/// a tiny fraction below a multiple of `-360` may round to
/// exactly `360.0`.
#[inline]
pub fn mod360(degrees: f64) -> f64 {
    (360.0 + degrees).rem_euclid(360.0)
}

/// Restricts `value` to `min..=max`.
///
/// Unlike [`f64::clamp`], this never panics: should `min`
/// exceed `max`, `min` is returned. A NaN `value` is
/// passed through unchanged.
#[inline]
pub fn clamp<T: Float>(value: T, min: T, max: T) -> T {
    if value.is_nan() {
        return value;
    }

    min.max(max.min(value))
}
