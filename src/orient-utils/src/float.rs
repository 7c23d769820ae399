//! Tolerance-based comparison of floating-point values.

use num_traits::Float;

/// The tolerance used for approximate comparisons.
///
/// Matches `glMatrix.EPSILON` which the renderer's math
/// collaborator uses for its own `equals` checks.
// https://github.com/toji/gl-matrix/blob/master/src/common.js#L7
pub const GL_EPSILON: f64 = 0.000001;

/// Checks whether `a` and `b` are approximately equal
/// within a tolerance of `epsilon`.
///
/// The tolerance is absolute for values with a magnitude
/// up to `1` and scales with the larger magnitude beyond
/// that, so big angles in degrees compare sensibly.
#[inline]
pub fn approx_eq_by<T: Float>(a: T, b: T, epsilon: T) -> bool {
    let scale = T::one().max(a.abs()).max(b.abs());
    (a - b).abs() <= epsilon * scale
}

/// Checks whether `a` and `b` are approximately equal
/// using [`GL_EPSILON`] as the tolerance.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_eq_by(a, b, GL_EPSILON)
}
