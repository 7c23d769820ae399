use orient_utils::float::*;

#[test]
fn test_approx_eq_small_values() {
    assert!(approx_eq(0.0, 0.0));
    assert!(approx_eq(0.1 + 0.2, 0.3));
    assert!(approx_eq(1.0, 1.0 + 0.5 * GL_EPSILON));
    assert!(!approx_eq(1.0, 1.0 + 2.0 * GL_EPSILON));
    assert!(!approx_eq(0.0, 0.00001));
}

#[test]
fn test_approx_eq_scales_with_magnitude() {
    // 1e-4 apart, which is within tolerance relative to 360.
    assert!(approx_eq(360.0, 360.0001));
    assert!(!approx_eq(360.0, 360.001));
}

#[test]
fn test_approx_eq_by() {
    assert!(approx_eq_by(1.0f32, 1.001, 0.01));
    assert!(!approx_eq_by(1.0f32, 1.1, 0.01));
    assert!(!approx_eq_by(f64::NAN, f64::NAN, GL_EPSILON));
}
