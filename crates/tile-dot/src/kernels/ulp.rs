//! ULP (unit in the last place) comparison of kernel outputs.
//!
//! The scalar kernel is the reference; other backends and fixture
//! expectations are checked against it in ULP steps rather than absolute
//! tolerances, since dot products span many orders of magnitude.

/// Number of representable `f32` values between `a` and `b`.
///
/// Zero is unsigned here: `-0.0` and `0.0` are equal, and either one is a
/// single step from the smallest subnormal of both signs. NaN on either
/// side, or a sign mismatch between non-zero values, yields `u32::MAX`.
#[must_use]
pub fn ulp_distance(a: f32, b: f32) -> u32 {
    if a.is_nan() || b.is_nan() {
        return u32::MAX;
    }
    if a == b {
        return 0;
    }
    if a != 0.0 && b != 0.0 && a.is_sign_negative() != b.is_sign_negative() {
        return u32::MAX;
    }
    // Both keys share a sign (or one is zero), so the gap fits in u32.
    ordered_key(a).abs_diff(ordered_key(b)) as u32
}

/// Bit pattern mapped onto a line where both zeros meet at 0.
fn ordered_key(x: f32) -> i64 {
    let magnitude = i64::from(x.to_bits() & 0x7fff_ffff);
    if x.is_sign_negative() { -magnitude } else { magnitude }
}

/// Whether `actual` lies within `max_ulp` steps of `expected`.
#[must_use]
pub fn within_ulp(actual: f32, expected: f32, max_ulp: u32) -> bool {
    ulp_distance(actual, expected) <= max_ulp
}

/// Assert that two scalar results agree within `max_ulp`.
///
/// # Panics
///
/// Panics with the observed distance if the tolerance is exceeded.
pub fn assert_ulp_eq(actual: f32, expected: f32, max_ulp: u32) {
    let dist = ulp_distance(actual, expected);
    assert!(
        dist <= max_ulp,
        "ULP violation: {actual} vs {expected} (ULP distance {dist}, max {max_ulp})"
    );
}

/// Element-wise [`assert_ulp_eq`] over two output sets.
///
/// # Panics
///
/// Panics on a length mismatch or on the first element pair out of tolerance.
pub fn assert_all_ulp_eq(actual: &[f32], expected: &[f32], max_ulp: u32) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "output count mismatch: {} vs {}",
        actual.len(),
        expected.len()
    );
    for (i, (&va, &vb)) in actual.iter().zip(expected.iter()).enumerate() {
        let dist = ulp_distance(va, vb);
        assert!(
            dist <= max_ulp,
            "ULP violation at instance {i}: {va} vs {vb} (ULP distance {dist}, max {max_ulp})"
        );
    }
}
