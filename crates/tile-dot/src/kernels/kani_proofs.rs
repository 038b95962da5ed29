//! Kani bounded proof harnesses for the dot product vertex.
//!
//! These promote properties that proptest samples to proofs over every
//! input up to the stated bound.
//!
//! All code here is behind `#[cfg(kani)]` and invisible to normal builds.

use super::dot;
use crate::error::KernelError;
use crate::vertex::DotProductVertex;

/// Any length mismatch is rejected before the output cell is touched.
/// Bound: len(a), len(b) <= 4
#[kani::proof]
#[kani::unwind(5)]
fn verify_mismatch_never_writes() {
    let a: [f32; 4] = kani::any();
    let b: [f32; 4] = kani::any();
    let a_len: usize = kani::any();
    let b_len: usize = kani::any();
    kani::assume(a_len <= 4 && b_len <= 4 && a_len != b_len);

    let sentinel: f32 = kani::any();
    let mut out = sentinel;
    let result = DotProductVertex::new(&a[..a_len], &b[..b_len], &mut out).compute();

    assert!(matches!(result, Err(KernelError::InvalidArgument { .. })));
    assert!(out.to_bits() == sentinel.to_bits());
}

/// The empty reduction is exactly `+0.0`.
#[kani::proof]
fn verify_empty_is_positive_zero() {
    let out = dot::dot_scalar(&[], &[]).unwrap();
    assert!(out.to_bits() == 0.0f32.to_bits());
}

/// Bounded operands give a bounded result.
/// Bound: n = 8, elements in [-128, 127]
#[kani::proof]
#[kani::unwind(9)]
fn verify_dot_bounded() {
    const N: usize = 8;
    let a: [f32; N] = kani::any();
    let b: [f32; N] = kani::any();
    kani::assume(a.iter().all(|x| *x >= -128.0 && *x <= 127.0));
    kani::assume(b.iter().all(|x| *x >= -128.0 && *x <= 127.0));

    let out = dot::dot_scalar(&a, &b).unwrap();

    // |dot| <= N * 128 * 128
    let bound = N as f32 * 128.0 * 128.0;
    assert!(out.abs() <= bound, "dot = {}, bound = {}", out, bound);
}

/// Swapping the operands gives the same value. Finite inputs can still
/// overflow to `inf + -inf`, so NaN only has to match NaN, not its payload.
/// Bound: n = 3
#[kani::proof]
#[kani::unwind(4)]
fn verify_dot_commutative() {
    let a: [f32; 3] = kani::any();
    let b: [f32; 3] = kani::any();
    kani::assume(a.iter().chain(b.iter()).all(|x| x.is_finite()));

    let ab = dot::dot_scalar(&a, &b).unwrap();
    let ba = dot::dot_scalar(&b, &a).unwrap();
    assert!(ab == ba || (ab.is_nan() && ba.is_nan()));
}
