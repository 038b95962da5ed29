//! Dot product kernel.
//!
//! out = sum_i a\[i\] * b\[i\]
//!
//! Each function provides one of three backends:
//! - `fn dot_scalar(...)` -- Pure Rust scalar reference (ground truth)
//! - `unsafe fn dot_avx2(...)` -- AVX2 SIMD implementation
//! - `fn dot_ptx() -> &'static str` -- PTX assembly source string

use crate::error::KernelError;

use super::Backend;

/// Reject operands of different lengths before any element is read.
#[inline]
fn check_lengths(a: &[f32], b: &[f32]) -> Result<(), KernelError> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(KernelError::InvalidArgument {
            a_len: a.len(),
            b_len: b.len(),
        })
    }
}

/// Run the dot product on the requested backend.
///
/// # Errors
///
/// [`KernelError::InvalidArgument`] on a length mismatch, and
/// [`KernelError::ComputationFailure`] if `backend` cannot execute on this host.
pub fn dot(backend: Backend, a: &[f32], b: &[f32]) -> Result<f32, KernelError> {
    match backend {
        Backend::Scalar => dot_scalar(a, b),
        #[cfg(target_arch = "x86_64")]
        Backend::Avx2 if backend.is_available() => {
            // SAFETY: avx2 and fma were detected at runtime.
            unsafe { dot_avx2(a, b) }
        }
        Backend::Avx2 => Err(KernelError::ComputationFailure(
            "avx2 backend requires AVX2 and FMA support on this host".to_string(),
        )),
        Backend::Ptx => Err(KernelError::ComputationFailure(
            "ptx backend runs on a device; launch dot_ptx() through a CUDA runtime".to_string(),
        )),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scalar implementation
// ────────────────────────────────────────────────────────────────────────────

/// Inner product of `a` and `b`, accumulated left to right in `f32`.
///
/// An empty pair yields `0.0`.
///
/// # Errors
///
/// Returns [`KernelError::InvalidArgument`] if `a.len() != b.len()`.
pub fn dot_scalar(a: &[f32], b: &[f32]) -> Result<f32, KernelError> {
    check_lengths(a, b)?;
    let mut sum = 0.0f32;
    for i in 0..a.len() {
        sum += a[i] * b[i];
    }
    Ok(sum)
}

// ────────────────────────────────────────────────────────────────────────────
// AVX2 implementation
// ────────────────────────────────────────────────────────────────────────────

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// AVX2 dot product: eight FMA lanes, a horizontal lane sum, then a scalar tail.
///
/// Lane-wise accumulation reorders the additions, so results match
/// [`dot_scalar`] within a few ULP on same-sign data rather than bit for bit.
///
/// # Safety
/// Requires AVX2 and FMA support. Caller must verify with
/// `is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")`.
///
/// # Errors
///
/// Returns [`KernelError::InvalidArgument`] if `a.len() != b.len()`.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2,fma")]
pub unsafe fn dot_avx2(a: &[f32], b: &[f32]) -> Result<f32, KernelError> {
    check_lengths(a, b)?;

    let n = a.len();
    let simd_width = 8;
    let n_simd = n - (n % simd_width);

    let mut acc = _mm256_setzero_ps();
    let mut i = 0usize;
    while i < n_simd {
        let a_vec = _mm256_loadu_ps(a.as_ptr().add(i));
        let b_vec = _mm256_loadu_ps(b.as_ptr().add(i));
        acc = _mm256_fmadd_ps(a_vec, b_vec, acc);
        i += simd_width;
    }

    let mut lanes = [0.0f32; 8];
    _mm256_storeu_ps(lanes.as_mut_ptr(), acc);
    let mut sum = 0.0f32;
    for lane in lanes {
        sum += lane;
    }

    // Scalar tail for remaining elements
    for i in n_simd..n {
        sum += *a.get_unchecked(i) * *b.get_unchecked(i);
    }
    Ok(sum)
}

// ────────────────────────────────────────────────────────────────────────────
// PTX implementation
// ────────────────────────────────────────────────────────────────────────────

/// PTX assembly for the dot product vertex.
///
/// One vertex per launch: thread 0 of block 0 walks the operands in index
/// order with separately rounded `mul.rn`/`add.rn`, so the device result is
/// bit-identical to [`dot_scalar`]. Every other thread exits immediately.
pub fn dot_ptx() -> &'static str {
    r#".version 8.5
.target sm_90
.address_size 64
.visible .entry dot_product_vertex(
    .param .u64 A,
    .param .u64 B,
    .param .u64 OUT,
    .param .u32 N
) {
    .reg .u32 %tx, %bx, %lane, %n, %i;
    .reg .u64 %a_ptr, %b_ptr, %out_ptr, %off64, %a_addr, %b_addr;
    .reg .f32 %acc, %a_val, %b_val, %prod;
    .reg .pred %p_idle, %p_done;

    // Only global thread 0 reduces
    mov.u32 %tx, %tid.x;
    mov.u32 %bx, %ctaid.x;
    or.b32 %lane, %tx, %bx;
    setp.ne.u32 %p_idle, %lane, 0;
    @%p_idle bra EXIT;

    ld.param.u64 %a_ptr, [A];
    ld.param.u64 %b_ptr, [B];
    ld.param.u64 %out_ptr, [OUT];
    ld.param.u32 %n, [N];

    mov.f32 %acc, 0f00000000;
    mov.u32 %i, 0;
LOOP:
    setp.ge.u32 %p_done, %i, %n;
    @%p_done bra STORE;

    mul.wide.u32 %off64, %i, 4;
    add.u64 %a_addr, %a_ptr, %off64;
    add.u64 %b_addr, %b_ptr, %off64;
    ld.global.f32 %a_val, [%a_addr];
    ld.global.f32 %b_val, [%b_addr];
    mul.rn.f32 %prod, %a_val, %b_val;
    add.rn.f32 %acc, %acc, %prod;

    add.u32 %i, %i, 1;
    bra LOOP;

STORE:
    // Single write of the output cell
    st.global.f32 [%out_ptr], %acc;

EXIT:
    ret;
}
"#
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
