//! Shared helpers for the vertex falsification tests.

#![allow(dead_code)]

use tile_dot::DotProductVertex;

/// Bind a fresh vertex, run one pass, and return what it wrote.
pub fn run_vertex(a: &[f32], b: &[f32]) -> f32 {
    let mut out = f32::NAN;
    DotProductVertex::new(a, b, &mut out)
        .compute()
        .expect("vertex compute failed");
    out
}

/// Dot product accumulated in `f64`, as an oracle for the `f32` kernel.
pub fn dot_f64(a: &[f32], b: &[f32]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| f64::from(x) * f64::from(y))
        .sum()
}

/// Sum of `|a[i] * b[i]|` in `f64`; scales the rounding error bound.
pub fn abs_dot_f64(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| (f64::from(x) * f64::from(y)).abs())
        .sum()
}

/// Deterministic matrix row `r` of width `n`.
pub fn matrix_row(r: usize, n: usize) -> Vec<f32> {
    (0..n)
        .map(|c| ((r * 31 + c * 17 + 5) % 23) as f32 * 0.125 - 1.0)
        .collect()
}

/// Deterministic shared input vector of length `n`.
pub fn shared_vector(n: usize) -> Vec<f32> {
    (0..n).map(|i| ((i * 7 + 3) % 13) as f32 * 0.25 - 1.5).collect()
}
