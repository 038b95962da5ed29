//! Host and device renditions of the vertex reduction.
//!
//! The scalar function is the reference every other backend is measured
//! against (see [`ulp`]). AVX2 runs on the host when the CPU supports it;
//! PTX is only ever handed out as source for a device runtime to launch.

// Kernel code uses single-character math names (a, b, n, i), raw string hashes
// for PTX assembly, and unsafe intrinsics inside unsafe fns.
#![allow(
    clippy::many_single_char_names,
    clippy::needless_raw_string_hashes,
    clippy::needless_range_loop,
    clippy::cast_possible_wrap,
    clippy::float_cmp,
    clippy::doc_markdown,
    unsafe_op_in_unsafe_fn
)]

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

pub mod dot;
pub mod ulp;

#[cfg(kani)]
mod kani_proofs;

/// Backend selector for kernel dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Pure Rust scalar reference implementation.
    #[default]
    Scalar,
    /// x86-64 AVX2 SIMD implementation.
    Avx2,
    /// CUDA PTX kernel (returned as assembly source string).
    Ptx,
}

impl Backend {
    pub const ALL: [Backend; 3] = [Backend::Scalar, Backend::Avx2, Backend::Ptx];

    /// Whether this backend can execute on the current host.
    ///
    /// PTX is never host-executable; AVX2 requires both `avx2` and `fma`.
    #[must_use]
    pub fn is_available(self) -> bool {
        match self {
            Backend::Scalar => true,
            Backend::Avx2 => avx2_detected(),
            Backend::Ptx => false,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Scalar => "scalar",
            Backend::Avx2 => "avx2",
            Backend::Ptx => "ptx",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scalar" => Ok(Backend::Scalar),
            "avx2" => Ok(Backend::Avx2),
            "ptx" => Ok(Backend::Ptx),
            other => Err(format!(
                "unknown backend '{other}' (expected scalar, avx2, or ptx)"
            )),
        }
    }
}

#[cfg(target_arch = "x86_64")]
fn avx2_detected() -> bool {
    is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")
}

#[cfg(not(target_arch = "x86_64"))]
fn avx2_detected() -> bool {
    false
}
