//! # tile-dot
//!
//! The per-tile dot product vertex of a row-partitioned matrix-vector
//! multiplication. Each tile binds one matrix row and the shared input vector
//! to a [`DotProductVertex`](vertex::DotProductVertex) and writes one scalar
//! of the result vector.
//!
//! ## Modules
//!
//! - [`vertex`]: The kernel instance: bound operands, one output cell
//! - [`kernels`]: Scalar, AVX2, and PTX renditions of the dot product
//! - [`case`]: YAML case files, validation, and backend parity runs
//! - [`error`]: Kernel and case-file error types

pub mod case;
pub mod error;
pub mod kernels;
pub mod vertex;

pub use error::KernelError;
pub use kernels::Backend;
pub use vertex::{DotProductVertex, NumericPolicy};
