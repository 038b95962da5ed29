//! The dot product vertex: one kernel instance bound to one `(a, b, out)` triple.
//!
//! An orchestrator builds one vertex per tile, binding a matrix row slice as
//! `a`, the matching slice of the shared vector as `b`, and a distinct output
//! cell as `out`. The borrows make the ownership rules explicit: inputs are
//! shared and read-only, the output is exclusively held by its vertex.

use serde::Deserialize;

use crate::error::KernelError;
use crate::kernels::dot::dot;
use crate::kernels::Backend;

/// What a vertex does with a non-finite result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumericPolicy {
    /// Write whatever IEEE-754 arithmetic produced.
    #[default]
    Propagate,
    /// Fail when finite inputs overflow to a non-finite sum.
    RejectNonFinite,
}

impl NumericPolicy {
    fn check(self, a: &[f32], b: &[f32], value: f32) -> Result<(), KernelError> {
        match self {
            NumericPolicy::Propagate => Ok(()),
            NumericPolicy::RejectNonFinite => {
                // NaN or inf already present in the operands is not an overflow.
                if value.is_finite() || !all_finite(a) || !all_finite(b) {
                    Ok(())
                } else {
                    Err(KernelError::ComputationFailure(format!(
                        "dot product of {} finite elements overflowed to {value}",
                        a.len()
                    )))
                }
            }
        }
    }
}

fn all_finite(v: &[f32]) -> bool {
    v.iter().all(|x| x.is_finite())
}

/// A dot product kernel instance.
///
/// Bindings are fixed at construction. [`compute`](Self::compute) may be
/// called once per pass; it keeps no state between calls.
#[derive(Debug)]
pub struct DotProductVertex<'a> {
    a: &'a [f32],
    b: &'a [f32],
    out: &'a mut f32,
    backend: Backend,
    policy: NumericPolicy,
}

impl<'a> DotProductVertex<'a> {
    /// Bind the operands and output cell, using the scalar backend.
    ///
    /// Lengths are not checked here; a mismatch surfaces from `compute`.
    pub fn new(a: &'a [f32], b: &'a [f32], out: &'a mut f32) -> Self {
        Self {
            a,
            b,
            out,
            backend: Backend::Scalar,
            policy: NumericPolicy::Propagate,
        }
    }

    #[must_use]
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: NumericPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn policy(&self) -> NumericPolicy {
        self.policy
    }

    /// Lengths of the bound operands, `(len(a), len(b))`.
    pub fn operand_lens(&self) -> (usize, usize) {
        (self.a.len(), self.b.len())
    }

    /// Compute `a . b` and write it to the bound output cell.
    ///
    /// On success the output holds the dot product; on failure it is left
    /// exactly as it was.
    ///
    /// # Errors
    ///
    /// [`KernelError::InvalidArgument`] if the operand lengths differ.
    /// [`KernelError::ComputationFailure`] if the backend cannot run on this
    /// host, or the numeric policy rejects the result.
    pub fn compute(&mut self) -> Result<(), KernelError> {
        let value = dot(self.backend, self.a, self.b)?;
        self.policy.check(self.a, self.b, value)?;
        *self.out = value;
        Ok(())
    }
}
