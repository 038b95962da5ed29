//! Evaluate case files through [`DotProductVertex`] and compare backends.

use crate::case::types::{CaseFile, ExpectedError, KernelCase};
use crate::error::KernelError;
use crate::kernels::Backend;
use crate::kernels::ulp::{ulp_distance, within_ulp};
use crate::vertex::DotProductVertex;

/// Result of running one case.
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub name: String,
    pub backend: Backend,
    pub result: Result<f32, KernelError>,
    pub expected: Option<f32>,
    pub expect_error: Option<ExpectedError>,
    pub max_ulp: u32,
}

impl CaseOutcome {
    /// ULP distance to `expected`, when both a result and an expectation exist.
    pub fn ulp(&self) -> Option<u32> {
        match (&self.result, self.expected) {
            (Ok(actual), Some(expected)) => Some(ulp_distance(*actual, expected)),
            _ => None,
        }
    }

    pub fn passed(&self) -> bool {
        match (&self.result, self.expect_error) {
            (Ok(actual), None) => self
                .expected
                .is_none_or(|expected| within_ulp(*actual, expected, self.max_ulp)),
            (Err(KernelError::InvalidArgument { .. }), Some(ExpectedError::InvalidArgument))
            | (Err(KernelError::ComputationFailure(_)), Some(ExpectedError::ComputationFailure)) => {
                true
            }
            _ => false,
        }
    }

    /// Whether the failure comes from the host lacking the backend rather
    /// than from the case itself.
    pub fn backend_unavailable(&self) -> bool {
        !self.backend.is_available() && matches!(self.result, Err(KernelError::ComputationFailure(_)))
    }
}

/// Run one case through a freshly bound vertex.
///
/// `backend` overrides the case and file defaults when given.
pub fn evaluate_case(file: &CaseFile, case: &KernelCase, backend: Option<Backend>) -> CaseOutcome {
    let backend = backend.unwrap_or_else(|| case.backend_or(&file.defaults));
    let policy = case.policy_or(&file.defaults);

    let mut out = 0.0f32;
    let status = DotProductVertex::new(&case.a, &case.b, &mut out)
        .with_backend(backend)
        .with_policy(policy)
        .compute();
    let result = status.map(|()| out);

    match &result {
        Ok(value) => tracing::debug!(case = %case.name, %backend, value, "case computed"),
        Err(e) => tracing::debug!(case = %case.name, %backend, error = %e, "case failed"),
    }

    CaseOutcome {
        name: case.name.clone(),
        backend,
        result,
        expected: case.expected,
        expect_error: case.expect_error,
        max_ulp: case.max_ulp_or(&file.defaults),
    }
}

/// Run every case in file order.
pub fn evaluate_all(file: &CaseFile, backend: Option<Backend>) -> Vec<CaseOutcome> {
    file.cases
        .iter()
        .map(|case| evaluate_case(file, case, backend))
        .collect()
}

/// One case run on a reference and a candidate backend.
#[derive(Debug, Clone)]
pub struct ParityRow {
    pub name: String,
    pub reference: Result<f32, KernelError>,
    pub candidate: Result<f32, KernelError>,
    pub max_ulp: u32,
}

impl ParityRow {
    /// ULP distance between the two results, if both succeeded.
    pub fn ulp(&self) -> Option<u32> {
        match (&self.reference, &self.candidate) {
            (Ok(r), Ok(c)) => Some(ulp_distance(*r, *c)),
            _ => None,
        }
    }

    /// Both backends agree: equal errors, or values within `max_ulp`.
    pub fn agrees(&self) -> bool {
        match (&self.reference, &self.candidate) {
            (Err(r), Err(c)) => r == c,
            (Ok(r), Ok(c)) => within_ulp(*c, *r, self.max_ulp),
            _ => false,
        }
    }
}

/// Compare `candidate` against `reference` on every case.
pub fn compare_backends(file: &CaseFile, reference: Backend, candidate: Backend) -> Vec<ParityRow> {
    file.cases
        .iter()
        .map(|case| ParityRow {
            name: case.name.clone(),
            reference: evaluate_case(file, case, Some(reference)).result,
            candidate: evaluate_case(file, case, Some(candidate)).result,
            max_ulp: case.max_ulp_or(&file.defaults),
        })
        .collect()
}
