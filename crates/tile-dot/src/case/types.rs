use serde::Deserialize;

use crate::kernels::Backend;
use crate::vertex::NumericPolicy;

/// A YAML file of dot product kernel cases.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseFile {
    pub metadata: CaseMetadata,
    #[serde(default)]
    pub defaults: CaseDefaults,
    #[serde(default)]
    pub cases: Vec<KernelCase>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaseMetadata {
    pub description: String,
    #[serde(default)]
    pub references: Vec<String>,
}

/// Settings inherited by every case that does not override them.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseDefaults {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default = "default_max_ulp")]
    pub max_ulp: u32,
    #[serde(default)]
    pub policy: NumericPolicy,
}

fn default_max_ulp() -> u32 {
    4
}

impl Default for CaseDefaults {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            max_ulp: default_max_ulp(),
            policy: NumericPolicy::default(),
        }
    }
}

/// One vertex invocation: operands plus the outcome it must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct KernelCase {
    pub name: String,
    pub a: Vec<f32>,
    pub b: Vec<f32>,
    #[serde(default)]
    pub expected: Option<f32>,
    #[serde(default)]
    pub expect_error: Option<ExpectedError>,
    #[serde(default)]
    pub backend: Option<Backend>,
    #[serde(default)]
    pub max_ulp: Option<u32>,
    #[serde(default)]
    pub policy: Option<NumericPolicy>,
}

/// Error class a case expects the vertex to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpectedError {
    InvalidArgument,
    ComputationFailure,
}

impl KernelCase {
    pub fn backend_or(&self, defaults: &CaseDefaults) -> Backend {
        self.backend.unwrap_or(defaults.backend)
    }

    pub fn max_ulp_or(&self, defaults: &CaseDefaults) -> u32 {
        self.max_ulp.unwrap_or(defaults.max_ulp)
    }

    pub fn policy_or(&self, defaults: &CaseDefaults) -> NumericPolicy {
        self.policy.unwrap_or(defaults.policy)
    }
}
