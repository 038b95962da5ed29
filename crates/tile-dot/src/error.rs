use thiserror::Error;

/// Failure reported by a kernel invocation.
///
/// A failed invocation never writes its output cell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    #[error("Invalid argument: length(a) = {a_len} but length(b) = {b_len}")]
    InvalidArgument { a_len: usize, b_len: usize },

    #[error("Computation failure: {0}")]
    ComputationFailure(String),
}

#[derive(Debug, Error)]
pub enum CaseError {
    #[error("Failed to read case file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Case file violation: {0}")]
    Schema(String),
}

#[derive(Debug, Clone)]
pub struct Violation {
    pub severity: Severity,
    pub rule: String,
    pub message: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };
        match &self.location {
            Some(loc) => write!(f, "[{prefix}] {} ({loc}): {}", self.rule, self.message),
            None => write!(f, "[{prefix}] {}: {}", self.rule, self.message),
        }
    }
}
