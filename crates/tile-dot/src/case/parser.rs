use std::path::Path;

use crate::case::types::CaseFile;
use crate::error::CaseError;

/// Parse a YAML case file into a [`CaseFile`].
///
/// # Errors
///
/// Returns [`CaseError::Io`] if the file cannot be read,
/// or [`CaseError::Yaml`] if the YAML is malformed.
pub fn parse_cases(path: &Path) -> Result<CaseFile, CaseError> {
    let content = std::fs::read_to_string(path)?;
    let file = parse_cases_str(&content)?;
    tracing::debug!(path = %path.display(), cases = file.cases.len(), "parsed case file");
    Ok(file)
}

/// Parse a YAML case file from a string.
pub fn parse_cases_str(yaml: &str) -> Result<CaseFile, CaseError> {
    let file: CaseFile = serde_yaml::from_str(yaml)?;
    Ok(file)
}
