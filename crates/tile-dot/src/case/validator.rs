use std::collections::HashSet;

use crate::case::types::{CaseFile, ExpectedError};
use crate::error::{Severity, Violation};

/// Validate a parsed case file for completeness and consistency.
///
/// Returns a list of violations. If any violation has
/// [`Severity::Error`], the file is considered invalid.
pub fn validate_cases(file: &CaseFile) -> Vec<Violation> {
    let mut violations = Vec::new();

    if file.metadata.description.trim().is_empty() {
        violations.push(Violation {
            severity: Severity::Error,
            rule: "CASE-001".to_string(),
            message: "metadata.description must not be empty".to_string(),
            location: Some("metadata.description".to_string()),
        });
    }

    if file.cases.is_empty() {
        violations.push(Violation {
            severity: Severity::Warning,
            rule: "CASE-002".to_string(),
            message: "file defines no cases".to_string(),
            location: Some("cases".to_string()),
        });
    }

    let mut seen = HashSet::new();
    for (i, case) in file.cases.iter().enumerate() {
        let loc = format!("cases[{i}]");

        if case.name.trim().is_empty() {
            violations.push(Violation {
                severity: Severity::Error,
                rule: "CASE-003".to_string(),
                message: format!("{loc}.name must not be empty"),
                location: Some(format!("{loc}.name")),
            });
        } else if !seen.insert(case.name.as_str()) {
            violations.push(Violation {
                severity: Severity::Error,
                rule: "CASE-004".to_string(),
                message: format!("duplicate case name '{}'", case.name),
                location: Some(loc.clone()),
            });
        }

        let mismatched = case.a.len() != case.b.len();
        let expects_invalid = case.expect_error == Some(ExpectedError::InvalidArgument);
        if mismatched && !expects_invalid {
            violations.push(Violation {
                severity: Severity::Error,
                rule: "CASE-005".to_string(),
                message: format!(
                    "'{}' has length(a) = {} but length(b) = {} without expect_error: invalid-argument",
                    case.name,
                    case.a.len(),
                    case.b.len()
                ),
                location: Some(loc.clone()),
            });
        }
        if !mismatched && expects_invalid {
            violations.push(Violation {
                severity: Severity::Error,
                rule: "CASE-006".to_string(),
                message: format!(
                    "'{}' expects invalid-argument but its operands have equal length",
                    case.name
                ),
                location: Some(loc.clone()),
            });
        }

        if case.expected.is_some() && case.expect_error.is_some() {
            violations.push(Violation {
                severity: Severity::Error,
                rule: "CASE-007".to_string(),
                message: format!("'{}' sets both expected and expect_error", case.name),
                location: Some(loc.clone()),
            });
        }

        if case.expected.is_none() && case.expect_error.is_none() {
            violations.push(Violation {
                severity: Severity::Warning,
                rule: "CASE-008".to_string(),
                message: format!("'{}' has no expected value; result is not checked", case.name),
                location: Some(loc),
            });
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::parse_cases_str;

    fn errors(violations: &[Violation]) -> Vec<&str> {
        violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .map(|v| v.rule.as_str())
            .collect()
    }

    #[test]
    fn valid_file_has_no_errors() {
        let file = parse_cases_str(
            r#"
metadata:
  description: "ok"
cases:
  - name: known
    a: [1, 2, 3]
    b: [4, 5, 6]
    expected: 32.0
  - name: mismatch
    a: [1, 2, 3]
    b: [1, 2]
    expect_error: invalid-argument
"#,
        )
        .unwrap();
        assert!(validate_cases(&file).is_empty());
    }

    #[test]
    fn unannotated_mismatch_is_error() {
        let file = parse_cases_str(
            r#"
metadata:
  description: "bad"
cases:
  - name: oops
    a: [1, 2, 3]
    b: [1, 2]
    expected: 5.0
"#,
        )
        .unwrap();
        assert_eq!(errors(&validate_cases(&file)), vec!["CASE-005"]);
    }

    #[test]
    fn duplicate_and_empty_names() {
        let file = parse_cases_str(
            r#"
metadata:
  description: "dupes"
cases:
  - name: x
    a: [1]
    b: [1]
    expected: 1.0
  - name: x
    a: [2]
    b: [2]
    expected: 4.0
  - name: ""
    a: []
    b: []
    expected: 0.0
"#,
        )
        .unwrap();
        assert_eq!(errors(&validate_cases(&file)), vec!["CASE-004", "CASE-003"]);
    }

    #[test]
    fn conflicting_expectations() {
        let file = parse_cases_str(
            r#"
metadata:
  description: "conflict"
cases:
  - name: both
    a: [1]
    b: [1]
    expected: 1.0
    expect_error: computation-failure
"#,
        )
        .unwrap();
        assert_eq!(errors(&validate_cases(&file)), vec!["CASE-007"]);
    }

    #[test]
    fn spurious_invalid_argument_expectation() {
        let file = parse_cases_str(
            r#"
metadata:
  description: "spurious"
cases:
  - name: equal
    a: [1, 2]
    b: [3, 4]
    expect_error: invalid-argument
"#,
        )
        .unwrap();
        assert_eq!(errors(&validate_cases(&file)), vec!["CASE-006"]);
    }

    #[test]
    fn warnings_for_unchecked_and_empty() {
        let file = parse_cases_str(
            r#"
metadata:
  description: "warn"
cases:
  - name: unchecked
    a: [1]
    b: [1]
"#,
        )
        .unwrap();
        let v = validate_cases(&file);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].severity, Severity::Warning);
        assert_eq!(v[0].rule, "CASE-008");

        let empty = parse_cases_str("metadata:\n  description: \" \"\n").unwrap();
        let v = validate_cases(&empty);
        assert_eq!(errors(&v), vec!["CASE-001"]);
        assert!(v.iter().any(|x| x.rule == "CASE-002"));
    }
}
