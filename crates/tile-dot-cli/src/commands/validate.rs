use std::path::Path;

use tile_dot::case::{parse_cases, validate_cases};
use tile_dot::error::{CaseError, Severity};

pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = parse_cases(path)?;
    let violations = validate_cases(&file);

    println!("{}", file.metadata.description);
    for reference in &file.metadata.references {
        println!("  ref: {reference}");
    }

    let errors = violations
        .iter()
        .filter(|v| v.severity == Severity::Error)
        .count();
    let warnings = violations.len() - errors;

    for v in &violations {
        println!("{v}");
    }

    println!("\n{errors} error(s), {warnings} warning(s)");

    if errors == 0 {
        println!("{} case(s) valid.", file.cases.len());
        Ok(())
    } else {
        Err(CaseError::Schema(format!("{errors} validation error(s)")).into())
    }
}
