use std::path::Path;

use tile_dot::Backend;
use tile_dot::case::{evaluate_all, parse_cases};

pub fn run(path: &Path, backend: Option<Backend>) -> Result<(), Box<dyn std::error::Error>> {
    let file = parse_cases(path)?;
    let outcomes = evaluate_all(&file, backend);

    let mut failed = 0usize;
    for outcome in &outcomes {
        let status = if outcome.passed() { "PASS" } else { "FAIL" };
        let result = match &outcome.result {
            Ok(v) => format!("{v:e}"),
            Err(e) => e.to_string(),
        };
        let detail = match (outcome.expected, outcome.ulp()) {
            (Some(expected), Some(ulp)) => {
                format!(" (expected {expected:e}, {ulp} ULP, max {})", outcome.max_ulp)
            }
            _ => String::new(),
        };
        println!(
            "[{status}] {} [{}]: {result}{detail}",
            outcome.name, outcome.backend
        );
        if !outcome.passed() {
            failed += 1;
            if outcome.backend_unavailable() {
                tracing::warn!(case = %outcome.name, backend = %outcome.backend, "backend unavailable on this host");
            }
        }
    }

    println!("\n{} passed, {failed} failed", outcomes.len() - failed);

    if failed == 0 {
        Ok(())
    } else {
        Err(format!("{failed} case(s) failed").into())
    }
}
