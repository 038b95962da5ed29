//! The shipped case files under `cases/` must validate and pass.

use std::path::PathBuf;

use tile_dot::Backend;
use tile_dot::case::{compare_backends, evaluate_all, parse_cases, validate_cases};
use tile_dot::error::Severity;

fn case_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../cases")
        .join(name)
}

const FILES: [&str; 2] = ["dot-product-v1.yaml", "dot-product-edge-v1.yaml"];

#[test]
fn shipped_files_validate() {
    for name in FILES {
        let file = parse_cases(&case_path(name)).unwrap();
        let errors: Vec<_> = validate_cases(&file)
            .into_iter()
            .filter(|v| v.severity == Severity::Error)
            .collect();
        assert!(errors.is_empty(), "{name}: {errors:?}");
    }
}

#[test]
fn shipped_files_pass_on_scalar() {
    for name in FILES {
        let file = parse_cases(&case_path(name)).unwrap();
        for outcome in evaluate_all(&file, Some(Backend::Scalar)) {
            assert!(outcome.passed(), "{name}/{}: {:?}", outcome.name, outcome.result);
        }
    }
}

#[test]
fn shipped_files_avx2_parity() {
    if !Backend::Avx2.is_available() {
        return;
    }
    let file = parse_cases(&case_path("dot-product-v1.yaml")).unwrap();
    for row in compare_backends(&file, Backend::Scalar, Backend::Avx2) {
        assert!(row.agrees(), "{}: {:?} vs {:?}", row.name, row.reference, row.candidate);
    }
}
