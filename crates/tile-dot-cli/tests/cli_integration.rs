use std::path::{Path, PathBuf};
use std::process::Command;

/// Helper to get the path to a shipped case file.
fn case_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../cases")
        .join(name)
}

/// Helper to get the tdot binary path.
fn tdot_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tdot"))
}

/// Write `body` into a fresh temp dir; the dir lives as long as the guard.
fn write_temp(name: &str, body: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    (dir, path)
}

// ================================================================
// validate command
// ================================================================

mod validate {
    use super::*;

    #[test]
    fn shipped_file_is_valid() {
        let output = Command::new(tdot_bin())
            .args(["validate"])
            .arg(case_path("dot-product-v1.yaml"))
            .output()
            .unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("0 error(s)"));
        assert!(stdout.contains("8 case(s) valid."));
        assert!(stdout.contains("  ref: Row-partitioned matrix-vector multiplication"));
    }

    #[test]
    fn unannotated_mismatch_fails() {
        let (_dir, path) = write_temp(
            "bad.yaml",
            "metadata:\n  description: bad\ncases:\n  - name: x\n    a: [1, 2]\n    b: [1]\n    expected: 1.0\n",
        );
        let output = Command::new(tdot_bin()).arg("validate").arg(&path).output().unwrap();
        assert!(!output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("CASE-005"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("error:"));
    }
}

// ================================================================
// eval command
// ================================================================

mod eval {
    use super::*;

    #[test]
    fn known_vector_passes() {
        let output = Command::new(tdot_bin())
            .arg("eval")
            .arg(case_path("dot-product-v1.yaml"))
            .output()
            .unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("[PASS] known-vector [scalar]: 3.2e1"));
        assert!(stdout.contains("0 failed"));
    }

    #[test]
    fn edge_cases_pass() {
        let output = Command::new(tdot_bin())
            .arg("eval")
            .arg(case_path("dot-product-edge-v1.yaml"))
            .output()
            .unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("[PASS] length-mismatch"));
        assert!(stdout.contains("Invalid argument"));
    }

    #[test]
    fn wrong_expectation_fails() {
        let (_dir, path) = write_temp(
            "wrong.yaml",
            "metadata:\n  description: wrong\ncases:\n  - name: off\n    a: [1, 1]\n    b: [1, 1]\n    expected: 3.0\n",
        );
        let output = Command::new(tdot_bin()).arg("eval").arg(&path).output().unwrap();
        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains("[FAIL] off"));
    }

    #[test]
    fn ptx_backend_fails_on_host() {
        let output = Command::new(tdot_bin())
            .arg("eval")
            .arg(case_path("dot-product-v1.yaml"))
            .args(["--backend", "ptx"])
            .output()
            .unwrap();
        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains("Computation failure"));
    }
}

// ================================================================
// parity + ptx commands
// ================================================================

#[test]
fn parity_succeeds_or_skips() {
    let output = Command::new(tdot_bin())
        .arg("parity")
        .arg(case_path("dot-product-v1.yaml"))
        .output()
        .unwrap();
    assert!(output.status.success());
}

#[test]
fn ptx_prints_entry_point() {
    let output = Command::new(tdot_bin()).arg("ptx").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(".entry dot_product_vertex"));
}

#[test]
fn unknown_subcommand_fails() {
    let output = Command::new(tdot_bin()).arg("frobnicate").output().unwrap();
    assert!(!output.status.success());
}
