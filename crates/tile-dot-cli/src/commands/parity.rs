use std::path::Path;

use tile_dot::Backend;
use tile_dot::case::{compare_backends, parse_cases};

pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !Backend::Avx2.is_available() {
        println!("AVX2/FMA not available on this host; parity check skipped.");
        return Ok(());
    }

    let file = parse_cases(path)?;
    let rows = compare_backends(&file, Backend::Scalar, Backend::Avx2);

    let mut mismatches = 0usize;
    for row in &rows {
        let verdict = if row.agrees() { "OK" } else { "MISMATCH" };
        match row.ulp() {
            Some(ulp) => println!("[{verdict}] {}: {ulp} ULP (max {})", row.name, row.max_ulp),
            None => println!("[{verdict}] {}: {:?} vs {:?}", row.name, row.reference, row.candidate),
        }
        if !row.agrees() {
            mismatches += 1;
        }
    }

    tracing::info!(cases = rows.len(), mismatches, "scalar/avx2 parity");
    if mismatches == 0 {
        Ok(())
    } else {
        Err(format!("{mismatches} case(s) differ between scalar and avx2").into())
    }
}
