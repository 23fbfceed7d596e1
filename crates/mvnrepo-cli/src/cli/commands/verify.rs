//! `mvnrepo verify <path>...` – check artifacts against their sidecars.

use anyhow::{Context, Result};
use mvnrepo_core::checksum::{self, SidecarCheck};
use std::path::{Path, PathBuf};

fn describe(check: &SidecarCheck) -> String {
    match check {
        SidecarCheck::Skipped { algorithm } => format!("  {:<6} skipped (no sidecar)", algorithm),
        SidecarCheck::Matched { algorithm } => format!("  {:<6} ok", algorithm),
        SidecarCheck::Mismatched {
            algorithm,
            expected,
            actual,
        } => format!(
            "  {:<6} mismatch: expected {:?}, got {}",
            algorithm, expected, actual
        ),
    }
}

fn verify_one(path: &Path, verbose: bool) -> Result<bool> {
    if !verbose {
        return checksum::verify_all(path).with_context(|| format!("verify {}", path.display()));
    }
    let report =
        checksum::verify_report(path).with_context(|| format!("verify {}", path.display()))?;
    for check in &report {
        println!("{}", describe(check));
    }
    Ok(report.iter().all(SidecarCheck::passed))
}

/// Returns true if every artifact passed.
pub fn run_verify(paths: &[PathBuf], verbose: bool) -> Result<bool> {
    let mut all_ok = true;
    for path in paths {
        let ok = verify_one(path, verbose)?;
        println!("{:<7} {}", if ok { "OK" } else { "FAILED" }, path.display());
        all_ok &= ok;
    }
    Ok(all_ok)
}
