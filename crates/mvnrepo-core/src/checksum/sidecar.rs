//! Comparison of live digests against sidecar checksum files.
//!
//! A missing sidecar means "skip", not "fail": repositories do not publish
//! every checksum type for every artifact. The comparison is byte-exact; a
//! trailing newline or uppercase hex in the sidecar is a mismatch.

use super::{compute_digest, DigestAlgorithm};
use crate::error::ChecksumError;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of checking one algorithm's sidecar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidecarCheck {
    /// No sidecar for this algorithm.
    Skipped { algorithm: DigestAlgorithm },
    Matched { algorithm: DigestAlgorithm },
    /// Sidecar content differs from the computed digest.
    Mismatched {
        algorithm: DigestAlgorithm,
        expected: String,
        actual: String,
    },
}

impl SidecarCheck {
    pub fn algorithm(&self) -> DigestAlgorithm {
        match self {
            SidecarCheck::Skipped { algorithm }
            | SidecarCheck::Matched { algorithm }
            | SidecarCheck::Mismatched { algorithm, .. } => *algorithm,
        }
    }

    /// True unless the sidecar was present and disagreed.
    pub fn passed(&self) -> bool {
        !matches!(self, SidecarCheck::Mismatched { .. })
    }
}

/// `<path>.<algorithm name>`, e.g. `a.jar` -> `a.jar.sha1`.
pub fn sidecar_path(path: &Path, algorithm: DigestAlgorithm) -> PathBuf {
    let mut s = OsString::from(path.as_os_str());
    s.push(".");
    s.push(algorithm.name());
    PathBuf::from(s)
}

/// Reads the sidecar; `None` if it does not exist.
fn read_sidecar(path: &Path) -> Result<Option<Vec<u8>>, ChecksumError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ChecksumError::io(path, e)),
    }
}

fn check_sidecar(path: &Path, algorithm: DigestAlgorithm) -> Result<SidecarCheck, ChecksumError> {
    let sidecar = sidecar_path(path, algorithm);
    let expected = match read_sidecar(&sidecar)? {
        Some(bytes) => bytes,
        None => {
            tracing::debug!("checksum file {} doesn't exist, skipping", sidecar.display());
            return Ok(SidecarCheck::Skipped { algorithm });
        }
    };

    tracing::debug!("checking {} checksum of {}", algorithm, path.display());
    let actual = compute_digest(path, algorithm)?;
    if expected == actual.as_bytes() {
        tracing::debug!("{} checksum of {} OK", algorithm, path.display());
        Ok(SidecarCheck::Matched { algorithm })
    } else {
        let expected = String::from_utf8_lossy(&expected).into_owned();
        tracing::warn!(
            "{} checksum mismatch for {}: expected {:?}, got {}",
            algorithm,
            path.display(),
            expected,
            actual
        );
        Ok(SidecarCheck::Mismatched {
            algorithm,
            expected,
            actual,
        })
    }
}

/// Check `path` against `<path>.<algorithm>`.
///
/// Returns `true` when the sidecar is absent or its content equals the
/// computed digest exactly. Read failures on either file are errors, never
/// `false`.
pub fn verify_against_sidecar(
    path: &Path,
    algorithm: DigestAlgorithm,
) -> Result<bool, ChecksumError> {
    Ok(check_sidecar(path, algorithm)?.passed())
}

/// Check the MD5 and SHA-1 sidecars of an existing artifact.
///
/// Both must pass or be skipped. Stops at the first mismatch.
pub fn verify_all(path: &Path) -> Result<bool, ChecksumError> {
    ensure_exists(path)?;
    for algorithm in DigestAlgorithm::SIDECAR_DEFAULTS {
        if !verify_against_sidecar(path, algorithm)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Like `verify_all` but reports every algorithm instead of a single bool.
pub fn verify_report(path: &Path) -> Result<Vec<SidecarCheck>, ChecksumError> {
    ensure_exists(path)?;
    DigestAlgorithm::SIDECAR_DEFAULTS
        .iter()
        .map(|&algorithm| check_sidecar(path, algorithm))
        .collect()
}

fn ensure_exists(path: &Path) -> Result<(), ChecksumError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ChecksumError::Precondition(path.to_path_buf()))
    }
}
