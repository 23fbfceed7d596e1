//! Artifact checksum computation and sidecar verification.
//!
//! Digests are computed on demand by streaming the file through the
//! algorithm's incremental hasher, so arbitrarily large artifacts are fine.
//! Expected values come from sidecar files (`a.jar.md5`, `a.jar.sha1`)
//! published next to the artifact.

mod algorithm;
mod sidecar;

pub use algorithm::DigestAlgorithm;
pub use sidecar::{
    sidecar_path, verify_against_sidecar, verify_all, verify_report, SidecarCheck,
};

use crate::error::ChecksumError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 8 * 1024;

/// Compute the digest of a file and return it as lowercase hex.
/// Reads in 8 KiB chunks; memory use does not grow with file size.
pub fn compute_digest(path: &Path, algorithm: DigestAlgorithm) -> Result<String, ChecksumError> {
    tracing::debug!("generate {} checksum for: {}", algorithm, path.display());
    let mut f = File::open(path).map_err(|e| ChecksumError::io(path, e))?;
    let mut hasher = algorithm.hasher();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f.read(&mut buf).map_err(|e| ChecksumError::io(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize_hex())
}

/// SHA-1 of a file as lowercase hex.
pub fn sha1_digest(path: &Path) -> Result<String, ChecksumError> {
    compute_digest(path, DigestAlgorithm::Sha1)
}
