//! `mvnrepo checksum <path>` – print the digest of a file.

use anyhow::Result;
use mvnrepo_core::checksum::{self, DigestAlgorithm};
use std::path::Path;

pub fn run_checksum(path: &Path, algorithm: DigestAlgorithm) -> Result<()> {
    let digest = checksum::compute_digest(path, algorithm)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
