//! CLI for mvnrepo: checksum verification and existence probing.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mvnrepo_core::checksum::DigestAlgorithm;
use mvnrepo_core::config;
use std::path::PathBuf;

use commands::{run_checksum, run_exists, run_glob, run_verify};

/// Top-level CLI for mvnrepo.
#[derive(Debug, Parser)]
#[command(name = "mvnrepo")]
#[command(about = "mvnrepo: verify Maven repository artifacts and probe mirrors", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compute the digest of a file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
        /// Digest algorithm (md5, sha1, sha256).
        #[arg(long, short, default_value = "sha1")]
        algorithm: DigestAlgorithm,
    },

    /// Verify artifacts against their .md5 and .sha1 sidecar files.
    Verify {
        /// Artifact files to verify.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Print the result of each algorithm.
        #[arg(long, short)]
        verbose: bool,
    },

    /// Check whether URLs or paths exist (HTTP status 200, or file present).
    Exists {
        /// http(s):// or file:// URLs, or bare paths.
        #[arg(required = true)]
        urls: Vec<String>,
        /// Override the configured request timeout, in seconds.
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },

    /// Print the regex a `*` glob translates to.
    Glob {
        pattern: String,
    },
}

impl CliCommand {
    /// Returns `Ok(false)` when a check ran but did not pass.
    pub async fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let passed = match cli.command {
            CliCommand::Checksum { path, algorithm } => {
                run_checksum(&path, algorithm)?;
                true
            }
            CliCommand::Verify { paths, verbose } => run_verify(&paths, verbose)?,
            CliCommand::Exists { urls, timeout } => {
                let mut probe_cfg = cfg.probe.clone();
                if let Some(secs) = timeout {
                    probe_cfg.timeout_secs = secs;
                }
                run_exists(urls, probe_cfg).await?
            }
            CliCommand::Glob { pattern } => {
                run_glob(&pattern)?;
                true
            }
        };

        Ok(passed)
    }
}

#[cfg(test)]
mod tests;
