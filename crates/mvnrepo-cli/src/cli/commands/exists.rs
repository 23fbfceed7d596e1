//! `mvnrepo exists <url>...` – probe several locations concurrently.

use anyhow::{Context, Result};
use mvnrepo_core::config::ProbeConfig;
use mvnrepo_core::probe::ResourceProbe;

/// Prints `yes`/`no` per location in input order. Returns true if all exist.
pub async fn run_exists(urls: Vec<String>, cfg: ProbeConfig) -> Result<bool> {
    let probe = ResourceProbe::new(cfg);
    let handles: Vec<_> = urls
        .into_iter()
        .map(|url| {
            let probe = probe.clone();
            tokio::task::spawn_blocking(move || {
                let found = probe.exists(&url);
                (url, found)
            })
        })
        .collect();

    let mut all_found = true;
    for handle in handles {
        let (url, found) = handle.await.context("probe task join")?;
        println!("{:<4} {}", if found { "yes" } else { "no" }, url);
        all_found &= found;
    }
    Ok(all_found)
}
