//! `mvnrepo glob <pattern>` – show the regex a glob expands to.

use anyhow::{Context, Result};
use mvnrepo_core::strutil;

pub fn run_glob(pattern: &str) -> Result<()> {
    let re = strutil::compile_glob(pattern)
        .with_context(|| format!("glob {pattern:?} does not compile"))?;
    println!("{}", re.as_str());
    Ok(())
}
