use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// HTTP method used by the existence probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeMethod {
    /// Plain GET; the body is read and discarded.
    #[default]
    Get,
    /// HEAD; cheaper for large artifacts but some mirrors reject it.
    Head,
}

/// Network parameters for `ResourceProbe` (`[probe]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Seconds allowed to establish the connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole request.
    pub timeout_secs: u64,
    /// Follow 3xx redirects; when false a redirect counts as "not found".
    pub follow_redirects: bool,
    pub method: ProbeMethod,
}

/// Floor applied to both timeouts; libcurl treats 0 as "wait forever".
const MIN_TIMEOUT_SECS: u64 = 1;

impl ProbeConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs.max(MIN_TIMEOUT_SECS))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(MIN_TIMEOUT_SECS))
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            follow_redirects: true,
            method: ProbeMethod::Get,
        }
    }
}

/// Global configuration loaded from `~/.config/mvnrepo/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MvnrepoConfig {
    #[serde(default)]
    pub probe: ProbeConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mvnrepo")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MvnrepoConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MvnrepoConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MvnrepoConfig = toml::from_str(&data)?;
    Ok(cfg)
}
