use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::record::DEFAULT_ENVIRONMENT;

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("waypoint").join("config.toml");
        }
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".config").join("waypoint").join("config.toml");
    }
    PathBuf::from("waypoint/config.toml")
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub aliases: AliasesConfig,
}

impl Config {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let cfg: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse config at {}", path.display()))?;
        Ok(cfg)
    }

    /// Load from an explicit path (which must exist) or from the XDG default
    /// (missing file means defaults, not an error).
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(p) = explicit {
            return Self::load_from_path(p);
        }
        let p = default_config_path();
        if p.exists() {
            Self::load_from_path(&p)
        } else {
            Ok(Self::default())
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AliasesConfig {
    /// Extra alias search directories, scanned ahead of the site-relative
    /// conventions.
    #[serde(default)]
    pub paths: Vec<PathBuf>,

    /// Environment assumed when a reference omits one.
    #[serde(default = "default_environment")]
    pub default_environment: String,
}

impl Default for AliasesConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            default_environment: default_environment(),
        }
    }
}

fn default_environment() -> String {
    DEFAULT_ENVIRONMENT.to_string()
}
