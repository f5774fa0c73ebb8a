//! Reading a [`SiteConfig`] from JSON.
//!
//! Keys use the same camelCase names as the built-in literal. Every key is
//! optional and falls back to the built-in value.

use std::{fs, path::Path};

use color_eyre::{Section, eyre::eyre};
use tracing::{debug, info};

use super::{CONFIG_FILE, SiteConfig};

pub fn from_str(raw: &str) -> color_eyre::Result<SiteConfig> {
    let config: SiteConfig =
        serde_json::from_str(raw).map_err(|e| eyre!("Malformed site configuration: {e}"))?;
    config.validate()?;
    Ok(config)
}

pub fn from_path(path: &Path) -> color_eyre::Result<SiteConfig> {
    let raw = fs::read_to_string(path)
        .with_note(|| format!("While reading {}", path.display()))?;
    let config = from_str(&raw).with_note(|| format!("While loading {}", path.display()))?;
    info!(path = %path.display(), "loaded site configuration");
    Ok(config)
}

/// Load `root/site.json` if present, otherwise the built-in configuration.
pub fn discover(root: &Path) -> color_eyre::Result<SiteConfig> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        debug!(path = %path.display(), "no configuration file, using built-in");
        return Ok(SiteConfig::builtin());
    }
    from_path(&path)
}
