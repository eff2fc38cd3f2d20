//! Site configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level site configuration (stagedoor.toml)
#[derive(Debug, Deserialize, Serialize)]
pub struct SiteConfig {
    pub site: SiteMeta,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub records: RecordKeys,
}

/// Site metadata
#[derive(Debug, Deserialize, Serialize)]
pub struct SiteMeta {
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
}

/// Where durable records live
#[derive(Debug, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Record directory (relative to the site directory)
    #[serde(default = "default_root")]
    pub root: String,
}

fn default_root() -> String {
    ".stagedoor".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

/// The three fixed record names
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RecordKeys {
    #[serde(default = "default_content_key")]
    pub content: String,
    #[serde(default = "default_theme_key")]
    pub theme: String,
    #[serde(default = "default_admin_key")]
    pub admin: String,
}

fn default_content_key() -> String {
    "underground-content".to_string()
}

fn default_theme_key() -> String {
    "underground-theme".to_string()
}

fn default_admin_key() -> String {
    "underground-admin".to_string()
}

impl Default for RecordKeys {
    fn default() -> Self {
        Self {
            content: default_content_key(),
            theme: default_theme_key(),
            admin: default_admin_key(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a directory (looks for stagedoor.toml)
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join("stagedoor.toml")
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: SiteConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Load from a directory, falling back to defaults when no
    /// stagedoor.toml exists
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let config_path = path.join("stagedoor.toml");
        if config_path.exists() {
            Self::load_from_dir(path)
        } else {
            tracing::debug!("no stagedoor.toml in {}, using defaults", path.display());
            Ok(Self::new("stagedoor"))
        }
    }

    /// Create a new configuration with the given site name
    pub fn new(name: &str) -> Self {
        Self {
            site: SiteMeta {
                name: name.to_string(),
                tagline: None,
            },
            storage: StorageConfig::default(),
            records: RecordKeys::default(),
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip() {
        let config = SiteConfig::new("crimson-throne");
        let parsed: SiteConfig = toml::from_str(&config.to_toml().unwrap()).unwrap();

        assert_eq!(parsed.site.name, "crimson-throne");
        assert_eq!(parsed.records.content, "underground-content");
        assert_eq!(parsed.records.theme, "underground-theme");
        assert_eq!(parsed.records.admin, "underground-admin");
        assert_eq!(parsed.storage.root, ".stagedoor");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: SiteConfig = toml::from_str("[site]\nname = \"test\"\n").unwrap();
        assert_eq!(parsed.records.theme, "underground-theme");
        assert_eq!(parsed.storage.root, ".stagedoor");
    }
}
