//! Top-level site configuration and loading from `site.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::preset::Preset;
use crate::theme::ThemeConfig;

/// Configuration file structure (site.toml).
///
/// Omitted optional fields are filled with their defaults while parsing,
/// so a loaded value is always complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title
    pub title: String,

    #[serde(default)]
    pub tagline: Option<String>,

    /// Path to the favicon, relative to the static directory
    #[serde(default)]
    pub favicon: Option<String>,

    /// Deployment origin (e.g. "https://example.github.io")
    #[serde(default)]
    pub url: Option<String>,

    /// Path under the origin the site is served from
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub organization_name: Option<String>,

    #[serde(default)]
    pub project_name: Option<String>,

    #[serde(default = "default_on_broken_links")]
    pub on_broken_links: Policy,

    #[serde(default = "default_on_broken_markdown_links")]
    pub on_broken_markdown_links: Policy,

    #[serde(default)]
    pub i18n: I18nConfig,

    #[serde(default)]
    pub presets: Vec<Preset>,

    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Locale settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct I18nConfig {
    pub default_locale: String,
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            locales: vec!["en".to_string()],
        }
    }
}

/// How the external generator reacts to an anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Skip silently
    Ignore,
    /// Log and continue
    #[default]
    Warn,
    /// Abort the build
    Throw,
}

impl Policy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Throw => "throw",
        }
    }
}

fn default_base_url() -> String {
    "/".to_string()
}
fn default_on_broken_links() -> Policy {
    Policy::Throw
}
fn default_on_broken_markdown_links() -> Policy {
    Policy::Warn
}

/// Errors that can occur when loading a site config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse site config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SiteConfig {
    /// Minimal config with every optional field at its default.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tagline: None,
            favicon: None,
            url: None,
            base_url: default_base_url(),
            organization_name: None,
            project_name: None,
            on_broken_links: default_on_broken_links(),
            on_broken_markdown_links: default_on_broken_markdown_links(),
            i18n: I18nConfig::default(),
            presets: Vec::new(),
            theme: ThemeConfig::default(),
        }
    }

    /// Parse a config from TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded site config from {}", path.display());
        Ok(config)
    }
}
