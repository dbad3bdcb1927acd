//! CLI subcommands.

use std::path::Path;

use anyhow::{Context, Result};
use lectern_config::{ConfigBuilder, SidebarRegistry, SiteConfig};

pub mod check;
pub mod export;
pub mod init;
pub mod watch;

/// A parsed config with its sidebar registry, ready to validate.
pub struct Loaded {
    pub builder: ConfigBuilder,
}

/// Load the config file and the sidebar files its presets name.
pub fn load(config_path: &Path) -> Result<Loaded> {
    let config = SiteConfig::load(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let config_dir = config_path.parent().unwrap_or(Path::new(""));
    let registry = SidebarRegistry::from_presets(&config, config_dir)
        .context("Failed to load sidebar registry")?;

    tracing::debug!(
        "Loaded {} with {} sidebars",
        config_path.display(),
        registry.len()
    );

    Ok(Loaded {
        builder: ConfigBuilder::new(config).with_sidebars(registry),
    })
}
