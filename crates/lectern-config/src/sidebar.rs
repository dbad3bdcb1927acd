//! Sidebar registry for resolving `doc_sidebar` navbar items.
//!
//! Loads the sidebar file named by a docs preset and provides lookup by
//! sidebar id. The file maps each id to its item tree:
//!
//! ```toml
//! [[languagesSidebar]]
//! type = "autogenerated"
//! dir_name = "languages"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::site::SiteConfig;

/// An entry in a sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum SidebarItem {
    /// Every page under a docs directory, in filesystem order
    Autogenerated { dir_name: String },
    /// A single doc by id
    Doc {
        id: String,
        #[serde(default)]
        label: Option<String>,
    },
    /// A collapsible group
    Category {
        label: String,
        #[serde(default)]
        items: Vec<SidebarItem>,
    },
    Link { label: String, href: String },
}

/// A registry of sidebar definitions, keyed by sidebar id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarRegistry {
    sidebars: BTreeMap<String, Vec<SidebarItem>>,
}

impl SidebarRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a sidebar file. The format follows the file extension.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let sidebars: BTreeMap<String, Vec<SidebarItem>> = match ext.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| RegistryError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
            "json" => serde_json::from_str(&content).map_err(|e| RegistryError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| RegistryError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
            _ => return Err(RegistryError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::debug!("Loaded {} sidebars from {}", sidebars.len(), path.display());

        Ok(Self { sidebars })
    }

    /// Load and merge the sidebar file of every preset that enables docs.
    ///
    /// `config_dir` is the directory relative paths are resolved against.
    pub fn from_presets(config: &SiteConfig, config_dir: &Path) -> Result<Self, RegistryError> {
        let mut registry = Self::new();

        for path in sidebar_paths(config, config_dir) {
            registry.extend(Self::load(&path)?);
        }

        Ok(registry)
    }

    pub fn insert(&mut self, id: impl Into<String>, items: Vec<SidebarItem>) {
        self.sidebars.insert(id.into(), items);
    }

    /// Merge another registry into this one. Later definitions win.
    pub fn extend(&mut self, other: SidebarRegistry) {
        self.sidebars.extend(other.sidebars);
    }

    /// Check if a sidebar exists.
    pub fn contains(&self, id: &str) -> bool {
        self.sidebars.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&[SidebarItem]> {
        self.sidebars.get(id).map(Vec::as_slice)
    }

    /// Get all registered sidebar ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        self.sidebars.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }
}

/// Resolved sidebar file of each docs-enabled preset.
pub fn sidebar_paths(config: &SiteConfig, config_dir: &Path) -> Vec<PathBuf> {
    config
        .presets
        .iter()
        .filter_map(|preset| preset.docs.as_ref())
        .filter_map(|docs| docs.sidebar_path.as_deref())
        .map(|path| config_dir.join(path))
        .collect()
}

/// Errors that can occur with the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to read sidebar file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported sidebar file format: {} (expected .toml, .json or .yaml)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse sidebar file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}
