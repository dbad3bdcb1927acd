//! `[theme]` configuration: color mode, code highlighting, navbar, footer.

use serde::{Deserialize, Serialize};

use crate::footer::Footer;
use crate::navbar::Navbar;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Social card image
    pub image: Option<String>,
    pub color_mode: ColorMode,
    pub navbar: Navbar,
    pub footer: Footer,
    pub prism: Option<PrismConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorMode {
    pub default_mode: Mode,
    /// Let the visitor's OS preference override `default_mode`
    pub respect_prefers_color_scheme: bool,
}

impl Default for ColorMode {
    fn default() -> Self {
        Self {
            default_mode: Mode::Light,
            respect_prefers_color_scheme: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

/// Syntax highlighting themes, by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrismConfig {
    pub theme: String,
    #[serde(default)]
    pub dark_theme: Option<String>,
}
