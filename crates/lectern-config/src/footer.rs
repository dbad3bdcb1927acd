//! `[theme.footer]` configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Footer {
    pub style: FooterStyle,
    pub links: Vec<FooterColumn>,
    /// Copyright line; `{{ year }}` is replaced with the build year on export
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

/// A titled column of footer links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterColumn {
    pub title: String,
    #[serde(default)]
    pub items: Vec<FooterLink>,
}

/// A footer entry. Exactly one of `to` and `href` must be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterLink {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl FooterColumn {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn link(mut self, link: FooterLink) -> Self {
        self.items.push(link);
        self
    }
}

impl FooterLink {
    pub fn to(label: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            to: Some(to.into()),
            href: None,
        }
    }

    pub fn href(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            to: None,
            href: Some(href.into()),
        }
    }
}
