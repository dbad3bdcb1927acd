//! `[theme.navbar]` configuration.
//!
//! # Example
//!
//! ```toml
//! [theme.navbar]
//! title = "Just Read The Docs"
//! logo = { alt = "Logo", src = "img/logo.svg" }
//!
//! [[theme.navbar.items]]
//! type = "doc_sidebar"
//! sidebar_id = "toolsSidebar"
//! label = "Tools"
//!
//! [[theme.navbar.items]]
//! type = "external"
//! href = "https://github.com/MatthewLeigh/just-read-the-docs"
//! label = "GitHub"
//! position = "right"
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Navbar {
    pub title: Option<String>,
    pub logo: Option<Logo>,
    pub items: Vec<NavbarItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Logo {
    pub alt: String,
    pub src: String,
}

/// A navbar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNavbarItem")]
pub struct NavbarItem {
    /// Display text
    pub label: String,

    #[serde(default)]
    pub position: Position,

    /// Where the item points
    #[serde(flatten)]
    pub target: NavbarTarget,
}

impl NavbarItem {
    pub fn doc_sidebar(label: impl Into<String>, sidebar_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            position: Position::Left,
            target: NavbarTarget::DocSidebar {
                sidebar_id: sidebar_id.into(),
            },
        }
    }

    pub fn page(label: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            position: Position::Left,
            target: NavbarTarget::Page { to: to.into() },
        }
    }

    pub fn external(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            position: Position::Left,
            target: NavbarTarget::External { href: href.into() },
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

/// Target of a navbar item, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavbarTarget {
    /// Opens the first page of a registered sidebar
    DocSidebar { sidebar_id: String },
    /// Internal path under the base URL
    Page { to: String },
    /// Absolute URL outside the site
    External { href: String },
}

/// Navbar entry as written in the config. Unknown keys are rejected here,
/// which `#[serde(flatten)]` on [`NavbarItem`] cannot do.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNavbarItem {
    #[serde(rename = "type")]
    kind: NavbarKind,
    label: String,
    #[serde(default)]
    position: Position,
    sidebar_id: Option<String>,
    to: Option<String>,
    href: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum NavbarKind {
    DocSidebar,
    Page,
    External,
}

impl TryFrom<RawNavbarItem> for NavbarItem {
    type Error = String;

    fn try_from(raw: RawNavbarItem) -> Result<Self, Self::Error> {
        let target = match (raw.kind, raw.sidebar_id, raw.to, raw.href) {
            (NavbarKind::DocSidebar, Some(sidebar_id), None, None) => {
                NavbarTarget::DocSidebar { sidebar_id }
            }
            (NavbarKind::Page, None, Some(to), None) => NavbarTarget::Page { to },
            (NavbarKind::External, None, None, Some(href)) => NavbarTarget::External { href },
            (NavbarKind::DocSidebar, ..) => {
                return Err(format!(
                    "navbar item `{}`: type `doc_sidebar` takes `sidebar_id` only",
                    raw.label
                ))
            }
            (NavbarKind::Page, ..) => {
                return Err(format!(
                    "navbar item `{}`: type `page` takes `to` only",
                    raw.label
                ))
            }
            (NavbarKind::External, ..) => {
                return Err(format!(
                    "navbar item `{}`: type `external` takes `href` only",
                    raw.label
                ))
            }
        };

        Ok(Self {
            label: raw.label,
            position: raw.position,
            target,
        })
    }
}

/// Which side of the navbar an item sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Left,
    Right,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SiteConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_each_item_variant() {
        let config = SiteConfig::from_toml_str(
            r#"
title = "Docs"

[[theme.navbar.items]]
type = "doc_sidebar"
sidebar_id = "toolsSidebar"
label = "Tools"

[[theme.navbar.items]]
type = "page"
to = "/blog"
label = "Guides"

[[theme.navbar.items]]
type = "external"
href = "https://github.com/example/docs"
label = "GitHub"
position = "right"
"#,
        )
        .unwrap();

        assert_eq!(
            config.theme.navbar.items,
            vec![
                NavbarItem::doc_sidebar("Tools", "toolsSidebar"),
                NavbarItem::page("Guides", "/blog"),
                NavbarItem::external("GitHub", "https://github.com/example/docs")
                    .at(Position::Right),
            ]
        );
    }

    #[test]
    fn parses_logo() {
        let config = SiteConfig::from_toml_str(
            r#"
title = "Docs"

[theme.navbar]
title = "Docs"
logo = { alt = "Docs Logo", src = "img/logo.svg" }
"#,
        )
        .unwrap();

        let logo = config.theme.navbar.logo.unwrap();
        assert_eq!(logo.src, "img/logo.svg");
        assert!(config.theme.navbar.items.is_empty());
    }

    #[test]
    fn rejects_item_without_type() {
        let result = SiteConfig::from_toml_str(
            r#"
title = "Docs"

[[theme.navbar.items]]
label = "Orphan"
"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn rejects_misspelled_item_key() {
        let result = SiteConfig::from_toml_str(
            r#"
title = "Docs"

[[theme.navbar.items]]
type = "page"
to = "/blog"
label = "Guides"
postion = "right"
"#,
        );

        let err = result.unwrap_err().to_string();
        assert!(err.contains("postion"), "{err}");
    }

    #[test]
    fn rejects_target_key_of_another_variant() {
        let result = SiteConfig::from_toml_str(
            r#"
title = "Docs"

[[theme.navbar.items]]
type = "page"
to = "/blog"
href = "https://example.com"
label = "Guides"
"#,
        );

        let err = result.unwrap_err().to_string();
        assert!(err.contains("type `page` takes `to` only"), "{err}");
    }

    #[test]
    fn rejects_missing_target_key() {
        let result = SiteConfig::from_toml_str(
            r#"
title = "Docs"

[[theme.navbar.items]]
type = "doc_sidebar"
label = "Tools"
"#,
        );

        assert!(result.is_err());
    }
}
