//! Preset option bags for the docs and blog features.
//!
//! A feature is enabled when its table is present and disabled when it is
//! omitted.
//!
//! ```toml
//! [[presets]]
//! name = "classic"
//!
//! [presets.docs]
//! sidebar_path = "./sidebars.toml"
//! show_last_update_time = true
//!
//! [presets.blog]
//! show_reading_time = true
//! feed_options = { types = ["rss", "atom"], xslt = true }
//! ```

use serde::{Deserialize, Serialize};

use crate::site::Policy;

/// A bundled set of feature configurations applied together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    /// Preset identifier understood by the generator (e.g. "classic")
    pub name: String,

    #[serde(default)]
    pub docs: Option<DocsOptions>,

    #[serde(default)]
    pub blog: Option<BlogOptions>,

    #[serde(default)]
    pub theme: Option<PresetTheme>,
}

impl Preset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: None,
            blog: None,
            theme: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsOptions {
    /// Sidebar registry file, relative to the config file
    pub sidebar_path: Option<String>,
    pub show_last_update_author: bool,
    pub show_last_update_time: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlogOptions {
    pub show_reading_time: bool,
    pub show_last_update_author: bool,
    pub show_last_update_time: bool,
    /// Syndication feeds; `None` leaves the generator's default
    pub feed_options: Option<FeedOptions>,
    pub on_inline_tags: Policy,
    pub on_inline_authors: Policy,
    pub on_untruncated_blog_posts: Policy,
}

impl Default for BlogOptions {
    fn default() -> Self {
        Self {
            show_reading_time: false,
            show_last_update_author: false,
            show_last_update_time: false,
            feed_options: None,
            on_inline_tags: Policy::Warn,
            on_inline_authors: Policy::Warn,
            on_untruncated_blog_posts: Policy::Warn,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedOptions {
    pub types: Vec<FeedType>,
    /// Style the feeds with the generator's bundled XSLT
    pub xslt: bool,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            types: vec![FeedType::Rss, FeedType::Atom],
            xslt: false,
        }
    }
}

/// Syndication feed format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedType {
    Rss,
    Atom,
    Json,
}

impl FeedType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rss => "rss",
            Self::Atom => "atom",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PresetTheme {
    /// Stylesheet layered over the theme
    pub custom_css: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SiteConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn omitted_features_are_disabled() {
        let config = SiteConfig::from_toml_str(
            r#"
title = "Docs"

[[presets]]
name = "classic"
"#,
        )
        .unwrap();

        assert_eq!(config.presets, vec![Preset::new("classic")]);
    }

    #[test]
    fn parses_blog_options_with_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
title = "Docs"

[[presets]]
name = "classic"

[presets.blog]
show_reading_time = true
on_inline_tags = "throw"
feed_options = { xslt = true }
"#,
        )
        .unwrap();

        let blog = config.presets[0].blog.as_ref().unwrap();
        assert!(blog.show_reading_time);
        assert_eq!(blog.on_inline_tags, Policy::Throw);
        assert_eq!(blog.on_inline_authors, Policy::Warn);
        assert_eq!(
            blog.feed_options,
            Some(FeedOptions {
                types: vec![FeedType::Rss, FeedType::Atom],
                xslt: true,
            })
        );
    }

    #[test]
    fn parses_docs_options() {
        let config = SiteConfig::from_toml_str(
            r#"
title = "Docs"

[[presets]]
name = "classic"
docs = { sidebar_path = "./sidebars.toml", show_last_update_author = true }
theme = { custom_css = "./src/css/custom.css" }
"#,
        )
        .unwrap();

        let preset = &config.presets[0];
        let docs = preset.docs.as_ref().unwrap();
        assert_eq!(docs.sidebar_path.as_deref(), Some("./sidebars.toml"));
        assert!(docs.show_last_update_author);
        assert!(!docs.show_last_update_time);
        assert_eq!(
            preset.theme.as_ref().unwrap().custom_css.as_deref(),
            Some("./src/css/custom.css")
        );
    }

    #[test]
    fn rejects_unknown_feed_type() {
        let result = SiteConfig::from_toml_str(
            r#"
title = "Docs"

[[presets]]
name = "classic"
blog = { feed_options = { types = ["gopher"] } }
"#,
        );

        assert!(result.is_err());
    }
}
