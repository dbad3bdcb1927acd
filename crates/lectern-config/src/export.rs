//! Export of a validated config into the external generator's JSON shape.
//!
//! The generator expects camelCase keys, presets as `[name, options]`
//! pairs, and `false` for a disabled feature.

use chrono::Datelike;
use minijinja::{context, Environment};
use serde::Serialize;

use crate::footer::{Footer, FooterLink, FooterStyle};
use crate::navbar::{Logo, Navbar, NavbarItem, NavbarTarget};
use crate::preset::{BlogOptions, DocsOptions, FeedOptions, Preset};
use crate::site::SiteConfig;
use crate::theme::{ColorMode, Mode, PrismConfig, ThemeConfig};

/// Values that vary per export rather than per config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportContext {
    /// Substituted for `{{ year }}` in the footer copyright
    pub year: i32,
}

impl ExportContext {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    /// Context for the current local calendar year.
    pub fn current() -> Self {
        Self::new(chrono::Local::now().year())
    }
}

/// Errors that can occur during export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to render footer copyright: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Failed to serialize generator config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convert a validated config to the generator's JSON document.
pub fn export(config: &SiteConfig, ctx: &ExportContext) -> Result<serde_json::Value, ExportError> {
    let copyright = config
        .theme
        .footer
        .copyright
        .as_deref()
        .map(|template| render_copyright(template, ctx))
        .transpose()?;

    let doc = GeneratorConfig::new(config, copyright);
    Ok(serde_json::to_value(doc)?)
}

/// Like [`export`], pretty-printed.
pub fn export_string(config: &SiteConfig, ctx: &ExportContext) -> Result<String, ExportError> {
    let value = export(config, ctx)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

fn render_copyright(template: &str, ctx: &ExportContext) -> Result<String, minijinja::Error> {
    let env = Environment::new();
    env.render_str(template, context! { year => ctx.year })
}

#[derive(Serialize)]
#[serde(untagged)]
enum Toggle<T> {
    On(T),
    Off(bool),
}

impl<T> From<Option<T>> for Toggle<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => Self::On(inner),
            None => Self::Off(false),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeneratorConfig<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tagline: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    favicon: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    base_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    organization_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_name: Option<&'a str>,
    on_broken_links: &'static str,
    on_broken_markdown_links: &'static str,
    i18n: I18nWire<'a>,
    presets: Vec<(&'a str, PresetWire<'a>)>,
    theme_config: ThemeWire<'a>,
}

impl<'a> GeneratorConfig<'a> {
    fn new(config: &'a SiteConfig, copyright: Option<String>) -> Self {
        Self {
            title: &config.title,
            tagline: config.tagline.as_deref(),
            favicon: config.favicon.as_deref(),
            url: config.url.as_deref(),
            base_url: &config.base_url,
            organization_name: config.organization_name.as_deref(),
            project_name: config.project_name.as_deref(),
            on_broken_links: config.on_broken_links.as_str(),
            on_broken_markdown_links: config.on_broken_markdown_links.as_str(),
            i18n: I18nWire {
                default_locale: &config.i18n.default_locale,
                locales: &config.i18n.locales,
            },
            presets: config
                .presets
                .iter()
                .map(|p| (p.name.as_str(), PresetWire::new(p)))
                .collect(),
            theme_config: ThemeWire::new(&config.theme, copyright),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct I18nWire<'a> {
    default_locale: &'a str,
    locales: &'a [String],
}

#[derive(Serialize)]
struct PresetWire<'a> {
    docs: Toggle<DocsWire<'a>>,
    blog: Toggle<BlogWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    theme: Option<PresetThemeWire<'a>>,
}

impl<'a> PresetWire<'a> {
    fn new(preset: &'a Preset) -> Self {
        Self {
            docs: preset.docs.as_ref().map(DocsWire::new).into(),
            blog: preset.blog.as_ref().map(BlogWire::new).into(),
            theme: preset.theme.as_ref().map(|t| PresetThemeWire {
                custom_css: t.custom_css.as_deref(),
            }),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocsWire<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    sidebar_path: Option<&'a str>,
    show_last_update_author: bool,
    show_last_update_time: bool,
}

impl<'a> DocsWire<'a> {
    fn new(docs: &'a DocsOptions) -> Self {
        Self {
            sidebar_path: docs.sidebar_path.as_deref(),
            show_last_update_author: docs.show_last_update_author,
            show_last_update_time: docs.show_last_update_time,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BlogWire {
    show_reading_time: bool,
    show_last_update_author: bool,
    show_last_update_time: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    feed_options: Option<FeedWire>,
    on_inline_tags: &'static str,
    on_inline_authors: &'static str,
    on_untruncated_blog_posts: &'static str,
}

impl BlogWire {
    fn new(blog: &BlogOptions) -> Self {
        Self {
            show_reading_time: blog.show_reading_time,
            show_last_update_author: blog.show_last_update_author,
            show_last_update_time: blog.show_last_update_time,
            feed_options: blog.feed_options.as_ref().map(FeedWire::new),
            on_inline_tags: blog.on_inline_tags.as_str(),
            on_inline_authors: blog.on_inline_authors.as_str(),
            on_untruncated_blog_posts: blog.on_untruncated_blog_posts.as_str(),
        }
    }
}

#[derive(Serialize)]
struct FeedWire {
    #[serde(rename = "type")]
    types: Vec<&'static str>,
    xslt: bool,
}

impl FeedWire {
    fn new(feed: &FeedOptions) -> Self {
        Self {
            types: feed.types.iter().map(|t| t.as_str()).collect(),
            xslt: feed.xslt,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PresetThemeWire<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_css: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeWire<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
    color_mode: ColorModeWire,
    navbar: NavbarWire<'a>,
    footer: FooterWire<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prism: Option<PrismWire<'a>>,
}

impl<'a> ThemeWire<'a> {
    fn new(theme: &'a ThemeConfig, copyright: Option<String>) -> Self {
        Self {
            image: theme.image.as_deref(),
            color_mode: ColorModeWire::new(&theme.color_mode),
            navbar: NavbarWire::new(&theme.navbar),
            footer: FooterWire::new(&theme.footer, copyright),
            prism: theme.prism.as_ref().map(PrismWire::new),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ColorModeWire {
    default_mode: &'static str,
    respect_prefers_color_scheme: bool,
}

impl ColorModeWire {
    fn new(mode: &ColorMode) -> Self {
        Self {
            default_mode: match mode.default_mode {
                Mode::Light => "light",
                Mode::Dark => "dark",
            },
            respect_prefers_color_scheme: mode.respect_prefers_color_scheme,
        }
    }
}

#[derive(Serialize)]
struct NavbarWire<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    logo: Option<&'a Logo>,
    items: Vec<NavbarItemWire<'a>>,
}

impl<'a> NavbarWire<'a> {
    fn new(navbar: &'a Navbar) -> Self {
        Self {
            title: navbar.title.as_deref(),
            logo: navbar.logo.as_ref(),
            items: navbar.items.iter().map(NavbarItemWire::new).collect(),
        }
    }
}

/// Page and external links carry no `type`; the generator infers it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NavbarItemWire<'a> {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sidebar_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<&'a str>,
    position: &'static str,
    label: &'a str,
}

impl<'a> NavbarItemWire<'a> {
    fn new(item: &'a NavbarItem) -> Self {
        let mut wire = Self {
            kind: None,
            sidebar_id: None,
            to: None,
            href: None,
            position: item.position.as_str(),
            label: &item.label,
        };
        match &item.target {
            NavbarTarget::DocSidebar { sidebar_id } => {
                wire.kind = Some("docSidebar");
                wire.sidebar_id = Some(sidebar_id);
            }
            NavbarTarget::Page { to } => wire.to = Some(to),
            NavbarTarget::External { href } => wire.href = Some(href),
        }
        wire
    }
}

#[derive(Serialize)]
struct FooterWire<'a> {
    style: &'static str,
    links: Vec<FooterColumnWire<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    copyright: Option<String>,
}

impl<'a> FooterWire<'a> {
    fn new(footer: &'a Footer, copyright: Option<String>) -> Self {
        Self {
            style: match footer.style {
                FooterStyle::Light => "light",
                FooterStyle::Dark => "dark",
            },
            links: footer
                .links
                .iter()
                .map(|column| FooterColumnWire {
                    title: &column.title,
                    items: &column.items,
                })
                .collect(),
            copyright,
        }
    }
}

#[derive(Serialize)]
struct FooterColumnWire<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "no_links")]
    items: &'a [FooterLink],
}

fn no_links(items: &&[FooterLink]) -> bool {
    items.is_empty()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PrismWire<'a> {
    theme: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    dark_theme: Option<&'a str>,
}

impl<'a> PrismWire<'a> {
    fn new(prism: &'a PrismConfig) -> Self {
        Self {
            theme: &prism.theme,
            dark_theme: prism.dark_theme.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footer::FooterColumn;
    use crate::navbar::Position;
    use crate::preset::{FeedType, PresetTheme};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> SiteConfig {
        let mut config = SiteConfig::new("Just Read The Docs");
        config.base_url = "/just-read-the-docs/".to_string();
        config.organization_name = Some("MatthewLeigh".to_string());

        let mut preset = Preset::new("classic");
        preset.docs = Some(DocsOptions {
            sidebar_path: Some("./sidebars.toml".to_string()),
            show_last_update_author: true,
            show_last_update_time: true,
        });
        preset.theme = Some(PresetTheme {
            custom_css: Some("./src/css/custom.css".to_string()),
        });
        config.presets.push(preset);

        config.theme.navbar.items = vec![
            NavbarItem::doc_sidebar("Tools", "toolsSidebar"),
            NavbarItem::page("Guides", "/blog"),
            NavbarItem::external("GitHub", "https://github.com/example/docs").at(Position::Right),
        ];
        config.theme.footer.style = FooterStyle::Dark;
        config.theme.footer.links = vec![
            FooterColumn::new("Community"),
            FooterColumn::new("More").link(FooterLink::to("Blog", "/blog")),
        ];
        config.theme.footer.copyright =
            Some("Copyright © {{ year }} Matthew Cross.".to_string());
        config
    }

    #[test]
    fn uses_generator_key_names() {
        let value = export(&sample(), &ExportContext::new(2025)).unwrap();

        assert_eq!(value["baseUrl"], "/just-read-the-docs/");
        assert_eq!(value["organizationName"], "MatthewLeigh");
        assert_eq!(value["onBrokenLinks"], "throw");
        assert_eq!(value["onBrokenMarkdownLinks"], "warn");
        assert_eq!(value["i18n"], json!({"defaultLocale": "en", "locales": ["en"]}));
        assert!(value.get("tagline").is_none());
    }

    #[test]
    fn presets_are_name_option_pairs() {
        let value = export(&sample(), &ExportContext::new(2025)).unwrap();

        assert_eq!(
            value["presets"],
            json!([[
                "classic",
                {
                    "docs": {
                        "sidebarPath": "./sidebars.toml",
                        "showLastUpdateAuthor": true,
                        "showLastUpdateTime": true
                    },
                    "blog": false,
                    "theme": {"customCss": "./src/css/custom.css"}
                }
            ]])
        );
    }

    #[test]
    fn exports_blog_feed_options() {
        let mut config = sample();
        config.presets[0].blog = Some(BlogOptions {
            show_reading_time: true,
            feed_options: Some(FeedOptions {
                types: vec![FeedType::Rss, FeedType::Atom],
                xslt: true,
            }),
            ..Default::default()
        });

        let value = export(&config, &ExportContext::new(2025)).unwrap();
        let blog = &value["presets"][0][1]["blog"];

        assert_eq!(blog["showReadingTime"], true);
        assert_eq!(blog["feedOptions"], json!({"type": ["rss", "atom"], "xslt": true}));
        assert_eq!(blog["onUntruncatedBlogPosts"], "warn");
    }

    #[test]
    fn tags_only_sidebar_items() {
        let value = export(&sample(), &ExportContext::new(2025)).unwrap();

        assert_eq!(
            value["themeConfig"]["navbar"]["items"],
            json!([
                {"type": "docSidebar", "sidebarId": "toolsSidebar", "position": "left", "label": "Tools"},
                {"to": "/blog", "position": "left", "label": "Guides"},
                {"href": "https://github.com/example/docs", "position": "right", "label": "GitHub"}
            ])
        );
    }

    #[test]
    fn renders_copyright_year() {
        let value = export(&sample(), &ExportContext::new(2031)).unwrap();
        let footer = &value["themeConfig"]["footer"];

        assert_eq!(footer["copyright"], "Copyright © 2031 Matthew Cross.");
        assert_eq!(footer["style"], "dark");
        assert_eq!(
            footer["links"],
            json!([
                {"title": "Community"},
                {"title": "More", "items": [{"label": "Blog", "to": "/blog"}]}
            ])
        );
    }

    #[test]
    fn invalid_copyright_template_is_an_error() {
        let mut config = sample();
        config.theme.footer.copyright = Some("{{ year".to_string());

        let result = export(&config, &ExportContext::new(2025));

        assert!(matches!(result, Err(ExportError::Template(_))));
    }

    #[test]
    fn pretty_string_is_valid_json() {
        let text = export_string(&sample(), &ExportContext::new(2025)).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["title"], "Just Read The Docs");
        assert!(text.contains('\n'));
    }
}
