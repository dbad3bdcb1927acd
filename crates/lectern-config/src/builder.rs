//! Validation of a raw site config before it is handed to the generator.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::footer::FooterLink;
use crate::navbar::NavbarTarget;
use crate::preset::FeedType;
use crate::sidebar::SidebarRegistry;
use crate::site::SiteConfig;

// "/" alone is a valid base URL: it both starts and ends with a slash.
static BASE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(.*/)?$").expect("Invalid base url regex"));

static ORIGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^/\s]+$").expect("Invalid origin regex"));

static EXTERNAL_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("Invalid external url regex"));

/// A violated config invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rule {
    #[error("must not be empty")]
    Empty,

    #[error("must start and end with `/`")]
    BaseUrlSlashes,

    #[error("must be an absolute http(s) origin without a trailing `/`")]
    InvalidOrigin,

    #[error("must list at least one locale")]
    NoLocales,

    #[error("locale `{0}` is listed more than once")]
    DuplicateLocale(String),

    #[error("`{locale}` is not one of the configured locales ({})", .locales.join(", "))]
    UnknownDefaultLocale { locale: String, locales: Vec<String> },

    #[error("sidebar `{id}` is not defined in the sidebar registry (known: {})", known_list(.known))]
    UnknownSidebar { id: String, known: Vec<String> },

    #[error("must be an internal path starting with `/`")]
    NotInternalPath,

    #[error("must be an absolute http(s) URL")]
    NotExternalUrl,

    #[error("must set exactly one of `to` or `href`")]
    LinkTarget,

    #[error("must list at least one feed type")]
    NoFeedTypes,

    #[error("feed type `{}` is listed more than once", .0.as_str())]
    DuplicateFeedType(FeedType),
}

fn known_list(known: &[String]) -> String {
    if known.is_empty() {
        "none".to_string()
    } else {
        known.join(", ")
    }
}

/// A config field that failed validation, with the rule it broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Dotted field path (e.g. "theme.navbar.items[2].sidebar_id")
    pub field: String,
    pub rule: Rule,
}

impl ConfigValidationError {
    pub fn new(field: impl Into<String>, rule: Rule) -> Self {
        Self {
            field: field.into(),
            rule,
        }
    }
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.rule)
    }
}

impl std::error::Error for ConfigValidationError {}

/// Validates a raw [`SiteConfig`] against its invariants and the sidebar registry.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    raw: SiteConfig,
    sidebars: SidebarRegistry,
}

impl ConfigBuilder {
    /// Create a builder with an empty sidebar registry.
    pub fn new(raw: SiteConfig) -> Self {
        Self {
            raw,
            sidebars: SidebarRegistry::new(),
        }
    }

    pub fn with_sidebars(mut self, sidebars: SidebarRegistry) -> Self {
        self.sidebars = sidebars;
        self
    }

    /// Validate and return the config.
    ///
    /// Checks run in declaration order and the first violation is returned.
    /// A valid config is returned exactly as given.
    pub fn build(self) -> Result<SiteConfig, ConfigValidationError> {
        if let Some(err) = self.validate_all().into_iter().next() {
            return Err(err);
        }

        tracing::debug!(
            "Validated config for {} ({} navbar items, {} presets)",
            self.raw.title,
            self.raw.theme.navbar.items.len(),
            self.raw.presets.len()
        );

        Ok(self.raw)
    }

    /// Run every check and collect all violations.
    pub fn validate_all(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        self.check_identity(&mut errors);
        self.check_i18n(&mut errors);
        self.check_presets(&mut errors);
        self.check_navbar(&mut errors);
        self.check_footer(&mut errors);

        errors
    }

    fn check_identity(&self, errors: &mut Vec<ConfigValidationError>) {
        let config = &self.raw;

        if config.title.trim().is_empty() {
            errors.push(ConfigValidationError::new("title", Rule::Empty));
        }

        if let Some(url) = &config.url {
            if !ORIGIN_RE.is_match(url) {
                errors.push(ConfigValidationError::new("url", Rule::InvalidOrigin));
            }
        }

        if config.base_url.is_empty() {
            errors.push(ConfigValidationError::new("base_url", Rule::Empty));
        } else if !BASE_URL_RE.is_match(&config.base_url) {
            errors.push(ConfigValidationError::new("base_url", Rule::BaseUrlSlashes));
        }
    }

    fn check_i18n(&self, errors: &mut Vec<ConfigValidationError>) {
        let i18n = &self.raw.i18n;

        if i18n.locales.is_empty() {
            errors.push(ConfigValidationError::new("i18n.locales", Rule::NoLocales));
            return;
        }

        let mut seen = HashSet::new();
        for (i, locale) in i18n.locales.iter().enumerate() {
            if locale.trim().is_empty() {
                errors.push(ConfigValidationError::new(
                    format!("i18n.locales[{i}]"),
                    Rule::Empty,
                ));
            } else if !seen.insert(locale.as_str()) {
                errors.push(ConfigValidationError::new(
                    format!("i18n.locales[{i}]"),
                    Rule::DuplicateLocale(locale.clone()),
                ));
            }
        }

        if !i18n.locales.contains(&i18n.default_locale) {
            errors.push(ConfigValidationError::new(
                "i18n.default_locale",
                Rule::UnknownDefaultLocale {
                    locale: i18n.default_locale.clone(),
                    locales: i18n.locales.clone(),
                },
            ));
        }
    }

    fn check_presets(&self, errors: &mut Vec<ConfigValidationError>) {
        for (i, preset) in self.raw.presets.iter().enumerate() {
            if preset.name.trim().is_empty() {
                errors.push(ConfigValidationError::new(
                    format!("presets[{i}].name"),
                    Rule::Empty,
                ));
            }

            if let Some(path) = preset.docs.as_ref().and_then(|d| d.sidebar_path.as_ref()) {
                if path.trim().is_empty() {
                    errors.push(ConfigValidationError::new(
                        format!("presets[{i}].docs.sidebar_path"),
                        Rule::Empty,
                    ));
                }
            }

            let Some(feed) = preset.blog.as_ref().and_then(|b| b.feed_options.as_ref()) else {
                continue;
            };
            let field = format!("presets[{i}].blog.feed_options.types");
            if feed.types.is_empty() {
                errors.push(ConfigValidationError::new(field, Rule::NoFeedTypes));
                continue;
            }
            let mut seen = HashSet::new();
            for feed_type in &feed.types {
                if !seen.insert(*feed_type) {
                    errors.push(ConfigValidationError::new(
                        field.clone(),
                        Rule::DuplicateFeedType(*feed_type),
                    ));
                }
            }
        }
    }

    fn check_navbar(&self, errors: &mut Vec<ConfigValidationError>) {
        for (i, item) in self.raw.theme.navbar.items.iter().enumerate() {
            let prefix = format!("theme.navbar.items[{i}]");

            if item.label.trim().is_empty() {
                errors.push(ConfigValidationError::new(
                    format!("{prefix}.label"),
                    Rule::Empty,
                ));
            }

            match &item.target {
                NavbarTarget::DocSidebar { sidebar_id } => {
                    if !self.sidebars.contains(sidebar_id) {
                        errors.push(ConfigValidationError::new(
                            format!("{prefix}.sidebar_id"),
                            Rule::UnknownSidebar {
                                id: sidebar_id.clone(),
                                known: self.sidebars.ids().into_iter().map(String::from).collect(),
                            },
                        ));
                    }
                }
                NavbarTarget::Page { to } => {
                    if !to.starts_with('/') {
                        errors.push(ConfigValidationError::new(
                            format!("{prefix}.to"),
                            Rule::NotInternalPath,
                        ));
                    }
                }
                NavbarTarget::External { href } => {
                    if !EXTERNAL_URL_RE.is_match(href) {
                        errors.push(ConfigValidationError::new(
                            format!("{prefix}.href"),
                            Rule::NotExternalUrl,
                        ));
                    }
                }
            }
        }
    }

    fn check_footer(&self, errors: &mut Vec<ConfigValidationError>) {
        for (i, column) in self.raw.theme.footer.links.iter().enumerate() {
            if column.title.trim().is_empty() {
                errors.push(ConfigValidationError::new(
                    format!("theme.footer.links[{i}].title"),
                    Rule::Empty,
                ));
            }

            for (j, link) in column.items.iter().enumerate() {
                check_footer_link(
                    link,
                    &format!("theme.footer.links[{i}].items[{j}]"),
                    errors,
                );
            }
        }
    }
}

fn check_footer_link(link: &FooterLink, prefix: &str, errors: &mut Vec<ConfigValidationError>) {
    if link.label.trim().is_empty() {
        errors.push(ConfigValidationError::new(
            format!("{prefix}.label"),
            Rule::Empty,
        ));
    }

    match (&link.to, &link.href) {
        (Some(to), None) => {
            if !to.starts_with('/') {
                errors.push(ConfigValidationError::new(
                    format!("{prefix}.to"),
                    Rule::NotInternalPath,
                ));
            }
        }
        (None, Some(href)) => {
            if !EXTERNAL_URL_RE.is_match(href) {
                errors.push(ConfigValidationError::new(
                    format!("{prefix}.href"),
                    Rule::NotExternalUrl,
                ));
            }
        }
        _ => errors.push(ConfigValidationError::new(prefix, Rule::LinkTarget)),
    }
}
