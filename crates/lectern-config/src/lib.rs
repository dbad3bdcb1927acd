//! Site configuration for a documentation website.
//!
//! This crate loads `site.toml`, validates it against its invariants and the
//! sidebar registry, and exports the result in the shape the external
//! static-site generator reads.

pub mod builder;
pub mod export;
pub mod footer;
pub mod navbar;
pub mod preset;
pub mod sidebar;
pub mod site;
pub mod theme;

pub use builder::{ConfigBuilder, ConfigValidationError, Rule};
pub use export::{export, export_string, ExportContext, ExportError};
pub use footer::{Footer, FooterColumn, FooterLink, FooterStyle};
pub use navbar::{Logo, Navbar, NavbarItem, NavbarTarget, Position};
pub use preset::{BlogOptions, DocsOptions, FeedOptions, FeedType, Preset, PresetTheme};
pub use sidebar::{RegistryError, SidebarItem, SidebarRegistry};
pub use site::{ConfigError, I18nConfig, Policy, SiteConfig};
pub use theme::{ColorMode, Mode, PrismConfig, ThemeConfig};
