//! Initialize a site config in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
///
/// Writes next to `config_path`; existing files are kept unless `yes`.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing lectern...");

    let dir = config_path.parent().unwrap_or(Path::new(""));
    if !dir.as_os_str().is_empty() && !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    write_starter(config_path, DEFAULT_CONFIG, yes)?;
    write_starter(&dir.join("sidebars.toml"), DEFAULT_SIDEBARS, yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'lectern check' to validate the configuration.");

    Ok(())
}

fn write_starter(path: &Path, content: &str, yes: bool) -> Result<()> {
    if path.exists() && !yes {
        tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
        return Ok(());
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());
    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Lectern site configuration

title = "Just Read The Docs"
tagline = "Because remembering things is overrated."
favicon = "img/favicon.ico"

# Deployment origin and the path the site is served from
url = "https://matthewleigh.github.io"
base_url = "/just-read-the-docs/"
organization_name = "MatthewLeigh"
project_name = "just-read-the-docs"

# ignore | warn | throw
on_broken_links = "throw"
on_broken_markdown_links = "warn"

[i18n]
default_locale = "en"
locales = ["en"]

[[presets]]
name = "classic"

[presets.docs]
sidebar_path = "./sidebars.toml"
show_last_update_author = true
show_last_update_time = true

[presets.blog]
show_reading_time = true
show_last_update_author = true
show_last_update_time = true
feed_options = { types = ["rss", "atom"], xslt = true }
on_inline_tags = "warn"
on_inline_authors = "warn"
on_untruncated_blog_posts = "warn"

[presets.theme]
custom_css = "./src/css/custom.css"

[theme]
image = "img/docusaurus-social-card.jpg"
color_mode = { default_mode = "dark", respect_prefers_color_scheme = false }
prism = { theme = "github", dark_theme = "dracula" }

[theme.navbar]
title = "Just Read The Docs"
logo = { alt = "Just read the docs Logo", src = "img/logo.svg" }

[[theme.navbar.items]]
type = "doc_sidebar"
sidebar_id = "languagesSidebar"
label = "Languages"

[[theme.navbar.items]]
type = "doc_sidebar"
sidebar_id = "toolsSidebar"
label = "Tools"

[[theme.navbar.items]]
type = "doc_sidebar"
sidebar_id = "conventionsSidebar"
label = "Conventions"

[[theme.navbar.items]]
type = "doc_sidebar"
sidebar_id = "conceptsSidebar"
label = "Concepts"

[[theme.navbar.items]]
type = "page"
to = "/blog"
label = "Guides"

[[theme.navbar.items]]
type = "external"
href = "https://github.com/MatthewLeigh/just-read-the-docs"
label = "GitHub"
position = "right"

[theme.footer]
style = "dark"
copyright = "Copyright © {{ year }} Matthew Cross. Built with Docusaurus."

[[theme.footer.links]]
title = "Docs"

[[theme.footer.links]]
title = "Community"

[[theme.footer.links]]
title = "More"
items = [
  { label = "Blog", to = "/blog" },
  { label = "GitHub", href = "https://github.com/facebook/docusaurus" },
]
"#;

const DEFAULT_SIDEBARS: &str = r#"# Sidebar registry: each key is a sidebar id referenced from the navbar

[[languagesSidebar]]
type = "autogenerated"
dir_name = "languages"

[[toolsSidebar]]
type = "autogenerated"
dir_name = "tools"

[[conventionsSidebar]]
type = "autogenerated"
dir_name = "conventions"

[[conceptsSidebar]]
type = "autogenerated"
dir_name = "concepts"
"#;
