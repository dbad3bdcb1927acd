//! Generator export command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lectern_config::{export_string, ExportContext};

/// Run the export command.
pub async fn run(config_path: &Path, output: &Path, year: Option<i32>) -> Result<()> {
    let loaded = super::load(config_path)?;
    let config = loaded
        .builder
        .build()
        .with_context(|| format!("{} failed validation", config_path.display()))?;

    let ctx = year.map(ExportContext::new).unwrap_or_else(ExportContext::current);
    let json = export_string(&config, &ctx)?;

    if output == Path::new("-") {
        println!("{}", json);
        return Ok(());
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(output, json).with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!("Exported {} to {}", config.title, output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn writes_generator_json() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("site.toml");
        let output = temp.path().join("build").join("site.config.json");
        fs::write(
            &config,
            "title = \"Docs\"\nbase_url = \"/x/\"\n[theme.footer]\ncopyright = \"© {{ year }}\"",
        )
        .unwrap();

        run(&config, &output, Some(2024)).await.unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["baseUrl"], "/x/");
        assert_eq!(value["themeConfig"]["footer"]["copyright"], "© 2024");
    }

    #[tokio::test]
    async fn refuses_invalid_config() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("site.toml");
        let output = temp.path().join("site.config.json");
        fs::write(&config, "title = \"Docs\"\nbase_url = \"/x\"").unwrap();

        let err = run(&config, &output, Some(2024)).await.unwrap_err();

        assert!(format!("{err:#}").contains("[base_url] must start and end with `/`"));
        assert!(!output.exists());
    }
}
