//! Config validation command.

use std::path::Path;

use anyhow::Result;

/// Validate the config, logging every violation. Returns the violation count.
pub fn check(config_path: &Path) -> Result<usize> {
    let loaded = super::load(config_path)?;
    let errors = loaded.builder.validate_all();

    for err in &errors {
        tracing::error!("{}", err);
    }

    if errors.is_empty() {
        tracing::info!("{} is valid", config_path.display());
    }

    Ok(errors.len())
}

/// Run the check command.
pub async fn run(config_path: &Path) -> Result<()> {
    let count = check(config_path)?;
    if count > 0 {
        anyhow::bail!(
            "{} failed validation with {} error{}",
            config_path.display(),
            count,
            if count == 1 { "" } else { "s" }
        );
    }
    Ok(())
}
