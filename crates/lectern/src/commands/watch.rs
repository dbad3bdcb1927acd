//! Watch command: re-validate on every config or sidebar change.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lectern_config::{sidebar, SiteConfig};

use crate::watcher::{FileWatcher, WatchEvent};

/// Run the watch command until interrupted.
pub async fn run(config_path: &Path) -> Result<()> {
    let mut tracked = tracked_files(config_path)?;
    report(config_path);

    let dirs = watch_dirs(&tracked);
    let (_watcher, mut rx) = FileWatcher::new(&dirs).context("Failed to start file watcher")?;

    tracing::info!("Watching {} for changes (Ctrl+C to stop)", config_path.display());

    loop {
        tokio::select! {
            event = rx.recv() => {
                let Some(event) = event else { break };
                if !is_tracked(&event, &tracked) {
                    continue;
                }
                tracing::debug!("Change detected: {:?}", event);
                report(config_path);

                // Sidebar paths may have moved with the config
                if let Ok(files) = tracked_files(config_path) {
                    if watch_dirs(&files) != dirs {
                        tracing::warn!("Sidebar files moved to a new directory; restart watch to follow them");
                    }
                    tracked = files;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Stopping watch");
                break;
            }
        }
    }

    Ok(())
}

fn report(config_path: &Path) {
    match super::check::check(config_path) {
        Ok(0) => {}
        Ok(count) => tracing::warn!("{} validation error(s)", count),
        Err(e) => tracing::error!("{:#}", e),
    }
}

/// Absolute paths of the config file and the sidebar files it names.
///
/// Sidebar files are only known while the config parses; otherwise just the
/// config itself is tracked.
fn tracked_files(config_path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = vec![absolute(config_path)?];

    if let Ok(config) = SiteConfig::load(config_path) {
        let config_dir = config_path.parent().unwrap_or(Path::new(""));
        for path in sidebar::sidebar_paths(&config, config_dir) {
            files.push(absolute(&path)?);
        }
    }

    Ok(files)
}

/// Canonical parent directory joined with the file name, so it compares
/// equal to the paths notify reports for that directory.
fn absolute(path: &Path) -> Result<PathBuf> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let dir = fs::canonicalize(parent)
        .with_context(|| format!("Failed to resolve {}", parent.display()))?;
    let name = path
        .file_name()
        .with_context(|| format!("Not a file path: {}", path.display()))?;
    Ok(dir.join(name))
}

fn watch_dirs(files: &[PathBuf]) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = files
        .iter()
        .filter_map(|f| f.parent().map(Path::to_path_buf))
        .collect();
    dirs.sort();
    dirs.dedup();
    dirs
}

fn is_tracked(event: &WatchEvent, tracked: &[PathBuf]) -> bool {
    tracked.iter().any(|t| t == event.path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn tracks_config_and_sidebar_files() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("site.toml");
        fs::create_dir_all(temp.path().join("nav")).unwrap();
        fs::write(
            &config,
            r#"
title = "Docs"

[[presets]]
name = "classic"
docs = { sidebar_path = "nav/sidebars.toml" }
"#,
        )
        .unwrap();

        let files = tracked_files(&config).unwrap();
        let root = fs::canonicalize(temp.path()).unwrap();

        assert_eq!(
            files,
            vec![root.join("site.toml"), root.join("nav").join("sidebars.toml")]
        );
        assert_eq!(watch_dirs(&files), vec![root.clone(), root.join("nav")]);
        assert!(is_tracked(
            &WatchEvent::Modified(root.join("site.toml")),
            &files
        ));
        assert!(!is_tracked(
            &WatchEvent::Modified(root.join("other.toml")),
            &files
        ));
    }

    #[test]
    fn tracks_only_config_when_it_does_not_parse() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("site.toml");
        fs::write(&config, "title = ").unwrap();

        let files = tracked_files(&config).unwrap();

        assert_eq!(files.len(), 1);
    }
}
