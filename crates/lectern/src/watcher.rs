//! File watching for config re-validation.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    Created(PathBuf),
    Modified(PathBuf),
    Deleted(PathBuf),
}

impl WatchEvent {
    pub fn path(&self) -> &Path {
        match self {
            Self::Created(p) | Self::Modified(p) | Self::Deleted(p) => p,
        }
    }
}

/// Watches directories (non-recursively) for file changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher for the given directories.
    ///
    /// Returns the watcher and a channel to receive events.
    pub fn new(
        dirs: &[PathBuf],
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        for dir in dirs {
            if dir.exists() {
                watcher
                    .watch(dir, RecursiveMode::NonRecursive)
                    .map_err(std::io::Error::other)?;
            }
        }

        // Forward events from notify's thread, per-path debounced
        std::thread::spawn(move || {
            let mut debouncer = Debouncer::new(Duration::from_millis(100));

            while let Ok(event) = sync_rx.recv() {
                let now = Instant::now();
                for path in event.paths {
                    if !debouncer.admit(&path, now) {
                        continue;
                    }

                    if let Some(e) = classify_event(path, &event.kind) {
                        if async_tx.blocking_send(e).is_err() {
                            return;
                        }
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Drops repeat events for a path within `window` of the last one let through.
struct Debouncer {
    window: Duration,
    last_seen: Vec<(PathBuf, Instant)>,
}

impl Debouncer {
    fn new(window: Duration) -> Self {
        Self {
            window,
            last_seen: Vec::new(),
        }
    }

    fn admit(&mut self, path: &Path, now: Instant) -> bool {
        let window = self.window;
        self.last_seen
            .retain(|(_, t)| now.saturating_duration_since(*t) < window);

        if self.last_seen.iter().any(|(p, _)| p == path) {
            return false;
        }
        self.last_seen.push((path.to_path_buf(), now));
        true
    }
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: PathBuf, kind: &notify::EventKind) -> Option<WatchEvent> {
    use notify::EventKind;

    match kind {
        EventKind::Create(_) => Some(WatchEvent::Created(path)),
        EventKind::Remove(_) => Some(WatchEvent::Deleted(path)),
        EventKind::Modify(_) => Some(WatchEvent::Modified(path)),
        _ => None,
    }
}
