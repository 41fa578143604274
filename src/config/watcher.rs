//! Manifest and source watcher for `watch` mode.
//!
//! Only changes to the manifest or to files with a scanned extension trigger
//! a reload. Writes to the report file are ignored, so a report kept inside a
//! watched directory does not re-trigger the check that wrote it.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::CheckerConfig;
use crate::discovery::has_extension;

/// Which changed paths are worth a reload.
#[derive(Debug, Clone)]
struct ChangeFilter {
    manifest: PathBuf,
    extensions: Vec<String>,
    report: Option<PathBuf>,
}

impl ChangeFilter {
    fn is_relevant(&self, event: &Event) -> bool {
        let kind = event.kind.is_modify() || event.kind.is_create() || event.kind.is_remove();
        kind && event.paths.iter().any(|path| self.is_relevant_path(path))
    }

    fn is_relevant_path(&self, path: &Path) -> bool {
        let path = absolute(path);
        if self.report.as_ref() == Some(&path) {
            return false;
        }
        path == self.manifest || has_extension(&path, &self.extensions)
    }
}

/// A watcher that reloads the manifest whenever it or a watched source
/// directory changes.
pub struct ConfigWatcher {
    dirs: Vec<PathBuf>,
    filter: ChangeFilter,
    update_tx: mpsc::UnboundedSender<CheckerConfig>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher for the directories `config` reads from.
    ///
    /// Returns the watcher and a receiver for reloaded configurations.
    pub fn new(
        manifest: &Path,
        config: &CheckerConfig,
    ) -> (Self, mpsc::UnboundedReceiver<CheckerConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let filter = ChangeFilter {
            manifest: absolute(manifest),
            extensions: config.scan.extensions.clone(),
            report: config.report.path.as_deref().map(absolute),
        };

        (
            Self {
                dirs: config.watched_dirs().iter().map(|d| absolute(d)).collect(),
                filter,
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching. The returned handle must be kept alive.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let filter = self.filter.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if filter.is_relevant(&event) {
                        tracing::debug!(paths = ?event.paths, "Change detected, reloading manifest");
                        match load_config(&filter.manifest) {
                            Ok(config) => {
                                let _ = tx.send(config);
                            }
                            Err(e) => {
                                tracing::error!("Failed to reload manifest: {}. Keeping current configuration.", e);
                            }
                        }
                    } else {
                        tracing::trace!(paths = ?event.paths, "Ignoring change");
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.filter.manifest, RecursiveMode::NonRecursive)?;
        for dir in &self.dirs {
            watcher.watch(dir, RecursiveMode::Recursive)?;
        }

        tracing::info!(manifest = ?self.filter.manifest, dirs = self.dirs.len(), "Watcher started");
        Ok(watcher)
    }
}

/// Canonical form of `path` so event paths compare equal to configured ones.
/// Falls back to canonicalizing the parent for files that do not exist yet.
fn absolute(path: &Path) -> PathBuf {
    if let Ok(canonical) = fs::canonicalize(path) {
        return canonical;
    }
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    match (parent.and_then(|p| fs::canonicalize(p).ok()), path.file_name()) {
        (Some(parent), Some(name)) => parent.join(name),
        _ => path.to_path_buf(),
    }
}
