//! Configuration file watcher for hot reload.
//!
//! The parent directory is watched rather than the file itself: most editors
//! save by writing a temp file and renaming it over the original, which drops
//! a watch placed on the old inode.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use crate::config::loader::{load_config, ConfigError};
use crate::config::schema::AppConfig;

/// Watches one config file and publishes every valid new version.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<AppConfig>,
}

impl ConfigWatcher {
    /// Returns the watcher and the receiving end for reloaded configs.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<AppConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching. The returned handle must be kept alive.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = self.path.file_name().map(OsString::from);
        let path = self.path.clone();
        let tx = self.update_tx;

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if !(event.kind.is_modify() || event.kind.is_create()) {
                        return;
                    }
                    let touches_config = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().map(OsString::from) == file_name);
                    if !touches_config {
                        return;
                    }
                    if let Some(config) = reload(&path) {
                        let _ = tx.send(config);
                    }
                }
                Err(e) => tracing::error!(error = ?e, "Config watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}

/// Reload `path`, logging and discarding a config that fails to load.
pub fn reload(path: &Path) -> Option<AppConfig> {
    tracing::info!(path = ?path, "Config file change detected, reloading");
    match load_config(path) {
        Ok(config) => Some(config),
        Err(ConfigError::Validation(errors)) => {
            for err in &errors {
                tracing::error!(%err, "Rejected config reload");
            }
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to reload config, keeping current configuration");
            None
        }
    }
}
