//! Settings file watcher.
//!
//! Watches the settings file with `notify` and queues events for the editor
//! to pick up with a non-blocking [`SettingsWatcher::poll`].

use anyhow::Context;
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use tracing::{debug, error};

pub use crate::settings::default_settings_path;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsEvent {
    /// File was created or modified
    Changed,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<SettingsEvent>,
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    /// Start watching `path`. The parent directory is watched so the file
    /// can be created, replaced or deleted and recreated without losing
    /// the watch.
    pub fn new(path: PathBuf) -> anyhow::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let file_name = path.file_name().map(|n| n.to_os_string());

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<notify::Event>| {
                if let Some(event) = classify_event(res, file_name.as_deref()) {
                    let _ = tx.send(event);
                }
            },
            Config::default(),
        )
        .context("creating settings watcher")?;

        let watch_target = watch_dir(&path);
        watcher
            .watch(&watch_target, RecursiveMode::NonRecursive)
            .with_context(|| format!("watching {}", watch_target.display()))?;

        debug!(path = %path.display(), dir = %watch_target.display(), "Watching settings file");
        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next queued event, coalescing bursts of `Changed` into one.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(SettingsEvent::Changed) => latest = Some(SettingsEvent::Changed),
                Ok(other) => return Some(other),
                Err(TryRecvError::Empty) => return latest,
                Err(TryRecvError::Disconnected) => {
                    return latest.or_else(|| {
                        Some(SettingsEvent::Error("settings watcher disconnected".into()))
                    });
                }
            }
        }
    }
}

/// Directory holding the settings file; a bare file name lives in `.`.
fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Map a raw notify event to a settings event. Events for other files in
/// the directory and access events map to `None`.
pub fn classify_event(
    res: notify::Result<notify::Event>,
    file_name: Option<&OsStr>,
) -> Option<SettingsEvent> {
    let ev = match res {
        Ok(ev) => ev,
        Err(e) => {
            error!("settings watch error: {:?}", e);
            return Some(SettingsEvent::Error(e.to_string()));
        }
    };

    let relevant = file_name.is_none_or(|name| ev.paths.iter().any(|p| p.file_name() == Some(name)));
    if !relevant {
        return None;
    }

    match ev.kind {
        EventKind::Create(_) | EventKind::Modify(_) => Some(SettingsEvent::Changed),
        EventKind::Remove(_) => Some(SettingsEvent::Deleted),
        _ => None,
    }
}
