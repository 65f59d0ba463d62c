use std::{
    fmt, fs,
    path::{Path, PathBuf},
    sync::mpsc::{self, Receiver},
};

use anyhow::{anyhow, Context};
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::graphic::CursorGraphic;

/// Which graphic each configurable slot shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CursorConfig {
    pub default: CursorGraphic,
    pub smart: CursorGraphic,
    pub chat_share: CursorGraphic,
    pub favorite: CursorGraphic,
    pub quick_trash: CursorGraphic,
    pub unequip: CursorGraphic,
    pub transfer: CursorGraphic,
    pub sell: CursorGraphic,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            default: CursorGraphic::Arrow,
            smart: CursorGraphic::Smart,
            chat_share: CursorGraphic::ChatShare,
            favorite: CursorGraphic::Favorite,
            quick_trash: CursorGraphic::Trash,
            unequip: CursorGraphic::Hand,
            transfer: CursorGraphic::Hand,
            sell: CursorGraphic::Sell,
        }
    }
}

impl CursorConfig {
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the mapping file, falling back to defaults when there is none.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            info!("No cursor config at {path:?}, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).with_context(|| format!("could not read cursor config {path:?}"))?;

        Self::parse(&content).with_context(|| format!("invalid cursor config {path:?}"))
    }
}

/// Reloads the config file whenever the file system reports a change to it.
pub struct ConfigWatcher {
    path: PathBuf,
    changes: Receiver<()>,
    _watcher: Option<RecommendedWatcher>,
    applied: CursorConfig,
}

impl ConfigWatcher {
    /// Watches the file's directory so that editors replacing the file are still seen.
    pub fn watch(path: impl Into<PathBuf>, applied: CursorConfig) -> anyhow::Result<Self> {
        let path = path.into();
        let (tx, rx) = mpsc::channel();

        let file_name = path.file_name().map(|name| name.to_os_string()).ok_or_else(|| anyhow!("cursor config {path:?} has no file name"))?;
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<notify::Event, notify::Error>| {
                if let Ok(event) = res {
                    let touches_config = event.paths.iter().any(|changed| changed.file_name() == Some(file_name.as_os_str()));

                    if touches_config && !event.kind.is_access() {
                        let _ = tx.send(());
                    }
                }
            },
            Config::default(),
        )?;

        watcher
            .watch(&directory, RecursiveMode::NonRecursive)
            .with_context(|| format!("could not watch {directory:?}"))?;

        info!("Watching cursor config {path:?}");

        Ok(Self { path, changes: rx, _watcher: Some(watcher), applied })
    }

    /// A watcher driven by whoever holds the sending half.
    pub fn from_channel(path: impl Into<PathBuf>, changes: Receiver<()>, applied: CursorConfig) -> Self {
        Self { path: path.into(), changes, _watcher: None, applied }
    }

    pub fn applied(&self) -> CursorConfig {
        self.applied
    }

    /// Returns the new config when the file changed to something different from what is applied.
    pub fn poll(&mut self) -> Option<CursorConfig> {
        let mut changed = false;

        while self.changes.try_recv().is_ok() {
            changed = true;
        }

        if !changed {
            return None;
        }

        if !self.path.exists() {
            warn!("Cursor config {:?} is gone, keeping previous config", self.path);
            return None;
        }

        let config = match CursorConfig::load(Some(&self.path)) {
            Ok(config) => config,
            Err(err) => {
                warn!("Keeping previous cursor config: {err:#}");
                return None;
            },
        };

        if config == self.applied {
            return None;
        }

        info!("Cursor config changed: {config:?}");

        self.applied = config;

        Some(config)
    }
}

impl fmt::Debug for ConfigWatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigWatcher").field("path", &self.path).field("applied", &self.applied).finish_non_exhaustive()
    }
}
