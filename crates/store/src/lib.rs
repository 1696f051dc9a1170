//! Settings persistence module - key/value storage behind a capability trait
//!
//! The core never touches the filesystem. The shell hands it values loaded
//! through a [`KeyValueStore`], and the two implementations here cover the
//! real program ([`FileStore`], one JSON file per key) and tests
//! ([`MemoryStore`]).
//!
//! Persistence is best-effort by contract: a missing, unreadable, or invalid
//! settings entry silently falls back to [`Settings::default`], and callers
//! are free to ignore write failures.
//!
//! # Storage Format
//!
//! Settings are stored as a single JSON object under [`SETTINGS_KEY`]:
//!
//! ```json
//! { "theme": "icons", "gridSize": [4, 4], "playerCount": 1 }
//! ```
//!
//! Values outside the allowed tables (unknown theme, grid not in
//! `GRID_SIZES`, player count not in `PLAYER_COUNTS`) are treated the same
//! as a corrupt entry.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tui_pairs_types::{GridSize, Settings, Theme, PLAYER_COUNTS, SETTINGS_KEY};

/// Minimal storage capability the application depends on.
///
/// Reads are infallible by design: any failure reads as "nothing stored".
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    /// Write through a sibling temp file so a crash never leaves a
    /// half-written entry behind.
    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        fs::create_dir_all(&self.root)
            .with_context(|| format!("creating {}", self.root.display()))?;

        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &path).with_context(|| format!("replacing {}", path.display()))?;
        Ok(())
    }
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cells: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.cells.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.cells
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Wire representation of [`Settings`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSettings {
    theme: String,
    #[serde(rename = "gridSize")]
    grid_size: [u8; 2],
    #[serde(rename = "playerCount")]
    player_count: u8,
}

impl StoredSettings {
    fn from_settings(settings: Settings) -> Self {
        Self {
            theme: settings.theme.as_str().to_string(),
            grid_size: [settings.grid.rows, settings.grid.cols],
            player_count: settings.player_count,
        }
    }

    /// Back to domain settings, holding every field to its allowed table.
    fn to_settings(&self) -> Option<Settings> {
        let theme = Theme::from_str(&self.theme)?;
        let grid = GridSize::new(self.grid_size[0], self.grid_size[1]);
        if !grid.is_allowed() {
            return None;
        }
        if !PLAYER_COUNTS.contains(&self.player_count) {
            return None;
        }
        Some(Settings {
            theme,
            grid,
            player_count: self.player_count,
        })
    }
}

/// Load settings, silently falling back to the defaults.
pub fn load_settings(store: &dyn KeyValueStore) -> Settings {
    try_load_settings(store).unwrap_or_default()
}

fn try_load_settings(store: &dyn KeyValueStore) -> Option<Settings> {
    let raw = store.read(SETTINGS_KEY)?;
    let stored: StoredSettings = serde_json::from_str(&raw).ok()?;
    stored.to_settings()
}

/// Persist settings under [`SETTINGS_KEY`].
pub fn save_settings(store: &dyn KeyValueStore, settings: Settings) -> Result<()> {
    let raw = serde_json::to_string(&StoredSettings::from_settings(settings))?;
    store.write(SETTINGS_KEY, &raw)
}
