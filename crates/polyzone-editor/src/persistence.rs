//! Layout persistence.
//!
//! The saved layout is a JSON-encoded array of point-strings stored under
//! a single key in a key-value store. [`LayoutStore`] is the seam standing
//! in for browser local storage; the crate ships an in-memory
//! implementation for tests and a file-per-key implementation for native
//! hosts.
//!
//! A missing key, an empty array, or corrupt JSON all load as an empty
//! layout. Persistence never fails the editor.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use polyzone_core::constants::LAYOUT_KEY;
use polyzone_core::error::StorageError;

use crate::editor::Editor;

/// Key-value storage for persisted layouts.
pub trait LayoutStore {
    /// Reads the value under `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Deletes the value under `key`. Removing an absent key is not an
    /// error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store used by tests and short-lived sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// File-backed store: one JSON file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create storage directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl LayoutStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!(key, %err, "failed to read stored layout, treating as absent");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Failed to write layout file {}", path.display()))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err)
                .with_context(|| format!("Failed to remove layout file {}", path.display())),
        }
    }
}

/// Saves the current layout, overwriting the stored value.
pub fn save_layout<S: LayoutStore>(store: &mut S, editor: &Editor) -> Result<()> {
    let entries = editor.export_all();
    let json = serde_json::to_string(&entries).context("Failed to serialize layout")?;
    store.set(LAYOUT_KEY, &json)
}

/// Loads the stored layout into the editor, replacing its shapes.
///
/// An absent key, an empty array, or corrupt JSON produce an empty layout.
pub fn load_layout<S: LayoutStore>(store: &S, editor: &mut Editor) {
    let entries = match store.get(LAYOUT_KEY) {
        Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(entries) => entries,
            Err(source) => {
                let err = StorageError::CorruptData {
                    key: LAYOUT_KEY.to_string(),
                    source,
                };
                warn!(%err, "starting with an empty layout");
                Vec::new()
            }
        },
        None => Vec::new(),
    };
    editor.load(&entries);
}

/// Deletes the stored layout and clears the editor.
pub fn reset_layout<S: LayoutStore>(store: &mut S, editor: &mut Editor) -> Result<()> {
    store.remove(LAYOUT_KEY)?;
    editor.clear();
    Ok(())
}
