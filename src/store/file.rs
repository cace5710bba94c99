//! File-backed preference store.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{Persistence, StoreError};

/// A durable key-value store persisted as a JSON object.
///
/// The whole map is read once at [`open`](FileStore::open) and rewritten on
/// every `set`. The store holds a handful of preference keys at most, so
/// rewriting stays cheap.
///
/// # Example
///
/// ```rust,no_run
/// use nightshift::{FileStore, Persistence, THEME_KEY};
///
/// let mut store = FileStore::open("prefs.json")?;
/// store.set(THEME_KEY, "dark");
/// # Ok::<(), nightshift::StoreError>(())
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`, reading any existing entries.
    ///
    /// A missing file is an empty store; the file is created on the first
    /// write.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or holds
    /// anything other than a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(StoreError::Io(err)),
        };
        Ok(Self { path, entries })
    }

    /// The file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl Persistence for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    // A failed write keeps the in-memory value, so the running session
    // stays consistent even when the preference does not survive it.
    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        if let Err(err) = self.persist() {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "failed to persist preference"
            );
        }
    }
}
