//! Slot adapters
//!
//! In-memory slot for tests and benches, file-backed slot for the CLI.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use crate::error::{BookError, Result};

use super::StorageSlot;

// =============================================================================
// MemorySlot
// =============================================================================

/// HashMap-backed slot
///
/// `set_available(false)` makes every call fail with `StorageUnavailable`,
/// which is how tests simulate a medium that cannot be reached.
pub struct MemorySlot {
    entries: RwLock<HashMap<String, String>>,
    available: AtomicBool,
}

impl MemorySlot {
    /// Create an empty, available slot
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Toggle availability of the medium
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Whether the medium is currently reachable
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<()> {
        if self.is_available() {
            Ok(())
        } else {
            Err(BookError::StorageUnavailable(
                "memory slot switched off".to_string(),
            ))
        }
    }
}

impl Default for MemorySlot {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageSlot for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check_available()?;
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check_available()?;
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// FileSlot
// =============================================================================

/// Directory-backed slot, one `{key}.json` file per key
///
/// Writes land in a temporary sibling first and are renamed into place, so
/// a reader sees either the old blob or the new one.
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    const EXTENSION: &'static str = "json";
    const TEMP_SUFFIX: &'static str = "tmp";

    /// Open or create a slot directory
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Get the slot directory path
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds the blob for `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, Self::EXTENSION))
    }

    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}.{}", key, Self::EXTENSION, Self::TEMP_SUFFIX))
    }

    fn unavailable(path: &Path, err: std::io::Error) -> BookError {
        BookError::StorageUnavailable(format!("{}: {}", path.display(), err))
    }
}

impl StorageSlot for FileSlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::unavailable(&path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let temp_path = self.temp_path_for(key);

        fs::write(&temp_path, value).map_err(|e| Self::unavailable(&temp_path, e))?;
        fs::rename(&temp_path, &path).map_err(|e| Self::unavailable(&path, e))?;

        Ok(())
    }
}
