//! Directory-backed storage: one file per key.

use std::fs;
use std::path::{Path, PathBuf};

use super::Storage;
use crate::error::{LiftlogError, Result};

/// Stores each key as `<dir>/<sanitized key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`. Characters outside `[A-Za-z0-9._-]` become `_`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

fn storage_error(key: &str, err: impl ToString) -> LiftlogError {
    LiftlogError::Storage {
        key: key.to_string(),
        message: err.to_string(),
    }
}

impl Storage for FileStorage {
    /// Bytes that are not UTF-8 come back lossily decoded, so the store
    /// sees an unparseable document rather than a read failure.
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path).map_err(|e| storage_error(key, e))?;
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }

    /// Atomic write: write to a temp file, then rename over the target.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| storage_error(key, e))?;

        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value).map_err(|e| storage_error(key, e))?;
        fs::rename(&temp_path, &path).map_err(|e| storage_error(key, e))?;

        tracing::trace!(path = %path.display(), bytes = value.len(), "wrote storage key");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_missing_key_is_none() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());
        assert!(storage.get("swt:data:v1").unwrap().is_none());
    }

    #[test]
    fn set_then_get() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path().join("nested"));
        storage.set("swt:data:v1", "{\"programs\":[]}").unwrap();
        assert_eq!(
            storage.get("swt:data:v1").unwrap().as_deref(),
            Some("{\"programs\":[]}")
        );
    }

    #[test]
    fn key_is_sanitized() {
        let storage = FileStorage::new("/data");
        assert_eq!(
            storage.path_for("swt:data:v1"),
            PathBuf::from("/data/swt_data_v1.json")
        );
    }

    #[test]
    fn set_uses_atomic_write() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path());
        storage.set("k", "one").unwrap();
        storage.set("k", "two").unwrap();

        let temp_path = storage.path_for("k").with_extension("json.tmp");
        assert!(
            !temp_path.exists(),
            "Temp file should not exist after successful save"
        );
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn get_decodes_invalid_utf8_lossily() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());
        fs::write(storage.path_for("k"), [0xFF, 0xFE, 0x00]).unwrap();
        let value = storage.get("k").unwrap().unwrap();
        assert!(value.starts_with('\u{FFFD}'));
    }
}
