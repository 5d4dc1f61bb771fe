//! # Filesystem-backed session store
//!
//! [`FileStore`] persists each key as its own file under a base directory.
//! It is the native-platform stand-in for browser `localStorage`, so a
//! credential survives restarts of a desktop build.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── token          # file content is the stored value
//! └── <key>
//! ```
//!
//! Use [`dirs::data_dir()`] (or any writable directory) as the base.

use std::path::PathBuf;

use tracing::warn;

use crate::session_store::SessionStore;

/// Filesystem-backed SessionStore for native platforms.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &std::path::Path {
        &self.base
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // Keys never escape the base directory.
        let name: String = key
            .chars()
            .map(|c| if c == '/' || c == '\\' || c == '.' { '_' } else { c })
            .collect();
        self.base.join(name)
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            warn!(dir = %self.base.display(), error = %e, "Failed to create store directory");
            return;
        }
        if let Err(e) = std::fs::write(self.key_path(key), value) {
            warn!(key, error = %e, "Failed to persist store entry");
        }
    }

    fn remove(&self, key: &str) {
        let path = self.key_path(key);
        if path.exists() {
            if let Err(e) = std::fs::remove_file(path) {
                warn!(key, error = %e, "Failed to remove store entry");
            }
        }
    }

    fn clear_all(&self) -> usize {
        let Ok(entries) = std::fs::read_dir(&self.base) else {
            return 0;
        };
        entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_file())
            .filter(|entry| std::fs::remove_file(entry.path()).is_ok())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileStore::new(dir.path().join("jobfair"));
        assert!(store.get("token").is_none());

        store.set("token", "header.payload.sig");

        // Re-open from same directory
        let reopened = FileStore::new(dir.path().join("jobfair"));
        assert_eq!(reopened.get("token").as_deref(), Some("header.payload.sig"));

        reopened.remove("token");
        assert!(store.get("token").is_none());
    }

    #[test]
    fn test_keys_stay_inside_base() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("jobfair"));

        store.set("../escape", "x");
        assert!(!dir.path().join("escape").exists());
        assert_eq!(store.get("../escape").as_deref(), Some("x"));
    }

    #[test]
    fn test_clear_all_removes_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        store.set("token", "a");
        store.set("theme", "dark");

        assert_eq!(store.clear_all(), 2);
        assert!(store.get("token").is_none());
        assert!(store.get("theme").is_none());
    }

    #[test]
    fn test_missing_directory_reads_as_empty() {
        let store = FileStore::new(PathBuf::from("/nonexistent/jobfair-store"));
        assert!(store.get("token").is_none());
        assert_eq!(store.clear_all(), 0);
    }
}
