use super::StorageBackend;
use crate::error::{DesnoteError, Result};
use std::fs;
use std::path::PathBuf;

/// File-backed store: one file per key under a data directory.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DesnoteError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path).map_err(DesnoteError::Io)?;
        Ok(Some(raw))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.key_path(key), value).map_err(DesnoteError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().join("data"));

        assert!(backend.get("desnote_root_v7").unwrap().is_none());
        backend.set("desnote_root_v7", "[]").unwrap();
        assert_eq!(
            backend.get("desnote_root_v7").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn values_survive_a_new_backend_instance() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("data");
        let mut backend = FileBackend::new(root.clone());
        backend.set("k", "v1").unwrap();
        backend.set("k", "v2").unwrap();

        let reopened = FileBackend::new(root);
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v2"));
    }
}
