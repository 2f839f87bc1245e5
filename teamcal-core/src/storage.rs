//! Local durable key-value storage: one JSON document per key.

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::TeamCalResult;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        LocalStorage { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read and decode the document stored under `key`, if any.
    pub fn get_item<T: DeserializeOwned>(&self, key: &str) -> TeamCalResult<Option<T>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        let value = serde_json::from_str(&content)?;
        tracing::debug!(key, path = %path.display(), "read local document");
        Ok(Some(value))
    }

    /// Encode and write `value` under `key`, replacing any previous document.
    pub fn set_item<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> TeamCalResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{key}.json.tmp"));

        let content = serde_json::to_string_pretty(value)?;
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &path)?;
        tracing::debug!(key, path = %path.display(), "wrote local document");
        Ok(())
    }
}
