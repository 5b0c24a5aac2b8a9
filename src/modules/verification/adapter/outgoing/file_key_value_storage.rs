use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::verification::application::ports::outgoing::{KeyValueStorage, StorageError};

/// One `<key>.json` file per key under `root`.
///
/// Writes go to a temp file first and are renamed over the target, so a
/// reader sees either the old blob or the new one.
#[derive(Debug, Clone)]
pub struct FileKeyValueStorage {
    root: PathBuf,
}

impl FileKeyValueStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStorage for FileKeyValueStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed(format!("{}: {}", path.display(), e))),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", self.root.display(), e)))?;

        let tmp = self.root.join(format!(".{key}.{}.tmp", Uuid::new_v4()));

        tokio::fs::write(&tmp, value)
            .await
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", tmp.display(), e)))?;

        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StorageError::WriteFailed(format!("{}: {}", path.display(), e)));
        }

        Ok(())
    }
}
