use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::verification::application::ports::outgoing::{KeyValueStorage, StorageError};

/// Process-scoped storage. Clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryKeyValueStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
