use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::verification::application::domain::{
    collection::RecordCollection,
    entities::{RecordDraft, RecordPatch, VerificationRecord},
};
use crate::verification::application::ports::outgoing::{
    KeyValueStorage, RecordStore, RecordStoreError, StoreBackend, UniqueIdGenerator,
};

/// The single key holding the whole collection.
pub const STORAGE_KEY: &str = "veriuser_data";

const MAX_UNIQUE_ID_ATTEMPTS: usize = 16;

/// Record store persisted as one JSON array in a key-value slot.
///
/// Mutations through one instance are serialized. Instances sharing a slot
/// are not coordinated: the last `save_all` wins.
#[derive(Clone)]
pub struct LocalRecordStore<S>
where
    S: KeyValueStorage,
{
    storage: S,
    id_generator: Arc<dyn UniqueIdGenerator>,
    write_lock: Arc<Mutex<()>>,
}

impl<S> LocalRecordStore<S>
where
    S: KeyValueStorage,
{
    pub fn new(storage: S, id_generator: Arc<dyn UniqueIdGenerator>) -> Self {
        Self {
            storage,
            id_generator,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn load_collection(&self) -> RecordCollection {
        RecordCollection::new(self.load_all().await)
    }

    fn fresh_unique_id(&self, collection: &RecordCollection) -> Result<String, RecordStoreError> {
        for _ in 0..MAX_UNIQUE_ID_ATTEMPTS {
            let candidate = self.id_generator.generate();
            if !collection.contains_unique_id(&candidate) {
                return Ok(candidate);
            }
            warn!("Generated unique id {} collides, retrying", candidate);
        }

        Err(RecordStoreError::IdentifierExhausted)
    }
}

#[async_trait]
impl<S> RecordStore for LocalRecordStore<S>
where
    S: KeyValueStorage,
{
    fn backend(&self) -> StoreBackend {
        StoreBackend::Local
    }

    async fn load_all(&self) -> Vec<VerificationRecord> {
        let blob = match self.storage.get_item(STORAGE_KEY).await {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Error loading records, treating as empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<VerificationRecord>>(&blob) {
            Ok(records) => records,
            Err(e) => {
                warn!("Stored records are malformed, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    async fn save_all(&self, records: &[VerificationRecord]) {
        let blob = match serde_json::to_string(records) {
            Ok(blob) => blob,
            Err(e) => {
                error!("Error serializing records: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set_item(STORAGE_KEY, &blob).await {
            error!("Error saving records: {}", e);
        }
    }

    async fn add(&self, draft: RecordDraft) -> Result<VerificationRecord, RecordStoreError> {
        let _guard = self.write_lock.lock().await;

        let mut collection = self.load_collection().await;
        let unique_id = self.fresh_unique_id(&collection)?;
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let record = collection
            .insert(draft, unique_id, created_at)
            .map_err(|e| {
                error!("Cannot add record: {}", e);
                RecordStoreError::IdentifierExhausted
            })?;
        self.save_all(collection.records()).await;

        info!("Record {} created with id {}", record.unique_id, record.id);
        Ok(record)
    }

    async fn update(
        &self,
        unique_id: &str,
        patch: RecordPatch,
    ) -> Result<Option<VerificationRecord>, RecordStoreError> {
        let _guard = self.write_lock.lock().await;

        let mut collection = self.load_collection().await;
        let Some(updated) = collection.update(unique_id, patch) else {
            return Ok(None);
        };

        self.save_all(collection.records()).await;

        info!("Record {} updated", unique_id);
        Ok(Some(updated))
    }

    async fn remove(&self, unique_id: &str) -> Result<bool, RecordStoreError> {
        let _guard = self.write_lock.lock().await;

        let mut collection = self.load_collection().await;
        if !collection.remove(unique_id) {
            return Ok(false);
        }

        self.save_all(collection.records()).await;

        info!("Record {} deleted", unique_id);
        Ok(true)
    }

    async fn find_by_unique_id(
        &self,
        unique_id: &str,
    ) -> Result<Option<VerificationRecord>, RecordStoreError> {
        Ok(self.load_collection().await.find(unique_id).cloned())
    }

    async fn export_snapshot(&self) -> Result<String, RecordStoreError> {
        self.load_collection()
            .await
            .to_snapshot()
            .map_err(|e| RecordStoreError::Serialization(e.to_string()))
    }

    async fn import_snapshot(&self, serialized: &str) -> Result<usize, RecordStoreError> {
        let imported = RecordCollection::from_snapshot(serialized)?;

        let _guard = self.write_lock.lock().await;
        self.save_all(imported.records()).await;

        info!("Snapshot imported with {} records", imported.len());
        Ok(imported.len())
    }

    async fn health_check(&self) -> Result<(), RecordStoreError> {
        self.storage
            .get_item(STORAGE_KEY)
            .await
            .map(|_| ())
            .map_err(|e| RecordStoreError::Storage(e.to_string()))
    }
}
