use async_trait::async_trait;
use std::fmt;

use crate::verification::application::domain::{
    collection::SnapshotError,
    entities::{RecordDraft, RecordPatch, VerificationRecord},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Local,
    Remote,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Local => write!(f, "local"),
            StoreBackend::Remote => write!(f, "remote"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordStoreError {
    #[error("Operation '{operation}' is not supported by the {backend} store")]
    Unsupported {
        operation: &'static str,
        backend: StoreBackend,
    },

    #[error("Remote store error: {0}")]
    Remote(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("No free identifier is left for a new record")]
    IdentifierExhausted,

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(#[from] SnapshotError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// The record collection, whichever backend holds it.
///
/// Reads never fail: an absent or unreadable collection is empty. Write
/// failures of the whole collection are logged by the store, not returned.
#[async_trait]
pub trait RecordStore: Send + Sync {
    fn backend(&self) -> StoreBackend;

    async fn load_all(&self) -> Vec<VerificationRecord>;

    async fn save_all(&self, records: &[VerificationRecord]);

    async fn add(&self, draft: RecordDraft) -> Result<VerificationRecord, RecordStoreError>;

    /// `Ok(None)` when no record carries `unique_id`.
    async fn update(
        &self,
        unique_id: &str,
        patch: RecordPatch,
    ) -> Result<Option<VerificationRecord>, RecordStoreError>;

    /// `Ok(false)` when nothing was removed.
    async fn remove(&self, unique_id: &str) -> Result<bool, RecordStoreError>;

    async fn find_by_unique_id(
        &self,
        unique_id: &str,
    ) -> Result<Option<VerificationRecord>, RecordStoreError>;

    async fn export_snapshot(&self) -> Result<String, RecordStoreError>;

    /// Replaces the whole collection; returns the number of records imported.
    async fn import_snapshot(&self, serialized: &str) -> Result<usize, RecordStoreError>;

    async fn health_check(&self) -> Result<(), RecordStoreError>;
}
