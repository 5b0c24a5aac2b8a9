use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::verification::adapter::outgoing::{
    LocalRecordStore, MemoryKeyValueStorage, RandomUniqueIdGenerator,
};
use crate::verification::application::domain::entities::{
    RecordDraft, RecordPatch, SocialNetwork, VerificationRecord,
};
use crate::verification::application::ports::outgoing::{
    RecordStore, RecordStoreError, StoreBackend, UniqueIdGenerator,
};

// ============================================================
// Records
// ============================================================

pub fn sample_draft(username: &str) -> RecordDraft {
    RecordDraft {
        username: username.to_string(),
        phone: "+7 (900) 123-45-67".to_string(),
        user_id: "100500".to_string(),
        social_networks: vec![SocialNetwork {
            name: "Telegram".to_string(),
            url: format!("https://t.me/{}", username.trim_start_matches('@')),
        }],
        status: "active".to_string(),
        category: "general".to_string(),
    }
}

pub fn sample_record(id: i64, unique_id: &str, username: &str) -> VerificationRecord {
    let draft = sample_draft(username);
    VerificationRecord {
        id,
        unique_id: unique_id.to_string(),
        username: draft.username,
        phone: draft.phone,
        user_id: draft.user_id,
        social_networks: draft.social_networks,
        status: draft.status,
        category: draft.category,
        created_at: "2026-03-01T09:30:00.000Z".to_string(),
    }
}

/// A fresh local store over in-memory storage.
pub fn memory_record_store() -> Arc<dyn RecordStore> {
    Arc::new(LocalRecordStore::new(
        MemoryKeyValueStorage::new(),
        Arc::new(RandomUniqueIdGenerator),
    ))
}

// ============================================================
// Identifier generator with scripted output
// ============================================================

pub struct SequenceIdGenerator {
    tokens: Mutex<VecDeque<String>>,
}

impl SequenceIdGenerator {
    pub fn new(tokens: &[&str]) -> Self {
        Self {
            tokens: Mutex::new(tokens.iter().map(|t| t.to_string()).collect()),
        }
    }
}

impl UniqueIdGenerator for SequenceIdGenerator {
    fn generate(&self) -> String {
        self.tokens
            .lock()
            .unwrap()
            .pop_front()
            .expect("SequenceIdGenerator ran out of tokens")
    }
}

// ============================================================
// Record store failing every fallible call
// ============================================================

#[derive(Clone)]
pub struct FailingRecordStore {
    backend: StoreBackend,
    error: RecordStoreError,
}

impl FailingRecordStore {
    pub fn new(error: RecordStoreError) -> Self {
        Self {
            backend: StoreBackend::Local,
            error,
        }
    }

    pub fn remote_down() -> Self {
        Self {
            backend: StoreBackend::Remote,
            error: RecordStoreError::Remote("connection refused".to_string()),
        }
    }
}

#[async_trait]
impl RecordStore for FailingRecordStore {
    fn backend(&self) -> StoreBackend {
        self.backend
    }

    async fn load_all(&self) -> Vec<VerificationRecord> {
        vec![]
    }

    async fn save_all(&self, _records: &[VerificationRecord]) {}

    async fn add(&self, _draft: RecordDraft) -> Result<VerificationRecord, RecordStoreError> {
        Err(self.error.clone())
    }

    async fn update(
        &self,
        _unique_id: &str,
        _patch: RecordPatch,
    ) -> Result<Option<VerificationRecord>, RecordStoreError> {
        Err(self.error.clone())
    }

    async fn remove(&self, _unique_id: &str) -> Result<bool, RecordStoreError> {
        Err(self.error.clone())
    }

    async fn find_by_unique_id(
        &self,
        _unique_id: &str,
    ) -> Result<Option<VerificationRecord>, RecordStoreError> {
        Err(self.error.clone())
    }

    async fn export_snapshot(&self) -> Result<String, RecordStoreError> {
        Err(self.error.clone())
    }

    async fn import_snapshot(&self, _serialized: &str) -> Result<usize, RecordStoreError> {
        Err(self.error.clone())
    }

    async fn health_check(&self) -> Result<(), RecordStoreError> {
        Err(self.error.clone())
    }
}
