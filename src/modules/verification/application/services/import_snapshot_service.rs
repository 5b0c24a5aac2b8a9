use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::verification::application::ports::{
    incoming::use_cases::{ImportSnapshotError, ImportSnapshotUseCase},
    outgoing::RecordStore,
};

#[derive(Clone)]
pub struct ImportSnapshotService {
    store: Arc<dyn RecordStore>,
}

impl ImportSnapshotService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ImportSnapshotUseCase for ImportSnapshotService {
    async fn execute(&self, payload: &str) -> Result<usize, ImportSnapshotError> {
        self.store.import_snapshot(payload).await.map_err(|e| {
            warn!("Snapshot import rejected: {}", e);
            ImportSnapshotError::from(e)
        })
    }
}
