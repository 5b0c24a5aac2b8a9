use async_trait::async_trait;

use crate::verification::application::{
    domain::collection::SnapshotError, ports::outgoing::RecordStoreError,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportSnapshotError {
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(SnapshotError),

    #[error("Operation not supported: {0}")]
    Unsupported(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<RecordStoreError> for ImportSnapshotError {
    fn from(err: RecordStoreError) -> Self {
        match err {
            RecordStoreError::InvalidSnapshot(reason) => ImportSnapshotError::InvalidSnapshot(reason),
            unsupported @ RecordStoreError::Unsupported { .. } => {
                ImportSnapshotError::Unsupported(unsupported.to_string())
            }
            other => ImportSnapshotError::RepositoryError(other.to_string()),
        }
    }
}

/// Replaces the whole collection. Returns how many records were imported.
#[async_trait]
pub trait ImportSnapshotUseCase: Send + Sync {
    async fn execute(&self, payload: &str) -> Result<usize, ImportSnapshotError>;
}
