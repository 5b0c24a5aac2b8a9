use async_trait::async_trait;

use crate::verification::application::ports::outgoing::RecordStoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotDownload {
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportSnapshotError {
    #[error("Operation not supported: {0}")]
    Unsupported(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<RecordStoreError> for ExportSnapshotError {
    fn from(err: RecordStoreError) -> Self {
        match err {
            unsupported @ RecordStoreError::Unsupported { .. } => {
                ExportSnapshotError::Unsupported(unsupported.to_string())
            }
            other => ExportSnapshotError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait ExportSnapshotUseCase: Send + Sync {
    async fn execute(&self) -> Result<SnapshotDownload, ExportSnapshotError>;
}
