use async_trait::async_trait;

use crate::verification::application::ports::outgoing::{ExportArtifact, RecordStoreError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportCertificateError {
    #[error("Record not found")]
    NotFound,

    #[error("Another export is in progress")]
    ExportInProgress,

    #[error("Export failed: {0}")]
    ExportFailed(String),

    #[error("Remote store unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<RecordStoreError> for ExportCertificateError {
    fn from(err: RecordStoreError) -> Self {
        match err {
            RecordStoreError::Remote(msg) => ExportCertificateError::RemoteUnavailable(msg),
            other => ExportCertificateError::RepositoryError(other.to_string()),
        }
    }
}

/// Produces a printable document for one certificate. At most one export
/// runs at a time; concurrent requests are refused, not queued.
#[async_trait]
pub trait ExportCertificateUseCase: Send + Sync {
    async fn execute(&self, unique_id: &str) -> Result<ExportArtifact, ExportCertificateError>;
}
