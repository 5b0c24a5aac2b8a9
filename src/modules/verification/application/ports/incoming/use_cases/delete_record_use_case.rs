use async_trait::async_trait;

use crate::verification::application::ports::outgoing::RecordStoreError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteRecordError {
    #[error("Record not found")]
    NotFound,

    #[error("Remote store unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<RecordStoreError> for DeleteRecordError {
    fn from(err: RecordStoreError) -> Self {
        match err {
            RecordStoreError::Remote(msg) => DeleteRecordError::RemoteUnavailable(msg),
            other => DeleteRecordError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteRecordUseCase: Send + Sync {
    async fn execute(&self, unique_id: &str) -> Result<(), DeleteRecordError>;
}
