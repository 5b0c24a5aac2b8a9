use async_trait::async_trait;

use crate::verification::application::{
    domain::entities::VerificationRecord, ports::outgoing::RecordStoreError,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSingleRecordError {
    #[error("Record not found")]
    NotFound,

    #[error("Remote store unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<RecordStoreError> for GetSingleRecordError {
    fn from(err: RecordStoreError) -> Self {
        match err {
            RecordStoreError::Remote(msg) => GetSingleRecordError::RemoteUnavailable(msg),
            other => GetSingleRecordError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait GetSingleRecordUseCase: Send + Sync {
    async fn execute(&self, unique_id: &str) -> Result<VerificationRecord, GetSingleRecordError>;
}
