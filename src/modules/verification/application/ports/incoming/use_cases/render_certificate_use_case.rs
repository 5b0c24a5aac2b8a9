use async_trait::async_trait;

use crate::verification::application::{
    domain::certificate::{CertificateView, RenderOptions},
    ports::outgoing::RecordStoreError,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderCertificateError {
    #[error("Record not found")]
    NotFound,

    #[error("Remote store unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<RecordStoreError> for RenderCertificateError {
    fn from(err: RecordStoreError) -> Self {
        match err {
            RecordStoreError::Remote(msg) => RenderCertificateError::RemoteUnavailable(msg),
            other => RenderCertificateError::RepositoryError(other.to_string()),
        }
    }
}

/// Resolves a public token to a display-ready certificate.
#[async_trait]
pub trait RenderCertificateUseCase: Send + Sync {
    async fn execute(
        &self,
        unique_id: &str,
        options: RenderOptions,
    ) -> Result<CertificateView, RenderCertificateError>;
}
