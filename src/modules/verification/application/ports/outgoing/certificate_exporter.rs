use async_trait::async_trait;

use crate::verification::application::domain::certificate::CertificateView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CertificateExportError {
    #[error("Rendering failed: {0}")]
    RenderingFailed(String),

    #[error("Conversion failed: {0}")]
    ConversionFailed(String),
}

/// Turns a certificate into a downloadable document.
#[async_trait]
pub trait CertificateExporter: Send + Sync {
    async fn export(&self, view: &CertificateView) -> Result<ExportArtifact, CertificateExportError>;
}
