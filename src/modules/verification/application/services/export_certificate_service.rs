use async_trait::async_trait;
use chrono::FixedOffset;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::verification::application::{
    domain::certificate::{CertificateView, RenderOptions},
    ports::{
        incoming::use_cases::{ExportCertificateError, ExportCertificateUseCase},
        outgoing::{CertificateExporter, ExportArtifact, RecordStore},
    },
};

pub struct ExportCertificateService {
    store: Arc<dyn RecordStore>,
    exporter: Arc<dyn CertificateExporter>,
    display_offset: FixedOffset,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag however the export ends.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ExportCertificateService {
    pub fn new(
        store: Arc<dyn RecordStore>,
        exporter: Arc<dyn CertificateExporter>,
        display_offset: FixedOffset,
    ) -> Self {
        Self {
            store,
            exporter,
            display_offset,
            in_flight: AtomicBool::new(false),
        }
    }

    fn try_begin(&self) -> Option<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| InFlightGuard(&self.in_flight))
    }
}

#[async_trait]
impl ExportCertificateUseCase for ExportCertificateService {
    async fn execute(&self, unique_id: &str) -> Result<ExportArtifact, ExportCertificateError> {
        let Some(_guard) = self.try_begin() else {
            warn!("Export of {} refused: another export is running", unique_id);
            return Err(ExportCertificateError::ExportInProgress);
        };

        let record = self
            .store
            .find_by_unique_id(unique_id)
            .await?
            .ok_or(ExportCertificateError::NotFound)?;

        let view = CertificateView::build(&record, RenderOptions::document_export(), self.display_offset);

        match self.exporter.export(&view).await {
            Ok(artifact) => {
                info!("Certificate {} exported as {}", unique_id, artifact.file_name);
                Ok(artifact)
            }
            Err(e) => {
                error!("Export of {} failed: {}", unique_id, e);
                Err(ExportCertificateError::ExportFailed(e.to_string()))
            }
        }
    }
}
