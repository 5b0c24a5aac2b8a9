use async_trait::async_trait;
use chrono::FixedOffset;
use std::sync::Arc;

use crate::verification::application::{
    domain::certificate::{CertificateView, RenderOptions},
    ports::{
        incoming::use_cases::{RenderCertificateError, RenderCertificateUseCase},
        outgoing::RecordStore,
    },
};

#[derive(Clone)]
pub struct RenderCertificateService {
    store: Arc<dyn RecordStore>,
    display_offset: FixedOffset,
}

impl RenderCertificateService {
    pub fn new(store: Arc<dyn RecordStore>, display_offset: FixedOffset) -> Self {
        Self {
            store,
            display_offset,
        }
    }
}

#[async_trait]
impl RenderCertificateUseCase for RenderCertificateService {
    async fn execute(
        &self,
        unique_id: &str,
        options: RenderOptions,
    ) -> Result<CertificateView, RenderCertificateError> {
        let record = self
            .store
            .find_by_unique_id(unique_id)
            .await?
            .ok_or(RenderCertificateError::NotFound)?;

        Ok(CertificateView::build(&record, options, self.display_offset))
    }
}
