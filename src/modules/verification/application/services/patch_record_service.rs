use async_trait::async_trait;
use std::sync::Arc;

use crate::verification::application::{
    domain::entities::VerificationRecord,
    ports::{
        incoming::use_cases::{PatchRecordCommand, PatchRecordError, PatchRecordUseCase},
        outgoing::RecordStore,
    },
};

#[derive(Clone)]
pub struct PatchRecordService {
    store: Arc<dyn RecordStore>,
}

impl PatchRecordService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PatchRecordUseCase for PatchRecordService {
    async fn execute(
        &self,
        command: PatchRecordCommand,
    ) -> Result<VerificationRecord, PatchRecordError> {
        let (unique_id, patch) = command.into_parts();

        self.store
            .update(&unique_id, patch)
            .await?
            .ok_or(PatchRecordError::NotFound)
    }
}
