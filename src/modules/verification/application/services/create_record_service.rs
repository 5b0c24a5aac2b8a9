use async_trait::async_trait;
use std::sync::Arc;

use crate::verification::application::{
    domain::entities::VerificationRecord,
    ports::{
        incoming::use_cases::{CreateRecordCommand, CreateRecordError, CreateRecordUseCase},
        outgoing::RecordStore,
    },
};

#[derive(Clone)]
pub struct CreateRecordService {
    store: Arc<dyn RecordStore>,
}

impl CreateRecordService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CreateRecordUseCase for CreateRecordService {
    async fn execute(
        &self,
        command: CreateRecordCommand,
    ) -> Result<VerificationRecord, CreateRecordError> {
        self.store
            .add(command.into_draft())
            .await
            .map_err(CreateRecordError::from)
    }
}
