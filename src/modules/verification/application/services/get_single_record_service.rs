use async_trait::async_trait;
use std::sync::Arc;

use crate::verification::application::{
    domain::entities::VerificationRecord,
    ports::{
        incoming::use_cases::{GetSingleRecordError, GetSingleRecordUseCase},
        outgoing::RecordStore,
    },
};

#[derive(Clone)]
pub struct GetSingleRecordService {
    store: Arc<dyn RecordStore>,
}

impl GetSingleRecordService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GetSingleRecordUseCase for GetSingleRecordService {
    async fn execute(&self, unique_id: &str) -> Result<VerificationRecord, GetSingleRecordError> {
        self.store
            .find_by_unique_id(unique_id)
            .await?
            .ok_or(GetSingleRecordError::NotFound)
    }
}
