use async_trait::async_trait;
use std::sync::Arc;

use crate::verification::application::{
    domain::entities::VerificationRecord,
    ports::{incoming::use_cases::GetRecordsUseCase, outgoing::RecordStore},
};

#[derive(Clone)]
pub struct GetRecordsService {
    store: Arc<dyn RecordStore>,
}

impl GetRecordsService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GetRecordsUseCase for GetRecordsService {
    async fn execute(&self) -> Vec<VerificationRecord> {
        self.store.load_all().await
    }
}
