use async_trait::async_trait;
use std::sync::Arc;

use crate::verification::application::ports::{
    incoming::use_cases::{DeleteRecordError, DeleteRecordUseCase},
    outgoing::RecordStore,
};

#[derive(Clone)]
pub struct DeleteRecordService {
    store: Arc<dyn RecordStore>,
}

impl DeleteRecordService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DeleteRecordUseCase for DeleteRecordService {
    async fn execute(&self, unique_id: &str) -> Result<(), DeleteRecordError> {
        if self.store.remove(unique_id).await? {
            Ok(())
        } else {
            Err(DeleteRecordError::NotFound)
        }
    }
}
