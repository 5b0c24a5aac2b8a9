use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use crate::verification::application::ports::{
    incoming::use_cases::{ExportSnapshotError, ExportSnapshotUseCase, SnapshotDownload},
    outgoing::RecordStore,
};

pub fn backup_file_name(date: NaiveDate) -> String {
    format!("veriuser-backup-{}.json", date.format("%Y-%m-%d"))
}

#[derive(Clone)]
pub struct ExportSnapshotService {
    store: Arc<dyn RecordStore>,
}

impl ExportSnapshotService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ExportSnapshotUseCase for ExportSnapshotService {
    async fn execute(&self) -> Result<SnapshotDownload, ExportSnapshotError> {
        let content = self.store.export_snapshot().await?;

        Ok(SnapshotDownload {
            file_name: backup_file_name(Utc::now().date_naive()),
            content,
        })
    }
}
