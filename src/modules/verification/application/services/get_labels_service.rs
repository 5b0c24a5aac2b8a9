use async_trait::async_trait;
use std::sync::Arc;

use crate::verification::application::ports::{
    incoming::use_cases::GetLabelsUseCase,
    outgoing::{KnownLabels, LabelCatalog, RecordStore},
};

#[derive(Clone)]
pub struct GetLabelsService {
    catalog: Arc<dyn LabelCatalog>,
    store: Arc<dyn RecordStore>,
}

impl GetLabelsService {
    pub fn new(catalog: Arc<dyn LabelCatalog>, store: Arc<dyn RecordStore>) -> Self {
        Self { catalog, store }
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !list.iter().any(|known| known == value) {
        list.push(value.to_string());
    }
}

#[async_trait]
impl GetLabelsUseCase for GetLabelsService {
    async fn execute(&self) -> KnownLabels {
        let mut labels = self.catalog.known().await;

        for record in self.store.load_all().await {
            push_unique(&mut labels.statuses, &record.status);
            push_unique(&mut labels.categories, &record.category);
        }

        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::{memory_record_store, sample_draft};
    use crate::verification::adapter::outgoing::MemoryLabelCatalog;
    use crate::verification::application::ports::outgoing::LabelKind;

    #[tokio::test]
    async fn merges_defaults_added_and_in_use_labels() {
        // Arrange
        let catalog = Arc::new(MemoryLabelCatalog::new());
        catalog.remember(LabelKind::Status, "blocked").await;

        let store = memory_record_store();
        let mut draft = sample_draft("@alice");
        draft.category = "influencer".to_string();
        draft.status = "active".to_string();
        store.add(draft).await.unwrap();

        // Act
        let labels = GetLabelsService::new(catalog, store).execute().await;

        // Assert
        assert_eq!(labels.statuses, vec!["active", "pending", "suspended", "blocked"]);
        assert_eq!(
            labels.categories,
            vec!["general", "premium", "business", "vip", "influencer"]
        );
    }
}
