use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::verification::application::ports::{
    incoming::use_cases::{AddLabelCommand, AddLabelUseCase},
    outgoing::LabelCatalog,
};

#[derive(Clone)]
pub struct AddLabelService {
    catalog: Arc<dyn LabelCatalog>,
}

impl AddLabelService {
    pub fn new(catalog: Arc<dyn LabelCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl AddLabelUseCase for AddLabelService {
    async fn execute(&self, command: AddLabelCommand) -> bool {
        let added = self.catalog.remember(command.kind(), command.value()).await;
        if added {
            info!("Label {:?} '{}' added", command.kind(), command.value());
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verification::adapter::outgoing::MemoryLabelCatalog;
    use crate::verification::application::ports::outgoing::LabelKind;

    #[tokio::test]
    async fn adds_new_label_once() {
        let catalog = Arc::new(MemoryLabelCatalog::new());
        let service = AddLabelService::new(catalog.clone());
        let command = AddLabelCommand::new(LabelKind::Category, "media".to_string()).unwrap();

        assert!(service.execute(command.clone()).await);
        assert!(!service.execute(command).await);
        assert!(catalog
            .known()
            .await
            .categories
            .contains(&"media".to_string()));
    }
}
