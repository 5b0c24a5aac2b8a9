use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::verification::application::ports::outgoing::{KnownLabels, LabelCatalog, LabelKind};

pub const DEFAULT_STATUSES: [&str; 3] = ["active", "pending", "suspended"];
pub const DEFAULT_CATEGORIES: [&str; 4] = ["general", "premium", "business", "vip"];

/// Process-scoped catalog seeded with the default labels. Insertion order is
/// kept.
#[derive(Debug)]
pub struct MemoryLabelCatalog {
    labels: RwLock<KnownLabels>,
}

impl MemoryLabelCatalog {
    pub fn new() -> Self {
        Self {
            labels: RwLock::new(KnownLabels {
                statuses: DEFAULT_STATUSES.iter().map(|s| s.to_string()).collect(),
                categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

impl Default for MemoryLabelCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LabelCatalog for MemoryLabelCatalog {
    async fn known(&self) -> KnownLabels {
        self.labels.read().await.clone()
    }

    async fn remember(&self, kind: LabelKind, value: &str) -> bool {
        let mut labels = self.labels.write().await;
        let list = match kind {
            LabelKind::Status => &mut labels.statuses,
            LabelKind::Category => &mut labels.categories,
        };

        if list.iter().any(|known| known == value) {
            return false;
        }

        list.push(value.to_string());
        true
    }
}
