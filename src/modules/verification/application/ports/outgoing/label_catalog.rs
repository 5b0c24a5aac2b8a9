use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelKind {
    Status,
    Category,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KnownLabels {
    pub statuses: Vec<String>,
    pub categories: Vec<String>,
}

/// Status and category values offered as suggestions. Records may carry
/// values outside the catalog.
#[async_trait]
pub trait LabelCatalog: Send + Sync {
    async fn known(&self) -> KnownLabels;

    /// Returns false when the value was already known.
    async fn remember(&self, kind: LabelKind, value: &str) -> bool;
}
