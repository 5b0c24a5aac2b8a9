use async_trait::async_trait;

use crate::verification::application::ports::outgoing::KnownLabels;

/// Catalog labels merged with the labels carried by stored records.
#[async_trait]
pub trait GetLabelsUseCase: Send + Sync {
    async fn execute(&self) -> KnownLabels;
}
