use async_trait::async_trait;

use crate::verification::application::domain::entities::VerificationRecord;

/// Lists the whole collection in stored order. An unreadable store lists as
/// empty.
#[async_trait]
pub trait GetRecordsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<VerificationRecord>;
}
