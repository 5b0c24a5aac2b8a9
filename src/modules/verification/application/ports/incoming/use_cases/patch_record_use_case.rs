use async_trait::async_trait;

use super::create_record_use_case::normalize_social_networks;
use crate::verification::application::{
    domain::entities::{RecordPatch, SocialNetwork, VerificationRecord},
    ports::outgoing::RecordStoreError,
};

//
// ──────────────────────────────────────────────────────────
// Patch Record Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct PatchRecordFields {
    pub username: Option<String>,
    pub phone: Option<String>,
    pub user_id: Option<String>,
    pub social_networks: Option<Vec<SocialNetwork>>,
    pub status: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PatchRecordCommand {
    unique_id: String,
    patch: RecordPatch,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchRecordCommandError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Phone cannot be empty")]
    EmptyPhone,

    #[error("User id cannot be empty")]
    EmptyUserId,

    #[error("Social network #{index} needs a name and an http(s) url")]
    InvalidSocialNetwork { index: usize },

    #[error("{field} cannot be empty")]
    EmptyLabel { field: &'static str },
}

impl PatchRecordCommand {
    /// Fields left `None` keep their stored value. Present fields are
    /// trimmed and must not be blank.
    pub fn new(
        unique_id: impl Into<String>,
        fields: PatchRecordFields,
    ) -> Result<Self, PatchRecordCommandError> {
        let patch = RecordPatch {
            username: present(fields.username, PatchRecordCommandError::EmptyUsername)?,
            phone: present(fields.phone, PatchRecordCommandError::EmptyPhone)?,
            user_id: present(fields.user_id, PatchRecordCommandError::EmptyUserId)?,
            social_networks: fields
                .social_networks
                .map(normalize_social_networks)
                .transpose()
                .map_err(|index| PatchRecordCommandError::InvalidSocialNetwork { index })?,
            status: present(
                fields.status,
                PatchRecordCommandError::EmptyLabel { field: "status" },
            )?,
            category: present(
                fields.category,
                PatchRecordCommandError::EmptyLabel { field: "category" },
            )?,
        };

        Ok(Self {
            unique_id: unique_id.into(),
            patch,
        })
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn patch(&self) -> &RecordPatch {
        &self.patch
    }

    pub fn into_parts(self) -> (String, RecordPatch) {
        (self.unique_id, self.patch)
    }
}

fn present(
    value: Option<String>,
    err: PatchRecordCommandError,
) -> Result<Option<String>, PatchRecordCommandError> {
    match value {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Err(err),
        Some(v) => Ok(Some(v.trim().to_string())),
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchRecordError {
    #[error("Record not found")]
    NotFound,

    #[error("Operation not supported: {0}")]
    Unsupported(String),

    #[error("Remote store unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<RecordStoreError> for PatchRecordError {
    fn from(err: RecordStoreError) -> Self {
        match err {
            unsupported @ RecordStoreError::Unsupported { .. } => {
                PatchRecordError::Unsupported(unsupported.to_string())
            }
            RecordStoreError::Remote(msg) => PatchRecordError::RemoteUnavailable(msg),
            other => PatchRecordError::RepositoryError(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PatchRecordUseCase: Send + Sync {
    async fn execute(
        &self,
        command: PatchRecordCommand,
    ) -> Result<VerificationRecord, PatchRecordError>;
}
