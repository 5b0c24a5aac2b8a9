use async_trait::async_trait;

use crate::verification::application::{
    domain::entities::{RecordDraft, SocialNetwork, VerificationRecord},
    ports::outgoing::RecordStoreError,
};

pub const DEFAULT_STATUS: &str = "active";
pub const DEFAULT_CATEGORY: &str = "general";

//
// ──────────────────────────────────────────────────────────
// Create Record Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateRecordCommand {
    draft: RecordDraft,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateRecordCommandError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Phone cannot be empty")]
    EmptyPhone,

    #[error("User id cannot be empty")]
    EmptyUserId,

    #[error("Social network #{index} needs a name and an http(s) url")]
    InvalidSocialNetwork { index: usize },
}

impl CreateRecordCommand {
    pub fn new(
        username: String,
        phone: String,
        user_id: String,
        social_networks: Vec<SocialNetwork>,
        status: Option<String>,
        category: Option<String>,
    ) -> Result<Self, CreateRecordCommandError> {
        let username = required(username, CreateRecordCommandError::EmptyUsername)?;
        let phone = required(phone, CreateRecordCommandError::EmptyPhone)?;
        let user_id = required(user_id, CreateRecordCommandError::EmptyUserId)?;
        let social_networks = normalize_social_networks(social_networks)
            .map_err(|index| CreateRecordCommandError::InvalidSocialNetwork { index })?;

        Ok(Self {
            draft: RecordDraft {
                username,
                phone,
                user_id,
                social_networks,
                status: label_or_default(status, DEFAULT_STATUS),
                category: label_or_default(category, DEFAULT_CATEGORY),
            },
        })
    }

    pub fn draft(&self) -> &RecordDraft {
        &self.draft
    }

    pub fn into_draft(self) -> RecordDraft {
        self.draft
    }
}

fn required<E>(value: String, err: E) -> Result<String, E> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(err);
    }
    Ok(trimmed.to_string())
}

fn label_or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Trims every entry. Returns the index of the first entry that is
/// incomplete or whose url is not http(s).
pub(crate) fn normalize_social_networks(
    networks: Vec<SocialNetwork>,
) -> Result<Vec<SocialNetwork>, usize> {
    networks
        .into_iter()
        .enumerate()
        .map(|(index, network)| {
            if !network.is_complete() || !network.has_web_url() {
                return Err(index);
            }
            Ok(SocialNetwork {
                name: network.name.trim().to_string(),
                url: network.url.trim().to_string(),
            })
        })
        .collect()
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateRecordError {
    #[error("Could not allocate an identifier for the record")]
    IdentifierExhausted,

    #[error("Remote store unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<RecordStoreError> for CreateRecordError {
    fn from(err: RecordStoreError) -> Self {
        match err {
            RecordStoreError::IdentifierExhausted => CreateRecordError::IdentifierExhausted,
            RecordStoreError::Remote(msg) => CreateRecordError::RemoteUnavailable(msg),
            other => CreateRecordError::RepositoryError(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateRecordUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateRecordCommand,
    ) -> Result<VerificationRecord, CreateRecordError>;
}
