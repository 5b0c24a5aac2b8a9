use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::verification::application::domain::entities::{SocialNetwork, VerificationRecord};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SocialNetworkDto {
    #[schema(example = "Telegram")]
    #[serde(default)]
    pub name: String,

    #[schema(example = "https://t.me/alice")]
    #[serde(default)]
    pub url: String,
}

impl From<SocialNetworkDto> for SocialNetwork {
    fn from(dto: SocialNetworkDto) -> Self {
        SocialNetwork {
            name: dto.name,
            url: dto.url,
        }
    }
}

impl From<SocialNetwork> for SocialNetworkDto {
    fn from(network: SocialNetwork) -> Self {
        SocialNetworkDto {
            name: network.name,
            url: network.url,
        }
    }
}

/// A record as the admin sees it, with its public link.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecordResponse {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "VU-7K2M9Q")]
    pub unique_id: String,

    #[schema(example = "@alice")]
    pub username: String,

    #[schema(example = "+7 (900) 123-45-67")]
    pub phone: String,

    #[schema(example = "100500")]
    pub user_id: String,

    pub social_networks: Vec<SocialNetworkDto>,

    #[schema(example = "active")]
    pub status: String,

    #[schema(example = "general")]
    pub category: String,

    #[schema(example = "2026-03-01T09:30:00.000Z")]
    pub created_at: String,

    #[schema(example = "https://veriuser.example/certificate/VU-7K2M9Q")]
    pub certificate_url: String,
}

impl RecordResponse {
    pub fn from_record(record: VerificationRecord, public_base_url: &str) -> Self {
        let certificate_url = certificate_url(public_base_url, &record.unique_id);

        Self {
            id: record.id,
            unique_id: record.unique_id,
            username: record.username,
            phone: record.phone,
            user_id: record.user_id,
            social_networks: record.social_networks.into_iter().map(Into::into).collect(),
            status: record.status,
            category: record.category,
            created_at: record.created_at,
            certificate_url,
        }
    }
}

pub fn certificate_url(public_base_url: &str, unique_id: &str) -> String {
    format!(
        "{}/certificate/{}",
        public_base_url.trim_end_matches('/'),
        unique_id
    )
}
