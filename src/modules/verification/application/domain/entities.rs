use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SocialNetwork {
    pub name: String,
    pub url: String,
}

impl SocialNetwork {
    /// Both `name` and `url` must carry something besides whitespace.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.url.trim().is_empty()
    }

    /// Only `http` and `https` URLs may become clickable links.
    pub fn has_web_url(&self) -> bool {
        let url = self.url.trim();
        ["http://", "https://"].iter().any(|scheme| {
            url.get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        })
    }
}

/// One issued certificate. Field order is the persisted JSON order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VerificationRecord {
    pub id: i64,
    pub unique_id: String,
    pub username: String,
    pub phone: String,
    pub user_id: String,
    pub social_networks: Vec<SocialNetwork>,
    pub status: String,
    pub category: String,
    pub created_at: String,
}

impl VerificationRecord {
    /// Merges the mutable fields of `patch`. `id`, `unique_id` and
    /// `created_at` are never touched.
    pub fn apply_patch(&mut self, patch: RecordPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(social_networks) = patch.social_networks {
            self.social_networks = social_networks;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }
}

/// Record fields supplied by the admin; the store assigns the rest.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub username: String,
    pub phone: String,
    pub user_id: String,
    pub social_networks: Vec<SocialNetwork>,
    pub status: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub username: Option<String>,
    pub phone: Option<String>,
    pub user_id: Option<String>,
    pub social_networks: Option<Vec<SocialNetwork>>,
    pub status: Option<String>,
    pub category: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.phone.is_none()
            && self.user_id.is_none()
            && self.social_networks.is_none()
            && self.status.is_none()
            && self.category.is_none()
    }
}
