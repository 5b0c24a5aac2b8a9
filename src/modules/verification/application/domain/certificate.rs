use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::entities::VerificationRecord;
use super::phone::mask_phone;

/// Moscow time; the certificate has always been displayed in it.
pub const DEFAULT_DISPLAY_OFFSET_MINUTES: i32 = 180;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_watermark: bool,
    pub is_pdf_export: bool,
}

impl RenderOptions {
    pub fn preview() -> Self {
        Self {
            show_watermark: true,
            is_pdf_export: false,
        }
    }

    pub fn public() -> Self {
        Self::default()
    }

    pub fn document_export() -> Self {
        Self {
            show_watermark: false,
            is_pdf_export: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SocialNetworkView {
    pub name: String,
    pub url: String,
    /// False in printable exports, where links are plain text, and for any
    /// url that is not http(s).
    pub is_link: bool,
}

/// Everything a renderer needs, already masked and formatted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CertificateView {
    pub unique_id: String,
    pub username: String,
    pub masked_phone: String,
    pub user_id: String,
    pub social_networks: Vec<SocialNetworkView>,
    pub status: String,
    pub category: String,
    pub issued_at: String,
    pub show_watermark: bool,
}

impl CertificateView {
    pub fn build(
        record: &VerificationRecord,
        options: RenderOptions,
        display_offset: FixedOffset,
    ) -> Self {
        let social_networks = record
            .social_networks
            .iter()
            .map(|n| SocialNetworkView {
                name: n.name.clone(),
                url: n.url.clone(),
                is_link: !options.is_pdf_export && n.has_web_url(),
            })
            .collect();

        Self {
            unique_id: record.unique_id.clone(),
            username: record.username.clone(),
            masked_phone: mask_phone(&record.phone),
            user_id: record.user_id.clone(),
            social_networks,
            status: record.status.clone(),
            category: record.category.clone(),
            issued_at: format_issued_at(&record.created_at, display_offset),
            show_watermark: options.show_watermark,
        }
    }
}

/// `DD.MM.YYYY, HH:MM` in the display timezone. Unparsable input is shown
/// verbatim.
pub fn format_issued_at(created_at: &str, display_offset: FixedOffset) -> String {
    match DateTime::parse_from_rfc3339(created_at) {
        Ok(ts) => ts
            .with_timezone(&display_offset)
            .format("%d.%m.%Y, %H:%M")
            .to_string(),
        Err(_) => created_at.to_string(),
    }
}

pub fn display_offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    FixedOffset::east_opt(minutes.checked_mul(60)?)
}
