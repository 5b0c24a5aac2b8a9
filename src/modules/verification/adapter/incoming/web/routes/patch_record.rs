use actix_web::{patch, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::verification::adapter::incoming::web::routes::dto::{RecordResponse, SocialNetworkDto};
use crate::verification::application::ports::incoming::use_cases::{
    PatchRecordCommand, PatchRecordCommandError, PatchRecordError, PatchRecordFields,
};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct PatchRecordRequest {
    pub username: Option<String>,
    pub phone: Option<String>,
    pub user_id: Option<String>,
    pub social_networks: Option<Vec<SocialNetworkDto>>,
    pub status: Option<String>,
    pub category: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[patch("/api/admin/records/{unique_id}")]
pub async fn patch_record_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<PatchRecordRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let fields = PatchRecordFields {
        username: payload.username,
        phone: payload.phone,
        user_id: payload.user_id,
        social_networks: payload
            .social_networks
            .map(|networks| networks.into_iter().map(Into::into).collect()),
        status: payload.status,
        category: payload.category,
    };

    let command = match PatchRecordCommand::new(path.into_inner(), fields) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.verification.patch.execute(command).await {
        Ok(record) => ApiResponse::success(RecordResponse::from_record(
            record,
            &data.public_base_url,
        )),
        Err(err) => map_patch_record_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: PatchRecordCommandError) -> HttpResponse {
    let code = match err {
        PatchRecordCommandError::EmptyUsername => "EMPTY_USERNAME",
        PatchRecordCommandError::EmptyPhone => "EMPTY_PHONE",
        PatchRecordCommandError::EmptyUserId => "EMPTY_USER_ID",
        PatchRecordCommandError::InvalidSocialNetwork { .. } => "INVALID_SOCIAL_NETWORK",
        PatchRecordCommandError::EmptyLabel { .. } => "EMPTY_LABEL",
    };

    ApiResponse::bad_request(code, &err.to_string())
}

fn map_patch_record_error(err: PatchRecordError) -> HttpResponse {
    match err {
        PatchRecordError::NotFound => ApiResponse::not_found("RECORD_NOT_FOUND", "Record not found"),
        PatchRecordError::Unsupported(msg) => {
            ApiResponse::not_implemented("OPERATION_NOT_SUPPORTED", &msg)
        }
        PatchRecordError::RemoteUnavailable(msg) => {
            error!("Remote store unavailable: {}", msg);
            ApiResponse::bad_gateway(
                "REMOTE_STORE_UNAVAILABLE",
                "Remote record store is unavailable",
            )
        }
        PatchRecordError::RepositoryError(msg) => {
            error!("Repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
