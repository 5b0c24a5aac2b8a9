use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::verification::adapter::incoming::web::routes::dto::{RecordResponse, SocialNetworkDto};
use crate::verification::application::ports::incoming::use_cases::{
    CreateRecordCommand, CreateRecordCommandError, CreateRecordError,
};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRecordRequest {
    #[schema(example = "@alice")]
    #[serde(default)]
    pub username: String,

    #[schema(example = "+7 (900) 123-45-67")]
    #[serde(default)]
    pub phone: String,

    #[schema(example = "100500")]
    #[serde(default)]
    pub user_id: String,

    #[serde(default)]
    pub social_networks: Vec<SocialNetworkDto>,

    /// Defaults to `active`
    #[schema(example = "active")]
    pub status: Option<String>,

    /// Defaults to `general`
    #[schema(example = "general")]
    pub category: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Issue a new verification certificate
#[utoipa::path(
    post,
    path = "/api/admin/records",
    tag = "admin",
    request_body = CreateRecordRequest,
    responses(
        (status = 201, description = "Record created", body = inline(SuccessResponse<RecordResponse>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 502, description = "Remote store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/admin/records")]
pub async fn create_record_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateRecordRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    // 1️⃣ Build command (validation happens here)
    let command = match CreateRecordCommand::new(
        payload.username,
        payload.phone,
        payload.user_id,
        payload.social_networks.into_iter().map(Into::into).collect(),
        payload.status,
        payload.category,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    // 2️⃣ Execute use case
    match data.verification.create.execute(command).await {
        Ok(record) => ApiResponse::created(RecordResponse::from_record(
            record,
            &data.public_base_url,
        )),
        Err(err) => map_create_record_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateRecordCommandError) -> HttpResponse {
    match err {
        CreateRecordCommandError::EmptyUsername => {
            ApiResponse::bad_request("EMPTY_USERNAME", "Username cannot be empty")
        }
        CreateRecordCommandError::EmptyPhone => {
            ApiResponse::bad_request("EMPTY_PHONE", "Phone cannot be empty")
        }
        CreateRecordCommandError::EmptyUserId => {
            ApiResponse::bad_request("EMPTY_USER_ID", "User id cannot be empty")
        }
        CreateRecordCommandError::InvalidSocialNetwork { .. } => {
            ApiResponse::bad_request("INVALID_SOCIAL_NETWORK", &err.to_string())
        }
    }
}

fn map_create_record_error(err: CreateRecordError) -> HttpResponse {
    match err {
        CreateRecordError::IdentifierExhausted => {
            error!("Identifier space exhausted while creating a record");
            ApiResponse::internal_error_with(
                "IDENTIFIER_EXHAUSTED",
                "No free identifier is left for a new record",
            )
        }
        CreateRecordError::RemoteUnavailable(msg) => {
            error!("Remote store unavailable: {}", msg);
            ApiResponse::bad_gateway(
                "REMOTE_STORE_UNAVAILABLE",
                "Remote record store is unavailable",
            )
        }
        CreateRecordError::RepositoryError(msg) => {
            error!("Repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
